//! Catalog of the workflow recipes instances are generated from.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A workflow family whose synthetic instances wfgraph knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recipe {
    /// Astronomical image mosaics.
    Montage,
    /// Agroecosystem simulations.
    Cycles,
    /// Seismic cross-correlation.
    Seismology,
    /// Sequence alignment search.
    Blast,
    /// Burrows-Wheeler read alignment.
    Bwa,
    /// Genome methylation mapping.
    Epigenomics,
    /// Sequence Read Archive search.
    Srasearch,
    /// 1000 Genomes population analysis.
    Genome,
    /// Soybean knowledge base variant calling.
    Soykb,
}

impl Recipe {
    /// Every recipe, in catalog order.
    pub const ALL: [Self; 9] = [
        Self::Montage,
        Self::Cycles,
        Self::Seismology,
        Self::Blast,
        Self::Bwa,
        Self::Epigenomics,
        Self::Srasearch,
        Self::Genome,
        Self::Soykb,
    ];

    /// Catalog name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Montage => "montage",
            Self::Cycles => "cycles",
            Self::Seismology => "seismology",
            Self::Blast => "blast",
            Self::Bwa => "bwa",
            Self::Epigenomics => "epigenomics",
            Self::Srasearch => "srasearch",
            Self::Genome => "genome",
            Self::Soykb => "soykb",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Montage => "astronomical image mosaic engine",
            Self::Cycles => "multi-crop agroecosystem model",
            Self::Seismology => "seismic ambient noise cross-correlation",
            Self::Blast => "BLAST sequence similarity search",
            Self::Bwa => "BWA short read alignment",
            Self::Epigenomics => "DNA methylation and histone modification mapping",
            Self::Srasearch => "Sequence Read Archive search",
            Self::Genome => "1000 Genomes mutational overlap analysis",
            Self::Soykb => "soybean resequencing and variant calling",
        }
    }

    /// Names of every recipe in the catalog.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|recipe| recipe.name()).collect()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Genome => &["1000genome", "1000genomes"],
            Self::Srasearch => &["sra-search", "sra"],
            _ => &[],
        }
    }

    fn matches(self, candidate: &str) -> bool {
        candidate == self.name() || self.aliases().contains(&candidate)
    }

    /// Infer the recipe from an instance name such as
    /// `"Montage-synthetic-instance"` or `"1000genome-chameleon-2ch-100k-001"`.
    #[must_use]
    pub fn detect(instance_name: &str) -> Option<Self> {
        let lowered = instance_name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|recipe| {
            std::iter::once(recipe.name())
                .chain(recipe.aliases().iter().copied())
                .any(|prefix| {
                    lowered.strip_prefix(prefix).is_some_and(|rest| {
                        rest.chars().next().is_none_or(|c| !c.is_ascii_alphanumeric())
                    })
                })
        })
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|recipe| recipe.matches(&lowered))
            .ok_or_else(|| Error::UnknownRecipe {
                name: s.to_string(),
                valid: Self::names(),
            })
    }
}
