pub mod convert;
pub mod recipes;
pub mod validate;
pub mod version;

use crate::config::Config;
use crate::errors::CliError;
use crate::output::OutputFormat;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

#[derive(Debug, Clone)]
pub enum Command {
    Version,
    Recipes,
    Convert {
        instance: PathBuf,
        recipe: Option<String>,
        format: Option<OutputFormat>,
        output: Option<PathBuf>,
    },
    Validate {
        instance: PathBuf,
        format: Option<OutputFormat>,
        strict: bool,
    },
}

#[instrument(skip(config))]
pub fn execute(command: Command, config: &Config) -> Result<(), CliError> {
    match command {
        Command::Version => emit(&version::get_version_info(), None),
        Command::Recipes => emit(&recipes::list_recipes(), None),
        Command::Convert {
            instance,
            recipe,
            format,
            output,
        } => {
            let recipe = recipe.or_else(|| config.recipe.clone());
            let format = resolve_format(format, config);
            let rendered = convert::execute_convert(&instance, recipe.as_deref(), format)?;
            emit(&rendered, output.as_deref())
        }
        Command::Validate {
            instance,
            format,
            strict,
        } => {
            let format = resolve_format(format, config);
            let outcome = validate::execute_validate(&instance, format)?;
            emit(&outcome.rendered, None)?;
            if strict {
                outcome.ensure_clean()?;
            }
            Ok(())
        }
    }
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.format).unwrap_or_default()
}

/// Write command output to `path`, or to stdout when no path is given.
fn emit(contents: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, contents)
            .map_err(|source| CliError::file_error("write output to", path, source)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::file_error("write output to", "<stdout>", source))
        }
    }
}
