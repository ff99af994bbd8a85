use crate::commands::Command;
use crate::logging::{LogLevel, TracingFormat};
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wfgraph")]
#[command(
    about = "Convert scientific workflow instances into task graphs with costs and data-transfer weights"
)]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        env = "WFGRAPH_LEVEL",
        help = "Set logging level [default: warn]",
        value_enum
    )]
    pub level: Option<LogLevel>,

    #[arg(
        long,
        global = true,
        env = "WFGRAPH_LOG_FORMAT",
        help = "Log output format [default: dev]",
        value_enum
    )]
    pub log_format: Option<TracingFormat>,

    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,

    #[arg(
        short = 'c',
        long,
        global = true,
        env = "WFGRAPH_CONFIG",
        help = "Path to a wfgraph.toml configuration file"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Show version information")]
    Version,
    #[command(about = "List the workflow recipes wfgraph recognises")]
    Recipes,
    #[command(about = "Convert a workflow instance into a forward graph, cost vector and edge weights")]
    Convert {
        #[arg(help = "Path to a WfCommons workflow instance (JSON)")]
        instance: PathBuf,
        #[arg(
            long,
            short = 'r',
            help = "Require the instance to belong to this recipe"
        )]
        recipe: Option<String>,
        #[arg(
            long,
            short = 'f',
            env = "WFGRAPH_FORMAT",
            help = "Output format [default: text]",
            value_enum
        )]
        format: Option<OutputFormat>,
        #[arg(long, short = 'o', help = "Write the result to a file instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(about = "Convert a workflow instance and report cycles and undeclared data edges")]
    Validate {
        #[arg(help = "Path to a WfCommons workflow instance (JSON)")]
        instance: PathBuf,
        #[arg(
            long,
            short = 'f',
            env = "WFGRAPH_FORMAT",
            help = "Output format [default: text]",
            value_enum
        )]
        format: Option<OutputFormat>,
        #[arg(long, help = "Fail when the graph has cycles or undeclared data edges")]
        strict: bool,
    },
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Version => Self::Version,
            Commands::Recipes => Self::Recipes,
            Commands::Convert {
                instance,
                recipe,
                format,
                output,
            } => Self::Convert {
                instance,
                recipe,
                format,
                output,
            },
            Commands::Validate {
                instance,
                format,
                strict,
            } => Self::Validate {
                instance,
                format,
                strict,
            },
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
