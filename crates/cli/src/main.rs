mod cli;
mod commands;
mod config;
mod errors;
mod logging;
mod output;

use crate::cli::Cli;
use crate::commands::Command;
use crate::config::Config;
use crate::logging::{Level, LogLevel, TracingConfig, TracingFormat};

#[allow(clippy::print_stderr)]
fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    if let Err(error) = run() {
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}

fn run() -> miette::Result<()> {
    let cli = cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    crate::logging::init_tracing(tracing_config(&cli, &config))?;
    tracing::debug!(?config, "Configuration resolved");

    let command: Command = cli.command.into();
    commands::execute(command, &config)?;
    Ok(())
}

fn tracing_config(cli: &Cli, config: &Config) -> TracingConfig {
    let format = if cli.json {
        TracingFormat::Json
    } else {
        cli.log_format
            .or(config.log_format)
            .unwrap_or(TracingFormat::Dev)
    };
    let level = cli.level.or(config.level).unwrap_or(LogLevel::Warn);

    TracingConfig {
        format,
        level: Level::from(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_tracing_config_layers_flags_over_file() {
        let file = Config {
            level: Some(LogLevel::Info),
            log_format: Some(TracingFormat::Pretty),
            ..Config::default()
        };

        let cli = Cli::try_parse_from(["wfgraph", "recipes"]).unwrap();
        let resolved = tracing_config(&cli, &file);
        assert_eq!(resolved.format, TracingFormat::Pretty);
        assert_eq!(resolved.level, Level::INFO);

        let cli = Cli::try_parse_from(["wfgraph", "--json", "--level", "debug", "recipes"]).unwrap();
        let resolved = tracing_config(&cli, &file);
        assert_eq!(resolved.format, TracingFormat::Json);
        assert_eq!(resolved.level, Level::DEBUG);
    }

    #[test]
    fn test_tracing_config_defaults() {
        let cli = Cli::try_parse_from(["wfgraph", "recipes"]).unwrap();
        let resolved = tracing_config(&cli, &Config::default());
        assert_eq!(resolved.format, TracingFormat::Dev);
        assert_eq!(resolved.level, Level::WARN);
    }
}
