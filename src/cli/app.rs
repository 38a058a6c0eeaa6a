use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storefront: catalog, cart and carousel state from the command line
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Storefront catalog, cart and carousel state")]
#[command(
    long_about = "Loads a product catalog and drives a storefront session: image carousels, likes, category filters and a shopping cart."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file path (discovered from ./storefront.yaml when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Log levels
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog products, optionally filtered by category
    Inspect {
        /// Catalog file (overrides the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Category to show, or "all"
        #[arg(long, default_value = "all")]
        category: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check a catalog file for errors
    Validate {
        /// Catalog file (overrides the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Run a storefront session from stdin or a script file
    Session {
        /// Catalog file (overrides the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Read commands from this file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Inspect { .. } => "inspect",
            Commands::Validate { .. } => "validate",
            Commands::Session { .. } => "session",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inspect_with_globals() {
        let cli = Cli::try_parse_from([
            "storefront",
            "inspect",
            "--category",
            "Tops",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.to_filter_directive(), "debug");
        match cli.command {
            Commands::Inspect {
                category, format, ..
            } => {
                assert_eq!(category, "Tops");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Expected inspect, got {}", other.name()),
        }
    }

    #[test]
    fn test_session_defaults() {
        let cli = Cli::try_parse_from(["storefront", "session"]).unwrap();
        assert!(!cli.json_logs);
        assert!(cli.config.is_none());
        assert!(matches!(
            cli.command,
            Commands::Session {
                catalog: None,
                script: None
            }
        ));
    }
}
