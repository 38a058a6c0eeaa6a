use clap::Parser;
use storefront::{
    cli::commands::{
        inspect::InspectCommand, session::SessionCommandHandler, validate::ValidateCommand,
        CatalogSource, CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with CLI flags; logs always go to stderr
fn initialize_tracing(log_level: LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level, cli.json_logs);
    tracing::debug!(command = cli.command.name(), "Starting storefront");

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::Inspect {
            catalog,
            category,
            format,
        } => Box::new(InspectCommand::new(
            CatalogSource::new(cli.config, catalog),
            category,
            format,
        )),
        Commands::Validate { catalog } => {
            Box::new(ValidateCommand::new(CatalogSource::new(cli.config, catalog)))
        }
        Commands::Session { catalog, script } => Box::new(SessionCommandHandler::new(
            CatalogSource::new(cli.config, catalog),
            script,
        )),
    };

    command.execute()
}
