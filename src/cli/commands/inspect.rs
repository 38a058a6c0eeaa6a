use super::{CatalogSource, CommandHandler};
use crate::catalog::CatalogLoader;
use crate::cli::app::OutputFormat;
use crate::cli::view;
use crate::state::CategoryFilter;
use crate::Result;
use std::io::{self, Write};
use tracing::debug;

/// Handler for the `inspect` command
pub struct InspectCommand {
    pub source: CatalogSource,
    pub category: String,
    pub format: OutputFormat,
}

impl CommandHandler for InspectCommand {
    fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}

impl InspectCommand {
    /// Create new inspect command
    pub fn new(source: CatalogSource, category: String, format: OutputFormat) -> Self {
        Self {
            source,
            category,
            format,
        }
    }

    /// Write the filtered listing to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let (catalog, settings) = self.source.load(&CatalogLoader::new())?;
        let products = CategoryFilter::new(&self.category).apply(&catalog);
        debug!(category = %self.category, shown = products.len(), "Inspecting catalog");

        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &products)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                view::render_products(out, &products, &settings.currency_symbol, |_| None)?;
                writeln!(out, "\nTotal: {} products", products.len())?;
            }
        }
        Ok(())
    }
}
