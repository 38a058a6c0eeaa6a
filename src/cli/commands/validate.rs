use super::{CatalogSource, CommandHandler};
use crate::catalog::CatalogLoader;
use crate::Result;
use std::io::{self, Write};
use tracing::info;

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub source: CatalogSource,
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        self.run(&mut stdout.lock())
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

impl ValidateCommand {
    /// Create new validate command
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    /// Strictly load the catalog and write a summary to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let loader = CatalogLoader::new().with_strict_validation();
        let (catalog, _) = self.source.load(&loader)?;

        let categories = catalog.categories();
        let images: usize = catalog.iter().map(|p| p.image_count()).sum();
        info!(products = catalog.len(), "Catalog validated");

        writeln!(out, "Catalog OK")?;
        writeln!(out, "Products: {}", catalog.len())?;
        writeln!(out, "Categories: {} ({})", categories.len(), categories.join(", "))?;
        writeln!(out, "Images: {}", images)?;
        Ok(())
    }
}
