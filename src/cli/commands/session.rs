use super::{CatalogSource, CommandHandler};
use crate::catalog::{CatalogLoader, ProductId};
use crate::cli::view;
use crate::state::{likes, CategoryFilter, Direction, QuantityChange, Storefront, ViewerKey};
use crate::{Result, StorefrontError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// One line of a session script
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add { product_id: ProductId, quantity: u32 },
    Remove { product_id: ProductId },
    Quantity { product_id: ProductId, delta: i64 },
    Like { product_id: ProductId },
    Slide { product_id: ProductId, direction: Direction },
    Filter(CategoryFilter),
    View { product_id: ProductId, index: usize },
    Key(ViewerKey),
    Cart,
    Grid,
    Categories,
    Likes,
    ToggleCart,
    Checkout,
}

impl SessionCommand {
    /// Parse a script line; blank lines and `#` comments yield `None`
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(trimmed)
            .map_err(|e| StorefrontError::Cli(format!("Malformed line '{}': {}", trimmed, e)))?;
        let (verb, args) = match words.split_first() {
            Some((verb, args)) => (verb.as_str(), args),
            None => return Ok(None),
        };

        let command = match (verb, args) {
            ("add", [id]) => SessionCommand::Add {
                product_id: parse_id(id)?,
                quantity: 1,
            },
            ("add", [id, quantity]) => SessionCommand::Add {
                product_id: parse_id(id)?,
                quantity: parse_number(quantity, "quantity")?,
            },
            ("remove", [id]) => SessionCommand::Remove {
                product_id: parse_id(id)?,
            },
            ("qty", [id, delta]) => SessionCommand::Quantity {
                product_id: parse_id(id)?,
                delta: parse_number(delta.trim_start_matches('+'), "delta")?,
            },
            ("like", [id]) => SessionCommand::Like {
                product_id: parse_id(id)?,
            },
            ("slide", [id, direction]) => SessionCommand::Slide {
                product_id: parse_id(id)?,
                direction: direction.parse()?,
            },
            ("filter", [category]) => SessionCommand::Filter(CategoryFilter::new(category)),
            ("view", [id]) => SessionCommand::View {
                product_id: parse_id(id)?,
                index: 0,
            },
            ("view", [id, index]) => SessionCommand::View {
                product_id: parse_id(id)?,
                index: parse_number(index, "image index")?,
            },
            ("key", [key]) => SessionCommand::Key(key.parse()?),
            ("cart", []) => SessionCommand::Cart,
            ("grid", []) => SessionCommand::Grid,
            ("categories", []) => SessionCommand::Categories,
            ("likes", []) => SessionCommand::Likes,
            ("toggle-cart", []) => SessionCommand::ToggleCart,
            ("checkout", []) => SessionCommand::Checkout,
            _ => {
                return Err(StorefrontError::Cli(format!(
                    "Unrecognized command: {}",
                    trimmed
                )))
            }
        };
        Ok(Some(command))
    }
}

fn parse_id(value: &str) -> Result<ProductId> {
    value.parse().map_err(StorefrontError::Cli)
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| StorefrontError::Cli(format!("Invalid {}: {}", what, value)))
}

/// Totals for a finished session run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub executed: usize,
    pub failed: usize,
}

/// Drives a [`Storefront`] from text commands
pub struct SessionRunner {
    store: Storefront,
}

impl SessionRunner {
    pub fn new(store: Storefront) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Storefront {
        &self.store
    }

    /// Run every line of `input`, reporting caller errors and continuing
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<SessionReport> {
        let mut report = SessionReport::default();

        for (number, line) in input.lines().enumerate() {
            let parsed = match line {
                Ok(line) => SessionCommand::parse_line(&line),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(StorefrontError::Cli(
                    format!("Line {} is not valid UTF-8", number + 1),
                )),
                Err(e) => return Err(e.into()),
            };
            let outcome = match parsed {
                Ok(Some(command)) => self.execute(&command, &mut *out).map(|_| true),
                Ok(None) => Ok(false),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(true) => report.executed += 1,
                Ok(false) => {}
                Err(e) if e.is_caller_error() => {
                    warn!(line = number + 1, error = %e, "Session command failed");
                    writeln!(out, "error: {}", e)?;
                    report.failed += 1;
                }
                Err(e) => return Err(e),
            }
            self.flush_events(out)?;
        }

        info!(
            executed = report.executed,
            failed = report.failed,
            "Session finished"
        );
        Ok(report)
    }

    pub fn execute<W: Write>(&mut self, command: &SessionCommand, out: &mut W) -> Result<()> {
        debug!(?command, "Executing session command");
        let store = &mut self.store;

        match command {
            SessionCommand::Add {
                product_id,
                quantity,
            } => {
                let item = store.add_to_cart(*product_id, *quantity)?;
                writeln!(out, "added: {} x{}", item.product().name, item.quantity())?;
            }
            SessionCommand::Remove { product_id } => {
                if store.remove_from_cart(*product_id) {
                    writeln!(out, "removed: {}", product_id)?;
                } else {
                    writeln!(out, "not in cart: {}", product_id)?;
                }
            }
            SessionCommand::Quantity { product_id, delta } => {
                match store.update_quantity(*product_id, *delta)? {
                    QuantityChange::Updated(quantity) => {
                        writeln!(out, "quantity: {} -> {}", product_id, quantity)?
                    }
                    QuantityChange::Removed => writeln!(out, "removed: {}", product_id)?,
                    QuantityChange::NotInCart => writeln!(out, "not in cart: {}", product_id)?,
                }
            }
            SessionCommand::Like { product_id } => {
                let verb = if store.toggle_like(*product_id)? {
                    "liked"
                } else {
                    "unliked"
                };
                writeln!(out, "{}: {}", verb, product_id)?;
            }
            SessionCommand::Slide {
                product_id,
                direction,
            } => {
                let index = store.advance_slide(*product_id, *direction)?;
                let count = store.find_product(*product_id)?.image_count();
                writeln!(out, "slide: {} -> {}/{}", product_id, index + 1, count)?;
            }
            SessionCommand::Filter(filter) => {
                store.apply_filter(filter.clone());
                view::render_grid(out, store)?;
            }
            SessionCommand::View { product_id, index } => {
                store.open_image(*product_id, *index)?;
                self.write_viewer(out)?;
            }
            SessionCommand::Key(key) => {
                store.viewer_key(*key)?;
                self.write_viewer(out)?;
            }
            SessionCommand::Cart => {
                let summary = store.cart_summary();
                view::render_cart(out, &summary, &store.settings().currency_symbol)?;
            }
            SessionCommand::Grid => view::render_grid(out, store)?,
            SessionCommand::Categories => {
                writeln!(out, "categories: all, {}", store.catalog().categories().join(", "))?;
            }
            SessionCommand::Likes => {
                let liked: Vec<String> = likes::liked_ids(store.catalog())
                    .iter()
                    .map(ProductId::to_string)
                    .collect();
                if liked.is_empty() {
                    writeln!(out, "likes: none")?;
                } else {
                    writeln!(out, "likes: {}", liked.join(", "))?;
                }
            }
            SessionCommand::ToggleCart => {
                let state = if store.toggle_cart() { "open" } else { "closed" };
                writeln!(out, "cart drawer: {}", state)?;
            }
            SessionCommand::Checkout => {
                writeln!(out, "{}", store.checkout().message())?;
            }
        }
        Ok(())
    }

    fn write_viewer<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.store.viewer_position() {
            Some(position) => {
                let product = self.store.find_product(position.product_id)?;
                writeln!(
                    out,
                    "viewing: {} image {}/{} ({})",
                    product.id,
                    position.index + 1,
                    product.image_count(),
                    product.images.get(position.index).map(String::as_str).unwrap_or("-")
                )?;
            }
            None => writeln!(out, "viewer closed")?,
        }
        Ok(())
    }

    /// Print toasts for pending events and clear the queue
    fn flush_events<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for entry in self.store.drain_events() {
            if let Some(message) = entry.event.notification() {
                writeln!(out, "toast: {}", message)?;
            }
        }
        Ok(())
    }
}

/// Handler for the `session` command
pub struct SessionCommandHandler {
    pub source: CatalogSource,
    pub script: Option<PathBuf>,
}

impl CommandHandler for SessionCommandHandler {
    fn execute(&self) -> Result<()> {
        let (catalog, settings) = self.source.load(&CatalogLoader::new())?;
        let mut runner = SessionRunner::new(Storefront::new(catalog, settings));

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = match &self.script {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    StorefrontError::Cli(format!(
                        "Failed to open script {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                runner.run(BufReader::new(file), &mut out)?
            }
            None => runner.run(io::stdin().lock(), &mut out)?,
        };

        if report.failed > 0 {
            writeln!(
                out,
                "\n{} commands, {} failed",
                report.executed + report.failed,
                report.failed
            )?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "session"
    }
}

impl SessionCommandHandler {
    /// Create new session command
    pub fn new(source: CatalogSource, script: Option<PathBuf>) -> Self {
        Self { source, script }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_variants() {
        assert_eq!(SessionCommand::parse_line("   ").unwrap(), None);
        assert_eq!(SessionCommand::parse_line("# comment").unwrap(), None);
        assert_eq!(
            SessionCommand::parse_line("add 3").unwrap(),
            Some(SessionCommand::Add {
                product_id: ProductId(3),
                quantity: 1
            })
        );
        assert_eq!(
            SessionCommand::parse_line("qty 3 +2").unwrap(),
            Some(SessionCommand::Quantity {
                product_id: ProductId(3),
                delta: 2
            })
        );
        assert_eq!(
            SessionCommand::parse_line("slide 1 -1").unwrap(),
            Some(SessionCommand::Slide {
                product_id: ProductId(1),
                direction: Direction::Previous
            })
        );
        assert_eq!(
            SessionCommand::parse_line("filter \"Knit Wear\"").unwrap(),
            Some(SessionCommand::Filter(CategoryFilter::Category(
                "Knit Wear".to_string()
            )))
        );
        assert_eq!(
            SessionCommand::parse_line("likes").unwrap(),
            Some(SessionCommand::Likes)
        );
        assert_eq!(
            SessionCommand::parse_line("key Escape").unwrap(),
            Some(SessionCommand::Key(ViewerKey::Escape))
        );
    }

    #[test]
    fn test_parse_line_errors() {
        for line in ["add", "add x", "slide 1 2", "dance", "filter \"open", "qty 1"] {
            let error = SessionCommand::parse_line(line).unwrap_err();
            assert!(error.is_caller_error(), "line {:?} gave {}", line, error);
        }
    }
}
