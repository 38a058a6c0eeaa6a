use crate::catalog::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("Invalid quantity: {0}. Quantity must be at least 1")]
    InvalidQuantity(u32),

    #[error("Quantity overflow for product {0}")]
    QuantityOverflow(ProductId),

    #[error("Cart total overflow for product {0}")]
    PriceOverflow(ProductId),

    #[error("Invalid direction: {0}. Expected -1 or +1")]
    InvalidDirection(i64),

    #[error("Image index {index} out of range for product {product_id} ({len} images)")]
    ImageOutOfRange {
        product_id: ProductId,
        index: usize,
        len: usize,
    },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("CLI error: {0}")]
    Cli(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl StorefrontError {
    /// Whether this error is a caller mistake that a session can report and move past
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            StorefrontError::UnknownProduct(_)
                | StorefrontError::InvalidQuantity(_)
                | StorefrontError::QuantityOverflow(_)
                | StorefrontError::PriceOverflow(_)
                | StorefrontError::InvalidDirection(_)
                | StorefrontError::ImageOutOfRange { .. }
                | StorefrontError::Cli(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
