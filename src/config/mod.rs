pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, LoadedConfiguration};
pub use types::{Settings, StorefrontConfig};
