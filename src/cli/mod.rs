pub mod app;
pub mod commands;
pub mod view;

pub use app::{Cli, Commands, LogLevel, OutputFormat};
