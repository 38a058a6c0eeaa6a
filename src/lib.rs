//! Storefront state core.
//!
//! A product [`catalog::Catalog`] loaded once per session, plus the state the
//! page mutates in response to clicks: per-product image carousels, likes, the
//! cart and the category filter. [`state::Storefront`] bundles them for a
//! presentation layer; the `storefront` binary is a text one.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod state;

pub use error::{Result, StorefrontError};
