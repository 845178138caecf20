//! Shared types, error model, and configuration for verso-enrich.
//!
//! This crate is the foundation depended on by the other verso-enrich crates.
//! It provides:
//! - [`EnrichError`] — the unified error type
//! - The dataset root ([`Dataset`], [`CountryId`], [`CountryRecord`])
//! - Configuration ([`AppConfig`], [`LoggingConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{AppConfig, LogFormat, LoggingConfig, load_config_from, resolve_config};
pub use error::{EnrichError, Result};
pub use types::{CountryId, CountryRecord, Dataset};
