//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Merging CLI arguments over file values
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, TargetsConfig};
pub use validation::validate_config;
