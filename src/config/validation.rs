//! Configuration validation logic.
//!
//! Runs before any network access; a violated bound is a fatal configuration
//! error for the whole run, not a per-target fault.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_page_bounds(config.options.start_page, config.options.end_page)?;
    validate_targets(&config.targets.urls)?;

    Ok(())
}

/// Validate the start/end page bounds.
pub fn validate_page_bounds(start_page: u64, end_page: Option<u64>) -> Result<()> {
    if let Some(end) = end_page {
        if start_page > end {
            return Err(Error::ConfigValidation {
                field: "start_page".to_string(),
                message: format!(
                    "Start page {} is beyond end page {}",
                    start_page, end
                ),
            });
        }
    }

    Ok(())
}

/// Validate that at least one target URL was given.
pub fn validate_targets(urls: &[String]) -> Result<()> {
    if urls.is_empty() {
        return Err(Error::ConfigValidation {
            field: "urls".to_string(),
            message: "At least one party user URL is required".to_string(),
        });
    }

    Ok(())
}
