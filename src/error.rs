//! Error types for the party-links application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Per-target errors
    #[error("Not a recognized party user URL: {0}")]
    MalformedIdentity(String),

    #[error("Could not find a creator name in the feed title: {0}")]
    TitleNotFound(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Process exit code for this error. Anything raised while reading or
    /// validating configuration is a config error, including a TOML file
    /// that does not parse.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::MalformedIdentity(_) | Error::TitleNotFound(_) | Error::Fetch(_) => {
                exit_codes::CRAWL_ERROR
            }
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const CRAWL_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 4;
    pub const SOME_TARGETS_FAILED: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_map_to_config_exit_code() {
        let parse_err = toml::from_str::<crate::config::Config>("not valid = [").unwrap_err();
        assert_eq!(Error::from(parse_err).exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(
            Error::Config("bad".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
    }

    #[test]
    fn test_target_errors_map_to_crawl_exit_code() {
        assert_eq!(
            Error::Fetch("timed out".into()).exit_code(),
            exit_codes::CRAWL_ERROR
        );
        assert_eq!(
            Error::MalformedIdentity("https://example.com".into()).exit_code(),
            exit_codes::CRAWL_ERROR
        );
    }

    #[test]
    fn test_other_errors_are_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(Error::from(io).exit_code(), exit_codes::UNEXPECTED_ERROR);
    }
}
