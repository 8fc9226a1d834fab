use thiserror::Error;

/// Errors that can occur while loading or browsing recipes
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Transport failure or non-success status from the recipe API
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response body was not a list of recipes
    #[error("Failed to decode recipe list: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Base URL or page address could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
