//! Common error types for sommelier

use thiserror::Error;

/// Common result type for sommelier operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the sommelier crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML syntax or schema error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
