//! # Sommelier Common Library
//!
//! Shared code for the sommelier services:
//! - Error type and result alias
//! - Configuration loading (TOML file, environment overrides, defaults)

pub mod config;
pub mod error;

pub use config::TomlConfig;
pub use error::{Error, Result};
