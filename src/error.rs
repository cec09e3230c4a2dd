//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation
//! errors raised at client construction time.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a missing or empty setting fails when the [`Config`]
//! is built, never at first use.
//!
//! [`Config`]: crate::Config
//!
//! # Example
//!
//! ```rust
//! use activecampaign_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable message naming the setting
/// that is missing or malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid ActiveCampaign API token.")]
    EmptyApiToken,

    /// The account base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://youraccount.api-us1.com/api/3').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required setting: '{field}'. This setting must be provided before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
