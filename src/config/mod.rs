//! Configuration types for the ActiveCampaign API client.
//!
//! This module provides the core configuration types used to initialize the
//! client for communication with an ActiveCampaign account.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Config`]: The main configuration struct holding all client settings
//! - [`ConfigBuilder`]: A builder for constructing [`Config`] instances
//! - [`BaseUrl`]: A validated account API base URL
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//!
//! # Fail-Fast Validation
//!
//! The base URL and API token are required. Building a configuration without
//! them fails with [`ConfigError::MissingRequiredField`] at construction
//! time, never on first request.
//!
//! # Example
//!
//! ```rust
//! use activecampaign_api::{ApiToken, BaseUrl, Config};
//! use std::time::Duration;
//!
//! let config = Config::builder()
//!     .base_url(BaseUrl::new("https://youraccount.api-us1.com/api/3").unwrap())
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the ActiveCampaign API client.
///
/// Holds the account base URL, the API token sent in the `Api-Token` header,
/// an optional per-request timeout applied uniformly to every request, and a
/// table mapping well-known marketing list names to their remote ids.
///
/// # Thread Safety
///
/// `Config` is `Clone`, `Send`, and `Sync`, making it safe to share across
/// threads and async tasks.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::{ApiToken, BaseUrl, Config};
///
/// let config = Config::builder()
///     .base_url(BaseUrl::new("https://youraccount.api-us1.com/api/3").unwrap())
///     .api_token(ApiToken::new("your-api-token").unwrap())
///     .known_list("SD: Marketing List", 43)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.known_lists().get("SD: Marketing List"), Some(&43));
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    base_url: BaseUrl,
    api_token: ApiToken,
    timeout: Option<Duration>,
    known_lists: HashMap<String, u32>,
}

impl Config {
    /// Creates a new builder for constructing a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns the account base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the per-request timeout, if configured.
    ///
    /// The timeout applies uniformly to every request; there is no
    /// per-operation override.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the table of well-known marketing list names to remote ids.
    #[must_use]
    pub const fn known_lists(&self) -> &HashMap<String, u32> {
        &self.known_lists
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for constructing [`Config`] instances.
///
/// Required fields are `base_url` and `api_token`. The timeout defaults to
/// none (the transport waits indefinitely) and the known-list table defaults
/// to empty.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::{ApiToken, BaseUrl, Config};
/// use std::time::Duration;
///
/// let config = Config::builder()
///     .base_url(BaseUrl::new("https://youraccount.api-us1.com/api/3").unwrap())
///     .api_token(ApiToken::new("token").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base_url: Option<BaseUrl>,
    api_token: Option<ApiToken>,
    timeout: Option<Duration>,
    known_lists: HashMap<String, u32>,
}

impl ConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, api_token: ApiToken) -> Self {
        self.api_token = Some(api_token);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registers a well-known marketing list name and its remote id.
    ///
    /// May be called multiple times; later registrations with the same name
    /// overwrite earlier ones.
    #[must_use]
    pub fn known_list(mut self, name: impl Into<String>, id: u32) -> Self {
        self.known_lists.insert(name.into(), id);
        self
    }

    /// Builds the [`Config`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_token` was not set.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(Config {
            base_url,
            api_token,
            timeout: self.timeout,
            known_lists: self.known_lists,
        })
    }
}
