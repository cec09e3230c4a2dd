//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated ActiveCampaign API token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `ApiToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::ApiToken;
///
/// let token = ApiToken::new("my-secret-token").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated account base URL.
///
/// This newtype validates that the URL is absolute (carries an `http://` or
/// `https://` scheme and a host) and normalizes it by stripping any trailing
/// slash, so request paths can be appended directly.
///
/// # Accepted Formats
///
/// - `https://youraccount.api-us1.com/api/3`
/// - `https://youraccount.api-us1.com/api/3/` - trailing slash is stripped
///
/// # Example
///
/// ```rust
/// use activecampaign_api::BaseUrl;
///
/// let url = BaseUrl::new("https://youraccount.api-us1.com/api/3/").unwrap();
/// assert_eq!(url.as_ref(), "https://youraccount.api-us1.com/api/3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty, lacks an
    /// `http://` or `https://` scheme, or has no host component.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        match rest {
            Some(remainder) if !remainder.is_empty() && !remainder.starts_with('/') => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_accepts_non_empty_value() {
        let token = ApiToken::new("abc123").unwrap();
        assert_eq!(token.as_ref(), "abc123");
    }

    #[test]
    fn test_api_token_rejects_empty_value() {
        let result = ApiToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "ApiToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_accepts_https() {
        let url = BaseUrl::new("https://acct.api-us1.com/api/3").unwrap();
        assert_eq!(url.as_ref(), "https://acct.api-us1.com/api/3");
    }

    #[test]
    fn test_base_url_accepts_http() {
        let url = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://acct.api-us1.com/api/3/").unwrap();
        assert_eq!(url.as_ref(), "https://acct.api-us1.com/api/3");
    }

    #[test]
    fn test_base_url_rejects_empty() {
        assert!(matches!(
            BaseUrl::new(""),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("acct.api-us1.com/api/3"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_scheme_without_host() {
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("https:///api/3"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_display_matches_as_ref() {
        let url = BaseUrl::new("https://acct.api-us1.com/api/3").unwrap();
        assert_eq!(url.to_string(), url.as_ref());
    }
}
