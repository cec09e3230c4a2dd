//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data.

use std::collections::HashMap;

/// An HTTP response from the API.
///
/// Contains the response status code, headers, and parsed JSON body. The
/// transport returns a response for every completed exchange regardless of
/// status code; callers decide whether a non-2xx status is an error.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     200,
///     HashMap::new(),
///     serde_json::json!({"contacts": [], "meta": {"total": 0}}),
/// );
/// assert!(response.is_ok());
/// assert_eq!(response.body["meta"]["total"], 0);
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched against their lowercased form.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
