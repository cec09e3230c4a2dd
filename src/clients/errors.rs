//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations: non-2xx responses
//! raised by the resource layer, request validation failures, and network
//! errors.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: A non-2xx HTTP response, carrying status and body
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! The transport itself never raises [`HttpResponseError`]; it is constructed
//! by the resource client when a response status falls outside the 2xx range.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get_resource("contacts", "1").await {
//!     Ok(contact) => println!("Contact: {contact}"),
//!     Err(RestError::Http(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error describing a non-successful HTTP response.
///
/// Carries the status code and the response body (serialized to a string)
/// for diagnostics. Raised by the resource client, not by the transport.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"message":"No Result found for Contact with id 1"}"#.to_string(),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, serialized for diagnostics.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as a POST or PUT without a body.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// println!("{}", error); // "Cannot use post without specifying data."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Provides a single error type for HTTP operations, making it easier to
/// handle errors at API boundaries. Use pattern matching to handle specific
/// error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
