//! Error types for resource operations.
//!
//! Two levels, mirroring the layering of the client:
//!
//! - [`RestError`]: raised by the resource API client for HTTP failures
//!   (non-2xx responses, network errors) and malformed response envelopes.
//! - [`ResourceError`]: raised by the entity layer; wraps [`RestError`] and
//!   adds the distinct not-found condition for `find`-style lookups.
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::rest::ResourceError;
//!
//! match Tag::find(&client, "vip").await {
//!     Ok(tag) => println!("Found: {}", tag.tag),
//!     Err(ResourceError::NotFound { resource, query }) => {
//!         println!("No {resource} matching '{query}'");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource API client operations.
///
/// Wraps HTTP-level errors and adds envelope errors for responses that do
/// not carry an expected key. A missing `meta.total` is never an error; it
/// is a normal end-of-pagination signal (a documented quirk of some nested
/// endpoints).
#[derive(Debug, Error)]
pub enum RestError {
    /// An HTTP-level error occurred (non-2xx response or network failure).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An expected key was absent from the response body.
    #[error("Missing expected key '{key}' in response body")]
    MissingKey {
        /// The key that was expected.
        key: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response shape: expected {expected}")]
    UnexpectedShape {
        /// A description of the expected shape.
        expected: &'static str,
    },
}

/// Error type for entity-level operations.
///
/// Adds the distinct not-found condition for `find`-style lookups that
/// exhaust their filtered sequence with zero matches. Not-found is never
/// conflated with an HTTP error or a malformed response.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A `find`-style lookup matched nothing.
    #[error("{resource} matching '{query}' not found")]
    NotFound {
        /// The type name of the resource (e.g., "Tag").
        resource: &'static str,
        /// The query value that matched nothing.
        query: String,
    },

    /// An instance operation required a bound id, but none is present.
    #[error("{resource} has no id; it was never fetched or saved")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// A client-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        Self::Rest(RestError::Http(error))
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestError>();
    assert_send_sync::<ResourceError>();
};
