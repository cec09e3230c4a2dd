//! HTTP transport types for ActiveCampaign API communication.
//!
//! This module provides the foundational HTTP layer for making authenticated
//! requests to the ActiveCampaign API. It handles request/response processing
//! and default header construction; it knows nothing about resources or
//! pagination.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP transport
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::{Config, HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/tags?limit=100&offset=0")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! if response.is_ok() {
//!     println!("Tags: {}", response.body);
//! }
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
