//! # ActiveCampaign API Rust Client
//!
//! A Rust client for the ActiveCampaign v3 REST API, mapping its paginated,
//! resource-oriented endpoints onto typed local objects with uniform CRUD
//! semantics.
//!
//! ## Overview
//!
//! This client provides:
//! - Type-safe configuration via [`Config`] and [`ConfigBuilder`] with
//!   fail-fast validation of the base URL and API token
//! - An HTTP transport ([`HttpClient`]) that sends one authenticated
//!   request per call
//! - A resource API client ([`rest::ApiClient`]) implementing the API's
//!   envelope and `limit`/`offset` pagination conventions
//! - Declarative resource traits ([`rest::Resource`],
//!   [`rest::MutableResource`]) that give any concrete type
//!   filter/all/get/save/delete behavior from a field association list
//! - Concrete resource types (contact, tag, list, custom field, ...) under
//!   [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use activecampaign_api::{ApiToken, BaseUrl, Config};
//!
//! // Create configuration using the builder pattern
//! let config = Config::builder()
//!     .base_url(BaseUrl::new("https://youraccount.api-us1.com/api/3").unwrap())
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use activecampaign_api::rest::{ApiClient, MutableResource, Resource};
//! use activecampaign_api::rest::resources::{Contact, ContactList, Tag};
//!
//! let client = ApiClient::new(&config);
//!
//! // Create a contact, then update it
//! let mut contact = Contact::new("ada@example.com");
//! contact.save(&client).await?; // POST /contacts
//! contact.email = "ada@example.org".to_string();
//! contact.save(&client).await?; // PUT /contacts/{id}
//!
//! // Find a tag by name; a miss is a distinct NotFound error
//! let tag = Tag::find(&client, "vip").await?;
//!
//! // Walk a paginated collection lazily
//! let mut contacts = Contact::all(&client);
//! while let Some(contact) = contacts.try_next().await? {
//!     println!("{}", contact.email);
//! }
//!
//! // Subscribe a contact to a list
//! let mut membership = ContactList::subscribe("43", contact.id().unwrap());
//! membership.save(&client).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Required settings are validated at construction
//! - **Lazy pagination**: List sequences fetch one page at a time, on pull
//! - **No hidden recovery**: No retries, no caching; every error propagates
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, BaseUrl, Config, ConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP transport types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource layer types
pub use rest::{ApiClient, MutableResource, QueryParams, Resource, ResourceError, RestError};
