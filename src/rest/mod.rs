//! Resource-mapping infrastructure for the ActiveCampaign API.
//!
//! This module maps the paginated, resource-oriented remote API onto typed
//! local objects with uniform CRUD semantics:
//!
//! - **[`ApiClient`]**: envelope wrapping/unwrapping, pagination, and CRUD
//!   operations keyed by collection name strings
//! - **[`ResourcePages`]**: a lazy, restartable cursor over a multi-page
//!   collection of raw items
//! - **[`Resource`] / [`MutableResource`]**: declarative traits concrete
//!   types implement by supplying a collection name and a [`FieldBinding`]
//!   association list
//! - **[`ResourceIter`]**: the typed counterpart of [`ResourcePages`]
//! - **Path building**: [`build_path`] and the fixed [`singularize`] rule
//! - **[`RestError`] / [`ResourceError`]**: layered error types
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::rest::{ApiClient, MutableResource, Resource};
//! use activecampaign_api::rest::resources::Tag;
//!
//! let client = ApiClient::new(&config);
//!
//! // Lazy, paginated iteration
//! let mut tags = Tag::all(&client);
//! while let Some(tag) = tags.try_next().await? {
//!     println!("- {}", tag.tag);
//! }
//!
//! // Create, update, delete
//! let mut tag = Tag::new("vip", "contact", "");
//! tag.save(&client).await?;   // POST /tags
//! tag.save(&client).await?;   // PUT /tags/{id}
//! tag.delete(&client).await?; // DELETE /tags/{id}
//! ```

mod client;
mod errors;
mod pages;
mod path;
mod resource;

pub mod resources;

// Public exports
pub use client::ApiClient;
pub use errors::{ResourceError, RestError};
pub use pages::{ResourcePages, PAGE_LIMIT};
pub use path::{build_path, singularize, QueryParams};
pub use resource::{
    integer, opt_text, text, FieldBinding, MutableResource, RecordState, Resource, ResourceIter,
};
