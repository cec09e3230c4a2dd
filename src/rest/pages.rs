//! Lazy pagination cursor over list endpoints.
//!
//! This module provides [`ResourcePages`], a pull-based cursor that walks a
//! multi-page collection and exposes it as a single sequence of raw items.
//!
//! # Laziness
//!
//! Constructing a cursor issues no network request; the first page is
//! fetched on the first [`try_next`](ResourcePages::try_next) pull. A fresh
//! cursor over the same collection re-pages from offset 0, so iteration is
//! restartable by constructing again. Dropping the cursor (or the future of
//! an in-flight pull) stops it from yielding further items.
//!
//! # Termination
//!
//! List responses carry a `meta.total` count. While it is present, the
//! cursor keeps requesting pages until the offset passes the total. Some
//! nested-resource endpoints omit `meta` entirely; the cursor then stops
//! after the current page no matter how many items it returned. That is a
//! documented quirk of the wrapped API, not a condition to guess around.

use std::collections::VecDeque;

use serde::Deserialize;
use serde_json::Value;

use crate::rest::client::ApiClient;
use crate::rest::path::{build_path, QueryParams};
use crate::rest::RestError;

/// Page size requested from the server.
///
/// 100 is the server's documented maximum; requesting more is silently
/// truncated to 100, so the client never assumes a larger effective page.
pub const PAGE_LIMIT: u64 = 100;

/// The `meta` object carried by paginated list responses.
#[derive(Debug, Deserialize)]
struct PageMeta {
    total: TotalCount,
}

/// The wrapped API emits `total` as a JSON number on some endpoints and a
/// numeric string on others; both count.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TotalCount {
    Number(u64),
    Text(String),
}

impl TotalCount {
    fn value(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.parse().ok(),
        }
    }
}

/// A lazy, restartable cursor over the items of a paginated collection.
///
/// Yields raw item objects in server-given order, fetching one page at a
/// time as items are pulled. Created by
/// [`ApiClient::list_resources`](crate::rest::ApiClient::list_resources).
///
/// # Example
///
/// ```rust,ignore
/// let mut pages = client.list_resources("contacts", None, None, QueryParams::new());
/// while let Some(item) = pages.try_next().await? {
///     println!("{}", item["email"]);
/// }
/// ```
#[derive(Debug)]
pub struct ResourcePages<'a> {
    client: &'a ApiClient,
    collection: String,
    resource_id: Option<String>,
    nested: Option<String>,
    query: QueryParams,
    offset: u64,
    buffered: VecDeque<Value>,
    exhausted: bool,
}

impl<'a> ResourcePages<'a> {
    /// Creates a cursor positioned before the first page.
    pub(crate) fn new(
        client: &'a ApiClient,
        collection: &str,
        resource_id: Option<&str>,
        nested: Option<&str>,
        query: QueryParams,
    ) -> Self {
        Self {
            client,
            collection: collection.to_string(),
            resource_id: resource_id.map(ToString::to_string),
            nested: nested.map(ToString::to_string),
            query,
            offset: 0,
            buffered: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Pulls the next raw item, fetching the next page when the buffer runs
    /// dry.
    ///
    /// Returns `Ok(None)` once the collection is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on a non-2xx response or when the expected
    /// items key is absent from a page body.
    pub async fn try_next(&mut self) -> Result<Option<Value>, RestError> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
    }

    /// Pulls every remaining item into a vector.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if any page request fails.
    pub async fn try_collect(mut self) -> Result<Vec<Value>, RestError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Fetches the page at the current offset and advances the cursor.
    async fn fetch_page(&mut self) -> Result<(), RestError> {
        let mut query = self.query.clone();
        query.insert("limit".to_string(), PAGE_LIMIT.to_string());
        query.insert("offset".to_string(), self.offset.to_string());

        let path = build_path(
            &self.collection,
            self.resource_id.as_deref(),
            self.nested.as_deref(),
            &query,
        );

        tracing::debug!(
            collection = %self.collection,
            offset = self.offset,
            "fetching page"
        );

        let response = self.client.get_page(path).await?;

        let items = response
            .body
            .get(self.items_key())
            .and_then(Value::as_array)
            .ok_or_else(|| RestError::MissingKey {
                key: self.items_key().to_string(),
            })?;
        self.buffered.extend(items.iter().cloned());

        // Absent meta.total means the page is the entire result.
        match response
            .body
            .get("meta")
            .and_then(|meta| PageMeta::deserialize(meta).ok())
            .and_then(|meta| meta.total.value())
        {
            Some(total) => {
                self.offset += PAGE_LIMIT;
                if self.offset > total {
                    self.exhausted = true;
                }
            }
            None => self.exhausted = true,
        }

        Ok(())
    }

    /// The response key items are read from: the nested collection name when
    /// the listing is scoped under a parent resource, the collection name
    /// otherwise.
    fn items_key(&self) -> &str {
        match (&self.resource_id, &self.nested) {
            (Some(_), Some(nested)) => nested,
            _ => &self.collection,
        }
    }
}
