//! Resource API client for the ActiveCampaign API.
//!
//! This module provides the [`ApiClient`] type, which layers the payload
//! envelope convention (singular/plural resource-name wrapping) and the
//! `limit`/`offset` pagination convention on top of the HTTP transport.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
};
use crate::config::Config;
use crate::rest::pages::ResourcePages;
use crate::rest::path::{build_path, singularize, QueryParams};
use crate::rest::RestError;

/// Resource API client keyed by collection name strings.
///
/// Knows the wrapped API's two conventions:
///
/// - **Envelope**: single items travel under the singularized collection
///   name (`{"tag": {...}}` for the `tags` collection); collections travel
///   under the collection name itself.
/// - **Pagination**: list endpoints take `limit`/`offset` and report a
///   `meta.total` count; [`list_resources`](Self::list_resources) walks the
///   pages lazily.
///
/// Any non-2xx response is raised as an error carrying the status code and
/// body. There are no retries and no caching.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use activecampaign_api::rest::{ApiClient, QueryParams};
///
/// let client = ApiClient::new(&config);
///
/// // Walk every contact, one page at a time under the hood
/// let mut contacts = client.list_resources("contacts", None, None, QueryParams::new());
/// while let Some(contact) = contacts.try_next().await? {
///     println!("{}", contact["email"]);
/// }
///
/// // Single-item CRUD
/// let tag = client.get_resource("tags", "1").await?;
/// client.delete_resource("tags", "1").await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The underlying HTTP transport.
    http: HttpClient,
    /// Well-known marketing list names mapped to their remote ids.
    known_lists: HashMap<String, u32>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new resource API client for the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: HttpClient::new(config),
            known_lists: config.known_lists().clone(),
        }
    }

    /// Returns the remote id of a well-known marketing list, if registered.
    ///
    /// The table is supplied via [`Config`](crate::Config); the client's own
    /// logic never consults it.
    #[must_use]
    pub fn list_id(&self, name: &str) -> Option<u32> {
        self.known_lists.get(name).copied()
    }

    /// Lists resources of a collection as a lazy, restartable page cursor.
    ///
    /// No request is issued until the first pull on the returned cursor.
    /// Each fresh call re-pages from offset 0. When both `resource_id` and
    /// `nested` are given, the listing is scoped under the parent resource
    /// (`/{collection}/{id}/{nested}`) and items are read from the nested
    /// collection's key; otherwise items are read from `collection`'s key.
    ///
    /// `limit` and `offset` are injected into `query` on every page request,
    /// overwriting any caller-supplied values for those two keys.
    #[must_use]
    pub fn list_resources(
        &self,
        collection: &str,
        resource_id: Option<&str>,
        nested: Option<&str>,
        query: QueryParams,
    ) -> ResourcePages<'_> {
        ResourcePages::new(self, collection, resource_id, nested, query)
    }

    /// Fetches a single resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on a non-2xx response or when the singularized
    /// envelope key is absent from the response body.
    pub async fn get_resource(&self, collection: &str, resource_id: &str) -> Result<Value, RestError> {
        let path = build_path(collection, Some(resource_id), None, &QueryParams::new());
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = Self::raise_for_status(self.http.request(request).await?)?;
        Self::unwrap_key(&response.body, singularize(collection))
    }

    /// Creates a resource with the given data.
    ///
    /// The data is wrapped under the singularized collection name
    /// (`{"tag": {...}}`) and the response is unwrapped the same way.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on a non-2xx response or when the singularized
    /// envelope key is absent from the response body.
    pub async fn create_resource(&self, collection: &str, data: Value) -> Result<Value, RestError> {
        let path = build_path(collection, None, None, &QueryParams::new());
        let payload = serde_json::json!({ singularize(collection): data });
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(payload)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = Self::raise_for_status(self.http.request(request).await?)?;
        Self::unwrap_key(&response.body, singularize(collection))
    }

    /// Updates a resource by id with the given data.
    ///
    /// Uses the same envelope convention as
    /// [`create_resource`](Self::create_resource).
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on a non-2xx response or when the singularized
    /// envelope key is absent from the response body.
    pub async fn update_resource(
        &self,
        collection: &str,
        resource_id: &str,
        data: Value,
    ) -> Result<Value, RestError> {
        let path = build_path(collection, Some(resource_id), None, &QueryParams::new());
        let payload = serde_json::json!({ singularize(collection): data });
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(payload)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        let response = Self::raise_for_status(self.http.request(request).await?)?;
        Self::unwrap_key(&response.body, singularize(collection))
    }

    /// Deletes a resource by id.
    ///
    /// The response body, if any, is not interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on a non-2xx response.
    pub async fn delete_resource(&self, collection: &str, resource_id: &str) -> Result<(), RestError> {
        let path = build_path(collection, Some(resource_id), None, &QueryParams::new());
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        Self::raise_for_status(self.http.request(request).await?)?;
        Ok(())
    }

    /// Issues a GET for one page of a listing. Used by [`ResourcePages`].
    pub(crate) async fn get_page(&self, path: String) -> Result<HttpResponse, RestError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .build()
            .map_err(crate::clients::HttpError::from)?;

        Self::raise_for_status(self.http.request(request).await?)
    }

    /// Raises a non-2xx response as an error carrying status and body.
    fn raise_for_status(response: HttpResponse) -> Result<HttpResponse, RestError> {
        if response.is_ok() {
            Ok(response)
        } else {
            Err(RestError::Http(
                HttpResponseError {
                    code: response.code,
                    message: response.body.to_string(),
                }
                .into(),
            ))
        }
    }

    /// Extracts the value under `key` from a response body.
    fn unwrap_key(body: &Value, key: &str) -> Result<Value, RestError> {
        body.get(key)
            .cloned()
            .ok_or_else(|| RestError::MissingKey {
                key: key.to_string(),
            })
    }
}
