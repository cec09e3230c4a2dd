//! Declarative resource traits for CRUD operations.
//!
//! This module defines the [`Resource`] and [`MutableResource`] traits.
//! A concrete type declares only its remote collection name and a field
//! association list; the traits supply identity tracking, lazy filtered
//! iteration, fetch-by-id, and create-or-update dispatch.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct embedding a [`RecordState`]
//! 2. Implement [`Resource`] with the collection name and [`FieldBinding`]
//!    list
//! 3. Implement [`MutableResource`] as well if the type supports writes;
//!    read-only types simply leave it out
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::rest::{FieldBinding, MutableResource, RecordState, Resource};
//! use serde_json::Value;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! pub struct Tag {
//!     pub tag: String,
//!     record: RecordState,
//! }
//!
//! impl Resource for Tag {
//!     const NAME: &'static str = "Tag";
//!     const COLLECTION: &'static str = "tags";
//!     const FIELDS: &'static [FieldBinding<Self>] = &[FieldBinding::new(
//!         "tag",
//!         |tag| Value::String(tag.tag.clone()),
//!         |tag, value| tag.tag = activecampaign_api::rest::text(value),
//!     )];
//!
//!     fn record(&self) -> &RecordState { &self.record }
//!     fn record_mut(&mut self) -> &mut RecordState { &mut self.record }
//! }
//!
//! impl MutableResource for Tag {}
//!
//! // Usage:
//! let mut tags = Tag::filter(&client, query);
//! while let Some(tag) = tags.try_next().await? {
//!     println!("{}", tag.tag);
//! }
//! ```

use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::rest::client::ApiClient;
use crate::rest::errors::{ResourceError, RestError};
use crate::rest::pages::ResourcePages;
use crate::rest::path::QueryParams;

/// One entry of a resource's field association list.
///
/// Binds a remote field name to an accessor and a mutator on the local
/// type. The list as a whole is the declared field⇄attribute mapping:
/// remote fields without a binding are dropped on decode, and only bound
/// fields are ever sent on encode. The `id` field is never part of the
/// list; identity lives in [`RecordState`].
pub struct FieldBinding<T> {
    /// The remote JSON field name.
    pub field: &'static str,
    /// Reads the bound attribute off an instance.
    pub get: fn(&T) -> Value,
    /// Writes a decoded value onto an instance.
    pub set: fn(&mut T, &Value),
}

impl<T> FieldBinding<T> {
    /// Creates a new binding.
    ///
    /// This is a `const fn` so bindings can be declared in a `const` list.
    #[must_use]
    pub const fn new(field: &'static str, get: fn(&T) -> Value, set: fn(&mut T, &Value)) -> Self {
        Self { field, get, set }
    }
}

/// Identity and persistence state embedded in every concrete resource.
///
/// The id is assigned by the remote system and bound on a successful create
/// or fetch; `persisted` reflects whether the instance is known to exist
/// remotely. After a delete, `persisted` flips back to false and the stale
/// id value carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordState {
    id: Option<String>,
    persisted: bool,
}

impl RecordState {
    /// Returns the bound remote id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns whether the instance is known to exist remotely.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Binds a remote id and marks the record persisted.
    pub fn bind(&mut self, id: String) {
        self.id = Some(id);
        self.persisted = true;
    }

    /// Sets the id without touching the persistence flag.
    pub(crate) fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Marks the record persisted.
    pub(crate) fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    /// Clears the persistence flag. The id value is left as-is but carries
    /// no meaning afterwards.
    pub(crate) fn clear_persisted(&mut self) {
        self.persisted = false;
    }
}

/// A queryable API resource.
///
/// Concrete types declare a collection name and a field association list;
/// the trait supplies decode/encode and the class-level query operations.
/// Write operations live on [`MutableResource`] so that read-only types
/// never carry a `save` that fails at runtime.
#[allow(async_fn_in_trait)]
pub trait Resource: Clone + Default + Send + Sync + Sized + 'static {
    /// The type name used in error messages (e.g., "Tag").
    const NAME: &'static str;

    /// The remote collection name (e.g., "tags"). Plural by convention;
    /// the single-item envelope key is derived by the fixed trailing-`s`
    /// rule.
    const COLLECTION: &'static str;

    /// The declared field⇄attribute association list.
    const FIELDS: &'static [FieldBinding<Self>];

    /// Returns the identity and persistence state.
    fn record(&self) -> &RecordState;

    /// Returns the identity and persistence state, mutably.
    fn record_mut(&mut self) -> &mut RecordState;

    /// Returns the bound remote id, if any.
    fn id(&self) -> Option<&str> {
        self.record().id()
    }

    /// Returns whether the instance is known to exist remotely.
    fn is_persisted(&self) -> bool {
        self.record().is_persisted()
    }

    /// Decodes a raw item object into an instance.
    ///
    /// Only the `id` field and the declared bindings are read; unmapped
    /// remote fields are dropped. The returned instance is not marked
    /// persisted; fetch paths do that once the origin of the data is known.
    #[must_use]
    fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut resource = Self::default();
        resource.record_mut().set_id(raw.get("id").and_then(id_text));
        for binding in Self::FIELDS {
            if let Some(value) = raw.get(binding.field) {
                (binding.set)(&mut resource, value);
            }
        }
        resource
    }

    /// Encodes the declared fields into a remote payload.
    ///
    /// The `id` is never included; identity travels in the request path.
    #[must_use]
    fn to_payload(&self) -> Value {
        let mut map = Map::new();
        for binding in Self::FIELDS {
            map.insert(binding.field.to_string(), (binding.get)(self));
        }
        Value::Object(map)
    }

    /// Filters the collection, yielding matching instances lazily.
    ///
    /// No request is issued until the first pull on the returned iterator;
    /// each yielded instance is marked persisted.
    #[must_use]
    fn filter(client: &ApiClient, filters: QueryParams) -> ResourceIter<'_, Self> {
        ResourceIter::new(client.list_resources(Self::COLLECTION, None, None, filters))
    }

    /// Filters instances of this type scoped under a parent resource.
    ///
    /// Queries are routed as a nested listing
    /// (`/{parent_collection}/{parent_id}/{collection}`).
    #[must_use]
    fn filter_in<'a>(
        client: &'a ApiClient,
        parent_collection: &str,
        parent_id: &str,
        filters: QueryParams,
    ) -> ResourceIter<'a, Self> {
        ResourceIter::new(client.list_resources(
            parent_collection,
            Some(parent_id),
            Some(Self::COLLECTION),
            filters,
        ))
    }

    /// Yields every instance of this type.
    #[must_use]
    fn all(client: &ApiClient) -> ResourceIter<'_, Self> {
        Self::filter(client, QueryParams::new())
    }

    /// Yields every instance of this type scoped under a parent resource.
    #[must_use]
    fn all_in<'a>(
        client: &'a ApiClient,
        parent_collection: &str,
        parent_id: &str,
    ) -> ResourceIter<'a, Self> {
        Self::filter_in(client, parent_collection, parent_id, QueryParams::new())
    }

    /// Fetches the instance with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on a non-2xx response or a malformed
    /// response body.
    async fn get(client: &ApiClient, resource_id: &str) -> Result<Self, ResourceError> {
        let raw = client.get_resource(Self::COLLECTION, resource_id).await?;
        let raw = raw.as_object().ok_or(RestError::UnexpectedShape {
            expected: "a JSON object item",
        })?;

        let mut resource = Self::from_raw(raw);
        resource.record_mut().mark_persisted();
        Ok(resource)
    }
}

/// A resource that supports create, update, and delete.
///
/// Types whose remote semantics are read-only implement only [`Resource`].
#[allow(async_fn_in_trait)]
pub trait MutableResource: Resource {
    /// Saves the instance: create when not yet persisted, update otherwise.
    ///
    /// A create binds the id returned by the server and marks the instance
    /// persisted. An update always sends the full declared field set; there
    /// are no partial-field update semantics.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on a non-2xx response, a malformed
    /// response body, or an update on a persisted instance with no bound id.
    async fn save(&mut self, client: &ApiClient) -> Result<(), ResourceError> {
        if self.is_persisted() {
            let id = self
                .id()
                .ok_or(ResourceError::MissingId {
                    resource: Self::NAME,
                })?
                .to_string();
            client
                .update_resource(Self::COLLECTION, &id, self.to_payload())
                .await?;
        } else {
            let raw = client
                .create_resource(Self::COLLECTION, self.to_payload())
                .await?;
            let id = raw
                .get("id")
                .and_then(id_text)
                .ok_or_else(|| RestError::MissingKey {
                    key: "id".to_string(),
                })?;
            self.record_mut().bind(id);
        }
        Ok(())
    }

    /// Deletes the instance from the server.
    ///
    /// Flips the persistence flag back off. The in-memory id value is
    /// unspecified afterwards; the instance must be re-fetched before
    /// further writes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when no id is bound, or
    /// [`ResourceError`] on a non-2xx response.
    async fn delete(&mut self, client: &ApiClient) -> Result<(), ResourceError> {
        let id = self
            .id()
            .ok_or(ResourceError::MissingId {
                resource: Self::NAME,
            })?
            .to_string();
        client.delete_resource(Self::COLLECTION, &id).await?;
        self.record_mut().clear_persisted();
        Ok(())
    }
}

/// A lazy iterator of decoded resource instances.
///
/// Wraps a [`ResourcePages`] cursor and decodes each raw item through the
/// resource's field association list. Instances are yielded already marked
/// persisted.
#[derive(Debug)]
pub struct ResourceIter<'a, T> {
    pages: ResourcePages<'a>,
    _resource: PhantomData<T>,
}

impl<'a, T: Resource> ResourceIter<'a, T> {
    /// Wraps a raw page cursor.
    pub(crate) const fn new(pages: ResourcePages<'a>) -> Self {
        Self {
            pages,
            _resource: PhantomData,
        }
    }

    /// Pulls the next instance, fetching the next page when needed.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on a non-2xx response or a malformed page
    /// body.
    pub async fn try_next(&mut self) -> Result<Option<T>, ResourceError> {
        match self.pages.try_next().await? {
            Some(item) => {
                let raw = item.as_object().ok_or(RestError::UnexpectedShape {
                    expected: "a JSON object item",
                })?;
                let mut resource = T::from_raw(raw);
                resource.record_mut().mark_persisted();
                Ok(Some(resource))
            }
            None => Ok(None),
        }
    }

    /// Pulls every remaining instance into a vector.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if any page request fails.
    pub async fn try_collect(mut self) -> Result<Vec<T>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }
}

/// Decodes a JSON value into a string attribute.
///
/// The wrapped API emits strings for most fields but numbers for some ids
/// and counts; both decode. Anything else decodes to the empty string.
#[must_use]
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Decodes a JSON value into an optional string attribute.
///
/// `null` and non-scalar values decode to `None`.
#[must_use]
pub fn opt_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decodes a JSON value into an optional integer attribute.
///
/// Accepts numbers and numeric strings, matching the wrapped API's habit of
/// emitting either.
#[must_use]
pub fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Extracts an id as a string from a JSON value (string or number).
fn id_text(value: &Value) -> Option<String> {
    opt_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Test resource mirroring a minimal concrete declaration.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestTag {
        tag: String,
        description: Option<String>,
        record: RecordState,
    }

    impl Resource for TestTag {
        const NAME: &'static str = "TestTag";
        const COLLECTION: &'static str = "tags";
        const FIELDS: &'static [FieldBinding<Self>] = &[
            FieldBinding::new(
                "tag",
                |tag| Value::String(tag.tag.clone()),
                |tag, value| tag.tag = text(value),
            ),
            FieldBinding::new(
                "description",
                |tag| {
                    tag.description
                        .clone()
                        .map_or(Value::Null, Value::String)
                },
                |tag, value| tag.description = opt_text(value),
            ),
        ];

        fn record(&self) -> &RecordState {
            &self.record
        }

        fn record_mut(&mut self) -> &mut RecordState {
            &mut self.record
        }
    }

    impl MutableResource for TestTag {}

    #[test]
    fn test_from_raw_decodes_mapped_fields() {
        let raw = json!({"id": "9", "tag": "vip", "description": "important"});
        let tag = TestTag::from_raw(raw.as_object().unwrap());

        assert_eq!(tag.tag, "vip");
        assert_eq!(tag.description.as_deref(), Some("important"));
        assert_eq!(tag.id(), Some("9"));
    }

    #[test]
    fn test_from_raw_drops_unmapped_fields() {
        let raw = json!({"id": "9", "tag": "vip", "cdate": "2023-01-01"});
        let tag = TestTag::from_raw(raw.as_object().unwrap());

        // The unmapped field leaves no trace; mapped ones still decode.
        assert_eq!(tag.tag, "vip");
        assert_eq!(tag.description, None);
    }

    #[test]
    fn test_from_raw_accepts_numeric_id() {
        let raw = json!({"id": 12, "tag": "vip"});
        let tag = TestTag::from_raw(raw.as_object().unwrap());
        assert_eq!(tag.id(), Some("12"));
    }

    #[test]
    fn test_from_raw_does_not_mark_persisted() {
        let raw = json!({"id": "9", "tag": "vip"});
        let tag = TestTag::from_raw(raw.as_object().unwrap());
        assert!(!tag.is_persisted());
    }

    #[test]
    fn test_to_payload_contains_declared_fields_only() {
        let mut tag = TestTag {
            tag: "vip".to_string(),
            description: Some("important".to_string()),
            record: RecordState::default(),
        };
        tag.record_mut().bind("9".to_string());

        let payload = tag.to_payload();
        assert_eq!(payload["tag"], "vip");
        assert_eq!(payload["description"], "important");
        assert!(payload.get("id").is_none());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let original = TestTag {
            tag: "vip".to_string(),
            description: Some("important".to_string()),
            record: RecordState::default(),
        };

        let payload = original.to_payload();
        let decoded = TestTag::from_raw(payload.as_object().unwrap());

        assert_eq!(decoded.tag, original.tag);
        assert_eq!(decoded.description, original.description);
    }

    #[test]
    fn test_record_state_bind_marks_persisted() {
        let mut record = RecordState::default();
        assert!(!record.is_persisted());
        assert_eq!(record.id(), None);

        record.bind("7".to_string());
        assert!(record.is_persisted());
        assert_eq!(record.id(), Some("7"));
    }

    #[test]
    fn test_record_state_clear_persisted_keeps_id_value() {
        let mut record = RecordState::default();
        record.bind("7".to_string());
        record.clear_persisted();

        assert!(!record.is_persisted());
    }

    #[test]
    fn test_text_decodes_strings_and_numbers() {
        assert_eq!(text(&json!("abc")), "abc");
        assert_eq!(text(&json!(42)), "42");
        assert_eq!(text(&json!(null)), "");
    }

    #[test]
    fn test_opt_text_decodes_null_to_none() {
        assert_eq!(opt_text(&json!("abc")), Some("abc".to_string()));
        assert_eq!(opt_text(&json!(7)), Some("7".to_string()));
        assert_eq!(opt_text(&json!(null)), None);
    }

    #[test]
    fn test_integer_decodes_numbers_and_numeric_strings() {
        assert_eq!(integer(&json!(2)), Some(2));
        assert_eq!(integer(&json!("2")), Some(2));
        assert_eq!(integer(&json!("nope")), None);
        assert_eq!(integer(&json!(null)), None);
    }
}
