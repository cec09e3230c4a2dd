//! Tag resource implementation.
//!
//! A tag in ActiveCampaign. Allows to:
//! - Create a tag
//! - Find a tag by name
//! - Update a tag
//! - Remove a tag
//!
//! See <https://developers.activecampaign.com/reference#tags>.
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::rest::resources::Tag;
//! use activecampaign_api::rest::MutableResource;
//!
//! // Create a new tag
//! let mut tag = Tag::new("vip", "contact", "high-value customers");
//! tag.save(&client).await?;
//!
//! // Find an existing tag by name
//! let tag = Tag::find(&client, "vip").await?;
//! println!("Tag: {}", tag.tag);
//! ```

use serde_json::Value;

use crate::rest::{
    opt_text, text, ApiClient, FieldBinding, MutableResource, QueryParams, RecordState, Resource,
    ResourceError,
};

/// A tag in ActiveCampaign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// The name of the tag.
    pub tag: String,
    /// The type of the tag. Either `template` or `contact`.
    pub tag_type: String,
    /// A description of the tag.
    pub description: String,
    record: RecordState,
}

impl Tag {
    /// Creates a new, unsaved tag.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        tag_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            tag_type: tag_type.into(),
            description: description.into(),
            record: RecordState::default(),
        }
    }

    /// Returns the first tag with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] when no tag matches, or any
    /// underlying client error.
    pub async fn find(client: &ApiClient, tag_name: &str) -> Result<Self, ResourceError> {
        let filters = QueryParams::from([("search".to_string(), tag_name.to_string())]);

        let mut tags = Self::filter(client, filters);
        match tags.try_next().await? {
            Some(tag) => Ok(tag),
            None => Err(ResourceError::NotFound {
                resource: Self::NAME,
                query: tag_name.to_string(),
            }),
        }
    }
}

impl Resource for Tag {
    const NAME: &'static str = "Tag";
    const COLLECTION: &'static str = "tags";
    const FIELDS: &'static [FieldBinding<Self>] = &[
        FieldBinding::new(
            "tag",
            |tag| Value::String(tag.tag.clone()),
            |tag, value| tag.tag = text(value),
        ),
        FieldBinding::new(
            "tagType",
            |tag| Value::String(tag.tag_type.clone()),
            |tag, value| tag.tag_type = text(value),
        ),
        FieldBinding::new(
            "description",
            |tag| Value::String(tag.description.clone()),
            |tag, value| tag.description = opt_text(value).unwrap_or_default(),
        ),
    ];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}

impl MutableResource for Tag {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_tag_is_not_persisted() {
        let tag = Tag::new("vip", "contact", "");
        assert!(!tag.is_persisted());
        assert!(tag.id().is_none());
    }

    #[test]
    fn test_decode_maps_tag_type_field() {
        let raw = json!({"tag": "vip", "tagType": "contact", "description": ""});
        let tag = Tag::from_raw(raw.as_object().unwrap());

        assert_eq!(tag.tag, "vip");
        assert_eq!(tag.tag_type, "contact");
        assert_eq!(tag.description, "");
    }

    #[test]
    fn test_encode_uses_remote_field_names() {
        let tag = Tag::new("vip", "contact", "high-value");
        let payload = tag.to_payload();

        assert_eq!(payload["tag"], "vip");
        assert_eq!(payload["tagType"], "contact");
        assert_eq!(payload["description"], "high-value");
        assert!(payload.get("tag_type").is_none());
    }
}
