//! `CustomField` resource implementation.
//!
//! An ActiveCampaign custom contact field. Allows to:
//! - Create a custom field
//! - Find a custom field by title
//! - Delete a custom field
//!
//! See <https://developers.activecampaign.com/reference#fields>.

use serde_json::Value;

use crate::rest::{
    text, ApiClient, FieldBinding, MutableResource, RecordState, Resource, ResourceError,
};

/// A custom contact field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomField {
    /// Title of the field.
    pub title: String,
    /// Field type. Possible values: `dropdown`, `hidden`, `checkbox`,
    /// `date`, `text`, `datetime`, `textarea`, `NULL`, `listbox`, `radio`.
    pub field_type: String,
    record: RecordState,
}

impl CustomField {
    /// Creates a new, unsaved custom field.
    #[must_use]
    pub fn new(title: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field_type: field_type.into(),
            record: RecordState::default(),
        }
    }

    /// Returns the custom field with the given title.
    ///
    /// The fields endpoint has no title filter, so this scans the full
    /// listing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] when no field matches, or any
    /// underlying client error.
    pub async fn find(client: &ApiClient, title: &str) -> Result<Self, ResourceError> {
        let mut fields = Self::all(client);
        while let Some(field) = fields.try_next().await? {
            if field.title == title {
                return Ok(field);
            }
        }
        Err(ResourceError::NotFound {
            resource: Self::NAME,
            query: title.to_string(),
        })
    }
}

impl Resource for CustomField {
    const NAME: &'static str = "CustomField";
    const COLLECTION: &'static str = "fields";
    const FIELDS: &'static [FieldBinding<Self>] = &[
        FieldBinding::new(
            "title",
            |field| Value::String(field.title.clone()),
            |field, value| field.title = text(value),
        ),
        FieldBinding::new(
            "type",
            |field| Value::String(field.field_type.clone()),
            |field, value| field.field_type = text(value),
        ),
    ];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}

impl MutableResource for CustomField {}
