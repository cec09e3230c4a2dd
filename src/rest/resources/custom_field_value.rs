//! `CustomFieldValue` resource implementation.
//!
//! The value of a custom field for one contact.
//!
//! See <https://developers.activecampaign.com/reference#fieldvalues>.

use serde_json::Value;

use crate::rest::{text, FieldBinding, MutableResource, RecordState, Resource};

/// A custom field value bound to a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomFieldValue {
    /// The id of the contact whose field value this is.
    pub contact_id: String,
    /// The id of the custom field.
    pub field_id: String,
    /// The value. For multi-select options the format is
    /// `||option1||option2||`.
    pub value: String,
    record: RecordState,
}

impl CustomFieldValue {
    /// Creates a new, unsaved field value.
    #[must_use]
    pub fn new(
        contact_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            contact_id: contact_id.into(),
            field_id: field_id.into(),
            value: value.into(),
            record: RecordState::default(),
        }
    }
}

impl Resource for CustomFieldValue {
    const NAME: &'static str = "CustomFieldValue";
    const COLLECTION: &'static str = "fieldValues";
    const FIELDS: &'static [FieldBinding<Self>] = &[
        FieldBinding::new(
            "contact",
            |field_value| Value::String(field_value.contact_id.clone()),
            |field_value, value| field_value.contact_id = text(value),
        ),
        FieldBinding::new(
            "field",
            |field_value| Value::String(field_value.field_id.clone()),
            |field_value, value| field_value.field_id = text(value),
        ),
        FieldBinding::new(
            "value",
            |field_value| Value::String(field_value.value.clone()),
            |field_value, value| field_value.value = text(value),
        ),
    ];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}

impl MutableResource for CustomFieldValue {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_uses_remote_field_names() {
        let field_value = CustomFieldValue::new("12", "2", "blue");
        let payload = field_value.to_payload();

        assert_eq!(payload, json!({"contact": "12", "field": "2", "value": "blue"}));
    }

    #[test]
    fn test_decode_accepts_numeric_ids() {
        let raw = json!({"id": 8, "contact": 12, "field": 2, "value": "blue"});
        let field_value = CustomFieldValue::from_raw(raw.as_object().unwrap());

        assert_eq!(field_value.contact_id, "12");
        assert_eq!(field_value.field_id, "2");
        assert_eq!(field_value.value, "blue");
    }
}
