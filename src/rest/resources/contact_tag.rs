//! `ContactTag` resource implementation.
//!
//! Tag for a contact in ActiveCampaign. Allows to:
//! - Add a tag to a contact
//! - Remove a tag from a contact
//!
//! See <https://developers.activecampaign.com/reference#contact-tags>.

use serde_json::Value;

use crate::rest::{
    opt_text, ApiClient, FieldBinding, MutableResource, RecordState, Resource, ResourceIter,
};

/// The association between a contact and a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactTag {
    /// The id of the tag.
    pub tag: Option<String>,
    /// The id of the contact.
    pub contact: Option<String>,
    record: RecordState,
}

impl ContactTag {
    /// Creates a new, unsaved contact-tag association.
    #[must_use]
    pub fn new(tag_id: impl Into<String>, contact_id: impl Into<String>) -> Self {
        Self {
            tag: Some(tag_id.into()),
            contact: Some(contact_id.into()),
            record: RecordState::default(),
        }
    }

    /// Yields every tag association of the contact with the given id.
    ///
    /// Routed as a nested listing under `contacts`; the endpoint reports no
    /// `meta.total`, so the listing ends with its first page.
    #[must_use]
    pub fn all_in_contact<'a>(client: &'a ApiClient, contact_id: &str) -> ResourceIter<'a, Self> {
        Self::all_in(client, "contacts", contact_id)
    }
}

impl Resource for ContactTag {
    const NAME: &'static str = "ContactTag";
    const COLLECTION: &'static str = "contactTags";
    const FIELDS: &'static [FieldBinding<Self>] = &[
        FieldBinding::new(
            "tag",
            |contact_tag| {
                contact_tag
                    .tag
                    .clone()
                    .map_or(Value::Null, Value::String)
            },
            |contact_tag, value| contact_tag.tag = opt_text(value),
        ),
        FieldBinding::new(
            "contact",
            |contact_tag| {
                contact_tag
                    .contact
                    .clone()
                    .map_or(Value::Null, Value::String)
            },
            |contact_tag, value| contact_tag.contact = opt_text(value),
        ),
    ];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}

impl MutableResource for ContactTag {}
