//! Contact resource implementation.
//!
//! An ActiveCampaign contact, addressed by email.
//!
//! See <https://developers.activecampaign.com/reference#contact>.
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::rest::resources::Contact;
//! use activecampaign_api::rest::MutableResource;
//!
//! let mut contact = Contact::new("ada@example.com");
//! contact.save(&client).await?;
//!
//! let contact = Contact::find(&client, "ada@example.com").await?;
//! ```

use serde_json::Value;

use crate::rest::{
    text, ApiClient, FieldBinding, MutableResource, QueryParams, RecordState, Resource,
    ResourceError,
};

/// An ActiveCampaign contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// The contact's email address.
    pub email: String,
    record: RecordState,
}

impl Contact {
    /// Creates a new, unsaved contact.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            record: RecordState::default(),
        }
    }

    /// Returns the first contact with the given email address.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] when no contact matches, or any
    /// underlying client error.
    pub async fn find(client: &ApiClient, email: &str) -> Result<Self, ResourceError> {
        let filters = QueryParams::from([("email".to_string(), email.to_string())]);

        let mut contacts = Self::filter(client, filters);
        match contacts.try_next().await? {
            Some(contact) => Ok(contact),
            None => Err(ResourceError::NotFound {
                resource: Self::NAME,
                query: email.to_string(),
            }),
        }
    }
}

impl Resource for Contact {
    const NAME: &'static str = "Contact";
    const COLLECTION: &'static str = "contacts";
    const FIELDS: &'static [FieldBinding<Self>] = &[FieldBinding::new(
        "email",
        |contact| Value::String(contact.email.clone()),
        |contact, value| contact.email = text(value),
    )];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}

impl MutableResource for Contact {}
