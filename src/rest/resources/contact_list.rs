//! `ContactList` resource implementation.
//!
//! The list/contact pair in ActiveCampaign. Allows to:
//! - Subscribe a contact to a list
//! - Unsubscribe a contact from a list
//!
//! See <https://developers.activecampaign.com/reference#update-list-status-for-contact>.
//!
//! # Example
//!
//! ```rust,ignore
//! use activecampaign_api::rest::resources::ContactList;
//! use activecampaign_api::rest::MutableResource;
//!
//! let mut membership = ContactList::subscribe("43", "12");
//! membership.save(&client).await?;
//! ```

use serde_json::Value;

use crate::rest::{
    integer, opt_text, FieldBinding, MutableResource, RecordState, Resource,
};

/// A contact's membership status on a marketing list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    /// The id of the list.
    pub list_id: Option<String>,
    /// The id of the contact.
    pub contact_id: Option<String>,
    /// Membership status: [`Self::STATUS_SUBSCRIBED`] or
    /// [`Self::STATUS_UNSUBSCRIBED`].
    pub status: Option<i64>,
    record: RecordState,
}

impl ContactList {
    /// Status value subscribing the contact to the list.
    pub const STATUS_SUBSCRIBED: i64 = 1;
    /// Status value unsubscribing the contact from the list.
    pub const STATUS_UNSUBSCRIBED: i64 = 2;

    /// Creates a new, unsaved list membership with the given status.
    #[must_use]
    pub fn new(list_id: impl Into<String>, contact_id: impl Into<String>, status: i64) -> Self {
        Self {
            list_id: Some(list_id.into()),
            contact_id: Some(contact_id.into()),
            status: Some(status),
            record: RecordState::default(),
        }
    }

    /// Creates a membership that subscribes the contact to the list.
    #[must_use]
    pub fn subscribe(list_id: impl Into<String>, contact_id: impl Into<String>) -> Self {
        Self::new(list_id, contact_id, Self::STATUS_SUBSCRIBED)
    }

    /// Creates a membership that unsubscribes the contact from the list.
    #[must_use]
    pub fn unsubscribe(list_id: impl Into<String>, contact_id: impl Into<String>) -> Self {
        Self::new(list_id, contact_id, Self::STATUS_UNSUBSCRIBED)
    }
}

impl Resource for ContactList {
    const NAME: &'static str = "ContactList";
    const COLLECTION: &'static str = "contactLists";
    const FIELDS: &'static [FieldBinding<Self>] = &[
        FieldBinding::new(
            "list",
            |membership| {
                membership
                    .list_id
                    .clone()
                    .map_or(Value::Null, Value::String)
            },
            |membership, value| membership.list_id = opt_text(value),
        ),
        FieldBinding::new(
            "contact",
            |membership| {
                membership
                    .contact_id
                    .clone()
                    .map_or(Value::Null, Value::String)
            },
            |membership, value| membership.contact_id = opt_text(value),
        ),
        FieldBinding::new(
            "status",
            |membership| membership.status.map_or(Value::Null, Value::from),
            |membership, value| membership.status = integer(value),
        ),
    ];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}

impl MutableResource for ContactList {}
