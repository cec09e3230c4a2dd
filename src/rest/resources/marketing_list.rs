//! Marketing list resource implementation.
//!
//! An ActiveCampaign list. Allows to:
//! - Find a list by name
//! - Enumerate lists
//!
//! Lists are managed in the ActiveCampaign UI; this client treats them as
//! read-only, so the type implements only the queryable trait.
//!
//! See <https://developers.activecampaign.com/reference#lists>.

use serde_json::Value;

use crate::rest::{
    text, ApiClient, FieldBinding, QueryParams, RecordState, Resource, ResourceError,
};

/// An ActiveCampaign marketing list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketingList {
    /// The name of the list.
    pub name: String,
    /// The URL-safe list identifier.
    pub stringid: String,
    /// The website URL the list belongs to.
    pub sender_url: String,
    /// The reminder text shown to subscribers.
    pub sender_reminder: String,
    record: RecordState,
}

impl MarketingList {
    /// Returns the first list with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] when no list matches, or any
    /// underlying client error.
    pub async fn find(client: &ApiClient, name: &str) -> Result<Self, ResourceError> {
        let filters = QueryParams::from([("filters[name]".to_string(), name.to_string())]);

        let mut lists = Self::filter(client, filters);
        match lists.try_next().await? {
            Some(list) => Ok(list),
            None => Err(ResourceError::NotFound {
                resource: Self::NAME,
                query: name.to_string(),
            }),
        }
    }
}

impl Resource for MarketingList {
    const NAME: &'static str = "List";
    const COLLECTION: &'static str = "lists";
    const FIELDS: &'static [FieldBinding<Self>] = &[
        FieldBinding::new(
            "name",
            |list| Value::String(list.name.clone()),
            |list, value| list.name = text(value),
        ),
        FieldBinding::new(
            "stringid",
            |list| Value::String(list.stringid.clone()),
            |list, value| list.stringid = text(value),
        ),
        FieldBinding::new(
            "sender_url",
            |list| Value::String(list.sender_url.clone()),
            |list, value| list.sender_url = text(value),
        ),
        FieldBinding::new(
            "sender_reminder",
            |list| Value::String(list.sender_reminder.clone()),
            |list, value| list.sender_reminder = text(value),
        ),
    ];

    fn record(&self) -> &RecordState {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordState {
        &mut self.record
    }
}
