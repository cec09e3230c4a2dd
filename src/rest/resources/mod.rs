//! Concrete ActiveCampaign resource declarations.
//!
//! Each module declares one remote resource type: its collection name and
//! field association list, plus any lookup conveniences. All CRUD and
//! pagination behavior comes from the [`Resource`](crate::rest::Resource)
//! and [`MutableResource`](crate::rest::MutableResource) traits.

mod contact;
mod contact_list;
mod contact_tag;
mod custom_field;
mod custom_field_value;
mod marketing_list;
mod tag;

pub use contact::Contact;
pub use contact_list::ContactList;
pub use contact_tag::ContactTag;
pub use custom_field::CustomField;
pub use custom_field_value::CustomFieldValue;
pub use marketing_list::MarketingList;
pub use tag::Tag;
