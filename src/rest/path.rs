//! Path construction for resource endpoints.
//!
//! Pure, stateless helpers that build request paths of the form
//! `/{collection}[/{id}[/{nested}]][?k=v&...]` and apply the wrapped API's
//! fixed singularization rule for envelope keys.
//!
//! # Query Ordering
//!
//! Query parameters are held in a [`QueryParams`] map (`BTreeMap`), so the
//! serialized query string has a deterministic key order. Keys and values
//! are independently percent-encoded.
//!
//! # Example
//!
//! ```rust
//! use activecampaign_api::rest::{build_path, singularize, QueryParams};
//!
//! let mut query = QueryParams::new();
//! query.insert("search".to_string(), "vip".to_string());
//!
//! assert_eq!(build_path("tags", None, None, &query), "/tags?search=vip");
//! assert_eq!(build_path("contacts", Some("12"), Some("contactTags"), &QueryParams::new()),
//!            "/contacts/12/contactTags");
//! assert_eq!(singularize("tags"), "tag");
//! ```

use std::collections::BTreeMap;

/// Query parameters serialized into a request path.
///
/// A `BTreeMap` keeps iteration order deterministic, so the same parameter
/// map always produces the same query string.
pub type QueryParams = BTreeMap<String, String>;

/// Builds a request path from a collection name, optional resource id,
/// optional nested collection name, and query parameters.
///
/// Rules:
/// - Base form: `/{collection}`.
/// - With `resource_id`: `/{collection}/{id}`.
/// - With `resource_id` and `nested`: `/{collection}/{id}/{nested}`. A
///   nested name without a resource id is ignored.
/// - An empty query map appends nothing, not even a bare `?`. Otherwise
///   `?k1=v1&k2=v2...` is appended with each key and value independently
///   percent-encoded.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::rest::{build_path, QueryParams};
///
/// assert_eq!(build_path("contacts", None, None, &QueryParams::new()), "/contacts");
/// assert_eq!(build_path("contacts", Some("7"), None, &QueryParams::new()), "/contacts/7");
/// ```
#[must_use]
pub fn build_path(
    collection: &str,
    resource_id: Option<&str>,
    nested: Option<&str>,
    query: &QueryParams,
) -> String {
    let mut path = format!("/{collection}");

    if let Some(id) = resource_id {
        path.push('/');
        path.push_str(id);

        if let Some(nested) = nested {
            path.push('/');
            path.push_str(nested);
        }
    }

    if !query.is_empty() {
        let query_string = query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        path.push('?');
        path.push_str(&query_string);
    }

    path
}

/// Returns the envelope key for a single item of the given collection.
///
/// The rule is a fixed lexical one, not a linguistic pluralizer: if the
/// collection name's last character is the ASCII letter `s`, drop it;
/// otherwise return the name unchanged. The wrapped API's naming was
/// designed around exactly this rule, so it must not be extended to handle
/// irregular plurals.
///
/// # Example
///
/// ```rust
/// use activecampaign_api::rest::singularize;
///
/// assert_eq!(singularize("contacts"), "contact");
/// assert_eq!(singularize("fieldValues"), "fieldValue");
/// assert_eq!(singularize("data"), "data");
/// ```
#[must_use]
pub fn singularize(collection: &str) -> &str {
    collection.strip_suffix('s').unwrap_or(collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_query() -> QueryParams {
        QueryParams::new()
    }

    #[test]
    fn test_build_path_collection_only() {
        assert_eq!(build_path("contacts", None, None, &no_query()), "/contacts");
    }

    #[test]
    fn test_build_path_with_resource_id() {
        assert_eq!(
            build_path("contacts", Some("42"), None, &no_query()),
            "/contacts/42"
        );
    }

    #[test]
    fn test_build_path_with_nested_collection() {
        assert_eq!(
            build_path("contacts", Some("42"), Some("contactTags"), &no_query()),
            "/contacts/42/contactTags"
        );
    }

    #[test]
    fn test_build_path_nested_without_id_is_ignored() {
        assert_eq!(
            build_path("contacts", None, Some("contactTags"), &no_query()),
            "/contacts"
        );
    }

    #[test]
    fn test_build_path_empty_query_appends_nothing() {
        let path = build_path("contacts", None, None, &no_query());
        assert!(!path.contains('?'));
    }

    #[test]
    fn test_build_path_serializes_query_in_key_order() {
        let mut query = QueryParams::new();
        query.insert("offset".to_string(), "0".to_string());
        query.insert("limit".to_string(), "100".to_string());
        query.insert("email".to_string(), "a@b.com".to_string());

        assert_eq!(
            build_path("contacts", None, None, &query),
            "/contacts?email=a%40b.com&limit=100&offset=0"
        );
    }

    #[test]
    fn test_build_path_percent_encodes_keys_and_values() {
        let mut query = QueryParams::new();
        query.insert("filters[name]".to_string(), "SD: Marketing List".to_string());

        assert_eq!(
            build_path("lists", None, None, &query),
            "/lists?filters%5Bname%5D=SD%3A%20Marketing%20List"
        );
    }

    #[test]
    fn test_query_encoding_round_trips() {
        let mut query = QueryParams::new();
        query.insert("search".to_string(), "a&b=c?d e".to_string());
        query.insert("plain".to_string(), "value".to_string());

        let path = build_path("tags", None, None, &query);
        let (_, query_string) = path.split_once('?').unwrap();

        let mut decoded = QueryParams::new();
        for pair in query_string.split('&') {
            let (key, value) = pair.split_once('=').unwrap();
            decoded.insert(
                urlencoding::decode(key).unwrap().into_owned(),
                urlencoding::decode(value).unwrap().into_owned(),
            );
        }

        assert_eq!(decoded, query);
    }

    #[test]
    fn test_singularize_strips_trailing_s() {
        assert_eq!(singularize("contacts"), "contact");
        assert_eq!(singularize("lists"), "list");
        assert_eq!(singularize("tags"), "tag");
        assert_eq!(singularize("fieldValues"), "fieldValue");
    }

    #[test]
    fn test_singularize_leaves_other_names_unchanged() {
        assert_eq!(singularize("data"), "data");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn test_singularize_only_strips_one_trailing_s() {
        assert_eq!(singularize("address"), "addres");
    }
}
