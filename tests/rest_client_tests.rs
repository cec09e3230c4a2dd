//! Integration tests for the resource API client.
//!
//! These tests verify envelope wrapping/unwrapping, CRUD request shapes,
//! non-2xx error raising, and the pagination protocol including its
//! termination rules.

use activecampaign_api::rest::{ApiClient, QueryParams, RestError};
use activecampaign_api::{ApiToken, BaseUrl, Config, HttpError};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointing at the given mock server.
fn create_test_client(server: &MockServer) -> ApiClient {
    let config = Config::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_token(ApiToken::new("test-token").unwrap())
        .known_list("SD: Marketing List", 43)
        .build()
        .unwrap();
    ApiClient::new(&config)
}

/// Builds one page of contact fixtures covering ids `start..end`.
fn contact_page(start: usize, end: usize, total: usize) -> Value {
    let contacts: Vec<Value> = (start..end)
        .map(|i| json!({"id": i.to_string(), "email": format!("user{i}@example.com")}))
        .collect();
    json!({"contacts": contacts, "meta": {"total": total}})
}

/// Mounts the three pages of a 250-contact collection.
async fn mount_three_pages(server: &MockServer) {
    for (offset, start, end) in [(0, 0, 100), (100, 100, 200), (200, 200, 250)] {
        Mock::given(method("GET"))
            .and(path("/contacts"))
            .and(query_param("limit", "100"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(contact_page(start, end, 250)),
            )
            .mount(server)
            .await;
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_pagination_walks_three_pages_in_order() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = create_test_client(&server);
    let items = client
        .list_resources("contacts", None, None, QueryParams::new())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(items.len(), 250);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item["id"], i.to_string());
    }
}

#[tokio::test]
async fn test_pagination_restarts_from_offset_zero() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = create_test_client(&server);

    let first = client
        .list_resources("contacts", None, None, QueryParams::new())
        .try_collect()
        .await
        .unwrap();
    let second = client
        .list_resources("contacts", None, None, QueryParams::new())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(first.len(), 250);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_pagination_is_lazy_until_first_pull() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_page(0, 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut pages = client.list_resources("contacts", None, None, QueryParams::new());

    // Constructing the cursor must not have hit the server yet; the first
    // pull does.
    let first = pages.try_next().await.unwrap();
    assert!(first.is_some());
}

#[tokio::test]
async fn test_pagination_without_meta_stops_after_single_page() {
    let server = MockServer::start().await;
    // Nested endpoint: items under the nested key, no meta at all. The
    // cursor must not request a second page.
    Mock::given(method("GET"))
        .and(path("/contacts/12/contactTags"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contactTags": [
                {"id": "1", "tag": "7", "contact": "12"},
                {"id": "2", "tag": "8", "contact": "12"},
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let items = client
        .list_resources("contacts", Some("12"), Some("contactTags"), QueryParams::new())
        .try_collect()
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["tag"], "7");
}

#[tokio::test]
async fn test_pagination_empty_collection_yields_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_page(0, 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let items = client
        .list_resources("contacts", None, None, QueryParams::new())
        .try_collect()
        .await
        .unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_pagination_overrides_caller_limit_and_offset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .and(query_param("email", "ada@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contact_page(0, 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut query = QueryParams::new();
    query.insert("email".to_string(), "ada@example.com".to_string());
    // Caller-supplied limit/offset are overwritten by the cursor.
    query.insert("limit".to_string(), "9999".to_string());
    query.insert("offset".to_string(), "7".to_string());

    let items = client
        .list_resources("contacts", None, None, query)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_pagination_missing_items_key_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let mut pages = client.list_resources("contacts", None, None, QueryParams::new());

    let result = pages.try_next().await;
    assert!(matches!(
        result,
        Err(RestError::MissingKey { key }) if key == "contacts"
    ));
}

// ============================================================================
// Single-Resource CRUD
// ============================================================================

#[tokio::test]
async fn test_get_resource_unwraps_singular_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag": {"id": "1", "tag": "vip", "tagType": "contact"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let tag = client.get_resource("tags", "1").await.unwrap();

    assert_eq!(tag["tag"], "vip");
    assert_eq!(tag["id"], "1");
}

#[tokio::test]
async fn test_create_resource_wraps_and_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tags"))
        .and(body_json(json!({
            "tag": {"tag": "vip", "tagType": "contact", "description": ""}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "tag": {"id": "9", "tag": "vip", "tagType": "contact", "description": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let created = client
        .create_resource(
            "tags",
            json!({"tag": "vip", "tagType": "contact", "description": ""}),
        )
        .await
        .unwrap();

    assert_eq!(created["id"], "9");
}

#[tokio::test]
async fn test_update_resource_puts_to_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/contacts/1"))
        .and(body_json(json!({"contact": {"email": "ada@example.org"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contact": {"id": "1", "email": "ada@example.org"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let updated = client
        .update_resource("contacts", "1", json!({"email": "ada@example.org"}))
        .await
        .unwrap();

    assert_eq!(updated["email"], "ada@example.org");
}

#[tokio::test]
async fn test_delete_resource_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/tags/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.delete_resource("tags", "9").await.unwrap();
}

// ============================================================================
// Error Raising
// ============================================================================

#[tokio::test]
async fn test_non_2xx_raises_with_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "No Result found for Contact with id 999"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.get_resource("contacts", "999").await;

    match result {
        Err(RestError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("No Result found"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_envelope_key_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.get_resource("tags", "1").await;

    assert!(matches!(
        result,
        Err(RestError::MissingKey { key }) if key == "tag"
    ));
}

// ============================================================================
// Known-List Table
// ============================================================================

#[tokio::test]
async fn test_list_id_resolves_registered_names() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);

    assert_eq!(client.list_id("SD: Marketing List"), Some(43));
    assert_eq!(client.list_id("Unknown"), None);
}
