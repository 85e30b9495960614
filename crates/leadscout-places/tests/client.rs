//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use leadscout_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 10, "test-agent/1.0", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn text_search_returns_summaries_and_token() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "pid-1",
                "name": "Iron Works Gym",
                "rating": 4.2,
                "user_ratings_total": 87
            },
            {
                "place_id": "pid-2",
                "name": "Sunrise Fitness"
            }
        ],
        "next_page_token": "tok_next"
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "gym in San Diego, CA"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .text_search("gym", "San Diego, CA", 20, None)
        .await
        .expect("should parse search page");

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].place_id, "pid-1");
    assert_eq!(page.results[0].rating, Some(4.2));
    assert_eq!(page.results[0].user_ratings_total, 87);
    // Missing rating/count stay unknown/zero rather than failing the page.
    assert_eq!(page.results[1].rating, None);
    assert_eq!(page.results[1].user_ratings_total, 0);
    assert_eq!(page.next_page_token.as_deref(), Some("tok_next"));
}

#[tokio::test]
async fn text_search_truncates_to_page_size() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            { "place_id": "pid-1", "name": "One" },
            { "place_id": "pid-2", "name": "Two" },
            { "place_id": "pid-3", "name": "Three" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .text_search("gym", "San Diego, CA", 2, None)
        .await
        .expect("should parse search page");

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].place_id, "pid-2");
}

#[tokio::test]
async fn text_search_passes_continuation_token() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            { "place_id": "pid-3", "name": "Last One", "rating": 3.0, "user_ratings_total": 5 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("pagetoken", "tok_next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .text_search("gym", "San Diego, CA", 20, Some("tok_next"))
        .await
        .expect("should parse continuation page");

    assert_eq!(page.results.len(), 1);
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn text_search_zero_results_is_empty_page() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .text_search("unicorn groomer", "Nowhere, KS", 20, None)
        .await
        .expect("zero results should not be an error");

    assert!(page.results.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn text_search_api_error_status_returns_err() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OVER_QUERY_LIMIT",
        "error_message": "You have exceeded your daily request quota."
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.text_search("gym", "San Diego, CA", 20, None).await;

    let err = result.expect_err("non-OK status must error");
    assert!(
        matches!(err, PlacesError::Api { ref status, .. } if status == "OVER_QUERY_LIMIT"),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn place_details_returns_profile_with_reviews() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Iron Works Gym",
            "website": "https://ironworksgym.example.com",
            "formatted_address": "123 Main St, San Diego, CA",
            "rating": 4.1,
            "user_ratings_total": 92,
            "reviews": [
                { "text": "Great trainers, clean equipment." },
                { "text": "Terrible parking and rude front desk." }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "pid-1"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let details = client
        .place_details("pid-1")
        .await
        .expect("should parse details")
        .expect("details should be present");

    assert_eq!(details.name.as_deref(), Some("Iron Works Gym"));
    assert_eq!(
        details.website.as_deref(),
        Some("https://ironworksgym.example.com")
    );
    assert_eq!(details.rating, Some(4.1));
    assert_eq!(details.user_ratings_total, Some(92));
    assert_eq!(details.reviews.len(), 2);
    assert!(details.reviews[0].text.contains("Great trainers"));
}

#[tokio::test]
async fn place_details_not_found_yields_none() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "NOT_FOUND" });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let details = client
        .place_details("gone-pid")
        .await
        .expect("NOT_FOUND should not be an error");

    assert!(details.is_none());
}

#[tokio::test]
async fn place_details_http_failure_returns_err() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.place_details("pid-1").await;

    assert!(
        matches!(result, Err(PlacesError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}
