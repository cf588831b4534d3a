// Integration tests for Pilgrim Stays

use actix_web::{test, web, App};
use mockito::Matcher;
use pilgrim_stays::core::{CatalogStore, SubmissionOutcome, ContactFormError};
use pilgrim_stays::models::ContactMessage;
use pilgrim_stays::routes::{configure_routes, AppState};
use pilgrim_stays::services::{ContactFormClient, FormRelayClient, StaticAccessKey};
use serde_json::{json, Value};
use std::sync::Arc;

// Nothing listens on the discard port
const CLOSED_ENDPOINT: &str = "http://127.0.0.1:9/submit";

fn create_state(endpoint: String, access_key: Option<&str>) -> AppState {
    let relay = FormRelayClient::new(
        endpoint,
        Box::new(StaticAccessKey(access_key.map(str::to_string))),
        5,
    )
    .unwrap();

    AppState {
        catalog: Arc::new(CatalogStore::load("data/hotels.json").unwrap()),
        relay: Arc::new(relay),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

fn contact_body() -> Value {
    json!({
        "name": "Asha",
        "email": "asha@example.com",
        "message": "Do you have rooms near the temple in December?"
    })
}

#[actix_web::test]
async fn test_form_rejects_non_post_methods() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), Some("test-key")));

    for req in [
        test::TestRequest::get().uri("/api/form").to_request(),
        test::TestRequest::get().uri("/api/form").set_json(contact_body()).to_request(),
        test::TestRequest::put().uri("/api/form").set_json(contact_body()).to_request(),
        test::TestRequest::delete().uri("/api/form").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 405);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Method Not Allowed"}));
    }
}

#[actix_web::test]
async fn test_form_without_access_key_never_calls_upstream() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server
        .mock("POST", "/submit")
        .expect(0)
        .create_async()
        .await;

    let app = init_app!(create_state(format!("{}/submit", server.url()), None));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(contact_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Missing access key"}));

    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_form_blank_access_key_counts_as_missing() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), Some("")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(contact_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
}

#[actix_web::test]
async fn test_form_relays_upstream_success() {
    let mut server = mockito::Server::new_async().await;
    let upstream_body = r#"{"success":true,"message":"Email sent successfully!","data":{"name":"Asha"}}"#;
    let upstream = server
        .mock("POST", "/submit")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "access_key": "test-key",
            "from_name": "Asha",
            "name": "Asha",
            "email": "asha@example.com",
            "message": "Do you have rooms near the temple in December?",
            "subject": "New message from Asha"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(upstream_body)
        .create_async()
        .await;

    let app = init_app!(create_state(format!("{}/submit", server.url()), Some("test-key")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(contact_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), upstream_body.as_bytes());

    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_form_relays_upstream_failure_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let upstream_body = r#"{"success":false,"message":"Invalid access key"}"#;
    server
        .mock("POST", "/submit")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(upstream_body)
        .create_async()
        .await;

    let app = init_app!(create_state(format!("{}/submit", server.url()), Some("wrong-key")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(contact_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 403);
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), upstream_body.as_bytes());
}

#[actix_web::test]
async fn test_form_relays_non_json_upstream_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/submit")
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let app = init_app!(create_state(format!("{}/submit", server.url()), Some("test-key")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(contact_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 503);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(content_type.as_deref(), Some("text/html"));
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"<html>maintenance</html>");
}

#[actix_web::test]
async fn test_form_unreachable_upstream_is_bad_gateway() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), Some("test-key")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(contact_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 502);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Upstream request failed"}));
}

#[actix_web::test]
async fn test_form_rejects_malformed_json() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), Some("test-key")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_form_rejects_non_string_fields() {
    let mut server = mockito::Server::new_async().await;
    let upstream = server.mock("POST", "/submit").expect(0).create_async().await;
    let app = init_app!(create_state(format!("{}/submit", server.url()), Some("test-key")));

    let req = test::TestRequest::post()
        .uri("/api/form")
        .set_json(json!({"name": 42, "email": "asha@example.com", "message": "Hi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));
    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_hotel_listing_without_query_shows_whole_catalog() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get().uri("/api/hotels").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<u64> = body["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|h| h["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(body["hotels"][7]["price"], "₹24,000");

    // Any filter control brings the default price cap back
    let req = test::TestRequest::get().uri("/api/hotels?city=varanasi").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<u64> = body["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|h| h["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1]);
}

#[actix_web::test]
async fn test_hotel_listing_blank_numbers_use_defaults() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get()
        .uri("/api/hotels?minPrice=&maxPrice=0&rating=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["kind"], "hotels");
    assert_eq!(body["hotels"].as_array().map(Vec::len), Some(7));
}

#[actix_web::test]
async fn test_hotel_listing_malformed_query() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get()
        .uri("/api/hotels?city=puri&city=dwarka")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid query"));
}

#[actix_web::test]
async fn test_hotel_listing_filters() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get()
        .uri("/api/hotels?city=PURI&category=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["kind"], "hotels");
    assert_eq!(body["hotels"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["hotels"][0]["name"], "Sri Jagannath Dharamshala");
    assert_eq!(body["hotels"][0]["priceUnit"], "per person");

    let req = test::TestRequest::get()
        .uri("/api/hotels?amenities=wifi,restaurant&rating=4.5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<u64> = body["hotels"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|h| h["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![5, 7]);
}

#[actix_web::test]
async fn test_hotel_listing_empty_state() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get()
        .uri("/api/hotels?city=kathmandu")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "kind": "empty",
            "message": "No hotels match your filters. Please try different criteria."
        })
    );
}

#[actix_web::test]
async fn test_hotel_listing_rejects_unknown_category() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get()
        .uri("/api/hotels?category=castle")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_hotel_lookup() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get().uri("/api/hotels/3").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Tirumala Grand");
    assert_eq!(body["category"], "luxury");

    let req = test::TestRequest::get().uri("/api/hotels/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!(create_state(CLOSED_ENDPOINT.to_string(), None));

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["hotels"], 8);
}

#[tokio::test]
async fn test_contact_client_success_contract() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/form")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"Email sent successfully!"}"#)
        .create_async()
        .await;

    let client = ContactFormClient::new(format!("{}/api/form", server.url()), 5).unwrap();
    let outcome = client
        .submit(&ContactMessage::new("Asha", "asha@example.com", "Hello"))
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Sent);
    assert_eq!(outcome.notice(), "Message sent successfully!");
}

#[tokio::test]
async fn test_contact_client_2xx_without_flag_is_not_success() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/form")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Spam detected"}"#)
        .create_async()
        .await;

    let client = ContactFormClient::new(format!("{}/api/form", server.url()), 5).unwrap();
    let outcome = client
        .submit(&ContactMessage::new("Asha", "asha@example.com", "Hello"))
        .await
        .unwrap();

    assert_eq!(outcome.notice(), "Error: Spam detected");
}

#[tokio::test]
async fn test_contact_client_relay_error_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/form")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Missing access key"}"#)
        .create_async()
        .await;

    let client = ContactFormClient::new(format!("{}/api/form", server.url()), 5).unwrap();
    let outcome = client
        .submit(&ContactMessage::new("Asha", "asha@example.com", "Hello"))
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::Rejected("Missing access key".to_string()));
}

#[tokio::test]
async fn test_contact_client_network_error() {
    let client = ContactFormClient::new("http://127.0.0.1:9/api/form", 5).unwrap();
    let outcome = client
        .submit(&ContactMessage::new("Asha", "asha@example.com", "Hello"))
        .await
        .unwrap();

    assert_eq!(outcome, SubmissionOutcome::NetworkError);
}

#[tokio::test]
async fn test_contact_client_validates_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let relay = server
        .mock("POST", "/api/form")
        .expect(0)
        .create_async()
        .await;

    let client = ContactFormClient::new(format!("{}/api/form", server.url()), 5).unwrap();
    let result = client
        .submit(&ContactMessage::new("Asha", "not-an-email", "Hello"))
        .await;

    assert_eq!(result, Err(ContactFormError::InvalidEmail));
    relay.assert_async().await;
}
