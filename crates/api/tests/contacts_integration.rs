//! Integration tests for contact endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_contact, create_test_app, empty_request, json_request, parse_response_body,
    raw_request, send, TestContact,
};
use serde_json::json;

#[tokio::test]
async fn test_create_then_get_contact() {
    let app = create_test_app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/contacts",
            json!({"name": "Ana", "email": "ana@x.com"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"message": "Contact added", "id": 1}));

    let response = send(&app, empty_request(Method::GET, "/contacts/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@x.com");
    assert!(body["phone"].is_null());
    assert!(body["company"].is_null());
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_created_contact_round_trips_all_fields() {
    let app = create_test_app();
    let contact = TestContact::new().with_phone("555-0100").with_company();
    let id = create_contact(&app, &contact).await;

    let response = send(&app, empty_request(Method::GET, &format!("/contacts/{}", id))).await;
    let body = parse_response_body(response).await;

    assert_eq!(body["name"], contact.name.as_str());
    assert_eq!(body["email"], contact.email.as_str());
    assert_eq!(body["phone"], "555-0100");
    assert_eq!(body["company"], contact.company.unwrap().as_str());
}

#[tokio::test]
async fn test_list_contacts() {
    let app = create_test_app();

    let response = send(&app, empty_request(Method::GET, "/contacts")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!([]));

    let first = create_contact(&app, &TestContact::new()).await;
    let second = create_contact(&app, &TestContact::new()).await;

    let response = send(&app, empty_request(Method::GET, "/contacts")).await;
    let body = parse_response_body(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_get_unknown_contact() {
    let app = create_test_app();

    for uri in ["/contacts/999", "/contacts/abc"] {
        let response = send(&app, empty_request(Method::GET, uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_response_body(response).await;
        assert_eq!(body, json!({"error": "Contact not found"}));
    }
}

#[tokio::test]
async fn test_create_contact_without_input() {
    let app = create_test_app();

    let requests = [
        json_request(Method::POST, "/contacts", json!({})),
        raw_request(Method::POST, "/contacts", Some("application/json"), ""),
        raw_request(Method::POST, "/contacts", Some("application/json"), "not json"),
        raw_request(Method::POST, "/contacts", None, r#"{"name":"Ana","email":"a@x.com"}"#),
        raw_request(Method::POST, "/contacts", Some("application/json"), "[1, 2]"),
    ];

    for request in requests {
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_response_body(response).await;
        assert_eq!(body, json!({"error": "No input data provided"}));
    }
}

#[tokio::test]
async fn test_create_contact_missing_fields() {
    let app = create_test_app();

    let payloads = [
        json!({"name": "Ana"}),
        json!({"email": "ana@x.com"}),
        json!({"name": "", "email": "ana@x.com"}),
        json!({"name": "Ana", "email": null}),
        json!({"nickname": "A"}),
    ];

    for payload in payloads {
        let response = send(&app, json_request(Method::POST, "/contacts", payload)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_response_body(response).await;
        assert_eq!(body, json!({"error": "Name and email are required"}));
    }
}

#[tokio::test]
async fn test_create_contact_field_too_long() {
    let app = create_test_app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/contacts",
            json!({"name": "Ana", "email": "ana@x.com", "phone": "1".repeat(21)}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Phone must be at most 20 characters");
}

#[tokio::test]
async fn test_create_contact_duplicate_email() {
    let app = create_test_app();
    create_contact(&app, &TestContact {
        email: "ana@x.com".to_string(),
        ..TestContact::new()
    })
    .await;

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/contacts",
            json!({"name": "Someone Else", "email": "ana@x.com", "company": "Other"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "Email already exists"}));
}

#[tokio::test]
async fn test_update_contact_partial() {
    let app = create_test_app();
    let contact = TestContact::new().with_company();
    let id = create_contact(&app, &contact).await;
    let uri = format!("/contacts/{}", id);

    let response = send(&app, json_request(Method::PUT, &uri, json!({"phone": "555"}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"message": "Contact updated"}));

    let body = parse_response_body(send(&app, empty_request(Method::GET, &uri)).await).await;
    assert_eq!(body["phone"], "555");
    assert_eq!(body["name"], contact.name.as_str());
    assert_eq!(body["email"], contact.email.as_str());
    assert_eq!(body["company"], contact.company.unwrap().as_str());
}

#[tokio::test]
async fn test_update_contact_can_clear_optional_field() {
    let app = create_test_app();
    let id = create_contact(&app, &TestContact::new().with_phone("555")).await;
    let uri = format!("/contacts/{}", id);

    let response = send(&app, json_request(Method::PUT, &uri, json!({"phone": null}))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(send(&app, empty_request(Method::GET, &uri)).await).await;
    assert!(body["phone"].is_null());
}

#[tokio::test]
async fn test_update_contact_with_empty_object_is_noop() {
    let app = create_test_app();
    let contact = TestContact::new();
    let id = create_contact(&app, &contact).await;
    let uri = format!("/contacts/{}", id);

    let response = send(&app, json_request(Method::PUT, &uri, json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(send(&app, empty_request(Method::GET, &uri)).await).await;
    assert_eq!(body["name"], contact.name.as_str());
}

#[tokio::test]
async fn test_update_contact_rejects_empty_name() {
    let app = create_test_app();
    let id = create_contact(&app, &TestContact::new()).await;

    let response = send(
        &app,
        json_request(Method::PUT, &format!("/contacts/{}", id), json!({"name": ""})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Name and email cannot be empty");
}

#[tokio::test]
async fn test_update_contact_duplicate_email() {
    let app = create_test_app();
    let taken = TestContact::new();
    create_contact(&app, &taken).await;
    let id = create_contact(&app, &TestContact::new()).await;

    let response = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/contacts/{}", id),
            json!({"email": taken.email}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "Email already exists"}));
}

#[tokio::test]
async fn test_update_unknown_contact() {
    let app = create_test_app();

    let response = send(
        &app,
        json_request(Method::PUT, "/contacts/42", json!({"phone": "555"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "Contact not found"}));
}

#[tokio::test]
async fn test_update_unknown_contact_without_body() {
    let app = create_test_app();

    let response = send(&app, empty_request(Method::PUT, "/contacts/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "Contact not found"}));

    let response = send(
        &app,
        raw_request(Method::PUT, "/contacts/999", Some("text/plain"), "phone=555"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_existing_contact_without_body() {
    let app = create_test_app();
    let id = create_contact(&app, &TestContact::new()).await;

    let response = send(&app, empty_request(Method::PUT, &format!("/contacts/{}", id))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "No input data provided"}));
}

#[tokio::test]
async fn test_wrong_field_type_hides_decoder_detail() {
    let app = create_test_app();
    let id = create_contact(&app, &TestContact::new()).await;

    let response = send(
        &app,
        json_request(Method::PUT, &format!("/contacts/{}", id), json!({"phone": 555})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "Invalid input"}));
}

#[tokio::test]
async fn test_delete_contact() {
    let app = create_test_app();
    let id = create_contact(&app, &TestContact::new()).await;
    let uri = format!("/contacts/{}", id);

    let response = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"message": "Contact deleted"}));

    let response = send(&app, empty_request(Method::GET, &uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_response_body(response).await;
    assert_eq!(body, json!({"error": "Contact not found"}));
}

#[tokio::test]
async fn test_deleted_email_can_be_reused() {
    let app = create_test_app();
    let contact = TestContact::new();
    let id = create_contact(&app, &contact).await;

    send(&app, empty_request(Method::DELETE, &format!("/contacts/{}", id))).await;

    let new_id = create_contact(&app, &contact).await;
    assert_ne!(new_id, id);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/contacts")
        .header("Origin", "http://example.com")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
