//! End-to-end tests over the full router
//!
//! Requests are driven through the router in memory with
//! `tower::ServiceExt::oneshot`, over a `MemoryStore`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use domain_case::JudicialLevel;
use infra_store::MemoryStore;
use interface_api::{config::ApiConfig, create_router};
use test_utils::{case_payload, client_payload, legal_text_payload};

fn app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let router = create_router(store.clone(), ApiConfig::default());
    (store, router)
}

fn request(method: Method, uri: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, req: Request<Body>) -> Response {
    router.clone().oneshot(req).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_client(router: &Router) -> Value {
    let response = send(
        router,
        request(Method::POST, "/api/clients", Some(&client_payload())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn post_client_returns_201_with_id_and_echoed_fields() {
    let (_, router) = app();
    let created = create_client(&router).await;

    assert!(created["id"].is_string());
    assert_eq!(created["firstName"], "علي");
    assert_eq!(created["lastName"], "بن يوسف");
    assert_eq!(created["phoneNumber"], "0555000000");
    assert_eq!(created["createdAt"], created["updatedAt"]);
}

#[tokio::test]
async fn post_client_with_missing_fields_is_rejected_and_not_stored() {
    let (store, router) = app();
    let response = send(
        &router,
        request(Method::POST, "/api/clients", Some(&json!({"firstName": "علي"}))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "جميع الحقول المطلوبة يجب أن تكون مملوءة");
    let details = body["details"].as_array().unwrap();
    assert!(details.contains(&json!("lastName")));
    assert!(details.contains(&json!("phoneNumber")));

    assert!(store.snapshot().await.clients.is_empty());
}

#[tokio::test]
async fn get_unknown_client_is_404_with_localized_message() {
    let (_, router) = app();
    let response = send(
        &router,
        request(
            Method::GET,
            &format!("/api/clients/{}", uuid::Uuid::new_v4()),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "الموكل غير موجود");
}

#[tokio::test]
async fn put_client_merges_partial_fields() {
    let (_, router) = app();
    let created = create_client(&router).await;
    let id = created["id"].as_str().unwrap();

    let response = send(
        &router,
        request(
            Method::PUT,
            &format!("/api/clients/{id}"),
            Some(&json!({"phoneNumber": "0777000000"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["phoneNumber"], "0777000000");
    assert_eq!(updated["firstName"], "علي");
}

#[tokio::test]
async fn delete_client_cascades_to_its_cases() {
    let (_, router) = app();
    let created = create_client(&router).await;
    let id = created["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = send(
            &router,
            request(Method::POST, "/api/cases", Some(&case_payload(&id))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(
        &router,
        request(Method::DELETE, &format!("/api/clients/{id}"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let clients = body_json(send(&router, request(Method::GET, "/api/clients", None)).await).await;
    assert_eq!(clients.as_array().unwrap().len(), 0);
    let cases = body_json(send(&router, request(Method::GET, "/api/cases", None)).await).await;
    assert_eq!(cases.as_array().unwrap().len(), 0);

    // Deleting again reports the client as gone.
    let response = send(
        &router,
        request(Method::DELETE, &format!("/api/clients/{id}"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_case_missing_fields_is_rejected() {
    let (_, router) = app();
    let response = send(
        &router,
        request(Method::POST, "/api/cases", Some(&json!({"subject": "نزاع"}))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let details = body["details"].as_array().unwrap();
    assert!(details.contains(&json!("clientId")));
    assert!(details.contains(&json!("level")));
}

#[tokio::test]
async fn post_case_for_unknown_client_is_rejected() {
    let (_, router) = app();
    let response = send(
        &router,
        request(
            Method::POST,
            "/api/cases",
            Some(&case_payload(uuid::Uuid::new_v4())),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["details"], json!(["clientId"]));
}

#[tokio::test]
async fn moving_a_case_to_the_council_of_state_forces_its_seat() {
    let (_, router) = app();
    let created = create_client(&router).await;
    let client_id = created["id"].as_str().unwrap().to_string();

    let response = send(
        &router,
        request(Method::POST, "/api/cases", Some(&case_payload(&client_id))),
    )
    .await;
    let case = body_json(response).await;
    assert_eq!(case["wilaya"], "الجلفة");
    let case_id = case["id"].as_str().unwrap();

    let response = send(
        &router,
        request(
            Method::PUT,
            &format!("/api/cases/{case_id}"),
            Some(&json!({"level": JudicialLevel::CouncilOfState})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["wilaya"], "الجزائر");
    assert_eq!(updated["court"], JudicialLevel::CouncilOfState.label());
    assert_eq!(updated["section"], "القسم المدني");
}

#[tokio::test]
async fn legal_texts_round_trip() {
    let (_, router) = app();
    let response = send(
        &router,
        request(Method::POST, "/api/legal-texts", Some(&legal_text_payload())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let fetched = body_json(
        send(
            &router,
            request(Method::GET, &format!("/api/legal-texts/{id}"), None),
        )
        .await,
    )
    .await;
    assert_eq!(fetched, created);

    let response = send(
        &router,
        request(Method::DELETE, &format!("/api/legal-texts/{id}"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn audit_trail_is_served_newest_first() {
    let (_, router) = app();
    let created = create_client(&router).await;
    let id = created["id"].as_str().unwrap().to_string();
    send(
        &router,
        request(Method::DELETE, &format!("/api/clients/{id}"), None),
    )
    .await;

    let trail = body_json(send(&router, request(Method::GET, "/api/audit-logs", None)).await).await;
    let entries = trail.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["action"], "delete");
    assert_eq!(entries[1]["action"], "create");
    assert_eq!(entries[0]["entityType"], "client");
    assert_eq!(entries[0]["entityId"], id);
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let (_, router) = app();
    let response = send(&router, request(Method::GET, "/api/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn stats_reflect_cascade_deletes() {
    let (_, router) = app();
    let created = create_client(&router).await;
    let id = created["id"].as_str().unwrap().to_string();
    send(
        &router,
        request(Method::POST, "/api/cases", Some(&case_payload(&id))),
    )
    .await;

    let stats = body_json(send(&router, request(Method::GET, "/api/stats", None)).await).await;
    assert_eq!(stats, json!({"totalClients": 1, "totalCases": 1, "clientsWithCases": 1}));

    send(
        &router,
        request(Method::DELETE, &format!("/api/clients/{id}"), None),
    )
    .await;

    let stats = body_json(send(&router, request(Method::GET, "/api/stats", None)).await).await;
    assert_eq!(stats, json!({"totalClients": 0, "totalCases": 0, "clientsWithCases": 0}));
}

#[tokio::test]
async fn unknown_route_is_404_with_localized_message() {
    let (_, router) = app();
    let response = send(&router, request(Method::GET, "/api/nope", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "المسار غير موجود");
}

#[tokio::test]
async fn storage_failure_is_a_500_with_generic_message() {
    let (store, router) = app();
    store.set_fail_writes(true);

    let response = send(
        &router,
        request(Method::POST, "/api/clients", Some(&client_payload())),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "internal_error");
    assert_eq!(body["message"], "خطأ في الخادم");
}
