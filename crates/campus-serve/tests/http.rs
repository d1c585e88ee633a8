use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use campus_serve::{app, AppState, DemoStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn demo_app() -> Router {
    app(AppState {
        provider: DemoStore::new(),
    })
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn helpdesk_lifecycle_over_http() {
    let router = demo_app();

    let (status, created) = send(
        &router,
        "POST",
        "/api/helpdesk/requests",
        Some(json!({
            "createdBy": "student-1",
            "assigneeType": "institution",
            "institutionSlug": "tu-berlin",
            "category": "administration",
            "title": "Lost my card"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["timeline"], json!([]));
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("req_"));

    let (status, responded) = send(
        &router,
        "PUT",
        &format!("/api/helpdesk/requests/{id}/status"),
        Some(json!({
            "status": "accepted",
            "note": "Will call Monday",
            "respondedBy": "Jane Doe"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(responded["status"], "accepted");
    assert_eq!(responded["timeline"].as_array().unwrap().len(), 1);
    assert_eq!(responded["timeline"][0]["note"], "Will call Monday");
    assert_eq!(responded["timeline"][0]["by"], "Jane Doe");

    let (status, listed) = send(
        &router,
        "GET",
        "/api/helpdesk/requests?institutionSlug=tu-berlin",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(&router, "GET", "/api/helpdesk/requests?institutionSlug=other", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn demo_state_survives_across_requests() {
    let router = demo_app();

    for title in ["One", "Two"] {
        let (status, _) = send(
            &router,
            "POST",
            "/api/helpdesk/requests",
            Some(json!({
                "createdBy": "student-1",
                "assigneeType": "institution",
                "category": "other",
                "title": title
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listed) = send(&router, "GET", "/api/helpdesk/requests", None).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Two", "One"]);
}

#[tokio::test]
async fn respond_to_unknown_request_is_404() {
    let router = demo_app();
    let (status, body) = send(
        &router,
        "PUT",
        "/api/helpdesk/requests/req_01J0000000000000000000000Z/status",
        Some(json!({ "status": "accepted" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert!(body["correlationId"].as_str().unwrap().starts_with("corr_"));
}

#[tokio::test]
async fn malformed_id_is_400() {
    let router = demo_app();
    let (status, body) = send(&router, "GET", "/api/helpdesk/requests/nonsense", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_input");
}

#[tokio::test]
async fn blank_title_is_rejected_with_400() {
    let router = demo_app();
    let (status, body) = send(
        &router,
        "POST",
        "/api/helpdesk/requests",
        Some(json!({
            "createdBy": "student-1",
            "assigneeType": "institution",
            "category": "other",
            "title": "   "
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_input");
}

#[tokio::test]
async fn correlation_id_is_echoed() {
    let router = demo_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/helpdesk/consultation-slots")
        .header("x-correlation-id", "corr_test_123")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-correlation-id").unwrap(),
        "corr_test_123"
    );
}

#[tokio::test]
async fn correlation_id_is_minted_when_absent() {
    let router = demo_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/helpdesk/consultation-slots")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let echoed = response
        .headers()
        .get("x-correlation-id")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(echoed.starts_with("corr_"));
}

#[tokio::test]
async fn duplicate_vote_is_409() {
    let router = demo_app();

    let (status, poll) = send(
        &router,
        "POST",
        "/api/polls",
        Some(json!({
            "title": "Move the lecture?",
            "options": [
                { "id": "opt-1", "label": "Yes" },
                { "id": "opt-2", "label": "No" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let poll_id = poll["id"].as_str().unwrap().to_string();

    let vote = json!({ "studentId": "student-1", "optionId": "opt-1" });
    let (status, _) = send(
        &router,
        "POST",
        &format!("/api/polls/{poll_id}/vote"),
        Some(vote.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &router,
        "POST",
        &format!("/api/polls/{poll_id}/vote"),
        Some(vote),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");

    let (status, with_responses) =
        send(&router, "GET", &format!("/api/polls/{poll_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_responses["responses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn course_items_crud_over_http() {
    let router = demo_app();

    let (status, course) = send(
        &router,
        "POST",
        "/api/resources/courses",
        Some(json!({ "name": "Databases", "code": "DB101" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let course_id = course["id"].as_str().unwrap().to_string();

    let (status, item) = send(
        &router,
        "POST",
        &format!("/api/resources/courses/{course_id}/items"),
        Some(json!({
            "title": "Week 1 slides",
            "kind": "slides",
            "url": "https://example.com/w1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["kind"], "slides");

    let (status, _) = send(
        &router,
        "DELETE",
        &format!("/api/resources/courses/{course_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &router,
        "GET",
        &format!("/api/resources/courses/{course_id}/items"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let router = demo_app();
    let (status, doc) = send(&router, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/helpdesk/requests"].is_object());
    assert!(doc["paths"]["/api/helpdesk/requests/{id}/status"].is_object());
}
