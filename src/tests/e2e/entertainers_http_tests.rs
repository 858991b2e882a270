use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn runs_the_full_entertainer_lifecycle() {
    let (state, store) = make_test_state();
    let app = router(state);

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/entertainers",
            serde_json::json!({"entStageName": "Max", "entCity": "Seattle"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["entertainerId"].as_i64().unwrap();
    assert_eq!(id, 1);

    store
        .record_engagement(1, NaiveDate::from_ymd_opt(2023, 1, 10).unwrap())
        .await
        .unwrap();
    store
        .record_engagement(1, NaiveDate::from_ymd_opt(2023, 5, 20).unwrap())
        .await
        .unwrap();

    let (status, list) = send(&app, empty_request("GET", "/api/entertainers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["bookingCount"], 2);
    assert_eq!(list[0]["lastBookedDate"], "2023-05-20");

    let mut replacement = created.clone();
    replacement["entStageName"] = "Max & The Mavericks".into();
    let (status, _) = send(
        &app,
        json_request("PUT", "/api/entertainers/1", replacement),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, fetched) = send(&app, empty_request("GET", "/api/entertainers/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["entStageName"], "Max & The Mavericks");
    assert_eq!(fetched["dateEntered"], created["dateEntered"]);

    let (status, _) = send(&app, empty_request("DELETE", "/api/entertainers/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, empty_request("GET", "/api/entertainers/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, list) = send(&app, empty_request("GET", "/api/entertainers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, serde_json::json!([]));
}

#[tokio::test]
async fn answers_cors_preflight_requests() {
    let (state, _) = make_test_state();

    let response = router(state)
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/entertainers")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
