/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{fixtures, parse_json, TestApp, LANDING_MARKER};
use serde_json::json;
use stride_core::{
    storage::TrackerStore,
    types::{ExerciseDate, LogQuery, UserId},
};

/// Test GET / serves the landing page
#[tokio::test]
async fn test_landing_page() {
    let app = TestApp::new().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains(LANDING_MARKER));
}

/// Test static assets are served under /public
#[tokio::test]
async fn test_public_assets() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/public/style.css")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body { margin: 0; }");
}

/// Test the health check reads through to the store
#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 0);

    app.create_user("checked").await;
    let (_, body) = app.get_json("/api/health").await;
    assert_eq!(body["users"], 1);
}

/// Test the health check reports an unreachable store as 503
#[tokio::test]
async fn test_health_store_down() {
    let app = TestApp::new().await;
    app.storage.close().await;

    let (status, body) = app.get_json("/api/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Store unreachable");
}

/// Test GET /api/users on an empty store is an empty JSON array
#[tokio::test]
async fn test_list_users_empty() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

/// Test creating a user then listing includes it exactly once
#[tokio::test]
async fn test_create_then_list_user() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post_form("/api/users", &format!("username={}", fixtures::TEST_USERNAME))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["username"], fixtures::TEST_USERNAME);
    let id = created["_id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(created.as_object().unwrap().len(), 2);

    let (status, users) = app.get_json("/api/users").await;
    assert_eq!(status, StatusCode::OK);

    let matching: Vec<_> = users
        .as_array()
        .unwrap()
        .iter()
        .filter(|u| u["_id"] == id)
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["username"], fixtures::TEST_USERNAME);
}

/// Test JSON bodies are accepted as well as forms
#[tokio::test]
async fn test_create_user_json() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post_json("/api/users", &json!({ "username": "json_user" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["username"], "json_user");
}

/// Test duplicate usernames produce distinct users
#[tokio::test]
async fn test_duplicate_usernames_allowed() {
    let app = TestApp::new().await;

    let first = app.create_user("same").await;
    let second = app.create_user("same").await;
    assert_ne!(first, second);

    let (_, users) = app.get_json("/api/users").await;
    assert_eq!(users.as_array().unwrap().len(), 2);
}

/// Test a missing username field is rejected in the JSON envelope
#[tokio::test]
async fn test_create_user_missing_username() {
    let app = TestApp::new().await;

    let (status, body) = app.post_form("/api/users", "name=oops").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Test an unsupported body type is rejected
#[tokio::test]
async fn test_unsupported_content_type() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/api/users")
        .method("POST")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("username=x"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(parse_json(&body)["error"].is_string());
}

/// Test the documented end-to-end example
#[tokio::test]
async fn test_exercise_and_log_example() {
    let app = TestApp::new().await;
    let id = app.create_user(fixtures::TEST_USERNAME).await;

    let (status, exercise) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=test+run&duration=30&date=2023-01-15",
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        exercise,
        json!({
            "_id": id,
            "username": fixtures::TEST_USERNAME,
            "description": "test run",
            "duration": 30,
            "date": "Sun Jan 15 2023",
        })
    );

    let (status, log) = app
        .get_json(&format!("/api/users/{}/logs?limit=1", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        log,
        json!({
            "_id": id,
            "username": fixtures::TEST_USERNAME,
            "count": 1,
            "log": [
                { "description": "test run", "duration": 30, "date": "Sun Jan 15 2023" }
            ],
        })
    );
}

/// Test a JSON exercise body with a numeric duration
#[tokio::test]
async fn test_create_exercise_json() {
    let app = TestApp::new().await;
    let id = app.create_user("json_runner").await;

    let (status, exercise) = app
        .post_json(
            &format!("/api/users/{}/exercises", id),
            &json!({ "description": "swim", "duration": 45, "date": "2024-01-01" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(exercise["duration"], 45);
    assert_eq!(exercise["date"], "Mon Jan 01 2024");
}

/// Test omitting the date records today
#[tokio::test]
async fn test_create_exercise_defaults_to_today() {
    let app = TestApp::new().await;
    let id = app.create_user("today").await;

    let (status, exercise) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=walk&duration=10",
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exercise["date"], ExerciseDate::today().to_string());

    // A blank date field behaves the same
    let (status, exercise) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=walk&duration=10&date=",
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exercise["date"], ExerciseDate::today().to_string());
}

/// Test an exercise for an unknown user is a 404 and writes nothing
#[tokio::test]
async fn test_create_exercise_unknown_user() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_form(
            "/api/users/does-not-exist/exercises",
            "description=run&duration=5&date=2023-01-01",
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("does-not-exist"));

    let stored = app
        .storage
        .get_exercises(&UserId::new("does-not-exist"), &LogQuery::default())
        .await
        .unwrap();
    assert!(stored.is_empty());
}

/// Test an unparseable date is rejected instead of stored
#[tokio::test]
async fn test_create_exercise_invalid_date() {
    let app = TestApp::new().await;
    let id = app.create_user("bad_date").await;

    let (status, body) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=run&duration=5&date=not-a-date",
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid date"));

    let (_, log) = app.get_json(&format!("/api/users/{}/logs", id)).await;
    assert_eq!(log["count"], 0);
}

/// Test dates whose years need more than four digits are rejected, so
/// range filters never see them
#[tokio::test]
async fn test_create_exercise_out_of_range_year() {
    let app = TestApp::new().await;
    let id = app.create_user("time_traveller").await;
    app.add_exercise(&id, "run", 5, "2023-01-01").await;

    for date in ["%2B10000-01-01", "-0001-01-01"] {
        let (status, body) = app
            .post_form(
                &format!("/api/users/{}/exercises", id),
                &format!("description=run&duration=5&date={}", date),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "date {date:?}");
        assert!(body["error"].is_string());
    }

    let (status, _) = app
        .get_json(&format!("/api/users/{}/logs?to=%2B10000-01-01", id))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, log) = app
        .get_json(&format!("/api/users/{}/logs?from=2023-01-01", id))
        .await;
    assert_eq!(log["count"], 1);
    let (_, log) = app
        .get_json(&format!("/api/users/{}/logs?to=2022-12-31", id))
        .await;
    assert_eq!(log["count"], 0);
}

/// Test a store failure while recording an exercise is a 500
#[tokio::test]
async fn test_create_exercise_store_failure() {
    let app = TestApp::new().await;
    let id = app.create_user("unlucky").await;

    // The user still resolves; only the insert fails
    sqlx::query("DROP TABLE exercises")
        .execute(app.storage.pool())
        .await
        .unwrap();

    let (status, body) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=run&duration=5&date=2023-01-01",
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Persistence error");

    app.storage.close().await;
    let (status, body) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=run&duration=5",
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Persistence error");
}

/// Test a non-integer duration is rejected
#[tokio::test]
async fn test_create_exercise_invalid_duration() {
    let app = TestApp::new().await;
    let id = app.create_user("bad_duration").await;

    for form in [
        "description=run&duration=abc",
        "description=run&duration=",
        "description=run&duration=1.5",
        "description=run",
    ] {
        let (status, body) = app
            .post_form(&format!("/api/users/{}/exercises", id), form)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "form {form:?}");
        assert!(body["error"].is_string());
    }
}

/// Test logs with no query return everything, count matching length
#[tokio::test]
async fn test_logs_unfiltered() {
    let app = TestApp::new().await;
    let id = app.create_user("logger").await;

    app.add_exercise(&id, "c", 3, "2023-03-01").await;
    app.add_exercise(&id, "a", 1, "2023-01-01").await;
    app.add_exercise(&id, "b", 2, "2023-02-01").await;

    let (status, log) = app.get_json(&format!("/api/users/{}/logs", id)).await;
    assert_eq!(status, StatusCode::OK);

    let entries = log["log"].as_array().unwrap();
    assert_eq!(log["count"], entries.len());
    assert_eq!(entries.len(), 3);

    let descriptions: Vec<_> = entries
        .iter()
        .map(|e| e["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, ["a", "b", "c"]);
}

/// Test from/to are inclusive bounds
#[tokio::test]
async fn test_logs_date_range() {
    let app = TestApp::new().await;
    let id = app.create_user("ranger").await;

    for date in ["2023-01-09", "2023-01-10", "2023-01-15", "2023-01-20", "2023-01-21"] {
        app.add_exercise(&id, "run", 10, date).await;
    }

    let (status, log) = app
        .get_json(&format!(
            "/api/users/{}/logs?from=2023-01-10&to=2023-01-20",
            id
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let dates: Vec<_> = log["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["Tue Jan 10 2023", "Sun Jan 15 2023", "Fri Jan 20 2023"]);
    assert_eq!(log["count"], 3);

    let (_, log) = app
        .get_json(&format!("/api/users/{}/logs?from=2023-01-16", id))
        .await;
    assert_eq!(log["count"], 2);

    let (_, log) = app
        .get_json(&format!("/api/users/{}/logs?to=2023-01-10", id))
        .await;
    assert_eq!(log["count"], 2);
}

/// Test limit caps the log; non-numeric limits fall back to the default
#[tokio::test]
async fn test_logs_limit() {
    let app = TestApp::new().await;
    let id = app.create_user("limited").await;

    for date in ["2023-01-01", "2023-01-02", "2023-01-03"] {
        app.add_exercise(&id, "run", 10, date).await;
    }

    let (_, log) = app
        .get_json(&format!("/api/users/{}/logs?limit=2", id))
        .await;
    assert_eq!(log["count"], 2);
    assert_eq!(log["log"].as_array().unwrap().len(), 2);

    let (status, log) = app
        .get_json(&format!("/api/users/{}/logs?limit=lots", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(log["count"], 3);
}

/// Test invalid range bounds are rejected
#[tokio::test]
async fn test_logs_invalid_range() {
    let app = TestApp::new().await;
    let id = app.create_user("confused").await;

    let (status, body) = app
        .get_json(&format!("/api/users/{}/logs?from=yesterday", id))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Test malformed query strings use the JSON error envelope
#[tokio::test]
async fn test_logs_duplicate_query_key() {
    let app = TestApp::new().await;
    let id = app.create_user("twice").await;

    let (status, body) = app
        .get_json(&format!("/api/users/{}/logs?limit=1&limit=2", id))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

/// Test logs for an unknown user use the JSON error envelope
#[tokio::test]
async fn test_logs_unknown_user() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/api/users/nobody/logs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nobody"));
}

/// Test unknown routes use the JSON error envelope
#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let (status, body) = app.get_json("/api/nothing-here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

/// Test a store failure surfaces as a 500 without leaking details
#[tokio::test]
async fn test_store_failure_is_500() {
    let app = TestApp::new().await;
    app.storage.close().await;

    let (status, body) = app.get_json("/api/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Persistence error");
}

/// Test entries written through the API are visible to the store directly
#[tokio::test]
async fn test_api_writes_reach_store() {
    let app = TestApp::new().await;
    let id = app.create_user("direct").await;
    app.add_exercise(&id, "row", 25, "2023-07-04").await;

    let users = app.storage.list_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id.as_str(), id);
}
