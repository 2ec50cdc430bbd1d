// End to end scenario against the full router with the production seed.

use crate::modules::users::adapters::outbound::user_store_in_memory::InMemoryUserStore;
use crate::shell::config::ServerConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::http::read_json;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn seeded_app() -> Router {
    let store = Arc::new(InMemoryUserStore::with_users(ServerConfig::default().seed));
    router(AppState::new(store))
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: &'static str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, content_type, json) = read_json(response).await;
    assert_eq!(content_type.as_deref(), Some("application/json"));
    (status, json)
}

#[tokio::test]
async fn it_should_walk_through_get_create_list_delete() {
    let app = seeded_app();

    let (status, json) = call(&app, Method::GET, "/users/1", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "id": "1", "name": "Charles" }));

    let (status, json) = call(&app, Method::POST, "/users", r#"{"id":"2","name":"Ada"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "id": "2", "name": "Ada" }));

    let (status, json) = call(&app, Method::GET, "/users", "").await;
    assert_eq!(status, StatusCode::OK);
    let mut users = json.as_array().cloned().unwrap();
    users.sort_by_key(|u| u["id"].as_str().unwrap().to_string());
    assert_eq!(
        users,
        vec![
            json!({ "id": "1", "name": "Charles" }),
            json!({ "id": "2", "name": "Ada" }),
        ]
    );

    let (status, json) = call(&app, Method::DELETE, "/users/2", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "id": "2", "name": "Ada" }));

    let (status, json) = call(&app, Method::GET, "/users/2", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "not found" }));
}

#[tokio::test]
async fn it_should_reject_a_non_json_create() {
    let app = seeded_app();
    let (status, json) = call(&app, Method::POST, "/users", "not-json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({ "error": "bad request" }));

    let (_, json) = call(&app, Method::GET, "/users", "").await;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn it_should_treat_a_non_numeric_id_as_absent() {
    let app = seeded_app();
    let (status, json) = call(&app, Method::GET, "/users/abc", "").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "not found" }));
}

#[tokio::test]
async fn it_should_replace_on_create_with_an_existing_id() {
    let app = seeded_app();
    let (status, _) = call(
        &app,
        Method::POST,
        "/users/",
        r#"{"id":"1","name":"Charlie"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = call(&app, Method::GET, "/users", "").await;
    assert_eq!(json, json!([{ "id": "1", "name": "Charlie" }]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn it_should_serve_concurrent_requests_on_disjoint_ids() {
    let app = seeded_app();
    let mut tasks = Vec::new();
    for n in 100..132u32 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            let body = format!(r#"{{"id":"{n}","name":"user-{n}"}}"#);
            let response = app
                .clone()
                .oneshot(Request::post("/users").body(Body::from(body)).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let response = app
                .clone()
                .oneshot(
                    Request::get(format!("/users/{n}"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            if n % 2 == 0 {
                let response = app
                    .oneshot(
                        Request::delete(format!("/users/{n}"))
                            .body(Body::empty())
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let (_, json) = call(&app, Method::GET, "/users", "").await;
    let mut ids: Vec<String> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    let mut expected: Vec<String> = std::iter::once("1".to_string())
        .chain((100..132u32).filter(|n| n % 2 == 1).map(|n| n.to_string()))
        .collect();
    expected.sort();
    assert_eq!(ids, expected);
}
