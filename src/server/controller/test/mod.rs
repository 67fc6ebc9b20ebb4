use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;

use crate::server::{router::router, state::AppState, util::token::TokenKeys};

mod user;

const SECRET: &str = "controller-test-secret";

/// Serves the real router over a fresh in-memory database with every table.
async fn test_server() -> (TestServer, AppState) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.unwrap();

    let state = AppState::new(db, TokenKeys::new(SECRET, None), 1);
    let server = TestServer::new(router().with_state(state.clone())).unwrap();

    (server, state)
}

/// Registers a user through the API so the stored password is a real hash.
async fn register(server: &TestServer, email: &str, password: &str) {
    let response = server
        .post("/user")
        .json(&json!({ "email": email, "password": password, "description": "" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

async fn login(server: &TestServer, email: &str, password: &str) -> (String, i32) {
    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();
    let user_id = body["user_id"].as_i64().unwrap() as i32;
    (token, user_id)
}

fn error_message(body: &Value) -> &str {
    body["message"].as_str().unwrap()
}
