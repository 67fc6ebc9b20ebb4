use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    state::AppState,
    util::token::TokenKeys,
};

mod require;

const SECRET: &str = "test-secret";

async fn test_state() -> AppState {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.unwrap();

    AppState::new(db, TokenKeys::new(SECRET, None), 1)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
