use super::*;

/// Tests a valid token passes without permissions.
///
/// Expected: Ok(Claims) carrying the subject of the token
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let state = test_state().await;
    let token = state.tokens.issue(5)?;
    let headers = bearer(&token);

    let claims = AuthGuard::new(&state, &headers).require(&[]).await?;

    assert_eq!(claims.user_id()?, 5);

    Ok(())
}

/// Tests a request without Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let state = test_state().await;
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let state = test_state().await;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let state = test_state().await;
    let token = TokenKeys::new("other-secret", None).issue(1)?;
    let headers = bearer(&token);

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))));

    Ok(())
}

/// Tests a token whose jti is on the denylist.
///
/// Expected: Err(AuthError::TokenRevoked)
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let state = test_state().await;
    let token = state.tokens.issue(1)?;
    let claims = state.tokens.decode(&token)?;
    factory::create_blocked_token(&state.db, claims.jti.clone()).await?;
    let headers = bearer(&token);

    let result = AuthGuard::new(&state, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::TokenRevoked(jti))) if jti == claims.jti));

    Ok(())
}

/// Tests the privileged user passes the admin check.
///
/// Expected: Ok(Claims)
#[tokio::test]
async fn grants_admin_to_privileged_id() -> Result<(), AppError> {
    let state = test_state().await;
    let token = state.tokens.issue(1)?;
    let headers = bearer(&token);

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests any other user is denied the admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_to_other_ids() -> Result<(), AppError> {
    let state = test_state().await;
    let token = state.tokens.issue(2)?;
    let headers = bearer(&token);

    let result = AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(2)))));

    Ok(())
}
