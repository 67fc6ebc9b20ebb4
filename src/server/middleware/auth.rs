use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    data::token_blocked_list::TokenBlockedListRepository,
    error::{auth::AuthError, AppError},
    state::AppState,
    util::token::Claims,
};

pub enum Permission {
    /// Token subject must be the configured privileged user.
    Admin,
}

/// Validates the bearer token of a request.
///
/// A token passes when it is correctly signed, its claims validate and its jti is
/// not on the denylist. Permissions are checked afterwards against the token subject.
pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.state.tokens.decode(token)?;

        let revoked = TokenBlockedListRepository::new(&self.state.db)
            .is_blocked(&claims.jti)
            .await?;
        if revoked {
            return Err(AuthError::TokenRevoked(claims.jti).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let user_id = claims.user_id()?;
                    if user_id != self.state.admin_user_id {
                        return Err(AuthError::AccessDenied(user_id).into());
                    }
                }
            }
        }

        Ok(claims)
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("Authorization header is not a bearer token".to_string()))
}
