//! Login, logout and token-holder lookups.
//!
//! Tokens are stateless apart from the denylist: logout records the token's jti, and
//! a recorded jti is rejected for as long as the table exists.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token_blocked_list::TokenBlockedListRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{auth::LoginParams, user::User},
    util::{
        password::verify_password,
        token::{Claims, TokenKeys},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Checks credentials and issues a token for the user.
    ///
    /// Suspended users can still log in; `is_active` is informational only.
    ///
    /// # Returns
    /// - `Ok((token, user_id))` - Credentials matched
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, params: LoginParams) -> Result<(String, i32), AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(&params.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password_hash, &params.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(credentials.user.id)?;

        tracing::info!("User {} logged in", credentials.user.id);

        Ok((token, credentials.user.id))
    }

    /// Revokes the token described by `claims`.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        TokenBlockedListRepository::new(self.db)
            .block(&claims.jti)
            .await?;

        tracing::info!("Token {} revoked for user {}", claims.jti, claims.sub);

        Ok(())
    }

    /// Resolves the user a token was issued for.
    pub async fn token_user(&self, claims: &Claims) -> Result<User, AppError> {
        let user_id = claims.user_id()?;

        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
