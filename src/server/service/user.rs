//! User service for business logic.
//!
//! This module provides the `UserService` for listing, creating, deleting and suspending
//! users. Creation hashes the password and runs the duplicate check and the insert in
//! one transaction.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, User},
    util::{password::hash_password, validate::require_nonzero_id},
};

const USER_NOT_FOUND: &str = "El usuario no existe";
const USER_EXISTS: &str = "El usuario ya existe";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user in storage order.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::BadRequest)` - Id is 0 or no user has that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let id = require_nonzero_id(id)?;

        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(USER_NOT_FOUND.to_string()))
    }

    /// Creates a new active user.
    ///
    /// The password is hashed before the transaction opens. The duplicate email check
    /// and the insert run inside the transaction, and the unique index on email turns
    /// a concurrent duplicate into the same `BadRequest`. Any other failure rolls the
    /// transaction back and surfaces as a generic 500.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::InternalError)` - Hashing or persistence failed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let password_hash = hash_password(&params.password)?;

        let txn = self.db.begin().await.map_err(internal)?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.email_exists(&params.email).await.map_err(internal)? {
            return Err(AppError::BadRequest(USER_EXISTS.to_string()));
        }

        let user = user_repo
            .create(params.email, password_hash, params.description)
            .await
            .map_err(insert_error)?;

        txn.commit().await.map_err(internal)?;

        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Deletes a user by id. Their favorites are removed with them.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Id is 0 or no user has that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user = self.get_by_id(id).await?;

        UserRepository::new(self.db).delete(user.id).await?;

        Ok(())
    }

    /// Flips the active flag of a user and returns the updated user.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new flag
    /// - `Err(AppError::BadRequest)` - Id is 0 or no user has that id
    pub async fn toggle_active(&self, id: i32) -> Result<User, AppError> {
        let user = self.get_by_id(id).await?;

        let updated = UserRepository::new(self.db)
            .set_active(user.id, !user.is_active)
            .await?;

        tracing::info!("User {} is_active set to {}", updated.id, updated.is_active);

        Ok(updated)
    }
}

/// Maps a failed user insert. A unique violation on email means another request
/// registered the address after the existence check.
pub(crate) fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest(USER_EXISTS.to_string())
        }
        _ => internal(err),
    }
}

fn internal(err: DbErr) -> AppError {
    AppError::InternalError(format!("User creation failed: {}", err))
}
