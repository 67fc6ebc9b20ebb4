//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. The repository
//! is generic over the connection so user creation can run inside a transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{User, UserCredentials};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every user ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email together with the stored password hash.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Checks whether a user with this email already exists.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new active user.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    /// - `password_hash` - Already hashed password in PHC format
    /// - `description` - Free-text description
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique violations on email
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        description: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(true),
            description: ActiveValue::Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Sets the active flag of a user and returns the updated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.is_active = ActiveValue::Set(is_active);

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by id. Favorites owned by the user cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
