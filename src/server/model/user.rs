//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{error::AppError, util::validate::require_non_empty},
};

/// Stored in place of an empty or missing description.
pub const DEFAULT_DESCRIPTION: &str = "no hay descripción";

/// User without credentials.
///
/// The password hash stays in the data layer; only login reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub description: String,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_active: self.is_active,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_active: entity.is_active,
            description: entity.description,
        }
    }
}

/// User row as needed to check a login attempt.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Validated input for creating a user. `password` is still plaintext here.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: String,
    pub description: String,
}

impl CreateUserParams {
    /// Applies the field checks in the order clients rely on for error messages.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Email and password present, description defaulted
    /// - `Err(AppError::BadRequest)` - Missing email or password
    pub fn from_dto(dto: Option<CreateUserDto>) -> Result<Self, AppError> {
        let Some(dto) = dto.filter(|dto| dto.email.is_some()) else {
            return Err(AppError::BadRequest(
                "Body está vacío o email no viene en el body, es inválido".to_string(),
            ));
        };

        let email = require_non_empty(dto.email, "email es inválido")?;
        let password = require_non_empty(dto.password, "password es inválido")?;
        let description = dto
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Ok(Self {
            email,
            password,
            description,
        })
    }
}
