use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user_id: i32,
}

/// Reply of the protected endpoint. `user` is absent when access was denied.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProtectedDto {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthMessageDto {
    pub msg: String,
}
