use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user. The password column is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub description: Option<String>,
}
