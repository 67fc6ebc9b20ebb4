use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every handled error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
    pub status_code: u16,
}

/// Confirmation returned by create endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub mensaje: String,
}

impl MessageDto {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}
