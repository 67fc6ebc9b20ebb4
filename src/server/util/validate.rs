use crate::server::error::AppError;

/// Rejects the sentinel id 0 used by clients for "no id".
pub fn require_nonzero_id(id: i32) -> Result<i32, AppError> {
    if id == 0 {
        return Err(AppError::BadRequest("Id no puede ser igual a 0".to_string()));
    }
    Ok(id)
}

/// Returns the value when present and not blank, otherwise `BadRequest(message)`.
pub fn require_non_empty(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}
