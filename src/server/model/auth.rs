use crate::{
    model::auth::LoginDto,
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: Option<LoginDto>) -> Result<Self, AppError> {
        let dto = dto.unwrap_or_default();

        Ok(Self {
            email: require_non_empty(dto.email, "email es inválido")?,
            password: require_non_empty(dto.password, "password es inválido")?,
        })
    }
}
