//! Character ("people") domain models and parameters.

use crate::{
    model::people::{CreatePeopleDto, PeopleDto, UpdatePeopleDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct People {
    pub id: i32,
    pub name: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

impl People {
    pub fn into_dto(self) -> PeopleDto {
        PeopleDto {
            id: self.id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
            gender: self.gender,
            homeworld: self.homeworld,
        }
    }

    pub fn from_entity(entity: entity::people::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            mass: entity.mass,
            hair_color: entity.hair_color,
            skin_color: entity.skin_color,
            eye_color: entity.eye_color,
            birth_year: entity.birth_year,
            gender: entity.gender,
            homeworld: entity.homeworld,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePeopleParams {
    pub name: String,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

impl CreatePeopleParams {
    pub fn from_dto(dto: CreatePeopleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_empty(dto.name, "name es inválido")?,
            height: dto.height,
            mass: dto.mass,
            hair_color: dto.hair_color,
            skin_color: dto.skin_color,
            eye_color: dto.eye_color,
            birth_year: dto.birth_year,
            gender: dto.gender,
            homeworld: dto.homeworld,
        })
    }
}

/// Partial update; `None` leaves the stored name untouched.
#[derive(Debug, Clone)]
pub struct UpdatePeopleParams {
    pub id: i32,
    pub name: Option<String>,
}

impl UpdatePeopleParams {
    pub fn from_dto(id: i32, dto: UpdatePeopleDto) -> Self {
        Self { id, name: dto.name }
    }
}
