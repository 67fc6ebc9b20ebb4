use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeopleDto {
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

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePeopleDto {
    pub name: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
}

/// Only the name of a character can be changed.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePeopleDto {
    pub name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchPeopleDto {
    pub name: Option<String>,
}
