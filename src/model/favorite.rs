use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which favorite join table a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Planet,
    Vehicle,
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::People => "people",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePeopleDto {
    pub id: i32,
    pub user_email: String,
    pub character_name: String,
}

/// A favorite planet flattened with every planet attribute prefixed by `planet_`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_email: String,
    pub planet_name: String,
    pub planet_diameter: Option<f64>,
    #[serde(rename = "planet_rotation_Period")]
    pub planet_rotation_period: Option<f64>,
    #[serde(rename = "planet_orbital_Period")]
    pub planet_orbital_period: Option<f64>,
    pub planet_gravity: Option<String>,
    pub planet_population: Option<i64>,
    pub planet_climate: Option<String>,
    pub planet_terrain: Option<String>,
    #[serde(rename = "planet_surface_Water")]
    pub planet_surface_water: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteVehicleDto {
    pub id: i32,
    pub user_email: String,
    pub vehicle_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub people: Vec<FavoritePeopleDto>,
    pub planets: Vec<FavoritePlanetDto>,
    pub vehicles: Vec<FavoriteVehicleDto>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateFavoriteDto {
    pub user_id: Option<i32>,
    pub item_id: Option<i32>,
}
