use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<f64>,
    #[serde(rename = "rotation_Period")]
    pub rotation_period: Option<f64>,
    #[serde(rename = "orbital_Period")]
    pub orbital_period: Option<f64>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    #[serde(rename = "surface_Water")]
    pub surface_water: Option<i32>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub diameter: Option<f64>,
    #[serde(rename = "rotation_Period")]
    pub rotation_period: Option<f64>,
    #[serde(rename = "orbital_Period")]
    pub orbital_period: Option<f64>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    #[serde(rename = "surface_Water")]
    pub surface_water: Option<i32>,
}
