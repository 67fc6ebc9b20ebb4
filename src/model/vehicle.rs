use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub length: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed: Option<f64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub length: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmosphering_speed: Option<f64>,
    pub cargo_capacity: Option<f64>,
    pub consumables: Option<String>,
}
