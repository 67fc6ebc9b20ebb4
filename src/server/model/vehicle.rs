use crate::{
    model::vehicle::{CreateVehicleDto, VehicleDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
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

impl Vehicle {
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            model: self.model,
            vehicle_class: self.vehicle_class,
            manufacturer: self.manufacturer,
            cost_in_credits: self.cost_in_credits,
            length: self.length,
            crew: self.crew,
            passengers: self.passengers,
            max_atmosphering_speed: self.max_atmosphering_speed,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
        }
    }

    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            vehicle_class: entity.vehicle_class,
            manufacturer: entity.manufacturer,
            cost_in_credits: entity.cost_in_credits,
            length: entity.length,
            crew: entity.crew,
            passengers: entity.passengers,
            max_atmosphering_speed: entity.max_atmosphering_speed,
            cargo_capacity: entity.cargo_capacity,
            consumables: entity.consumables,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
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

impl CreateVehicleParams {
    pub fn from_dto(dto: CreateVehicleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_empty(dto.name, "name es inválido")?,
            model: dto.model,
            vehicle_class: dto.vehicle_class,
            manufacturer: dto.manufacturer,
            cost_in_credits: dto.cost_in_credits,
            length: dto.length,
            crew: dto.crew,
            passengers: dto.passengers,
            max_atmosphering_speed: dto.max_atmosphering_speed,
            cargo_capacity: dto.cargo_capacity,
            consumables: dto.consumables,
        })
    }
}
