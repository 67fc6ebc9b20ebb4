use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::vehicle::{CreateVehicleParams, Vehicle},
    util::validate::require_nonzero_id,
};

const VEHICLE_NOT_FOUND: &str = "El vehículo no existe";

pub struct VehicleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(VehicleRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        let id = require_nonzero_id(id)?;

        VehicleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(VEHICLE_NOT_FOUND.to_string()))
    }

    /// Creates a vehicle unless one with the same name already exists.
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        if vehicle_repo.name_exists(&params.name).await? {
            return Err(AppError::BadRequest("El vehículo ya existe".to_string()));
        }

        Ok(vehicle_repo.create(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let vehicle = self.get_by_id(id).await?;

        VehicleRepository::new(self.db).delete(vehicle.id).await?;

        Ok(())
    }
}
