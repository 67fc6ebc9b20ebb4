use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParams, Planet},
    util::validate::require_nonzero_id,
};

const PLANET_NOT_FOUND: &str = "El planeta no existe";

pub struct PlanetService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        let id = require_nonzero_id(id)?;

        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(PLANET_NOT_FOUND.to_string()))
    }

    /// Creates a planet unless one with the same name already exists.
    ///
    /// The check and the insert are separate statements; two concurrent requests for
    /// the same name can both succeed.
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, AppError> {
        let planet_repo = PlanetRepository::new(self.db);

        if planet_repo.name_exists(&params.name).await? {
            return Err(AppError::BadRequest("El planeta ya existe".to_string()));
        }

        Ok(planet_repo.create(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let planet = self.get_by_id(id).await?;

        PlanetRepository::new(self.db).delete(planet.id).await?;

        Ok(())
    }
}
