use sea_orm::DatabaseConnection;

use crate::server::{
    data::people::PeopleRepository,
    error::AppError,
    model::people::{CreatePeopleParams, People, UpdatePeopleParams},
    util::validate::require_nonzero_id,
};

const PEOPLE_NOT_FOUND: &str = "El personaje no existe";

pub struct PeopleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<People>, AppError> {
        Ok(PeopleRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a character by id, rejecting id 0 and unknown ids with `BadRequest`.
    pub async fn get_by_id(&self, id: i32) -> Result<People, AppError> {
        let id = require_nonzero_id(id)?;

        PeopleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(PEOPLE_NOT_FOUND.to_string()))
    }

    /// Creates a character.
    ///
    /// Names are not checked for duplicates: two characters may share a name.
    pub async fn create(&self, params: CreatePeopleParams) -> Result<People, AppError> {
        Ok(PeopleRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, params: UpdatePeopleParams) -> Result<People, AppError> {
        let people = self.get_by_id(params.id).await?;

        let updated = PeopleRepository::new(self.db)
            .update(UpdatePeopleParams {
                id: people.id,
                name: params.name,
            })
            .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let people = self.get_by_id(id).await?;

        PeopleRepository::new(self.db).delete(people.id).await?;

        Ok(())
    }

    pub async fn search(&self, name: &str) -> Result<Vec<People>, AppError> {
        Ok(PeopleRepository::new(self.db).find_by_name(name).await?)
    }
}
