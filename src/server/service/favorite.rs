use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::FavoriteKind,
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::AppError,
        model::favorite::{CreateFavoriteParams, Favorites},
        util::validate::require_nonzero_id,
    },
};

pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates favorites of every kind, optionally for a single user.
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Favorites, AppError> {
        Ok(FavoriteRepository::new(self.db).get_all(user_id).await?)
    }

    /// Links a user to a catalog item.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new favorite row
    /// - `Err(AppError::BadRequest)` - Either id is 0, or the user or item does not exist
    pub async fn create(&self, params: CreateFavoriteParams) -> Result<i32, AppError> {
        let user_id = require_nonzero_id(params.user_id)?;
        let item_id = require_nonzero_id(params.item_id)?;

        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::BadRequest("El usuario no existe".to_string()));
        }

        let favorite_repo = FavoriteRepository::new(self.db);

        if !favorite_repo.item_exists(params.kind, item_id).await? {
            return Err(AppError::BadRequest(format!("El {} no existe", params.kind)));
        }

        Ok(favorite_repo.create(params.kind, user_id, item_id).await?)
    }

    pub async fn delete(&self, kind: FavoriteKind, id: i32) -> Result<(), AppError> {
        let id = require_nonzero_id(id)?;
        let favorite_repo = FavoriteRepository::new(self.db);

        if !favorite_repo.exists(kind, id).await? {
            return Err(AppError::BadRequest("El favorito no existe".to_string()));
        }

        favorite_repo.delete(kind, id).await?;

        Ok(())
    }
}
