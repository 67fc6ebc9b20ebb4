//! People data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::people::{CreatePeopleParams, People, UpdatePeopleParams};

/// Repository providing database operations for characters.
pub struct PeopleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleRepository<'a> {
    /// Creates a new PeopleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every character ordered by id.
    pub async fn get_all(&self) -> Result<Vec<People>, DbErr> {
        let people = entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await?;

        Ok(people.into_iter().map(People::from_entity).collect())
    }

    /// Finds a character by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(People))` - People found
    /// - `Ok(None)` - No row with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<People>, DbErr> {
        let entity = entity::prelude::People::find_by_id(id).one(self.db).await?;

        Ok(entity.map(People::from_entity))
    }

    /// Exact, case-sensitive match on name.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<People>, DbErr> {
        let people = entity::prelude::People::find()
            .filter(entity::people::Column::Name.eq(name))
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await?;

        Ok(people.into_iter().map(People::from_entity).collect())
    }

    /// Inserts a character. Names are not unique.
    pub async fn create(&self, params: CreatePeopleParams) -> Result<People, DbErr> {
        let entity = entity::people::ActiveModel {
            name: ActiveValue::Set(params.name),
            height: ActiveValue::Set(params.height),
            mass: ActiveValue::Set(params.mass),
            hair_color: ActiveValue::Set(params.hair_color),
            skin_color: ActiveValue::Set(params.skin_color),
            eye_color: ActiveValue::Set(params.eye_color),
            birth_year: ActiveValue::Set(params.birth_year),
            gender: ActiveValue::Set(params.gender),
            homeworld: ActiveValue::Set(params.homeworld),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(People::from_entity(entity))
    }

    /// Applies the name change when one is given and returns the stored row.
    pub async fn update(&self, params: UpdatePeopleParams) -> Result<People, DbErr> {
        let people = entity::prelude::People::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "People with id {} not found",
                params.id
            )))?;

        let Some(name) = params.name else {
            return Ok(People::from_entity(people));
        };

        let mut active_model: entity::people::ActiveModel = people.into();
        active_model.name = ActiveValue::Set(name);

        let entity = active_model.update(self.db).await?;

        Ok(People::from_entity(entity))
    }

    /// Deletes a character by id. Favorite rows referencing it cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when the id is unknown
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::People::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
