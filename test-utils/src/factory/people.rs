//! People factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters.
///
/// Only the name is customizable; the remaining attributes are filled with
/// plausible values so serialization tests have something to look at.
pub struct PeopleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> PeopleFactory<'a> {
    /// Creates a new PeopleFactory with name `"Character {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Character {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::people::Model, DbErr> {
        entity::people::ActiveModel {
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(Some(172.0)),
            mass: ActiveValue::Set(Some(77.0)),
            hair_color: ActiveValue::Set(Some("blond".to_string())),
            skin_color: ActiveValue::Set(Some("fair".to_string())),
            eye_color: ActiveValue::Set(Some("blue".to_string())),
            birth_year: ActiveValue::Set(Some(19)),
            gender: ActiveValue::Set(Some("male".to_string())),
            homeworld: ActiveValue::Set(Some("Tatooine".to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_people(db: &DatabaseConnection) -> Result<entity::people::Model, DbErr> {
    PeopleFactory::new(db).build().await
}

/// Creates a character with a specific name.
pub async fn create_people_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::people::Model, DbErr> {
    PeopleFactory::new(db).name(name).build().await
}
