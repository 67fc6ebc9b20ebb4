use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and creates them in a fresh in-memory database.
///
/// Schemas are derived from the entity definitions rather than the migrations, so a
/// test only pays for the tables it touches.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{People, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(People)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Statements in the order they will run.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table for one entity.
    ///
    /// A table with foreign keys must be queued after the tables it references.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues `user` and the people, planet and vehicle catalogs.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(People)
            .with_table(Planet)
            .with_table(Vehicle)
    }

    /// Queues the catalog tables followed by the favorite join tables.
    pub fn with_favorite_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(FavoritePeople)
            .with_table(FavoritePlanet)
            .with_table(FavoriteVehicle)
    }

    /// Queues the full schema, token denylist included.
    pub fn with_all_tables(self) -> Self {
        self.with_favorite_tables().with_table(TokenBlockedList)
    }

    /// Opens the database and creates every queued table.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
