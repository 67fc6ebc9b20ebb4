use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A private catalog database owned by one test.
///
/// Every context opens its own `sqlite::memory:` connection, so tests never see each
/// other's users, favorites or revoked tokens.
pub struct TestContext {
    /// Connection to the in-memory database, `None` until the first table is created.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening the in-memory database on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or(TestError::NotConnected)
    }

    /// Executes the given `CREATE TABLE` statements in order.
    ///
    /// Favorite tables reference `user` and the catalog tables, so those must come
    /// first. `TestBuilder` takes care of the ordering for its table groups.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
