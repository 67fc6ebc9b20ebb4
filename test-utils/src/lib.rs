//! Test support for the catalog API.
//!
//! Each test gets its own in-memory SQLite database built from the entity
//! definitions:
//!
//! - [`builder::TestBuilder`] picks the tables and creates the database
//! - [`context::TestContext`] owns the connection for the test's lifetime
//! - [`factory`] inserts users, catalog rows, favorites and revoked tokens
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_users() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_user(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
