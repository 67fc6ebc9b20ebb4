//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let people = factory::create_people(&db).await?;
//!     let favorite = factory::create_favorite_people(&db, user.id, people.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("luke@tatooine.org")
//!     .is_active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! Factories never hash passwords. Tests that log in should set `password` to a
//! precomputed hash.

pub mod favorite;
pub mod helpers;
pub mod people;
pub mod planet;
pub mod token_blocked_list;
pub mod user;
pub mod vehicle;

pub use favorite::{create_favorite_people, create_favorite_planet, create_favorite_vehicle};
pub use people::create_people;
pub use planet::create_planet;
pub use token_blocked_list::create_blocked_token;
pub use user::create_user;
pub use vehicle::create_vehicle;
