//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. All database queries, inserts, updates
//! and deletes are performed through these repositories.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod token_blocked_list;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
