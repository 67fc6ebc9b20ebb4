//! Business logic layer.
//!
//! Services validate input, enforce lookup and uniqueness rules and orchestrate
//! repositories. They work with domain models and report failures as `AppError`.

pub mod auth;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod vehicle;
