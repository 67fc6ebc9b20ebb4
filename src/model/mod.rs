//! Request and response DTOs shared by every endpoint.
//!
//! These types define the JSON wire format. Server-side domain models convert into
//! them at the controller boundary.

pub mod api;
pub mod auth;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
pub mod vehicle;
