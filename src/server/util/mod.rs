//! Small helpers shared by services and controllers.

pub mod password;
pub mod token;
pub mod validate;
