//! Request guards shared by controllers.

pub mod auth;

#[cfg(test)]
mod test;
