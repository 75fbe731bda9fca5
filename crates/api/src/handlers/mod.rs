//! Request handlers, one module per resource.

pub mod animals;
pub mod auth;
pub mod users;
pub mod visits;
pub mod volunteers;
