//! Shared domain types for the sanctuary backend.

pub mod error;
pub mod roles;
pub mod types;
