//! Domain layer - Core entities queried by the user query service.
//!
//! This crate contains pure domain types with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{Privilege, User};
