//! Repository layer for loading users.

mod user_source;

pub use user_source::{InMemorySource, JsonFileSource, UserSource};

#[cfg(any(test, feature = "test-utils"))]
pub use user_source::MockUserSource;
