//! Service layer - user query use cases.

pub mod predicates;
mod user_queries;

pub use user_queries::{UserPredicate, UserQueries, UserQueryManager};
