//! User Query Service Library
//!
//! Read-only queries over a list of users: sorting, grouping, filtering,
//! aggregation and joining. The queries live in [`service`]; the
//! [`repository`] layer loads users and [`commands`] renders one query
//! result as JSON for the `user-query` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod repository;
pub mod service;

use tracing::info;

use common::AppResult;

use crate::commands::{run_query, QueryCommand};
use crate::config::QueryServiceConfig;
use crate::repository::JsonFileSource;
use crate::service::UserQueryManager;

/// Run one query against the configured users file and return pretty JSON.
pub fn run(config: &QueryServiceConfig, command: &QueryCommand) -> AppResult<String> {
    let source = JsonFileSource::new(&config.users_file);
    let queries = UserQueryManager::new();

    let value = run_query(&source, &queries, command)?;
    info!(query = command.name(), "Query finished");

    Ok(serde_json::to_string_pretty(&value)?)
}
