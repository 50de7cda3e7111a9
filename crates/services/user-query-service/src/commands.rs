//! Query commands - one per user query, rendered as JSON.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde_json::Value;
use tracing::info;

use common::AppResult;
use domain::{Privilege, User};

use crate::repository::UserSource;
use crate::service::{predicates, UserPredicate, UserQueries};

/// User attribute rendered by the join query
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JoinField {
    FirstName,
    LastName,
    FullName,
    Age,
}

impl JoinField {
    /// Render this field of `user`
    pub fn render(&self, user: &User) -> String {
        match self {
            JoinField::FirstName => user.first_name.clone(),
            JoinField::LastName => user.last_name.clone(),
            JoinField::FullName => user.full_name(),
            JoinField::Age => user.age.to_string(),
        }
    }
}

/// Optional criteria for the filter query; all given criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep users strictly older than this
    pub min_age: Option<i32>,
    pub privilege: Option<Privilege>,
    pub last_name: Option<String>,
    pub first_name_prefix: Option<String>,
}

impl FilterCriteria {
    /// Build the predicate list, in declaration order
    pub fn predicates(&self) -> Vec<UserPredicate<'static>> {
        let mut preds = Vec::new();
        if let Some(age) = self.min_age {
            preds.push(predicates::older_than(age));
        }
        if let Some(privilege) = self.privilege {
            preds.push(predicates::has_privilege(privilege));
        }
        if let Some(name) = &self.last_name {
            preds.push(predicates::last_name_is(name.clone()));
        }
        if let Some(prefix) = &self.first_name_prefix {
            preds.push(predicates::first_name_starts_with(prefix.clone()));
        }
        preds
    }
}

/// A single query to run against a user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    NamesReverseSorted,
    SortByAge,
    DistinctPrivileges,
    FirstUpdatable { older_than: i32 },
    GroupByPrivilegeCount,
    AverageAge,
    MostFrequentLastName,
    Filter(FilterCriteria),
    Join { delimiter: String, field: JoinField },
    GroupByPrivilege,
    CountByLastName,
}

impl QueryCommand {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            QueryCommand::NamesReverseSorted => "names-reverse-sorted",
            QueryCommand::SortByAge => "sort-by-age",
            QueryCommand::DistinctPrivileges => "distinct-privileges",
            QueryCommand::FirstUpdatable { .. } => "first-updatable",
            QueryCommand::GroupByPrivilegeCount => "group-by-privilege-count",
            QueryCommand::AverageAge => "average-age",
            QueryCommand::MostFrequentLastName => "most-frequent-last-name",
            QueryCommand::Filter(_) => "filter",
            QueryCommand::Join { .. } => "join",
            QueryCommand::GroupByPrivilege => "group-by-privilege",
            QueryCommand::CountByLastName => "count-by-last-name",
        }
    }
}

/// Load users from `source` and evaluate `command` against them.
///
/// Absent results render as `null`; grouped results render as objects
/// with keys in ascending order.
pub fn run_query(
    source: &dyn UserSource,
    queries: &dyn UserQueries,
    command: &QueryCommand,
) -> AppResult<Value> {
    let users = source.load()?;
    info!(query = command.name(), users = users.len(), "Running query");

    let value = match command {
        QueryCommand::NamesReverseSorted => {
            serde_json::to_value(queries.first_names_reverse_sorted(&users))?
        }
        QueryCommand::SortByAge => {
            serde_json::to_value(queries.sort_by_age_desc_and_name_asc(&users))?
        }
        QueryCommand::DistinctPrivileges => {
            serde_json::to_value(queries.distinct_privileges(&users))?
        }
        QueryCommand::FirstUpdatable { older_than } => {
            serde_json::to_value(queries.first_updatable_older_than(&users, *older_than))?
        }
        QueryCommand::GroupByPrivilegeCount => {
            serde_json::to_value(queries.group_by_privilege_count(&users))?
        }
        QueryCommand::AverageAge => serde_json::to_value(queries.average_age(&users))?,
        QueryCommand::MostFrequentLastName => {
            serde_json::to_value(queries.most_frequent_last_name(&users))?
        }
        QueryCommand::Filter(criteria) => {
            let preds = criteria.predicates();
            serde_json::to_value(queries.filter_by(&users, &preds))?
        }
        QueryCommand::Join { delimiter, field } => {
            let joined = queries.join_with(&users, delimiter, &|u: &User| field.render(u))?;
            Value::String(joined)
        }
        QueryCommand::GroupByPrivilege => {
            serde_json::to_value(queries.group_by_privilege(&users))?
        }
        QueryCommand::CountByLastName => {
            let counts: BTreeMap<String, u64> =
                queries.count_by_last_name(&users).into_iter().collect();
            serde_json::to_value(counts)?
        }
    };

    Ok(value)
}
