//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use domain::Privilege;

use crate::commands::{FilterCriteria, JoinField, QueryCommand};

/// Read-only queries over a JSON list of users
#[derive(Parser, Debug)]
#[command(name = "user-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file holding the users
    #[arg(short, long, global = true, env = "USER_QUERY_USERS_FILE")]
    pub users: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available queries
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First names, sorted in reverse order
    NamesReverseSorted,

    /// Users by age descending, then first name ascending
    SortByAge,

    /// Distinct privileges in first-seen order
    DistinctPrivileges,

    /// First user with UPDATE privilege older than the given age
    FirstUpdatable {
        #[arg(long, allow_negative_numbers = true)]
        older_than: i32,
    },

    /// Users grouped by how many privileges they hold
    GroupByPrivilegeCount,

    /// Average age (-1 when there are no users)
    AverageAge,

    /// Most common repeated last name
    MostFrequentLastName,

    /// Users matching every given criterion
    Filter(FilterArgs),

    /// Join one field of every user into a single string
    Join(JoinArgs),

    /// Users grouped by privilege
    GroupByPrivilege,

    /// Number of users per last name
    CountByLastName,
}

/// Arguments for the filter command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Keep users strictly older than this age
    #[arg(long, allow_negative_numbers = true)]
    pub min_age: Option<i32>,

    /// Keep users holding this privilege
    #[arg(long)]
    pub privilege: Option<Privilege>,

    /// Keep users with exactly this last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Keep users whose first name starts with this prefix
    #[arg(long)]
    pub first_name_prefix: Option<String>,
}

/// Arguments for the join command
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Delimiter placed between values
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Field to render for each user
    #[arg(short, long, value_enum, default_value = "first-name")]
    pub field: JoinField,
}

impl Commands {
    /// Turn parsed arguments into a query, filling in configured defaults
    pub fn into_query(self, default_delimiter: &str) -> QueryCommand {
        match self {
            Commands::NamesReverseSorted => QueryCommand::NamesReverseSorted,
            Commands::SortByAge => QueryCommand::SortByAge,
            Commands::DistinctPrivileges => QueryCommand::DistinctPrivileges,
            Commands::FirstUpdatable { older_than } => QueryCommand::FirstUpdatable { older_than },
            Commands::GroupByPrivilegeCount => QueryCommand::GroupByPrivilegeCount,
            Commands::AverageAge => QueryCommand::AverageAge,
            Commands::MostFrequentLastName => QueryCommand::MostFrequentLastName,
            Commands::Filter(args) => QueryCommand::Filter(FilterCriteria {
                min_age: args.min_age,
                privilege: args.privilege,
                last_name: args.last_name,
                first_name_prefix: args.first_name_prefix,
            }),
            Commands::Join(args) => QueryCommand::Join {
                delimiter: args
                    .delimiter
                    .unwrap_or_else(|| default_delimiter.to_string()),
                field: args.field,
            },
            Commands::GroupByPrivilege => QueryCommand::GroupByPrivilege,
            Commands::CountByLastName => QueryCommand::CountByLastName,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_with_privilege() {
        let cli = Cli::try_parse_from([
            "user-query",
            "--users",
            "people.json",
            "filter",
            "--min-age",
            "18",
            "--privilege",
            "update",
        ])
        .unwrap();

        assert_eq!(cli.users, Some(PathBuf::from("people.json")));
        assert_eq!(
            cli.command.into_query(", "),
            QueryCommand::Filter(FilterCriteria {
                min_age: Some(18),
                privilege: Some(Privilege::Update),
                last_name: None,
                first_name_prefix: None,
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_privilege() {
        let result = Cli::try_parse_from(["user-query", "filter", "--privilege", "root"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_join_uses_configured_delimiter_by_default() {
        let cli = Cli::try_parse_from(["user-query", "join", "--field", "last-name"]).unwrap();

        assert_eq!(
            cli.command.into_query(" | "),
            QueryCommand::Join {
                delimiter: " | ".to_string(),
                field: JoinField::LastName,
            }
        );
    }

    #[test]
    fn test_first_updatable_accepts_negative_age() {
        let cli =
            Cli::try_parse_from(["user-query", "first-updatable", "--older-than", "-5"]).unwrap();

        assert_eq!(
            cli.command.into_query(","),
            QueryCommand::FirstUpdatable { older_than: -5 }
        );
    }
}
