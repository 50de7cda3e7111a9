//! User query service configuration.

use std::env;
use std::path::PathBuf;

use common::ServiceConfig;

/// Default users file, relative to the working directory
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Default delimiter for the join query
pub const DEFAULT_DELIMITER: &str = ", ";

/// User query service configuration.
#[derive(Debug, Clone)]
pub struct QueryServiceConfig {
    /// JSON file holding the users to query
    pub users_file: PathBuf,
    /// Delimiter used by the join query when none is given
    pub default_delimiter: String,
    /// Shared service settings (name, log level)
    pub service: ServiceConfig,
}

impl QueryServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// The users file is bound to `USER_QUERY_USERS_FILE` by the CLI and
    /// applied through [`with_users_file`](Self::with_users_file); here it
    /// always starts at [`DEFAULT_USERS_FILE`].
    pub fn from_env() -> Self {
        Self {
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            default_delimiter: env::var("USER_QUERY_DEFAULT_DELIMITER")
                .unwrap_or_else(|_| DEFAULT_DELIMITER.to_string()),
            service: ServiceConfig::from_env("user-query"),
        }
    }

    /// Replace the users file when one was given on the command line
    pub fn with_users_file(mut self, users_file: Option<PathBuf>) -> Self {
        if let Some(path) = users_file {
            self.users_file = path;
        }
        self
    }
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            default_delimiter: DEFAULT_DELIMITER.to_string(),
            service: ServiceConfig {
                service_name: "user-query".to_string(),
                ..ServiceConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_users_file_overrides_only_when_given() {
        let config = QueryServiceConfig::default().with_users_file(None);
        assert_eq!(config.users_file, PathBuf::from(DEFAULT_USERS_FILE));

        let config = config.with_users_file(Some(PathBuf::from("/tmp/other.json")));
        assert_eq!(config.users_file, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.default_delimiter, DEFAULT_DELIMITER);
    }

    #[test]
    fn test_from_env_leaves_users_file_to_the_cli() {
        env::set_var("USER_QUERY_USERS_FILE", "/tmp/from-env.json");
        let config = QueryServiceConfig::from_env();
        env::remove_var("USER_QUERY_USERS_FILE");

        assert_eq!(config.users_file, PathBuf::from(DEFAULT_USERS_FILE));
        assert_eq!(config.service.service_name, "user-query");
    }

    #[test]
    fn test_default_names_the_service() {
        assert_eq!(QueryServiceConfig::default().service.service_name, "user-query");
    }
}
