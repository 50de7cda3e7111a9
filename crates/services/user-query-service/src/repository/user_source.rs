//! User sources - where the list of users to query comes from.

use std::fs;
use std::path::PathBuf;

use common::AppResult;
use domain::User;
use tracing::{debug, info};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User source trait for dependency injection.
///
/// Implementations return users in a stable order; queries rely on it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserSource: Send + Sync {
    /// Load every user, in source order
    fn load(&self) -> AppResult<Vec<User>>;
}

/// Reads a JSON array of users from a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserSource for JsonFileSource {
    fn load(&self) -> AppResult<Vec<User>> {
        debug!("Reading users from {}", self.path.display());
        let raw = fs::read_to_string(&self.path)?;
        let users: Vec<User> = serde_json::from_str(&raw)?;
        info!(count = users.len(), "Loaded users from {}", self.path.display());
        Ok(users)
    }
}

/// Serves a fixed list of users
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    users: Vec<User>,
}

impl InMemorySource {
    /// Create a source over `users`
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl UserSource for InMemorySource {
    fn load(&self) -> AppResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::Privilege;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "user-query-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_json_file_source_loads_users_in_order() {
        let path = temp_file(
            "ok",
            r#"[
                {"first_name": "Ann", "last_name": "Lee", "age": 31,
                 "privileges": ["READ", "UPDATE"]},
                {"first_name": "Bob", "last_name": "Ray", "age": 22}
            ]"#,
        );

        let users = JsonFileSource::new(&path).load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].first_name, "Ann");
        assert_eq!(users[0].privileges, vec![Privilege::Read, Privilege::Update]);
        assert!(users[1].privileges.is_empty());
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/definitely/not/here/users.json");
        assert!(matches!(source.load(), Err(AppError::Io(_))));
    }

    #[test]
    fn test_json_file_source_malformed_json() {
        let path = temp_file("bad", r#"[{"first_name": "Ann""#);

        let result = JsonFileSource::new(&path).load();
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_json_file_source_rejects_unknown_privilege() {
        let path = temp_file(
            "privilege",
            r#"[{"first_name": "Ann", "last_name": "Lee", "age": 1, "privileges": ["ROOT"]}]"#,
        );

        let result = JsonFileSource::new(&path).load();
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_in_memory_source_returns_copy() {
        let users = vec![User::new("a", "b", 1, vec![])];
        let source = InMemorySource::new(users.clone());

        assert_eq!(source.load().unwrap(), users);
    }
}
