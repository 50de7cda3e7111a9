//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Privileges a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Privilege {
    Create,
    Read,
    Update,
    Delete,
}

impl Privilege {
    /// All privileges in declaration order
    pub const ALL: [Privilege; 4] = [
        Privilege::Create,
        Privilege::Read,
        Privilege::Update,
        Privilege::Delete,
    ];

    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Privilege::Create => "CREATE",
            Privilege::Read => "READ",
            Privilege::Update => "UPDATE",
            Privilege::Delete => "DELETE",
        }
    }
}

impl FromStr for Privilege {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Privilege::ALL
            .into_iter()
            .find(|privilege| privilege.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::unknown_privilege(s))
    }
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User domain entity
///
/// Privileges are kept as an ordered collection; duplicates are preserved
/// and counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    #[serde(default)]
    pub privileges: Vec<Privilege>,
}

impl User {
    /// Create a new user
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i32,
        privileges: Vec<Privilege>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            privileges,
        }
    }

    /// Check if user holds the given privilege
    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }

    /// Size of the privilege collection, duplicates included
    pub fn privilege_count(&self) -> usize {
        self.privileges.len()
    }

    /// First and last name separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_from_str_is_case_insensitive() {
        assert_eq!("update".parse::<Privilege>().unwrap(), Privilege::Update);
        assert_eq!(" Read ".parse::<Privilege>().unwrap(), Privilege::Read);
        assert_eq!("DELETE".parse::<Privilege>().unwrap(), Privilege::Delete);
    }

    #[test]
    fn test_privilege_from_str_rejects_unknown() {
        let err = "ADMIN".parse::<Privilege>().unwrap_err();
        assert_eq!(err, DomainError::UnknownPrivilege("ADMIN".to_string()));
    }

    #[test]
    fn test_privilege_display_round_trips() {
        for privilege in Privilege::ALL {
            assert_eq!(privilege.to_string().parse::<Privilege>().unwrap(), privilege);
        }
    }

    #[test]
    fn test_user_privilege_helpers() {
        let user = User::new(
            "Ann",
            "Lee",
            30,
            vec![Privilege::Read, Privilege::Update, Privilege::Read],
        );

        assert!(user.has_privilege(Privilege::Update));
        assert!(!user.has_privilege(Privilege::Delete));
        // Duplicates count towards the size
        assert_eq!(user.privilege_count(), 3);
        assert_eq!(user.full_name(), "Ann Lee");
    }

    #[test]
    fn test_user_deserializes_with_missing_privileges() {
        let user: User =
            serde_json::from_str(r#"{"first_name":"Bo","last_name":"Kim","age":-4}"#).unwrap();

        assert_eq!(user, User::new("Bo", "Kim", -4, vec![]));
    }

    #[test]
    fn test_user_serializes_privileges_upper_case() {
        let user = User::new("Bo", "Kim", 40, vec![Privilege::Create]);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["privileges"][0], "CREATE");
        assert_eq!(json["first_name"], "Bo");
    }
}
