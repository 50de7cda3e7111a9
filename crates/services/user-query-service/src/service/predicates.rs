//! Reusable predicates for [`UserQueries::filter_by`](super::UserQueries::filter_by).

use domain::{Privilege, User};

use super::UserPredicate;

/// Users strictly older than `age`
pub fn older_than<'a>(age: i32) -> UserPredicate<'a> {
    Box::new(move |user: &User| user.age > age)
}

/// Users holding `privilege`
pub fn has_privilege<'a>(privilege: Privilege) -> UserPredicate<'a> {
    Box::new(move |user: &User| user.has_privilege(privilege))
}

/// Users whose last name equals `name` exactly
pub fn last_name_is<'a>(name: impl Into<String>) -> UserPredicate<'a> {
    let name = name.into();
    Box::new(move |user: &User| user.last_name == name)
}

/// Users whose first name starts with `prefix`
pub fn first_name_starts_with<'a>(prefix: impl Into<String>) -> UserPredicate<'a> {
    let prefix = prefix.into();
    Box::new(move |user: &User| user.first_name.starts_with(prefix.as_str()))
}
