//! User queries - Read-only transformations over a list of users.
//!
//! Every query borrows its input and returns freshly built results; the
//! caller's slice is never reordered or modified.

use std::collections::{BTreeMap, HashMap};

use domain::{
    DomainError, DomainResult, Privilege, User, EMPTY_AVERAGE_AGE, MIN_REPEATED_OCCURRENCES,
};
use tracing::{debug, warn};

/// Predicate over a single user, combined with logical AND by `filter_by`.
pub type UserPredicate<'a> = Box<dyn Fn(&User) -> bool + Send + Sync + 'a>;

/// User query trait for dependency injection.
///
/// All operations are pure: no I/O, no state kept between calls.
pub trait UserQueries: Send + Sync {
    /// First names sorted in descending lexicographic order (stable)
    fn first_names_reverse_sorted(&self, users: &[User]) -> Vec<String>;

    /// Users sorted by age descending, then first name ascending (stable)
    fn sort_by_age_desc_and_name_asc(&self, users: &[User]) -> Vec<User>;

    /// Every privilege held by any user, in first-occurrence order
    fn distinct_privileges(&self, users: &[User]) -> Vec<Privilege>;

    /// First user holding `UPDATE` whose age is strictly greater than `age`
    fn first_updatable_older_than(&self, users: &[User], age: i32) -> Option<User>;

    /// Users grouped by the size of their privilege collection
    fn group_by_privilege_count(&self, users: &[User]) -> BTreeMap<usize, Vec<User>>;

    /// Mean age, or [`EMPTY_AVERAGE_AGE`] when there are no users
    fn average_age(&self, users: &[User]) -> f64;

    /// Most common repeated last name; ties go to the name seen first
    fn most_frequent_last_name(&self, users: &[User]) -> Option<String>;

    /// Users matching every predicate; no predicates keeps everyone
    fn filter_by(&self, users: &[User], predicates: &[UserPredicate<'_>]) -> Vec<User>;

    /// Map each user to a string and join the results with `delimiter`
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidArgument`] when `users` is empty.
    fn join_with(
        &self,
        users: &[User],
        delimiter: &str,
        map_fn: &dyn Fn(&User) -> String,
    ) -> DomainResult<String>;

    /// Users grouped under each privilege they hold
    fn group_by_privilege(&self, users: &[User]) -> BTreeMap<Privilege, Vec<User>>;

    /// Number of users per last name
    fn count_by_last_name(&self, users: &[User]) -> HashMap<String, u64>;
}

/// Stateless implementation of [`UserQueries`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UserQueryManager;

impl UserQueryManager {
    /// Create new query service instance
    pub fn new() -> Self {
        Self
    }
}

/// Last-name counts in first-occurrence order.
fn last_name_counts(users: &[User]) -> Vec<(&str, u64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, u64)> = Vec::new();

    for user in users {
        let name = user.last_name.as_str();
        match index.get(name) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    counts
}

impl UserQueries for UserQueryManager {
    fn first_names_reverse_sorted(&self, users: &[User]) -> Vec<String> {
        let mut names: Vec<String> = users.iter().map(|u| u.first_name.clone()).collect();
        names.sort_by(|a, b| b.cmp(a));
        debug!(users = users.len(), "Sorted first names in reverse order");
        names
    }

    fn sort_by_age_desc_and_name_asc(&self, users: &[User]) -> Vec<User> {
        let mut sorted = users.to_vec();
        sorted.sort_by(|a, b| {
            b.age
                .cmp(&a.age)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        debug!(users = users.len(), "Sorted users by age and first name");
        sorted
    }

    fn distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        let mut distinct: Vec<Privilege> = Vec::with_capacity(Privilege::ALL.len());
        for privilege in users.iter().flat_map(|u| u.privileges.iter().copied()) {
            if !distinct.contains(&privilege) {
                distinct.push(privilege);
            }
        }
        debug!(users = users.len(), distinct = distinct.len(), "Collected distinct privileges");
        distinct
    }

    fn first_updatable_older_than(&self, users: &[User], age: i32) -> Option<User> {
        let found = users
            .iter()
            .find(|u| u.has_privilege(Privilege::Update) && u.age > age)
            .cloned();
        debug!(users = users.len(), age, found = found.is_some(), "Searched for updatable user");
        found
    }

    fn group_by_privilege_count(&self, users: &[User]) -> BTreeMap<usize, Vec<User>> {
        let mut groups: BTreeMap<usize, Vec<User>> = BTreeMap::new();
        for user in users {
            groups
                .entry(user.privilege_count())
                .or_default()
                .push(user.clone());
        }
        debug!(users = users.len(), groups = groups.len(), "Grouped users by privilege count");
        groups
    }

    fn average_age(&self, users: &[User]) -> f64 {
        if users.is_empty() {
            debug!("No users to average, returning sentinel");
            return EMPTY_AVERAGE_AGE;
        }

        let total: i64 = users.iter().map(|u| i64::from(u.age)).sum();
        total as f64 / users.len() as f64
    }

    fn most_frequent_last_name(&self, users: &[User]) -> Option<String> {
        // max_by_key keeps the last maximum, so pick the earliest by hand
        let mut best: Option<(&str, u64)> = None;
        for (name, count) in last_name_counts(users) {
            if count <= MIN_REPEATED_OCCURRENCES {
                continue;
            }
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((name, count));
            }
        }

        debug!(users = users.len(), found = best.is_some(), "Computed most frequent last name");
        best.map(|(name, _)| name.to_string())
    }

    fn filter_by(&self, users: &[User], predicates: &[UserPredicate<'_>]) -> Vec<User> {
        let matched: Vec<User> = users
            .iter()
            .filter(|&user| predicates.iter().all(|predicate| predicate(user)))
            .cloned()
            .collect();
        debug!(
            users = users.len(),
            predicates = predicates.len(),
            matched = matched.len(),
            "Filtered users"
        );
        matched
    }

    fn join_with(
        &self,
        users: &[User],
        delimiter: &str,
        map_fn: &dyn Fn(&User) -> String,
    ) -> DomainResult<String> {
        if users.is_empty() {
            warn!("Refusing to join an empty user list");
            return Err(DomainError::invalid_argument("cannot join an empty list of users"));
        }

        let joined = users
            .iter()
            .map(map_fn)
            .collect::<Vec<_>>()
            .join(delimiter);
        debug!(users = users.len(), "Joined users");
        Ok(joined)
    }

    fn group_by_privilege(&self, users: &[User]) -> BTreeMap<Privilege, Vec<User>> {
        let mut groups: BTreeMap<Privilege, Vec<User>> = BTreeMap::new();
        for user in users {
            for privilege in &user.privileges {
                groups.entry(*privilege).or_default().push(user.clone());
            }
        }
        debug!(users = users.len(), groups = groups.len(), "Grouped users by privilege");
        groups
    }

    fn count_by_last_name(&self, users: &[User]) -> HashMap<String, u64> {
        last_name_counts(users)
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect()
    }
}
