//! Domain-level constants.
//!
//! These constants define the fixed values the user queries rely on.

// =============================================================================
// Aggregation
// =============================================================================

/// Value reported by the average age query when there are no users
pub const EMPTY_AVERAGE_AGE: f64 = -1.0;

/// A last name must occur more often than this to count as "frequent"
pub const MIN_REPEATED_OCCURRENCES: u64 = 1;

