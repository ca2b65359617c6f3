//! Error taxonomy for catalog edits and planner runs

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Result type for catalog and planner operations
pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Level of the catalog hierarchy an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Class,
    Module,
    Article,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Class => write!(f, "class"),
            EntityKind::Module => write!(f, "module"),
            EntityKind::Article => write!(f, "article"),
        }
    }
}

/// Errors raised by the catalog and the scheduler
///
/// Catalog errors are raised before any mutation, so a rejected edit leaves
/// the catalog exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// A required name or title was empty or whitespace only
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A sibling with the same name (ignoring case) already exists
    #[error("Duplicate {kind} name '{name}': a {kind} with this name already exists")]
    DuplicateName { kind: EntityKind, name: String },

    /// Duration was zero, negative or too large to represent
    #[error("Invalid duration {0}: duration must be a positive whole number of minutes")]
    InvalidDuration(i64),

    /// The end date lies before the start date
    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The daily limit was zero or negative
    #[error("Invalid daily budget {0}: the daily limit must be a positive number of minutes")]
    InvalidBudget(i64),

    /// A class, module or article reference did not resolve
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntityKind, name: String },

    /// Some tasks did not fit in the requested range
    #[error(
        "Capacity exceeded: {unplaced} task(s) could not be placed; widen the date range or raise the daily limit"
    )]
    CapacityExceeded { unplaced: usize },
}

impl PlanError {
    pub(crate) fn not_found(kind: EntityKind, name: &str) -> Self {
        PlanError::NotFound {
            kind,
            name: name.to_string(),
        }
    }
}
