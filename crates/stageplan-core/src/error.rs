//! Error types for the planner library.
//!
//! Hard failures (unreadable snapshot, unknown unit, bad arguments) are
//! [`PlannerError`] values. Recoverable domain conditions have their own
//! types: malformed duration vectors surface as [`DurationError`] and are
//! turned into validation notes by the resolver, scheduling conflicts are
//! [`Rejection`] values carried inside an availability verdict.

use std::path::PathBuf;

use jiff::civil::Date;
use serde::Serialize;
use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Unit not found for the given ID
    #[error("Unit with ID '{id}' not found")]
    UnitNotFound { id: String },
    /// Assignment not found on the given unit
    #[error("Assignment '{assignment_id}' not found on unit '{unit_id}'")]
    AssignmentNotFound {
        unit_id: String,
        assignment_id: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Reasons a raw duration vector cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationError {
    /// The payload was neither a list nor a string holding a list
    #[error("duration vector must be a list of six numbers")]
    NotAList,
    /// A string payload did not contain valid JSON
    #[error("duration vector string is not valid JSON: {0}")]
    Malformed(String),
    /// The list has the wrong number of entries
    #[error("duration vector has {found} entries, expected 6")]
    WrongLength { found: usize },
    /// An entry is not a finite number
    #[error("duration at position {position} is not a finite number")]
    NotANumber { position: usize },
    /// An entry is negative
    #[error("duration at position {position} is negative ({value})")]
    Negative { position: usize, value: f64 },
    /// An entry exceeds the longest supported stage
    #[error("duration at position {position} is too long ({value} days)")]
    TooLong { position: usize, value: f64 },
}

/// Why a candidate assignment was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The candidate start precedes the unit's delivery date
    #[error("unit not yet available (available from {available_from}, requested {requested})")]
    NotYetAvailable { available_from: Date, requested: Date },
    /// The candidate span intersects an existing assignment
    #[error("unit busy on requested dates (conflicts with assignment '{assignment_id}' {start}..{end})")]
    Busy {
        assignment_id: String,
        start: Date,
        end: Date,
    },
}

impl Rejection {
    /// Short, stable reason string for callers that only need the category.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NotYetAvailable { .. } => "unit not yet available",
            Rejection::Busy { .. } => "unit busy on requested dates",
        }
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
