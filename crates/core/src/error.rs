//! Error types for Shelfmark
//!
//! Two tiers of failure exist:
//! - [`ValidationError`]: a rejected field update on an author or book. The
//!   field keeps its previous value.
//! - [`Error`]: a failed catalog or configuration operation.
//!
//! Lending and deletion outcomes (not found, no copies left, ...) are not
//! errors; they are reported through the catalog's outcome enum.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Result type alias for Shelfmark operations
pub type Result<T> = std::result::Result<T, Error>;

/// A rejected field value on an [`Author`](crate::Author) or [`Book`](crate::Book)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ValidationError {
    /// Title was the empty string
    #[error("title cannot be empty")]
    EmptyTitle,

    /// Year lies outside the configured bounds
    #[error("year {year} is outside the valid range {start}..={end}")]
    YearOutOfRange {
        /// Rejected year
        year: i32,
        /// Lower bound in effect
        start: i32,
        /// Upper bound in effect
        end: i32,
    },

    /// Death year precedes birth year
    #[error("death year {death} precedes birth year {birth}")]
    DeathBeforeBirth {
        /// Birth year
        birth: i32,
        /// Death year
        death: i32,
    },

    /// Publication year zero does not exist
    #[error("publication year cannot be zero")]
    ZeroYear,

    /// ISBN was neither 10 nor 13 characters long
    #[error("isbn must be 10 or 13 characters, got {length}")]
    InvalidIsbnLength {
        /// Character count of the rejected value
        length: usize,
    },

    /// Year bounds with start after end
    #[error("invalid year bounds: start {start} is after end {end}")]
    InvertedBounds {
        /// Configured start
        start: i32,
        /// Configured end
        end: i32,
    },
}

/// Error types for catalog and configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// A value failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A new entry was requested while every slot is taken
    #[error("Catalog is full: capacity of {capacity} entries reached")]
    CapacityExceeded {
        /// Fixed capacity of the catalog
        capacity: usize,
    },

    /// Configuration could not be parsed or serialized
    #[error("Configuration error: {reason}")]
    Config {
        /// Human-readable cause
        reason: String,
    },

    /// I/O error while reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a configuration error from any displayable cause
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }
}
