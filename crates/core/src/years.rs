//! Valid year bounds
//!
//! Birth, death and publication years are checked against a [`YearBounds`]
//! value. Bounds are ordinary configuration: each catalog holds its own copy
//! and callers pass it explicitly to the validating setters, so two catalogs
//! with different bounds never interfere.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Default lower bound (inclusive)
pub const DEFAULT_YEAR_START: i32 = -1999;

/// Default upper bound (inclusive)
pub const DEFAULT_YEAR_END: i32 = 2023;

/// Inclusive range of years accepted for authors and publications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearBounds {
    #[serde(default = "default_start")]
    start: i32,
    #[serde(default = "default_end")]
    end: i32,
}

fn default_start() -> i32 {
    DEFAULT_YEAR_START
}

fn default_end() -> i32 {
    DEFAULT_YEAR_END
}

impl Default for YearBounds {
    fn default() -> Self {
        YearBounds {
            start: DEFAULT_YEAR_START,
            end: DEFAULT_YEAR_END,
        }
    }
}

impl YearBounds {
    /// Create bounds, rejecting `start > end`
    pub fn new(start: i32, end: i32) -> Result<Self, ValidationError> {
        let bounds = YearBounds { start, end };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Lower bound (inclusive)
    #[inline]
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Upper bound (inclusive)
    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Check the bounds themselves are ordered
    ///
    /// Deserialized bounds bypass [`YearBounds::new`], so config loading
    /// calls this explicitly.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start > self.end {
            return Err(ValidationError::InvertedBounds {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether `year` lies within the bounds, ends included
    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Whether `year` lies strictly between the bounds
    #[inline]
    pub fn contains_exclusive(&self, year: i32) -> bool {
        year > self.start && year < self.end
    }

    /// Validate an inclusive year
    pub fn check(&self, year: i32) -> Result<(), ValidationError> {
        if !self.contains(year) {
            return Err(self.out_of_range(year));
        }
        Ok(())
    }

    pub(crate) fn out_of_range(&self, year: i32) -> ValidationError {
        ValidationError::YearOutOfRange {
            year,
            start: self.start,
            end: self.end,
        }
    }
}
