//! International Standard Book Number
//!
//! ## Validation
//!
//! An ISBN must be exactly 10 or 13 characters long. Content is not checked:
//! hyphens, check digits and prefixes are the caller's concern.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted ISBN lengths in characters
pub const ISBN_LENGTHS: [usize; 2] = [10, 13];

/// A length-checked ISBN
///
/// ## Examples
///
/// Valid:
/// - "0441172717" (ISBN-10)
/// - "9780441172719" (ISBN-13)
///
/// Invalid:
/// - "" (empty)
/// - "12345" (too short)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Create a new Isbn, validating its length
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidIsbnLength` for any length other
    /// than 10 or 13 characters.
    pub fn new(isbn: impl Into<String>) -> Result<Self, ValidationError> {
        let isbn = isbn.into();
        Self::validate(&isbn)?;
        Ok(Isbn(isbn))
    }

    /// Validate an ISBN string
    pub fn validate(isbn: &str) -> Result<(), ValidationError> {
        let length = isbn.chars().count();
        if !ISBN_LENGTHS.contains(&length) {
            return Err(ValidationError::InvalidIsbnLength { length });
        }
        Ok(())
    }

    /// Get the ISBN as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Isbn {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Isbn::new(value)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Isbn::new(value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

// ============================================================================
// Tests
// ============================================================================
