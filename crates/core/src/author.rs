//! Author identity
//!
//! An [`Author`] is a value: given name, surname and an optional life range.
//! Books reference authors through `Arc<Author>`, so one author value is
//! typically shared by every book it wrote.
//!
//! ## Name equivalence
//!
//! [`Author::has_same_name`] is the only notion of "same author" used by the
//! catalog. It is deliberately loose: an initial stands in for a full given
//! name, so "J Doe" matches both "Jane Doe" and "John Doe".

use crate::error::ValidationError;
use crate::years::YearBounds;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Display text for an absent given name or surname
pub const UNKNOWN_NAME: &str = "Unknown";

/// A book author
///
/// Empty names are stored as absent and read back as [`UNKNOWN_NAME`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    given_name: Option<String>,
    surname: Option<String>,
    birth_year: Option<i32>,
    death_year: Option<i32>,
}

fn non_empty(s: impl Into<String>) -> Option<String> {
    let s = s.into();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

impl Author {
    /// Create an author; empty strings become absent names
    pub fn new(given_name: impl Into<String>, surname: impl Into<String>) -> Self {
        Author {
            given_name: non_empty(given_name),
            surname: non_empty(surname),
            birth_year: None,
            death_year: None,
        }
    }

    /// The author with no known name
    pub fn unknown() -> Self {
        Author::default()
    }

    /// Whether neither name is known
    pub fn is_unknown(&self) -> bool {
        self.given_name.is_none() && self.surname.is_none()
    }

    /// Given name, or [`UNKNOWN_NAME`]
    pub fn given_name(&self) -> &str {
        self.given_name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// Surname, or [`UNKNOWN_NAME`]
    pub fn surname(&self) -> &str {
        self.surname.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// Birth year, if recorded
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_year
    }

    /// Death year, if recorded
    pub fn death_year(&self) -> Option<i32> {
        self.death_year
    }

    /// Record a birth year
    ///
    /// Rejected when outside `bounds` or later than a recorded death year.
    /// A rejected year leaves the author unchanged.
    pub fn set_birth_year(&mut self, birth: i32, bounds: &YearBounds) -> Result<(), ValidationError> {
        let checked = bounds.check(birth).and_then(|()| match self.death_year {
            Some(death) if death < birth => Err(ValidationError::DeathBeforeBirth { birth, death }),
            _ => Ok(()),
        });
        if let Err(e) = checked {
            warn!(target: "shelfmark::author", author = %self, birth, error = %e, "Birth year rejected");
            return Err(e);
        }
        self.birth_year = Some(birth);
        Ok(())
    }

    /// Record both birth and death years
    ///
    /// Rejected when `death < birth`, `birth` is before the start of `bounds`
    /// or `death` is after its end. Both years are assigned together or not
    /// at all.
    pub fn set_life_range(
        &mut self,
        birth: i32,
        death: i32,
        bounds: &YearBounds,
    ) -> Result<(), ValidationError> {
        let checked = if death < birth {
            Err(ValidationError::DeathBeforeBirth { birth, death })
        } else if birth < bounds.start() {
            Err(bounds.out_of_range(birth))
        } else if death > bounds.end() {
            Err(bounds.out_of_range(death))
        } else {
            Ok(())
        };
        if let Err(e) = checked {
            warn!(target: "shelfmark::author", author = %self, birth, death, error = %e, "Life range rejected");
            return Err(e);
        }
        self.birth_year = Some(birth);
        self.death_year = Some(death);
        Ok(())
    }

    /// Loose name equivalence, ignoring case
    ///
    /// Surnames must be equal. Given names must either be equal, or share
    /// their first character with at least one side being a single
    /// character (an initial).
    pub fn has_same_name(&self, other: &Author) -> bool {
        if self.surname().to_lowercase() != other.surname().to_lowercase() {
            return false;
        }

        let given = self.given_name().to_lowercase();
        let other_given = other.given_name().to_lowercase();
        if given == other_given {
            return true;
        }

        let one_is_initial =
            self.given_name().chars().count() == 1 || other.given_name().chars().count() == 1;
        one_is_initial && given.chars().next() == other_given.chars().next()
    }

    /// Compact form plus whatever life range is known
    ///
    /// `"Surname, Given"`, `"Surname, Given (born 1920)"` or
    /// `"Surname, Given (1920-1986)"`.
    pub fn info_string(&self) -> String {
        match (self.birth_year, self.death_year) {
            (Some(birth), Some(death)) => format!("{} ({}-{})", self, birth, death),
            (Some(birth), None) => format!("{} (born {})", self, birth),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.surname(), self.given_name())
    }
}
