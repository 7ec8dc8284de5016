//! Operation outcomes
//!
//! Lending and deletion never fail with an error: every call produces
//! exactly one [`Outcome`]. Match on the variant; the `Display` text is
//! meant for people and may change.

use crate::entry::EntryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a check-out, check-in or delete
///
/// | Operation | Possible outcomes |
/// |-----------|-------------------|
/// | `check_out` | `CheckedOut`, `NoCopiesAvailable`, `NotFound` |
/// | `check_in` | `CheckedIn`, `AlreadyCheckedIn`, `NotFound` |
/// | `delete_book` | `Removed`, `NotFound` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A copy left the shelf
    CheckedOut,
    /// Every copy is already lent out
    NoCopiesAvailable,
    /// A copy returned to the shelf
    CheckedIn,
    /// Every copy is already on the shelf
    AlreadyCheckedIn,
    /// The entry was deleted
    Removed,
    /// No entry matched the book
    NotFound,
}

impl Outcome {
    /// Whether the operation changed catalog state
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::CheckedOut | Outcome::CheckedIn | Outcome::Removed
        )
    }

    /// Operator-facing message
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::CheckedOut => "Checked out!",
            Outcome::NoCopiesAvailable => "All out of copies.",
            Outcome::CheckedIn => "Checked in!",
            Outcome::AlreadyCheckedIn => "All of our copies are already checked in.",
            Outcome::Removed => "Book removed.",
            Outcome::NotFound => "Book not found.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of adding a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddOutcome {
    /// The book was new; a single-copy entry was appended
    Created(EntryId),
    /// The book matched existing entries; each gained a copy
    CopyAdded {
        /// Number of entries that matched
        entries: usize,
    },
}

impl AddOutcome {
    /// Handle of the newly created entry, if one was created
    pub fn created(&self) -> Option<EntryId> {
        match self {
            AddOutcome::Created(id) => Some(*id),
            AddOutcome::CopyAdded { .. } => None,
        }
    }
}
