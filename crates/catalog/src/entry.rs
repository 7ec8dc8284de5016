//! Catalog entries and their handles
//!
//! A [`CatalogEntry`] pairs one distinct book with its copy counters. The
//! counters obey `available_copies <= total_copies` at all times: only the
//! catalog mutates them, through the transitions defined here.

use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use shelfmark_core::Book;
use std::fmt;
use uuid::Uuid;

/// Stable handle for a catalog entry
///
/// Positions shift when earlier entries are deleted; an `EntryId` does not.
/// It is a wrapper around a UUID v4 assigned when the entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random EntryId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an EntryId from its string form
    ///
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One distinct book with its copy counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    id: EntryId,
    book: Book,
    total_copies: u32,
    available_copies: u32,
}

impl CatalogEntry {
    /// A fresh entry holds a single copy, on the shelf
    pub(crate) fn new(book: Book) -> Self {
        Self {
            id: EntryId::new(),
            book,
            total_copies: 1,
            available_copies: 1,
        }
    }

    /// Stable handle of this entry
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The book this entry tracks
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Every copy ever added
    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    /// Copies currently on the shelf
    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Copies currently lent out
    pub fn checked_out(&self) -> u32 {
        self.total_copies - self.available_copies
    }

    /// New copies arrive on the shelf, raising both counters
    pub(crate) fn add_copy(&mut self) {
        self.total_copies += 1;
        self.available_copies += 1;
    }

    pub(crate) fn check_out(&mut self) -> Outcome {
        if self.available_copies == 0 {
            return Outcome::NoCopiesAvailable;
        }
        self.available_copies -= 1;
        Outcome::CheckedOut
    }

    pub(crate) fn check_in(&mut self) -> Outcome {
        if self.available_copies == self.total_copies {
            return Outcome::AlreadyCheckedIn;
        }
        self.available_copies += 1;
        Outcome::CheckedIn
    }
}
