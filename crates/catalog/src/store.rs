//! Catalog: fixed-capacity, ordered store of distinct books
//!
//! ## Matching rules
//!
//! Two different rules decide whether an incoming book refers to a stored
//! entry, and they are kept distinct on purpose:
//!
//! - **Insertion** (`add_book`): ISBN equal AND title equal. Every matching
//!   entry gains a copy.
//! - **Lending and deletion** (`check_out`, `check_in`, `delete_book`): ISBN
//!   equal OR title equal. Lending touches every match and reports the
//!   outcome of the last one; deletion removes only the last match.
//!
//! Absent ISBNs compare equal, so a book without an ISBN matches every
//! stored entry without one under the lending rule.
//!
//! ## Capacity
//!
//! Capacity bounds the number of distinct entries. Creating an entry in a
//! full catalog fails with [`Error::CapacityExceeded`]; adding a copy of a
//! stored book never needs a free slot.

use crate::entry::{CatalogEntry, EntryId};
use crate::outcome::{AddOutcome, Outcome};
use crate::report;
use shelfmark_core::{Author, Book, CatalogConfig, Error, Result, YearBounds};
use std::fmt;
use tracing::{debug, warn};

/// Ordered collection of catalog entries with a fixed capacity
///
/// ## Example
///
/// ```rust,ignore
/// use shelfmark_catalog::{Catalog, Outcome};
/// use shelfmark_core::{Author, Book, Isbn};
/// use std::sync::Arc;
///
/// let mut catalog = Catalog::new(10);
/// let herbert = Arc::new(Author::new("Frank", "Herbert"));
/// let dune = Book::new("Dune")
///     .with_author(herbert)
///     .with_isbn(Isbn::new("0441172717")?);
///
/// catalog.add_book(dune.clone())?;
/// catalog.add_book(dune.clone())?;
/// assert_eq!(catalog.total_copies(), 2);
///
/// assert_eq!(catalog.check_out(&dune), Outcome::CheckedOut);
/// assert_eq!(catalog.num_checked_out(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    capacity: usize,
    years: YearBounds,
}

impl Catalog {
    /// Create an empty catalog with default year bounds
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            years: YearBounds::default(),
        }
    }

    /// Create an empty catalog from configuration
    pub fn with_config(config: &CatalogConfig) -> Self {
        Self {
            entries: Vec::new(),
            capacity: config.capacity,
            years: config.years,
        }
    }

    /// Year bounds this catalog was configured with
    ///
    /// Pass these to [`Author::set_life_range`] and [`Book::set_pub_year`]
    /// so records share the catalog's notion of a valid year.
    pub fn year_bounds(&self) -> &YearBounds {
        &self.years
    }

    /// Maximum number of distinct entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Free entry slots
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Look up an entry by handle
    pub fn get(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Current position of an entry
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    fn is_duplicate(stored: &Book, incoming: &Book) -> bool {
        stored.identity_eq(incoming) && stored.same_title(incoming)
    }

    fn is_lending_match(stored: &Book, query: &Book) -> bool {
        stored.identity_eq(query) || stored.same_title(query)
    }

    // ========== Mutations ==========

    /// Add one copy of a book
    ///
    /// A book matching stored entries by ISBN and title adds a copy to each
    /// of them. Otherwise a new single-copy entry is appended.
    ///
    /// # Errors
    ///
    /// `Error::CapacityExceeded` when a new entry is needed and the catalog
    /// is full. The catalog is left unchanged.
    pub fn add_book(&mut self, book: Book) -> Result<AddOutcome> {
        let mut matched = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| Self::is_duplicate(e.book(), &book))
        {
            entry.add_copy();
            matched += 1;
        }
        if matched > 0 {
            debug!(target: "shelfmark::catalog", book = %book, entries = matched, "Copy added");
            return Ok(AddOutcome::CopyAdded { entries: matched });
        }

        if self.entries.len() >= self.capacity {
            warn!(
                target: "shelfmark::catalog",
                book = %book,
                capacity = self.capacity,
                "Catalog full, book rejected"
            );
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let entry = CatalogEntry::new(book);
        let id = entry.id();
        debug!(target: "shelfmark::catalog", book = %entry.book(), %id, "Entry created");
        self.entries.push(entry);
        Ok(AddOutcome::Created(id))
    }

    /// Add one copy of each book, in order
    ///
    /// Not atomic: the first error stops the batch and books before it stay
    /// added.
    pub fn add_books<I>(&mut self, books: I) -> Result<Vec<AddOutcome>>
    where
        I: IntoIterator<Item = Book>,
    {
        books.into_iter().map(|book| self.add_book(book)).collect()
    }

    /// Lend a copy of every entry matching `book`
    ///
    /// Returns the outcome for the last matching entry, or
    /// `Outcome::NotFound`.
    pub fn check_out(&mut self, book: &Book) -> Outcome {
        let mut outcome = Outcome::NotFound;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| Self::is_lending_match(e.book(), book))
        {
            outcome = entry.check_out();
        }
        debug!(target: "shelfmark::catalog", book = %book, ?outcome, "Check out");
        outcome
    }

    /// Return a copy to every entry matching `book`
    ///
    /// Returns the outcome for the last matching entry, or
    /// `Outcome::NotFound`.
    pub fn check_in(&mut self, book: &Book) -> Outcome {
        let mut outcome = Outcome::NotFound;
        for entry in self
            .entries
            .iter_mut()
            .filter(|e| Self::is_lending_match(e.book(), book))
        {
            outcome = entry.check_in();
        }
        debug!(target: "shelfmark::catalog", book = %book, ?outcome, "Check in");
        outcome
    }

    /// Delete the last entry matching `book`
    ///
    /// Later entries move one position earlier; their handles are unchanged.
    pub fn delete_book(&mut self, book: &Book) -> Outcome {
        match self
            .entries
            .iter()
            .rposition(|e| Self::is_lending_match(e.book(), book))
        {
            Some(index) => {
                let removed = self.entries.remove(index);
                debug!(
                    target: "shelfmark::catalog",
                    book = %removed.book(),
                    index,
                    "Entry removed"
                );
                Outcome::Removed
            }
            None => Outcome::NotFound,
        }
    }

    /// Delete an entry by handle, returning it
    pub fn remove(&mut self, id: EntryId) -> Option<CatalogEntry> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);
        debug!(target: "shelfmark::catalog", %id, index, "Entry removed");
        Some(removed)
    }

    // ========== Queries ==========

    /// Copies ever added, across all entries
    pub fn total_copies(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.total_copies())).sum()
    }

    /// Copies on the shelf, across all entries
    pub fn available_copies(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| u64::from(e.available_copies()))
            .sum()
    }

    /// Copies currently lent out
    pub fn num_checked_out(&self) -> u64 {
        self.total_copies() - self.available_copies()
    }

    /// Entries whose author's name is equivalent to `author`
    pub fn find_by_author<'a>(
        &'a self,
        author: &'a Author,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries.iter().filter(move |e| e.book().is_by(author))
    }

    /// Entries whose title contains `needle`, ignoring case
    pub fn find_by_title<'a>(
        &'a self,
        needle: &str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| e.book().title().to_lowercase().contains(&needle))
    }

    /// Number of entries by an author with an equivalent name
    pub fn num_books_by_author(&self, author: &Author) -> usize {
        self.find_by_author(author).count()
    }

    /// One `"Title. Author.\n"` line per entry by `author`
    pub fn list_books_by_author(&self, author: &Author) -> String {
        report::books_by_author(self, author)
    }

    /// One `"Title. Author.\n"` line per entry whose title contains `needle`
    pub fn list_books_by_title(&self, needle: &str) -> String {
        report::books_by_title(self, needle)
    }

    /// Aggregate counts
    pub fn status(&self) -> String {
        report::status(self)
    }

    /// Every entry with its counters, followed by the status
    pub fn listing(&self) -> String {
        report::listing(self)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.listing())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
