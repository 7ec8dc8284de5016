//! Book record
//!
//! A [`Book`] describes one title, not one physical copy; copy counts live in
//! the catalog. Every field may be absent. Absent fields are resolved to
//! display defaults only when formatted.
//!
//! ## Identity
//!
//! [`Book::identity_eq`] compares ISBNs only. Two books without an ISBN are
//! therefore identical, whatever their titles.

use crate::author::Author;
use crate::error::ValidationError;
use crate::isbn::Isbn;
use crate::years::YearBounds;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Display text for an absent title
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// A book title with optional author, publication year and ISBN
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: Option<String>,
    author: Option<Arc<Author>>,
    pub_year: Option<i32>,
    isbn: Option<Isbn>,
}

impl Book {
    /// Create a book with a title; an empty title is treated as absent
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Book {
            title: (!title.is_empty()).then_some(title),
            ..Book::default()
        }
    }

    /// Create a book with every field absent
    pub fn untitled() -> Self {
        Book::default()
    }

    /// Attach an author
    pub fn with_author(mut self, author: Arc<Author>) -> Self {
        self.author = Some(author);
        self
    }

    /// Attach an already validated ISBN
    pub fn with_isbn(mut self, isbn: Isbn) -> Self {
        self.isbn = Some(isbn);
        self
    }

    /// Title, or [`UNKNOWN_TITLE`]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// Referenced author, if any
    pub fn author(&self) -> Option<&Arc<Author>> {
        self.author.as_ref()
    }

    /// Publication year, if recorded
    pub fn pub_year(&self) -> Option<i32> {
        self.pub_year
    }

    /// ISBN, if recorded
    pub fn isbn(&self) -> Option<&Isbn> {
        self.isbn.as_ref()
    }

    /// Replace the title; the empty string is rejected
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        if title.is_empty() {
            let e = ValidationError::EmptyTitle;
            warn!(target: "shelfmark::book", book = %self, error = %e, "Title rejected");
            return Err(e);
        }
        self.title = Some(title);
        Ok(())
    }

    /// Replace the author reference
    pub fn set_author(&mut self, author: Arc<Author>) {
        self.author = Some(author);
    }

    /// Record the publication year
    ///
    /// Year zero is rejected, as is any year not strictly inside `bounds`.
    pub fn set_pub_year(&mut self, year: i32, bounds: &YearBounds) -> Result<(), ValidationError> {
        let checked = if year == 0 {
            Err(ValidationError::ZeroYear)
        } else if !bounds.contains_exclusive(year) {
            Err(bounds.out_of_range(year))
        } else {
            Ok(())
        };
        if let Err(e) = checked {
            warn!(target: "shelfmark::book", book = %self, year, error = %e, "Publication year rejected");
            return Err(e);
        }
        self.pub_year = Some(year);
        Ok(())
    }

    /// Record the ISBN; must be 10 or 13 characters
    pub fn set_isbn(&mut self, isbn: &str) -> Result<(), ValidationError> {
        match Isbn::new(isbn) {
            Ok(isbn) => {
                self.isbn = Some(isbn);
                Ok(())
            }
            Err(e) => {
                warn!(target: "shelfmark::book", book = %self, isbn, error = %e, "ISBN rejected");
                Err(e)
            }
        }
    }

    /// Whether both books' authors have equivalent names
    ///
    /// An absent author compares as [`Author::unknown`].
    pub fn same_author(&self, other: &Book) -> bool {
        match other.author.as_deref() {
            Some(theirs) => self.is_by(theirs),
            None => self.is_by(&Author::unknown()),
        }
    }

    /// Whether this book's author has a name equivalent to `author`
    ///
    /// An absent author compares as [`Author::unknown`].
    pub fn is_by(&self, author: &Author) -> bool {
        match self.author.as_deref() {
            Some(mine) => mine.has_same_name(author),
            None => Author::unknown().has_same_name(author),
        }
    }

    /// Identity by ISBN alone; two absent ISBNs are equal
    pub fn identity_eq(&self, other: &Book) -> bool {
        self.isbn == other.isbn
    }

    /// Whether the stored titles are exactly equal; two absent titles are equal
    pub fn same_title(&self, other: &Book) -> bool {
        self.title == other.title
    }

    /// Compact author form, resolving an absent author
    pub fn author_display(&self) -> String {
        match &self.author {
            Some(author) => author.to_string(),
            None => Author::unknown().to_string(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.isbn.is_none() && self.author.is_none() && self.pub_year.is_none() {
            return write!(f, "{}.", self.title());
        }
        match self.pub_year {
            None => write!(f, "{}. {}.", self.title(), self.author_display()),
            Some(year) => write!(f, "{} ({}). {}.", self.title(), year, self.author_display()),
        }
    }
}
