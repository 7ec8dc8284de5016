//! Shelfmark - in-memory library catalog engine
//!
//! Shelfmark tracks a bounded catalog of books: how many copies of each title
//! the library owns and how many are on the shelf. It supports lending,
//! duplicate-aware insertion, deletion, and lookup by author or title.
//!
//! # Quick Start
//!
//! ```ignore
//! use shelfmark::{Author, Book, Catalog, Isbn, Outcome};
//! use std::sync::Arc;
//!
//! let mut catalog = Catalog::new(100);
//! let herbert = Arc::new(Author::new("Frank", "Herbert"));
//! let dune = Book::new("Dune")
//!     .with_author(herbert)
//!     .with_isbn(Isbn::new("0441172717")?);
//!
//! catalog.add_book(dune.clone())?;
//! assert_eq!(catalog.check_out(&dune), Outcome::CheckedOut);
//! println!("{}", catalog.status());
//! ```
//!
//! # Architecture
//!
//! - `shelfmark-core`: author and book value types, validation, configuration
//! - `shelfmark-catalog`: the catalog store, outcomes and reports

pub use shelfmark_catalog::*;
pub use shelfmark_core::{
    Author, Book, CatalogConfig, Error, Isbn, Result, ValidationError, YearBounds,
    CONFIG_FILE_NAME, DEFAULT_CAPACITY, UNKNOWN_NAME, UNKNOWN_TITLE,
};
