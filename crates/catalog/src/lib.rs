//! Catalog layer for Shelfmark
//!
//! Provides the catalog store and its read-only reports:
//! - **Catalog**: fixed-capacity ordered store of distinct books with copy
//!   counters, lending and deletion
//! - **CatalogEntry / EntryId**: one distinct book with its counters, and its
//!   stable handle
//! - **Outcome / AddOutcome**: machine-readable results of catalog operations
//! - **report**: human-readable status and listings
//!
//! ## Design Principle: Outcomes, Not Errors
//!
//! Lending and deletion always succeed at the API level and report what
//! happened through [`Outcome`]. Only creating an entry in a full catalog
//! returns an error.
//!
//! ```rust,ignore
//! use shelfmark_catalog::{Catalog, Outcome};
//!
//! match catalog.check_out(&book) {
//!     Outcome::CheckedOut => println!("Enjoy"),
//!     Outcome::NoCopiesAvailable => println!("Try again later"),
//!     other => println!("{}", other),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod outcome;
pub mod report;
pub mod store;

pub use entry::{CatalogEntry, EntryId};
pub use outcome::{AddOutcome, Outcome};
pub use store::Catalog;
