//! Core types for Shelfmark
//!
//! This crate defines the value types the catalog operates on:
//! - Author: author identity with loose name equivalence
//! - Book: book record with ISBN identity
//! - Isbn: length-checked ISBN
//! - YearBounds: valid year range used by the validating setters
//! - CatalogConfig: capacity and year bounds, loadable from `shelfmark.toml`
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod author;
pub mod book;
pub mod config;
pub mod error;
pub mod isbn;
pub mod years;

pub use author::{Author, UNKNOWN_NAME};
pub use book::{Book, UNKNOWN_TITLE};
pub use config::{CatalogConfig, CONFIG_FILE_NAME, DEFAULT_CAPACITY};
pub use error::{Error, Result, ValidationError};
pub use isbn::{Isbn, ISBN_LENGTHS};
pub use years::{YearBounds, DEFAULT_YEAR_END, DEFAULT_YEAR_START};
