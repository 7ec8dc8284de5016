//! Human-readable catalog reports
//!
//! Read-only views over a [`Catalog`]. The output is meant for people;
//! callers that need data should use the catalog's query methods instead.

use crate::store::Catalog;
use shelfmark_core::Author;

/// Unique entries, total copies and copies checked out, one per line
pub fn status(catalog: &Catalog) -> String {
    format!(
        "Total unique books: {}\nTotal number of copies: {}\nTotal checked out: {}",
        catalog.len(),
        catalog.total_copies(),
        catalog.num_checked_out()
    )
}

/// `"<index>. Title. Author. : available/total"` per entry, then the status
pub fn listing(catalog: &Catalog) -> String {
    let mut out: String = catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{}. {}. {}. : {}/{}\n",
                index,
                entry.book().title(),
                entry.book().author_display(),
                entry.available_copies(),
                entry.total_copies()
            )
        })
        .collect();
    out.push('\n');
    out.push_str(&status(catalog));
    out
}

/// Titles by `author`, each followed by the queried author's name
pub fn books_by_author(catalog: &Catalog, author: &Author) -> String {
    let lines: String = catalog
        .find_by_author(author)
        .map(|entry| format!("{}. {}.\n", entry.book().title(), author))
        .collect();
    if lines.is_empty() {
        format!("No books by {}.", author)
    } else {
        lines
    }
}

/// Titles containing `needle` (any case), each with its own author
pub fn books_by_title(catalog: &Catalog, needle: &str) -> String {
    let lines: String = catalog
        .find_by_title(needle)
        .map(|entry| format!("{}. {}.\n", entry.book().title(), entry.book().author_display()))
        .collect();
    if lines.is_empty() {
        format!("No books with \"{}\" in the title.", needle)
    } else {
        lines
    }
}
