//! End-to-end lending workflow through the `shelfmark` facade
//!
//! Exercises a catalog configured from `shelfmark.toml`, the way an external
//! driver would: build records, stock the shelves, lend, return, weed out
//! titles, and print reports.

use std::sync::{Arc, Once};

use shelfmark::{
    AddOutcome, Author, Book, Catalog, CatalogConfig, Error, Isbn, Outcome, ValidationError,
    CONFIG_FILE_NAME,
};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

static INIT_TRACING: Once = Once::new();

fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn catalog_from_file(contents: &str) -> (Catalog, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, contents).unwrap();
    let config = CatalogConfig::from_file(&path).unwrap();
    (Catalog::with_config(&config), dir)
}

struct Shelf {
    le_guin: Arc<Author>,
    earthsea: Book,
    dispossessed: Book,
    beloved: Book,
}

fn shelf(catalog: &Catalog) -> Shelf {
    let bounds = catalog.year_bounds();

    let mut le_guin = Author::new("Ursula", "Le Guin");
    le_guin.set_life_range(1929, 2018, bounds).unwrap();
    let le_guin = Arc::new(le_guin);

    let mut earthsea = Book::new("A Wizard of Earthsea").with_author(le_guin.clone());
    earthsea.set_isbn("9780547773742").unwrap();
    earthsea.set_pub_year(1968, bounds).unwrap();

    let dispossessed = Book::new("The Dispossessed")
        .with_author(le_guin.clone())
        .with_isbn(Isbn::new("0060512759").unwrap());

    let beloved = Book::new("Beloved")
        .with_author(Arc::new(Author::new("Toni", "Morrison")))
        .with_isbn(Isbn::new("1400033411").unwrap());

    Shelf {
        le_guin,
        earthsea,
        dispossessed,
        beloved,
    }
}

// ============================================================================
// Workflow
// ============================================================================

#[test]
fn test_full_lending_cycle() {
    init_tracing();
    let (mut catalog, _dir) = catalog_from_file("capacity = 3\n");
    let s = shelf(&catalog);

    let outcomes = catalog
        .add_books(vec![
            s.earthsea.clone(),
            s.earthsea.clone(),
            s.dispossessed.clone(),
            s.beloved.clone(),
        ])
        .unwrap();
    assert!(matches!(outcomes[1], AddOutcome::CopyAdded { entries: 1 }));
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.remaining(), 0);
    assert_eq!(catalog.total_copies(), 4);

    // Lend both copies of Earthsea, then try a third
    assert_eq!(catalog.check_out(&s.earthsea), Outcome::CheckedOut);
    assert_eq!(catalog.check_out(&s.earthsea), Outcome::CheckedOut);
    assert_eq!(catalog.check_out(&s.earthsea), Outcome::NoCopiesAvailable);
    assert_eq!(catalog.num_checked_out(), 2);

    assert_eq!(
        catalog.status(),
        "Total unique books: 3\nTotal number of copies: 4\nTotal checked out: 2"
    );

    // One comes back
    assert_eq!(catalog.check_in(&s.earthsea), Outcome::CheckedIn);
    assert_eq!(catalog.num_checked_out(), 1);

    // Weed out Beloved, which frees a slot
    assert_eq!(catalog.delete_book(&s.beloved), Outcome::Removed);
    assert_eq!(catalog.remaining(), 1);
    assert_eq!(catalog.check_out(&s.beloved), Outcome::NotFound);

    let listing = catalog.to_string();
    assert!(listing.starts_with(
        "0. A Wizard of Earthsea. Le Guin, Ursula. : 1/2\n\
         1. The Dispossessed. Le Guin, Ursula. : 1/1\n\n"
    ));
}

#[test]
fn test_full_catalog_reports_capacity() {
    init_tracing();
    let (mut catalog, _dir) = catalog_from_file("capacity = 1\n");
    let s = shelf(&catalog);

    catalog.add_book(s.earthsea.clone()).unwrap();
    let err = catalog.add_book(s.beloved.clone()).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { capacity: 1 }));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_author_reports() {
    init_tracing();
    let (mut catalog, _dir) = catalog_from_file("");
    let s = shelf(&catalog);
    catalog
        .add_books(vec![s.earthsea.clone(), s.dispossessed.clone(), s.beloved.clone()])
        .unwrap();

    let initial = Author::new("U", "le guin");
    assert_eq!(catalog.num_books_by_author(&initial), 2);
    assert!(s.earthsea.same_author(&s.dispossessed));
    assert_eq!(s.le_guin.info_string(), "Le Guin, Ursula (1929-2018)");
    assert_eq!(
        catalog.list_books_by_author(&initial),
        "A Wizard of Earthsea. le guin, U.\nThe Dispossessed. le guin, U.\n"
    );
    assert_eq!(
        catalog.list_books_by_title("the"),
        "The Dispossessed. Le Guin, Ursula.\n"
    );
    assert_eq!(
        catalog.list_books_by_title("xyz"),
        "No books with \"xyz\" in the title."
    );
}

#[test]
fn test_configured_year_bounds_apply() {
    init_tracing();
    let (catalog, _dir) = catalog_from_file("[years]\nstart = 1900\nend = 1950\n");
    let bounds = catalog.year_bounds();

    let mut author = Author::new("Ursula", "Le Guin");
    let err = author.set_life_range(1929, 2018, bounds).unwrap_err();
    assert!(matches!(err, ValidationError::YearOutOfRange { year: 2018, .. }));
    assert_eq!(author.death_year(), None);

    let mut book = Book::new("A Wizard of Earthsea");
    assert!(book.set_pub_year(1968, bounds).is_err());
    assert!(book.set_pub_year(1949, bounds).is_ok());
}

#[test]
fn test_rejected_fields_leave_book_usable() {
    init_tracing();
    let mut catalog = Catalog::new(5);
    let mut book = Book::new("Dune");
    assert!(book.set_isbn("12-34").is_err());
    assert!(book.set_title("").is_err());
    assert_eq!(book.to_string(), "Dune.");

    catalog.add_book(book.clone()).unwrap();
    assert_eq!(catalog.check_out(&book), Outcome::CheckedOut);
}
