//! Libris - Library Inventory and Lending Tracker
//!
//! Single-process catalog of books and registered borrowers with flat-file
//! snapshot persistence and an interactive text menu.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{
    catalog::Catalog,
    config::AppConfig,
    models::{Book, Borrower},
    shell,
    snapshot::SnapshotStore,
};

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "libris", version, about = "Library inventory and lending tracker")]
struct Cli {
    /// Snapshot file holding the library data (overrides configuration)
    #[arg(long, value_name = "PATH")]
    data_file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.data_file {
        config.storage.path = path;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    let store = SnapshotStore::new(&config.storage.path);
    let mut catalog = store.load();

    // Seed demo data on a fresh start only, so reloading a saved snapshot
    // does not accumulate duplicates.
    if catalog.available_books().is_empty() && catalog.borrowers().is_empty() {
        seed_demo_data(&mut catalog);
    }

    shell::run(&mut catalog, &store)?;

    Ok(())
}

fn seed_demo_data(catalog: &mut Catalog) {
    tracing::info!("Empty catalog; seeding demo data");

    catalog.add_book(Book::new("Book 1", "Author 1", "ISBN1"));
    catalog.add_book(Book::new("Book 2", "Author 2", "ISBN2"));
    catalog.add_book(Book::new("Book 3", "Author 1", "ISBN3"));

    catalog.register_borrower(Borrower::new("Borrower 1", "borrower1@example.com"));
    catalog.register_borrower(Borrower::new("Borrower 2", "borrower2@example.com"));
}
