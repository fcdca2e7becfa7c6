//! Snapshot persistence for the catalog
//!
//! One file holds the complete serialized state: the available books and
//! every borrower with their borrowed list. The schema is explicit and
//! versioned; there is no cross-implementation byte-layout contract, only
//! round-trip fidelity.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{Book, Borrower},
};

/// Current snapshot format version. A file carrying any other version is
/// handled like a corrupt file: loading falls back to an empty catalog.
const SNAPSHOT_VERSION: u32 = 1;

/// On-disk representation of the full catalog state.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    saved_at: DateTime<Utc>,
    books: Vec<Book>,
    borrowers: Vec<Borrower>,
}

/// Persistence gateway for catalog snapshots. Stateless beyond the file
/// path it writes to and reads from.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize the whole catalog to the store path, overwriting any
    /// existing file. Failures are reported to the caller; the process
    /// keeps running with its in-memory state intact.
    pub fn save(&self, catalog: &Catalog) -> AppResult<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            books: catalog.available_books().to_vec(),
            borrowers: catalog.borrowers().to_vec(),
        };
        let data = serde_json::to_vec_pretty(&snapshot)?;
        fs::write(&self.path, data)?;
        tracing::info!(
            "Saved snapshot to {} ({} books, {} borrowers)",
            self.path.display(),
            snapshot.books.len(),
            snapshot.borrowers.len()
        );
        Ok(())
    }

    /// Load a catalog from the store path.
    ///
    /// A missing, unreadable or incompatible file yields a freshly
    /// initialized empty catalog instead of an error. Callers cannot
    /// distinguish a fresh start from a recovered corrupt file and must
    /// not rely on that distinction.
    pub fn load(&self) -> Catalog {
        if !self.path.exists() {
            tracing::info!(
                "No snapshot at {}; starting with an empty catalog",
                self.path.display()
            );
            return Catalog::new();
        }

        match self.try_load() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(
                    "Unusable snapshot at {} ({}); starting with an empty catalog",
                    self.path.display(),
                    err
                );
                Catalog::new()
            }
        }
    }

    fn try_load(&self) -> AppResult<Catalog> {
        let data = fs::read(&self.path)?;
        let snapshot: Snapshot = serde_json::from_slice(&data)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AppError::SnapshotVersion(snapshot.version));
        }

        tracing::info!(
            "Loaded snapshot from {} (saved {}, {} books, {} borrowers)",
            self.path.display(),
            snapshot.saved_at,
            snapshot.books.len(),
            snapshot.borrowers.len()
        );
        Ok(Catalog::from_parts(snapshot.books, snapshot.borrowers))
    }
}
