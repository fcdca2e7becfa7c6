//! Libris Library Inventory and Lending Tracker
//!
//! A single-process inventory and lending tracker: an in-memory catalog of
//! book records and registered borrowers, with whole-file snapshot
//! persistence and an interactive text shell on top.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;
pub mod snapshot;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use snapshot::SnapshotStore;
