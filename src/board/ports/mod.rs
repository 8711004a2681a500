//! Port contracts for the board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod snapshot;

pub use snapshot::{BoardSnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult};
