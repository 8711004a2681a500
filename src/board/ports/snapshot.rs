//! Repository port for saving and rehydrating whole-board snapshots.

use crate::board::domain::BoardSnapshot;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot repository operations.
pub type SnapshotRepositoryResult<T> = Result<T, SnapshotRepositoryError>;

/// Snapshot persistence contract.
///
/// The board itself keeps no persistent state; a collaborator implementing
/// this trait decides where snapshots live.
pub trait BoardSnapshotRepository: Send + Sync {
    /// Loads the most recently saved snapshot.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError`] when the backing store fails or the
    /// stored data cannot be decoded.
    fn load(&self) -> SnapshotRepositoryResult<Option<BoardSnapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError`] when the backing store fails or the
    /// snapshot cannot be encoded.
    fn save(&self, snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<()>;
}

/// Errors returned by snapshot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotRepositoryError {
    /// The snapshot could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Codec(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
