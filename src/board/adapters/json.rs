//! JSON encoding for board snapshots.
//!
//! [`JsonSnapshotRepository`] keeps the encoded document rather than the
//! snapshot value, so every save/load exercises the same serde path a file
//! or key-value backend would.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::BoardSnapshot,
    ports::{BoardSnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
};

/// Encodes a snapshot as a JSON document.
///
/// # Errors
///
/// Returns [`SnapshotRepositoryError::Codec`] when serialization fails.
pub fn encode_snapshot(snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<String> {
    serde_json::to_string(snapshot).map_err(|err| SnapshotRepositoryError::Codec(err.to_string()))
}

/// Decodes a snapshot from a JSON document.
///
/// Column-id uniqueness is checked after decoding; referential integrity is
/// left to the store.
///
/// # Errors
///
/// Returns [`SnapshotRepositoryError::Codec`] when the document is malformed
/// or repeats a column id.
pub fn decode_snapshot(document: &str) -> SnapshotRepositoryResult<BoardSnapshot> {
    let snapshot: BoardSnapshot = serde_json::from_str(document)
        .map_err(|err| SnapshotRepositoryError::Codec(err.to_string()))?;
    snapshot
        .ensure_unique_columns()
        .map_err(|err| SnapshotRepositoryError::Codec(err.to_string()))?;
    Ok(snapshot)
}

/// Snapshot repository holding a single JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotRepository {
    document: Arc<RwLock<Option<String>>>,
}

impl JsonSnapshotRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with an existing JSON document.
    #[must_use]
    pub fn from_document(document: impl Into<String>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document.into()))),
        }
    }

    /// Returns a copy of the stored document, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn document(&self) -> SnapshotRepositoryResult<Option<String>> {
        let document = self.document.read().map_err(|err| {
            SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(document.clone())
    }
}

impl BoardSnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> SnapshotRepositoryResult<Option<BoardSnapshot>> {
        self.document()?
            .as_deref()
            .map(decode_snapshot)
            .transpose()
    }

    fn save(&self, snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<()> {
        let encoded = encode_snapshot(snapshot)?;
        let mut document = self.document.write().map_err(|err| {
            SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *document = Some(encoded);
        Ok(())
    }
}
