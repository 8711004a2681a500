//! In-memory snapshot repository for tests and embedding hosts.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::BoardSnapshot,
    ports::{BoardSnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
};

/// Thread-safe in-memory snapshot repository holding the last saved board.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    state: Arc<RwLock<Option<BoardSnapshot>>>,
}

impl InMemorySnapshotRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: BoardSnapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(snapshot))),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> SnapshotRepositoryError {
    SnapshotRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl BoardSnapshotRepository for InMemorySnapshotRepository {
    fn load(&self) -> SnapshotRepositoryResult<Option<BoardSnapshot>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.clone())
    }

    fn save(&self, snapshot: &BoardSnapshot) -> SnapshotRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        *state = Some(snapshot.clone());
        Ok(())
    }
}
