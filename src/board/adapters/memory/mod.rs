//! In-memory adapters for board ports.

mod snapshot;

pub use snapshot::InMemorySnapshotRepository;
