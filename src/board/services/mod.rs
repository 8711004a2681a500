//! Application services for board state management.

mod commands;
mod config;
mod error;
mod store;

pub use commands::{ColumnView, MoveOutcome, MoveTaskRequest};
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use store::BoardStore;
