//! Drag-and-drop interaction for the task board.
//!
//! A [`DragSession`] tracks one pointer drag from pointer-down to drop or
//! cancel, turning card geometry into a live insertion preview. On drop it
//! yields a [`MoveTaskRequest`](crate::board::services::MoveTaskRequest);
//! [`DragDropController`] feeds that request to the board store.

mod controller;
mod error;
pub mod geometry;
mod session;

pub use controller::DragDropController;
pub use error::DragError;
pub use session::{DragSession, DropPreview, PreviewUpdate};

#[cfg(test)]
mod tests;
