//! Taskboard: ordered multi-column task board state engine.
//!
//! Columns hold ordered lists of tasks. Users create, edit, delete, filter
//! and drag tasks within and across columns, subject to advisory per-column
//! capacity limits. This crate owns the consistency rules behind those
//! interactions; rendering, forms and persistence are left to collaborators.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Columns, tasks, filtering and the board store
//! - [`drag`]: Drag session state machine and drop-preview geometry

pub mod board;
pub mod drag;
