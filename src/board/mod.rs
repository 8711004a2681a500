//! Task board state management.
//!
//! Columns hold ordered task-id sequences; tasks record which column lists
//! them. The [`services::BoardStore`] applies move, create, update and
//! delete commands as single transitions and is the only code that mutates
//! either collection. The module follows hexagonal architecture:
//!
//! - Domain types, the ordered-list transfer algorithm and the display filter
//!   in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and its configuration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
