//! Adapter implementations for board ports.

pub mod json;
pub mod memory;
