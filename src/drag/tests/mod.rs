//! Unit tests for the drag context.
