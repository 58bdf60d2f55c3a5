//! Deterministic, pure logic for row button decisions.
//!
//! Core modules must be free of I/O side effects. They operate on plain
//! values and return deterministic outputs suitable for tests.

pub mod lifecycle;
pub mod policy;
pub mod types;
