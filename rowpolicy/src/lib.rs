//! Row action button policy for editable data tables.
//!
//! Given a row's lifecycle state, decides which of the `edit`, `delete`,
//! `update` and `cancel` buttons are shown and which are disabled.
//!
//! - **[`core`]**: Pure, deterministic logic (policy, lifecycle transitions).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Config and row snapshot files.
//!
//! Orchestration modules ([`render`], [`walk`]) combine core logic with I/O
//! to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod walk;
