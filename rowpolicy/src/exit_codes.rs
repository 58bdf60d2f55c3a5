//! Stable exit codes for rowpolicy CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid input, config, row file, or other errors.
pub const INVALID: i32 = 1;
/// `rowpolicy walk` hit an event the row lifecycle rejects.
pub const REJECTED: i32 = 2;
