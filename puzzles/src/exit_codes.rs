//! Stable exit codes for puzzles CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: unreadable config or input, or an unsolvable input.
pub const INVALID: i32 = 1;
