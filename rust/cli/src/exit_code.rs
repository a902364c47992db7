//! Exit code constants for the CLI application.
//!
//! Centralizes the exit codes shared by every subcommand so they stay
//! consistent across the binary and its tests.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Interrupted by user (Ctrl+C) exit code.
pub const INTERRUPTED: i32 = 130;
