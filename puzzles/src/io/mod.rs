//! I/O helpers for the CLI and the page server.

pub mod config;
pub mod loader;
