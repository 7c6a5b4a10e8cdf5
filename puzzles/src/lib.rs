//! Daily puzzle transforms behind the puzzle pages and the `puzzles` CLI.
//!
//! Every page follows the same pipeline: load a static input file, run a
//! pure transform, render the result. The crate keeps those stages apart:
//!
//! - **[`core`]**: Pure transforms (grouping, splitting, range extraction)
//!   and the answers derived from them. No I/O.
//! - **[`io`]**: Configuration and input file loading.
//!
//! [`solve`] joins the two for the CLI and the JSON API.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
