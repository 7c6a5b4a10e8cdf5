//! Pure transforms behind each puzzle page.
//!
//! Core modules must be free of I/O side effects. They take raw input text
//! (already loaded by [`crate::io`]) and return display-ready structures or
//! puzzle answers.

pub mod group_sum;
pub mod half_split;
pub mod overlap;
pub mod priority;
pub mod range_strip;
pub mod types;
