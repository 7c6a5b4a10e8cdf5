//! Reads a day's input file from the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::types::Day;

/// Path of `day`'s input file inside `data_dir`.
pub fn input_path(data_dir: &Path, day: Day) -> PathBuf {
    data_dir.join(day.file_name())
}

/// Read the whole input for `day`. No caching; a missing file is an error.
pub fn read_input(data_dir: &Path, day: Day) -> Result<String> {
    let path = input_path(data_dir, day);
    debug!(day = %day, path = %path.display(), "read input");
    fs::read_to_string(&path).with_context(|| format!("read input {}", path.display()))
}
