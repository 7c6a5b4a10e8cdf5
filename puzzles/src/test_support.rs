//! Test-only sample inputs and data directory fixtures.

use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::types::Day;

pub const SAMPLE_DAY1: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

pub const SAMPLE_DAY3: &str = "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

pub const SAMPLE_DAY4: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

/// Sample input for `day`.
pub fn sample(day: Day) -> &'static str {
    match day {
        Day::One => SAMPLE_DAY1,
        Day::Three => SAMPLE_DAY3,
        Day::Four => SAMPLE_DAY4,
    }
}

/// Create a temp data directory holding every sample input.
pub fn write_samples() -> Result<TempDir> {
    let temp = tempfile::tempdir()?;
    for day in Day::ALL {
        fs::write(temp.path().join(day.file_name()), sample(day))?;
    }
    Ok(temp)
}
