//! Answer computation for `puzzles solve` and the JSON API.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::group_sum::group_sums;
use crate::core::overlap::{count_contained, count_overlapping};
use crate::core::priority::{half_priority_total, triple_priority_total};
use crate::core::range_strip::extract_ranges;
use crate::core::types::{Answers, Day};
use crate::io::loader::read_input;

/// Compute both answers for `day` from its raw input.
pub fn solve(day: Day, raw: &str) -> Result<Answers> {
    let (part1, part2) = match day {
        Day::One => {
            let sums = group_sums(raw);
            (sums.max(), sums.top_total())
        }
        Day::Three => (
            Some(i64::from(half_priority_total(raw)?)),
            Some(i64::from(triple_priority_total(raw)?)),
        ),
        Day::Four => {
            let strip = extract_ranges(raw)?;
            (
                Some(count_as_i64(count_contained(&strip.pairs))?),
                Some(count_as_i64(count_overlapping(&strip.pairs))?),
            )
        }
    };
    Ok(Answers { day, part1, part2 })
}

/// Load `day`'s input from `data_dir` and solve it.
pub fn solve_from_dir(data_dir: &Path, day: Day) -> Result<Answers> {
    let raw = read_input(data_dir, day)?;
    let answers = solve(day, &raw).with_context(|| format!("solve {}", day))?;
    info!(day = %day, part1 = ?answers.part1, part2 = ?answers.part2, "solved");
    Ok(answers)
}

fn count_as_i64(count: usize) -> Result<i64> {
    i64::try_from(count).context("count exceeds i64")
}
