//! Shared value types for the puzzle transforms.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

/// One parsed input line. `None` is the not-a-number sentinel.
pub type Entry = Option<i64>;

/// Sum of a group's entries. `None` once any entry is the sentinel.
pub type Aggregate = Option<i64>;

/// Puzzle day served by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    One,
    Three,
    Four,
}

impl Day {
    pub const ALL: [Day; 3] = [Day::One, Day::Three, Day::Four];

    /// Input file name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Day::One => "day1.txt",
            Day::Three => "day3.txt",
            Day::Four => "day4.txt",
        }
    }

    /// Route segment, e.g. `day1`.
    pub fn slug(self) -> &'static str {
        match self {
            Day::One => "day1",
            Day::Three => "day3",
            Day::Four => "day4",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Day::One => "DAY 1",
            Day::Three => "DAY 3",
            Day::Four => "DAY 4",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Day {
    type Err = Error;

    /// Accepts `1`, `day1`, `one` (case-insensitive) and the same for 3 and 4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let number = lowered.strip_prefix("day").unwrap_or(lowered.as_str());
        match number {
            "1" | "one" => Ok(Day::One),
            "3" | "three" => Ok(Day::Three),
            "4" | "four" => Ok(Day::Four),
            _ => Err(anyhow!("unknown day {:?} (expected 1, 3 or 4)", s)),
        }
    }
}

/// Two inclusive intervals extracted from one `a-b,c-d` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangePair {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl RangePair {
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// The first sub-range (d1).
    pub fn first(&self) -> RangeInclusive<u64> {
        self.a..=self.b
    }

    /// The second sub-range (d2).
    pub fn second(&self) -> RangeInclusive<u64> {
        self.c..=self.d
    }

    pub fn numbers(&self) -> [u64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

/// A line halved into two substrings of equal length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitPair {
    pub left: String,
    pub right: String,
}

/// Puzzle answers printed by the CLI and served by the JSON API.
///
/// Day 1 answers are absent when a sentinel entry reached the aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answers {
    pub day: Day,
    pub part1: Option<i64>,
    pub part2: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_parses_loose_forms() {
        assert_eq!("1".parse::<Day>().unwrap(), Day::One);
        assert_eq!("Day3".parse::<Day>().unwrap(), Day::Three);
        assert_eq!(" four ".parse::<Day>().unwrap(), Day::Four);
        assert!("2".parse::<Day>().is_err());
        assert!("day".parse::<Day>().is_err());
    }

    #[test]
    fn day_file_names_are_fixed() {
        let names: Vec<&str> = Day::ALL.iter().map(|day| day.file_name()).collect();
        assert_eq!(names, vec!["day1.txt", "day3.txt", "day4.txt"]);
    }

    #[test]
    fn range_pair_exposes_sub_ranges() {
        let pair = RangePair::new(2, 4, 6, 8);
        assert_eq!(pair.first(), 2..=4);
        assert_eq!(pair.second(), 6..=8);
        assert_eq!(pair.numbers(), [2, 4, 6, 8]);
    }
}
