//! Blank-line grouped integers summed per group (day 1).

use std::cmp::Reverse;

use serde::Serialize;

use crate::core::types::{Aggregate, Entry};

/// How many aggregates make up the top set.
pub const TOP_SET_SIZE: usize = 3;

/// Parsed groups with their aggregates and top set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSums {
    /// Entries per record, in input order.
    pub groups: Vec<Vec<Entry>>,
    /// One aggregate per record, in input order.
    pub aggregates: Vec<Aggregate>,
    /// The largest aggregates, descending, at most [`TOP_SET_SIZE`].
    pub top: Vec<Aggregate>,
}

impl GroupSums {
    /// Whether `aggregate` belongs to the top set.
    ///
    /// Sentinel aggregates compare equal to each other, so one sentinel in
    /// the top set admits every sentinel group.
    pub fn in_top_set(&self, aggregate: Aggregate) -> bool {
        self.top.contains(&aggregate)
    }

    /// Largest aggregate.
    pub fn max(&self) -> Option<i64> {
        self.top.first().copied().flatten()
    }

    /// Sum of the top set.
    pub fn top_total(&self) -> Option<i64> {
        self.top
            .iter()
            .try_fold(0i64, |acc, agg| acc.checked_add((*agg)?))
    }
}

/// Parse, sum and rank the records in `raw`.
pub fn group_sums(raw: &str) -> GroupSums {
    let groups = parse_groups(raw);
    let aggregates: Vec<Aggregate> = groups.iter().map(|group| aggregate(group)).collect();
    let top = top_set(&aggregates);
    GroupSums {
        groups,
        aggregates,
        top,
    }
}

/// Split trimmed text on blank lines, then each record into parsed lines.
///
/// Always yields at least one record: empty input is one record holding a
/// single sentinel entry.
pub fn parse_groups(raw: &str) -> Vec<Vec<Entry>> {
    raw.trim()
        .split("\n\n")
        .map(|record| record.trim().split('\n').map(parse_int).collect())
        .collect()
}

/// Lenient integer parse: leading whitespace, optional sign, then the longest
/// run of ASCII digits. Anything without digits yields the sentinel.
pub fn parse_int(line: &str) -> Entry {
    let trimmed = line.trim_start();
    let sign_len = match trimmed.as_bytes().first() {
        Some(b'-' | b'+') => 1,
        _ => 0,
    };
    let rest = &trimmed[sign_len..];
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}

/// Sum a group. Any sentinel entry, or overflow, makes the sum a sentinel.
pub fn aggregate(group: &[Entry]) -> Aggregate {
    group
        .iter()
        .try_fold(0i64, |acc, entry| acc.checked_add((*entry)?))
}

/// The largest aggregates in descending order. Sentinels rank last.
pub fn top_set(aggregates: &[Aggregate]) -> Vec<Aggregate> {
    let mut sorted = aggregates.to_vec();
    sorted.sort_by_key(|agg| (agg.is_none(), Reverse(*agg)));
    sorted.truncate(TOP_SET_SIZE);
    sorted
}

/// Replace every group with a one-element group holding its sum.
pub fn collapse_to_sums(groups: &[Vec<Entry>]) -> Vec<Vec<Entry>> {
    groups.iter().map(|group| vec![aggregate(group)]).collect()
}
