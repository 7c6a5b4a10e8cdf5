//! Shared-letter priorities over half-split lines and line triples (day 3 answers).

use std::collections::HashSet;

use anyhow::{Result, anyhow};

use crate::core::half_split::{GROUP_SIZE, split_half};

/// Priority of an ASCII letter: `a..=z` is 1..=26, `A..=Z` is 27..=52.
pub fn priority(letter: char) -> Option<u32> {
    match letter {
        'a'..='z' => Some(letter as u32 - 'a' as u32 + 1),
        'A'..='Z' => Some(letter as u32 - 'A' as u32 + 27),
        _ => None,
    }
}

/// The lowest-priority letter present in every part.
pub fn shared_letter(parts: &[&str]) -> Option<char> {
    let (first, rest) = parts.split_first()?;
    let sets: Vec<HashSet<char>> = rest.iter().map(|part| part.chars().collect()).collect();
    let mut candidates: Vec<char> = first
        .chars()
        .filter(|c| priority(*c).is_some())
        .filter(|c| sets.iter().all(|set| set.contains(c)))
        .collect();
    candidates.sort_by_key(|c| priority(*c));
    candidates.first().copied()
}

/// Sum, over every line, the priority of the letter shared by both halves.
pub fn half_priority_total(raw: &str) -> Result<u32> {
    let mut total = 0;
    for (idx, line) in raw.trim().lines().enumerate() {
        let split = split_half(line);
        total += record_priority(&[split.left.as_str(), split.right.as_str()], idx)?;
    }
    Ok(total)
}

/// Sum, over every triple of lines, the priority of the letter all three share.
pub fn triple_priority_total(raw: &str) -> Result<u32> {
    let lines: Vec<&str> = raw.trim().lines().collect();
    let mut total = 0;
    for (idx, group) in lines.chunks(GROUP_SIZE).enumerate() {
        total += record_priority(group, idx)?;
    }
    Ok(total)
}

fn record_priority(parts: &[&str], idx: usize) -> Result<u32> {
    shared_letter(parts)
        .and_then(priority)
        .ok_or_else(|| anyhow!("record {} has no letter shared by all parts", idx + 1))
}
