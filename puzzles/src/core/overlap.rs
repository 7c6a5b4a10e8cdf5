//! Containment and overlap counts over range pairs (day 4 answers).

use std::ops::RangeInclusive;

use crate::core::types::RangePair;

/// Number of integers in an inclusive range; reversed ranges are empty.
///
/// `u128` so that `0..=u64::MAX` counts `u64::MAX + 1` integers.
fn size(range: &RangeInclusive<u64>) -> u128 {
    if range.end() < range.start() {
        0
    } else {
        u128::from(range.end() - range.start()) + 1
    }
}

/// Number of integers two inclusive ranges share.
fn shared(left: &RangeInclusive<u64>, right: &RangeInclusive<u64>) -> u128 {
    let start = (*left.start()).max(*right.start());
    let end = (*left.end()).min(*right.end());
    size(&(start..=end))
}

impl RangePair {
    /// One sub-range holds every integer of the other.
    ///
    /// Equivalent to `|d1 ∪ d2| == max(|d1|, |d2|)`; an empty sub-range is
    /// contained by anything.
    pub fn fully_contains(&self) -> bool {
        let (first, second) = (self.first(), self.second());
        let common = shared(&first, &second);
        common == size(&first).min(size(&second))
    }

    /// The sub-ranges share at least one integer.
    pub fn overlaps(&self) -> bool {
        shared(&self.first(), &self.second()) > 0
    }
}

/// Count pairs where one sub-range contains the other.
pub fn count_contained(pairs: &[RangePair]) -> usize {
    pairs.iter().filter(|pair| pair.fully_contains()).count()
}

/// Count pairs whose sub-ranges overlap.
pub fn count_overlapping(pairs: &[RangePair]) -> usize {
    pairs.iter().filter(|pair| pair.overlaps()).count()
}
