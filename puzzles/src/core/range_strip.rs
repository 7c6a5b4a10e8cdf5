//! `a-b,c-d` range extraction and the shared index strip (day 4).

use std::ops::Range;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::core::types::RangePair;

static RANGE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)-([0-9]+),([0-9]+)-([0-9]+)").expect("range pair pattern is valid")
});

/// Smallest and largest number across every extracted pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

/// Day 4 page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeStrip {
    pub pairs: Vec<RangePair>,
    /// `None` when nothing matched.
    pub bounds: Option<Bounds>,
}

impl RangeStrip {
    /// Indices shown on every row: `[min, max)`.
    ///
    /// Identical for every row; the per-row sub-ranges do not narrow it.
    pub fn strip(&self) -> Range<u64> {
        match self.bounds {
            Some(Bounds { min, max }) => min..max,
            None => 0..0,
        }
    }
}

/// Extract every range pair in `raw` and track the global bounds.
pub fn extract_ranges(raw: &str) -> Result<RangeStrip> {
    let mut pairs = Vec::new();
    let mut bounds: Option<Bounds> = None;
    for caps in RANGE_PAIR_RE.captures_iter(raw) {
        let mut numbers = [0u64; 4];
        for (slot, group) in numbers.iter_mut().zip(caps.iter().skip(1).flatten()) {
            let text = group.as_str();
            *slot = text
                .parse()
                .with_context(|| format!("range bound {:?} does not fit in u64", text))?;
        }
        let [a, b, c, d] = numbers;
        let pair = RangePair::new(a, b, c, d);
        bounds = Some(widen(bounds, &pair));
        pairs.push(pair);
    }
    Ok(RangeStrip { pairs, bounds })
}

fn widen(bounds: Option<Bounds>, pair: &RangePair) -> Bounds {
    let numbers = pair.numbers();
    let lo = numbers.iter().copied().min().unwrap_or(0);
    let hi = numbers.iter().copied().max().unwrap_or(0);
    match bounds {
        Some(Bounds { min, max }) => Bounds {
            min: min.min(lo),
            max: max.max(hi),
        },
        None => Bounds { min: lo, max: hi },
    }
}
