//! Page view models and the toggle configuration that shapes them.

use anyhow::Result;
use puzzles::core::group_sum::{collapse_to_sums, group_sums};
use puzzles::core::half_split::half_split_lines;
use puzzles::core::range_strip::extract_ranges;
use puzzles::core::types::{Day, Entry};
use serde::{Deserialize, Serialize};

/// Day 1 toggle state, carried in the query string.
///
/// Buttons only ever switch a flag on; only loading the bare route clears them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// "Do sums": collapse every group to its aggregate.
    pub sums: bool,
    /// "Filter": show only groups whose aggregate is in the top set.
    pub filter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    /// 1-based record number; stays stable when groups are filtered out.
    pub index: usize,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day1Page {
    pub title: &'static str,
    pub view: ViewConfig,
    pub groups: Vec<GroupView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRow {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day3Page {
    pub title: &'static str,
    pub rows: Vec<SplitRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeRow {
    pub d1: [u64; 2],
    pub d2: [u64; 2],
}

/// Half-open `[start, end)` index strip, expanded only while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StripView {
    pub start: u64,
    pub end: u64,
}

impl StripView {
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day4Page {
    pub title: &'static str,
    pub rows: Vec<RangeRow>,
    /// Index strip drawn on every row.
    pub strip: StripView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLink {
    pub href: String,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub title: &'static str,
    pub days: Vec<DayLink>,
}

pub fn index_page() -> IndexPage {
    IndexPage {
        title: "Puzzles",
        days: Day::ALL
            .iter()
            .map(|day| DayLink {
                href: format!("/{}", day.slug()),
                title: day.title(),
            })
            .collect(),
    }
}

pub fn day1_page(raw: &str, view: ViewConfig) -> Day1Page {
    let sums = group_sums(raw);
    let groups = if view.sums {
        collapse_to_sums(&sums.groups)
    } else {
        sums.groups.clone()
    };
    let groups = groups
        .into_iter()
        .zip(&sums.aggregates)
        .enumerate()
        .filter(|(_, (_, aggregate))| !view.filter || sums.in_top_set(**aggregate))
        .map(|(idx, (entries, _))| GroupView {
            index: idx + 1,
            entries: entries.into_iter().map(display_entry).collect(),
        })
        .collect();
    Day1Page {
        title: Day::One.title(),
        view,
        groups,
    }
}

pub fn day3_page(raw: &str) -> Day3Page {
    let rows = half_split_lines(raw)
        .pairs
        .into_iter()
        .map(|pair| SplitRow {
            left: pair.left,
            right: pair.right,
        })
        .collect();
    Day3Page {
        title: Day::Three.title(),
        rows,
    }
}

pub fn day4_page(raw: &str) -> Result<Day4Page> {
    let ranges = extract_ranges(raw)?;
    let rows = ranges
        .pairs
        .iter()
        .map(|pair| RangeRow {
            d1: [pair.a, pair.b],
            d2: [pair.c, pair.d],
        })
        .collect();
    let strip = ranges.strip();
    Ok(Day4Page {
        title: Day::Four.title(),
        rows,
        strip: StripView {
            start: strip.start,
            end: strip.end,
        },
    })
}

/// Render an entry; the sentinel shows as `NaN`.
fn display_entry(entry: Entry) -> String {
    entry.map_or_else(|| "NaN".to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzles::test_support::SAMPLE_DAY1;

    fn entries(page: &Day1Page) -> Vec<(usize, Vec<&str>)> {
        page.groups
            .iter()
            .map(|group| {
                (
                    group.index,
                    group.entries.iter().map(String::as_str).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn default_view_lists_every_group() {
        let page = day1_page("3\n4\n\n10\n20\n30", ViewConfig::default());
        assert_eq!(
            entries(&page),
            vec![(1, vec!["3", "4"]), (2, vec!["10", "20", "30"])]
        );
    }

    #[test]
    fn sums_collapse_each_group() {
        let view = ViewConfig {
            sums: true,
            filter: false,
        };
        let page = day1_page("3\n4\n\n10\n20\n30", view);
        assert_eq!(entries(&page), vec![(1, vec!["7"]), (2, vec!["60"])]);
    }

    #[test]
    fn filter_keeps_top_three_with_raw_numbers() {
        let view = ViewConfig {
            sums: false,
            filter: true,
        };
        let page = day1_page(SAMPLE_DAY1, view);
        let indices: Vec<usize> = page.groups.iter().map(|group| group.index).collect();
        assert_eq!(indices, vec![3, 4, 5]);
    }

    #[test]
    fn filter_and_sums_combine() {
        let view = ViewConfig {
            sums: true,
            filter: true,
        };
        let page = day1_page(SAMPLE_DAY1, view);
        assert_eq!(
            entries(&page),
            vec![(3, vec!["11000"]), (4, vec!["24000"]), (5, vec!["10000"])]
        );
    }

    #[test]
    fn sentinel_entries_show_nan() {
        let page = day1_page("1\nabc", ViewConfig::default());
        assert_eq!(entries(&page), vec![(1, vec!["1", "NaN"])]);
    }

    #[test]
    fn day3_rows_are_halves() {
        let page = day3_page("abcdef\nxyz");
        assert_eq!(
            page.rows,
            vec![
                SplitRow {
                    left: "abc".to_string(),
                    right: "def".to_string(),
                },
                SplitRow {
                    left: "x".to_string(),
                    right: "z".to_string(),
                },
            ]
        );
    }

    #[test]
    fn day4_strip_is_shared_and_excludes_max() {
        let page = day4_page("2-4,6-8\n3-3,5-5\n").expect("page");
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[1].d1, [3, 3]);
        assert_eq!(page.strip, StripView { start: 2, end: 8 });
        assert_eq!(page.strip.len(), 6);
    }

    #[test]
    fn day4_wide_strip_stays_unexpanded() {
        let page = day4_page("0-4000000000,1-2\n").expect("page");
        assert_eq!(page.strip.len(), 4_000_000_000);
        assert!(!page.strip.is_empty());
    }

    #[test]
    fn day4_without_matches_has_empty_strip() {
        let page = day4_page("no ranges").expect("page");
        assert!(page.rows.is_empty());
        assert!(page.strip.is_empty());
    }

    #[test]
    fn index_links_every_day() {
        let hrefs: Vec<String> = index_page().days.into_iter().map(|d| d.href).collect();
        assert_eq!(hrefs, vec!["/day1", "/day3", "/day4"]);
    }
}
