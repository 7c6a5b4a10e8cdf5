//! Line halving for the day 3 page.

use serde::Serialize;

use crate::core::types::SplitPair;

/// Lines per group on the day 3 page.
pub const GROUP_SIZE: usize = 3;

/// Day 3 page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HalfSplit {
    /// One pair per input line, in order.
    pub pairs: Vec<SplitPair>,
    /// Lines grouped in triples. The page computes these but does not render them.
    pub groups: Vec<Vec<String>>,
}

/// Split `raw` on `'\n'` (no trimming) and halve every line.
///
/// A trailing newline yields an empty final row.
pub fn half_split_lines(raw: &str) -> HalfSplit {
    let lines: Vec<&str> = raw.split('\n').collect();
    let pairs = lines.iter().map(|line| split_half(line)).collect();
    let groups = lines
        .chunks(GROUP_SIZE)
        .map(|chunk| chunk.iter().map(|line| (*line).to_string()).collect())
        .collect();
    HalfSplit { pairs, groups }
}

/// Halve `line` at `len / 2` characters.
///
/// Both halves have `len / 2` characters; an odd middle character is dropped.
pub fn split_half(line: &str) -> SplitPair {
    let len = line.chars().count();
    let mut offsets = line.char_indices().map(|(idx, _)| idx);
    let left_end = offsets.nth(len / 2).unwrap_or(line.len());
    let right_start = if len % 2 == 1 {
        offsets.next().unwrap_or(line.len())
    } else {
        left_end
    };
    SplitPair {
        left: line[..left_end].to_string(),
        right: line[right_start..].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(left: &str, right: &str) -> SplitPair {
        SplitPair {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    #[test]
    fn even_line_splits_evenly() {
        assert_eq!(split_half("abcdef"), pair("abc", "def"));
    }

    #[test]
    fn odd_line_drops_middle_character() {
        assert_eq!(split_half("abcde"), pair("ab", "de"));
        assert_eq!(split_half("a"), pair("", ""));
    }

    #[test]
    fn empty_line_yields_empty_halves() {
        assert_eq!(split_half(""), pair("", ""));
    }

    #[test]
    fn multibyte_characters_split_on_char_boundaries() {
        assert_eq!(split_half("äöüß"), pair("äö", "üß"));
        assert_eq!(split_half("äxß"), pair("ä", "ß"));
    }

    #[test]
    fn halves_sum_to_line_length_minus_odd_middle() {
        for line in ["", "a", "ab", "abc", "vJrwpWtwJgWrhcsFMMfFFhFp"] {
            let split = split_half(line);
            let len = line.chars().count();
            assert_eq!(split.left.chars().count(), split.right.chars().count());
            assert_eq!(
                split.left.chars().count() + split.right.chars().count(),
                len - len % 2
            );
        }
    }

    #[test]
    fn trailing_newline_keeps_empty_row() {
        let page = half_split_lines("abcd\nwxyz\n");
        assert_eq!(page.pairs, vec![pair("ab", "cd"), pair("wx", "yz"), pair("", "")]);
    }

    #[test]
    fn lines_group_in_triples() {
        let page = half_split_lines("a\nb\nc\nd");
        assert_eq!(
            page.groups,
            vec![
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec!["d".to_string()],
            ]
        );
    }
}
