//! Levenshtein edit distance.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into another.
/// Strings are compared by Unicode scalar value; time is O(len1 * len2) and
/// space is O(len2), keeping only a single running row of the DP table.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Calculate Levenshtein distance with a maximum threshold for early
/// termination. Returns `None` if the distance exceeds the threshold, which
/// is cheaper than a full computation when filtering candidates.
pub fn levenshtein_distance_bounded(s1: &str, s2: &str, max_distance: usize) -> Option<usize> {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    // The distance is at least the length difference.
    if len1.abs_diff(len2) > max_distance {
        return None;
    }

    if len1 == 0 {
        return Some(len2);
    }
    if len2 == 0 {
        return Some(len1);
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Every cell in later rows derives from this row, so once the row
        // minimum exceeds the threshold the final distance must too.
        if min_in_row > max_distance {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= max_distance {
        Some(distance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("ab", "ba"), 2); // transposition costs two edits here
    }

    #[test]
    fn test_levenshtein_empty_string() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_levenshtein_symmetry() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "xyz")] {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_levenshtein_unicode() {
        // Char-based, not byte-based.
        assert_eq!(levenshtein_distance("über", "uber"), 1);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_distance_bounded() {
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_bounded("search", "search", 0), Some(0));
        assert_eq!(levenshtein_distance_bounded("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_bounded("a", "ab", 1), Some(1));
    }

    #[test]
    fn test_bounded_agrees_with_unbounded() {
        let pairs = [("example", "examine"), ("apple", "temple"), ("ab", "ba")];
        for (a, b) in pairs {
            let full = levenshtein_distance(a, b);
            assert_eq!(levenshtein_distance_bounded(a, b, full), Some(full));
            if full > 0 {
                assert_eq!(levenshtein_distance_bounded(a, b, full - 1), None);
            }
        }
    }
}
