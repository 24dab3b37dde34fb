//! Day-count normalization
//!
//! The `total_days` field is free text holding a whitespace-separated list of
//! integers. Normalization tokenizes, drops anything that is not an integer,
//! sorts ascending and re-joins with single spaces. The same tokenization
//! feeds [`day_key`], the sort key used by order maintenance.
//!
//! Both functions are pure; garbage tokens are filtered, never rejected.

use serde::{Deserialize, Serialize};

/// Integer tokens of a day-count string, in input order
fn parse_days(text: &str) -> impl Iterator<Item = i64> + '_ {
    text.split_whitespace().filter_map(|token| token.parse().ok())
}

/// Normalize a day-count string
///
/// `"5 3 x 1"` becomes `"1 3 5"`; a string with no integer tokens becomes
/// the empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut days: Vec<i64> = parse_days(text).collect();
    days.sort_unstable();
    let mut out = String::new();
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&day.to_string());
    }
    out
}

/// Sort key for a day-count string: the minimum integer token
///
/// Keys order ascending by value; a string with no integer tokens yields the
/// empty key, which orders after every valid key so malformed records sink to
/// the bottom of the roster.
#[must_use]
pub fn day_key(text: &str) -> DayKey {
    DayKey(parse_days(text).min())
}

/// Total-ordered sort key derived from a day-count string
///
/// Wraps the minimum parsed value; `None` means no token parsed and is
/// defined greater than every `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayKey(Option<i64>);

impl DayKey {
    /// Key of a string with no integer tokens
    pub const EMPTY: Self = Self(None);

    /// Whether no token parsed
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// The minimum parsed value, if any token parsed
    #[inline]
    #[must_use]
    pub fn value(self) -> Option<i64> {
        self.0
    }
}

impl Ord for DayKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for DayKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_sorts_and_filters() {
        assert_eq!(normalize("5 3 x 1"), "1 3 5");
        assert_eq!(normalize("10 2"), "2 10");
        assert_eq!(normalize("7"), "7");
    }

    #[test]
    fn normalize_empty_and_garbage() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("a b"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_is_pure_and_stable_on_own_output() {
        let once = normalize("9 1 zz 4");
        assert_eq!(normalize(&once), once);
        assert_eq!(normalize("9 1 zz 4"), once);
    }

    #[test]
    fn normalize_keeps_negatives_and_duplicates() {
        assert_eq!(normalize("3 -1 3"), "-1 3 3");
    }

    #[test]
    fn day_key_is_minimum() {
        assert_eq!(day_key("10 2").value(), Some(2));
        assert_eq!(day_key("7").value(), Some(7));
        assert_eq!(day_key("2 9").value(), Some(2));
    }

    #[test]
    fn day_key_of_garbage_is_empty() {
        assert!(day_key("").is_empty());
        assert!(day_key("a b").is_empty());
        assert_eq!(day_key("x"), DayKey::EMPTY);
    }

    #[test]
    fn empty_key_orders_after_every_valid_key() {
        assert!(day_key("1") < day_key("2"));
        assert!(day_key("999999") < DayKey::EMPTY);
        assert!(day_key("-5") < day_key("junk"));
        assert_eq!(DayKey::EMPTY.cmp(&DayKey::EMPTY), std::cmp::Ordering::Equal);
    }
}
