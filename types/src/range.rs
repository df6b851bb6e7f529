use std::fmt;

use thiserror::Error;

/// Inclusive id interval parsed from a `"start-end"` label.
///
/// A reversed label (`start > end`) is a valid, empty range: it parses
/// cleanly and yields no ids. Only missing or non-numeric bounds are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IdRange {
    start: u32,
    end: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("range label must not be empty")]
    Empty,

    #[error("range label `{0}` is not formatted as `start-end`")]
    MissingSeparator(String),

    #[error("range bound `{bound}` in `{label}` is not an integer")]
    InvalidBound { label: String, bound: String },
}

impl IdRange {
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Parse a `"start-end"` label into a range.
    pub fn parse(label: &str) -> Result<Self, RangeParseError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(RangeParseError::Empty);
        }
        let Some((start, end)) = trimmed.split_once('-') else {
            return Err(RangeParseError::MissingSeparator(trimmed.to_string()));
        };
        Ok(Self {
            start: parse_bound(trimmed, start)?,
            end: parse_bound(trimmed, end)?,
        })
    }

    #[must_use]
    pub fn start(self) -> u32 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> u32 {
        self.end
    }

    /// Ids in ascending order; empty when the range is reversed.
    pub fn ids(self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start > self.end
    }
}

fn parse_bound(label: &str, bound: &str) -> Result<u32, RangeParseError> {
    bound
        .trim()
        .parse()
        .map_err(|_| RangeParseError::InvalidBound {
            label: label.to_string(),
            bound: bound.trim().to_string(),
        })
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl TryFrom<&str> for IdRange {
    type Error = RangeParseError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        Self::parse(label)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdRange, RangeParseError};

    #[test]
    fn parses_simple_label() {
        let range = IdRange::parse("6-11").expect("valid label");
        assert_eq!(range.start(), 6);
        assert_eq!(range.end(), 11);
        assert!(!range.is_empty());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let range = IdRange::parse("  1 - 5 ").expect("valid label");
        assert_eq!((range.start(), range.end()), (1, 5));
    }

    #[test]
    fn empty_label_is_an_error() {
        assert_eq!(IdRange::parse(""), Err(RangeParseError::Empty));
        assert_eq!(IdRange::parse("   "), Err(RangeParseError::Empty));
    }

    #[test]
    fn label_without_separator_is_an_error() {
        assert_eq!(
            IdRange::parse("17"),
            Err(RangeParseError::MissingSeparator("17".to_string()))
        );
    }

    #[test]
    fn non_numeric_bound_is_an_error() {
        assert!(matches!(
            IdRange::parse("1-five"),
            Err(RangeParseError::InvalidBound { bound, .. }) if bound == "five"
        ));
        assert!(matches!(
            IdRange::parse("a-b"),
            Err(RangeParseError::InvalidBound { .. })
        ));
    }

    #[test]
    fn reversed_range_parses_but_yields_no_ids() {
        let range = IdRange::parse("20-1").expect("reversed labels are valid");
        assert!(range.is_empty());
        assert_eq!(range.ids().count(), 0);
    }

    #[test]
    fn ids_are_ascending_and_inclusive() {
        let range = IdRange::parse("3-6").expect("valid label");
        assert_eq!(range.ids().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn display_round_trips() {
        let range = IdRange::new(12, 17);
        assert_eq!(IdRange::parse(&range.to_string()), Ok(range));
    }
}
