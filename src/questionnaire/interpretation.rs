// Score-range interpretation table

use serde::Serialize;

use crate::errors::{MindwellError, Result};

/// An inclusive score range and the label it maps to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRange {
    pub low: u32,
    pub high: u32,
    pub label: String,
}

impl ScoreRange {
    pub fn new(low: u32, high: u32, label: impl Into<String>) -> Self {
        Self {
            low,
            high,
            label: label.into(),
        }
    }

    /// Parse a `"low-high"` key as written in questionnaire documents
    pub fn parse(key: &str, label: impl Into<String>) -> Result<Self> {
        let (low, high) = key.split_once('-').ok_or_else(|| {
            MindwellError::Configuration(format!(
                "interpretation range '{}' is not of the form low-high",
                key
            ))
        })?;

        let parse_bound = |bound: &str| {
            bound.trim().parse::<u32>().map_err(|_| {
                MindwellError::Configuration(format!(
                    "interpretation range '{}' has a non-numeric bound '{}'",
                    key, bound
                ))
            })
        };

        let low = parse_bound(low)?;
        let high = parse_bound(high)?;
        if low > high {
            return Err(MindwellError::Configuration(format!(
                "interpretation range '{}' has low bound above high bound",
                key
            )));
        }

        Ok(Self::new(low, high, label))
    }

    pub fn contains(&self, score: u32) -> bool {
        self.low <= score && score <= self.high
    }
}

/// Ordered ranges that partition `[0, max_score]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretationTable {
    ranges: Vec<ScoreRange>,
    max_score: u32,
}

impl InterpretationTable {
    /// Build a table, rejecting gaps, overlaps and ranges past `max_score`
    pub fn new(ranges: Vec<ScoreRange>, max_score: u32) -> Result<Self> {
        validate_partition(&ranges, max_score)?;
        Ok(Self { ranges, max_score })
    }

    /// Build a table from ranges already known to partition `[0, max_score]`
    pub(crate) fn new_unchecked(ranges: Vec<ScoreRange>, max_score: u32) -> Self {
        Self { ranges, max_score }
    }

    /// First range in declared order whose bounds contain `score`
    pub fn range_containing(&self, score: u32) -> Option<&ScoreRange> {
        self.ranges.iter().find(|range| range.contains(score))
    }

    pub fn ranges(&self) -> &[ScoreRange] {
        &self.ranges
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }
}

fn validate_partition(ranges: &[ScoreRange], max_score: u32) -> Result<()> {
    if ranges.is_empty() {
        return Err(MindwellError::Configuration(
            "interpretation table has no ranges".to_string(),
        ));
    }

    // Declared order is lookup order; coverage is checked in score order.
    let mut sorted: Vec<&ScoreRange> = ranges.iter().collect();
    sorted.sort_by_key(|range| (range.low, range.high));

    let mut next_uncovered: u32 = 0;
    for range in sorted {
        if range.low > next_uncovered {
            return Err(MindwellError::Configuration(format!(
                "interpretation table has a gap: scores {}-{} are not covered",
                next_uncovered,
                range.low - 1
            )));
        }
        if range.low < next_uncovered {
            return Err(MindwellError::Configuration(format!(
                "interpretation range {}-{} ('{}') overlaps a previous range",
                range.low, range.high, range.label
            )));
        }
        if range.high > max_score {
            return Err(MindwellError::Configuration(format!(
                "interpretation range {}-{} ('{}') exceeds the maximum score {}",
                range.low, range.high, range.label, max_score
            )));
        }
        next_uncovered = range.high + 1;
    }

    if next_uncovered <= max_score {
        return Err(MindwellError::Configuration(format!(
            "interpretation table has a gap: scores {}-{} are not covered",
            next_uncovered, max_score
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phq9_ranges() -> Vec<ScoreRange> {
        vec![
            ScoreRange::new(0, 4, "Minimal depression"),
            ScoreRange::new(5, 9, "Mild depression"),
            ScoreRange::new(10, 14, "Moderate depression"),
            ScoreRange::new(15, 19, "Moderately severe depression"),
            ScoreRange::new(20, 27, "Severe depression"),
        ]
    }

    #[test]
    fn test_parse_range_key() {
        let range = ScoreRange::parse("10-14", "Moderate").unwrap();
        assert_eq!(range.low, 10);
        assert_eq!(range.high, 14);
        assert!(ScoreRange::parse(" 0 - 4 ", "Minimal").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(ScoreRange::parse("10", "x").is_err());
        assert!(ScoreRange::parse("a-b", "x").is_err());
        assert!(ScoreRange::parse("-1-4", "x").is_err());
        assert!(ScoreRange::parse("9-5", "x").is_err());
    }

    #[test]
    fn test_every_score_has_exactly_one_range() {
        let table = InterpretationTable::new(phq9_ranges(), 27).unwrap();
        for score in 0..=27 {
            let matches = table.ranges().iter().filter(|r| r.contains(score)).count();
            assert_eq!(matches, 1, "score {} matched {} ranges", score, matches);
            assert!(table.range_containing(score).is_some());
        }
        assert!(table.range_containing(28).is_none());
    }

    #[test]
    fn test_gap_is_rejected() {
        let mut ranges = phq9_ranges();
        ranges[1] = ScoreRange::new(6, 9, "Mild depression");
        let err = InterpretationTable::new(ranges, 27).unwrap_err();
        assert!(err.to_string().contains("gap"));
    }

    #[test]
    fn test_overlap_is_rejected() {
        let mut ranges = phq9_ranges();
        ranges[1] = ScoreRange::new(4, 9, "Mild depression");
        let err = InterpretationTable::new(ranges, 27).unwrap_err();
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn test_trailing_gap_and_overshoot_are_rejected() {
        let mut short = phq9_ranges();
        short[4] = ScoreRange::new(20, 26, "Severe depression");
        assert!(InterpretationTable::new(short, 27).is_err());

        assert!(InterpretationTable::new(phq9_ranges(), 20).is_err());
        assert!(InterpretationTable::new(Vec::new(), 27).is_err());
    }

    #[test]
    fn test_declared_order_need_not_be_sorted() {
        let mut ranges = phq9_ranges();
        ranges.reverse();
        let table = InterpretationTable::new(ranges, 27).unwrap();
        assert_eq!(table.range_containing(3).unwrap().label, "Minimal depression");
        assert_eq!(table.ranges()[0].label, "Severe depression");
    }
}
