/*!
 * Tests for TextGrid query operations
 */

use tgquery::{Span, TextGrid, TextGridError};
use crate::common::{self, TestTier};

fn phones() -> TextGrid {
    TextGrid::parse_str(&common::phones_textgrid()).unwrap()
}

fn mixed() -> TextGrid {
    TextGrid::parse_str(&common::mixed_textgrid()).unwrap()
}

/// Occurrences of "a" in the two-interval scenario
#[test]
fn test_labelOccurrences_withSingleMatch_shouldUseNextBoundary() {
    let found = phones().label_occurrences("a", "phones").unwrap().unwrap();

    assert_eq!(found.boundaries, vec![0.0]);
    assert_eq!(found.durations, vec![5.0]);
    assert_eq!(found.count(), 1);
}

/// First and last entries of the two-interval scenario
#[test]
fn test_firstAndLastEntry_withIntervalTier_shouldReturnLabelAndBoundary() {
    let grid = phones();

    assert_eq!(grid.first_entry("phones").unwrap(), ("a", 0.0));
    assert_eq!(grid.last_entry("phones").unwrap(), ("b", 5.0));
}

/// The last interval ends at the tier end
#[test]
fn test_tierSpans_withLastInterval_shouldEndAtTierEnd() {
    let grid = phones();
    let spans = grid.tier_spans("phones").unwrap();

    assert_eq!(spans.last(), Some(&Span { label: "b", start: 5.0, end: 13.664 }));
}

/// A single point's duration runs to the tier end
#[test]
fn test_labelOccurrences_withPointTier_shouldMeasureToTierEnd() {
    let content = common::build_textgrid(
        0.0,
        10.0,
        &[TestTier::Point { name: "events", start: 0.0, end: 10.0, points: vec![(2.5, "ep")] }],
    );
    let grid = TextGrid::parse_str(&content).unwrap();

    let found = grid.label_occurrences("ep", "events").unwrap().unwrap();

    assert_eq!(found.durations, vec![7.5]);
}

#[test]
fn test_labelOccurrences_withLastEntryMatch_shouldUseTierEnd() {
    let grid = mixed();
    let found = grid.label_occurrences("sil", "phones").unwrap().unwrap();
    let tier_end = grid.tier_end("phones").unwrap();

    assert_eq!(found.boundaries, vec![0.0, 7.0]);
    assert_eq!(found.durations, vec![1.5, tier_end - 7.0]);
}

#[test]
fn test_labelOccurrences_withNonDecreasingBoundaries_shouldNeverBeNegative() {
    let grid = mixed();
    for tier in ["phones", "events"] {
        for entry in grid.tier_entries(tier).unwrap() {
            let found = grid.label_occurrences(&entry.label, tier).unwrap().unwrap();
            assert!(found.durations.iter().all(|d| *d >= 0.0));
        }
    }
}

#[test]
fn test_labelOccurrences_withNoMatch_shouldReturnNone() {
    let grid = mixed();
    assert!(grid.label_occurrences("zzz", "phones").unwrap().is_none());
    // Labels of another tier are not visible
    assert!(grid.label_occurrences("ep", "phones").unwrap().is_none());
}

#[test]
fn test_queries_withUnknownTier_shouldFailWithUnknownTier() {
    let grid = mixed();

    assert!(matches!(grid.tier_entries("nonexistent"), Err(TextGridError::UnknownTier(_))));
    assert!(matches!(grid.tier_end("nonexistent"), Err(TextGridError::UnknownTier(_))));
    assert!(matches!(grid.tier_kind("nonexistent"), Err(TextGridError::UnknownTier(_))));
    assert!(matches!(
        grid.label_occurrences("a", "nonexistent"),
        Err(TextGridError::UnknownTier(_))
    ));
    assert!(matches!(grid.first_entry("nonexistent"), Err(TextGridError::UnknownTier(_))));
}

#[test]
fn test_queries_withEmptyDocument_shouldStillReportUnknownTier() {
    let content = common::build_textgrid(0.0, 1.0, &[]);
    let grid = TextGrid::parse_str(&content).unwrap();

    assert!(grid.list_tiers().is_empty());
    assert!(matches!(grid.tier_entries("nonexistent"), Err(TextGridError::UnknownTier(_))));
}

#[test]
fn test_firstEntry_withEmptyTier_shouldFailWithEmptyTier() {
    let content = common::build_textgrid(
        0.0,
        1.0,
        &[TestTier::Interval { name: "words", start: 0.0, end: 1.0, intervals: Vec::new() }],
    );
    let grid = TextGrid::parse_str(&content).unwrap();

    let error = grid.first_entry("words").unwrap_err();
    assert!(matches!(error, TextGridError::EmptyTier(ref name) if name == "words"));
    assert!(error.is_query_error());
}

#[test]
fn test_tierEntries_calledTwice_shouldBeIdentical() {
    let grid = mixed();
    let first = grid.tier_entries("phones").unwrap().to_vec();
    let second = grid.tier_entries("phones").unwrap().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_tier_shouldExposeDeclaredStart() {
    let content = common::build_textgrid(
        0.0,
        4.0,
        &[TestTier::Point { name: "late", start: 1.25, end: 4.0, points: vec![(2.0, "x")] }],
    );
    let grid = TextGrid::parse_str(&content).unwrap();

    assert_eq!(grid.tier("late").unwrap().start(), 1.25);
}
