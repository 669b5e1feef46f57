use std::fmt::{Display, Formatter};

use serde::Deserialize;
use tracing::trace;

use super::errors::TextKitError;

/// Half-open interval `[start, stop)` over zero-based positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    pub start: usize,
    pub stop: usize,
}

impl Range {
    pub fn new(start: usize, stop: usize) -> Result<Self, TextKitError> {
        let range = Range { start, stop };
        range.validate()?;
        Ok(range)
    }

    fn validate(&self) -> Result<(), TextKitError> {
        if self.start >= self.stop {
            return Err(TextKitError::InvalidRange(self.to_string()));
        }
        Ok(())
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

/// Whether two ranges that touch without overlapping (`a.stop == b.start`)
/// collapse into one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    #[default]
    Merge,
    Keep,
}

impl Adjacency {
    fn joins(&self, current: &Range, next: &Range) -> bool {
        match self {
            Adjacency::Merge => next.start <= current.stop,
            Adjacency::Keep => next.start < current.stop,
        }
    }
}

/// Collapses overlapping ranges into the minimal sorted set of disjoint ranges
/// covering the same indices.
pub fn merge_ranges(ranges: &[Range], adjacency: Adjacency) -> Result<Vec<Range>, TextKitError> {
    if ranges.is_empty() {
        return Err(TextKitError::InvalidRange("no ranges to merge".to_string()));
    }
    for range in ranges {
        range.validate()?;
    }

    let mut sorted = ranges.to_vec();
    sorted.sort_unstable_by_key(|range| range.start);

    let mut merged = Vec::with_capacity(sorted.len());
    let mut current = sorted[0];
    for next in &sorted[1..] {
        if adjacency.joins(&current, next) {
            current.stop = current.stop.max(next.stop);
        } else {
            merged.push(current);
            current = *next;
        }
    }
    merged.push(current);

    trace!("Merged {} ranges into {}", ranges.len(), merged.len());
    Ok(merged)
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn ranges(pairs: &[(usize, usize)]) -> Vec<Range> {
        pairs
            .iter()
            .map(|&(start, stop)| Range { start, stop })
            .collect()
    }

    fn covered(ranges: &[Range]) -> BTreeSet<usize> {
        ranges.iter().flat_map(|range| range.start..range.stop).collect()
    }

    #[test]
    fn merges_overlapping_ranges() {
        let merged = merge_ranges(&ranges(&[(0, 3), (2, 5)]), Adjacency::Merge).unwrap();
        assert_eq!(merged, ranges(&[(0, 5)]));
    }

    #[test]
    fn keeps_disjoint_ranges_apart() {
        let merged = merge_ranges(&ranges(&[(0, 2), (5, 8)]), Adjacency::Merge).unwrap();
        assert_eq!(merged, ranges(&[(0, 2), (5, 8)]));
    }

    #[test]
    fn merges_adjacent_ranges() {
        let merged = merge_ranges(&ranges(&[(0, 3), (3, 6)]), Adjacency::Merge).unwrap();
        assert_eq!(merged, ranges(&[(0, 6)]));
    }

    #[test]
    fn keep_policy_leaves_adjacent_ranges_separate() {
        let merged = merge_ranges(&ranges(&[(3, 6), (0, 3), (1, 2)]), Adjacency::Keep).unwrap();
        assert_eq!(merged, ranges(&[(0, 3), (3, 6)]));
    }

    #[test]
    fn keep_policy_still_merges_overlaps() {
        let merged = merge_ranges(&ranges(&[(0, 4), (3, 6)]), Adjacency::Keep).unwrap();
        assert_eq!(merged, ranges(&[(0, 6)]));
    }

    #[test]
    fn sorts_and_collapses_duplicates() {
        let merged = merge_ranges(
            &ranges(&[(10, 12), (0, 4), (1, 2), (0, 4), (6, 7)]),
            Adjacency::Merge,
        )
        .unwrap();
        assert_eq!(merged, ranges(&[(0, 4), (6, 7), (10, 12)]));
    }

    #[test]
    fn rejects_inverted_range() {
        let result = merge_ranges(&ranges(&[(0, 2), (4, 2)]), Adjacency::Merge);
        assert_eq!(
            result,
            Err(TextKitError::InvalidRange("[4, 2)".to_string()))
        );
    }

    #[test]
    fn rejects_empty_range() {
        let result = merge_ranges(&ranges(&[(3, 3)]), Adjacency::Merge);
        assert!(matches!(result, Err(TextKitError::InvalidRange(_))));
    }

    #[test]
    fn rejects_empty_input() {
        let result = merge_ranges(&[], Adjacency::Merge);
        assert!(matches!(result, Err(TextKitError::InvalidRange(_))));
    }

    #[test]
    fn new_validates_bounds() {
        assert_eq!(Range::new(1, 4).unwrap(), Range { start: 1, stop: 4 });
        assert!(Range::new(4, 1).is_err());
        assert!(Range::new(2, 2).is_err());
    }

    fn arb_ranges() -> impl Strategy<Value = Vec<Range>> {
        prop::collection::vec((0usize..200, 1usize..40), 1..30).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(start, len)| Range {
                    start,
                    stop: start + len,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn merge_preserves_union(input in arb_ranges()) {
            let merged = merge_ranges(&input, Adjacency::Merge).unwrap();
            prop_assert_eq!(covered(&merged), covered(&input));
        }

        #[test]
        fn merge_output_is_sorted_and_maximal(input in arb_ranges()) {
            let merged = merge_ranges(&input, Adjacency::Merge).unwrap();
            for pair in merged.windows(2) {
                prop_assert!(pair[0].start < pair[1].start);
                prop_assert!(pair[0].stop < pair[1].start);
            }
        }

        #[test]
        fn keep_output_is_sorted_and_disjoint(input in arb_ranges()) {
            let merged = merge_ranges(&input, Adjacency::Keep).unwrap();
            prop_assert_eq!(covered(&merged), covered(&input));
            for pair in merged.windows(2) {
                prop_assert!(pair[0].stop <= pair[1].start);
            }
        }

        #[test]
        fn merge_is_idempotent(input in arb_ranges()) {
            let once = merge_ranges(&input, Adjacency::Merge).unwrap();
            let twice = merge_ranges(&once, Adjacency::Merge).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn merge_matches_index_enumeration(input in arb_ranges()) {
            let indices = covered(&input);
            let mut runs: Vec<Range> = Vec::new();
            for index in indices {
                match runs.last_mut() {
                    Some(run) if run.stop == index => run.stop += 1,
                    _ => runs.push(Range { start: index, stop: index + 1 }),
                }
            }
            prop_assert_eq!(merge_ranges(&input, Adjacency::Merge).unwrap(), runs);
        }
    }
}
