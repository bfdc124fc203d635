use crate::Interval;

/// Collapse overlapping and touching intervals into a sorted list of disjoint segments.
///
/// Closed integer intervals touch when no integer lies between them, so `[1, 5]` and `[6, 10]`
/// become `[1, 10]`. Empty (inverted) intervals are dropped.
pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
    sorted.sort_unstable_by_key(Interval::start);

    let mut merged = Vec::<Interval>::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if !is_separated(&*last, &interval) => {
                // overlapping or touching
                *last = last.with_end(last.end().max(interval.end()));
            }
            _ => merged.push(interval),
        }
    }

    merged
}

/// `next` starts after `last` with at least one uncovered point in between.
fn is_separated(last: &Interval, next: &Interval) -> bool {
    last.end().saturating_add(1) < next.start()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ivs(pairs: &[(i64, i64)]) -> Vec<Interval> {
        pairs.iter().copied().map(Interval::from).collect()
    }

    #[test]
    fn empty_input() {
        assert!(merge(Vec::new()).is_empty());
    }

    #[test]
    fn sorts_unordered_input() {
        assert_eq!(merge(ivs(&[(20, 25), (1, 3), (10, 12)])), ivs(&[(1, 3), (10, 12), (20, 25)]));
    }

    #[test]
    fn overlapping_intervals_merge() {
        assert_eq!(merge(ivs(&[(1, 5), (3, 8), (7, 12)])), ivs(&[(1, 12)]));
    }

    #[test]
    fn nested_interval_keeps_outer_end() {
        assert_eq!(merge(ivs(&[(1, 20), (5, 6)])), ivs(&[(1, 20)]));
    }

    #[test]
    fn touching_intervals_merge() {
        assert_eq!(merge(ivs(&[(1, 5), (6, 10)])), ivs(&[(1, 10)]));
        assert_eq!(merge(ivs(&[(1, 5), (5, 10)])), ivs(&[(1, 10)]));
    }

    #[test]
    fn one_point_gap_is_kept() {
        assert_eq!(merge(ivs(&[(1, 5), (7, 10)])), ivs(&[(1, 5), (7, 10)]));
    }

    #[test]
    fn inverted_intervals_are_dropped() {
        assert_eq!(merge(ivs(&[(5, 3), (10, 12)])), ivs(&[(10, 12)]));
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        assert_eq!(
            merge(ivs(&[(i64::MAX, i64::MAX), (i64::MIN, i64::MAX - 1)])),
            ivs(&[(i64::MIN, i64::MAX)])
        );
    }
}
