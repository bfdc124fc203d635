use crate::{Interval, merge, subtract};

/// A set of integers stored as sorted, disjoint intervals.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self { intervals: Vec::new() }
    }

    pub fn add(&mut self, interval: Interval) {
        if interval.is_empty() {
            return;
        }
        self.intervals.push(interval);
        self.normalize();
    }

    /// The segment containing `point`
    pub fn find(&self, point: i64) -> Option<Interval> {
        let i = self.intervals.partition_point(|i| i.end() < point);
        self.intervals.get(i).copied().filter(|i| i.contains(point))
    }

    pub fn contains(&self, point: i64) -> bool {
        self.find(point).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    /// Points of `self` that are not in `other`.
    pub fn difference(&self, other: &IntervalSet) -> Vec<Interval> {
        subtract(&self.intervals, &other.intervals)
    }

    fn normalize(&mut self) {
        self.intervals = merge(std::mem::take(&mut self.intervals));
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self { intervals: merge(iter) }
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn set(pairs: &[(i64, i64)]) -> IntervalSet {
        pairs.iter().copied().map(Interval::from).collect()
    }

    fn pairs(set: &IntervalSet) -> Vec<(i64, i64)> {
        set.iter().map(|i| (i.start(), i.end())).collect()
    }

    #[test]
    fn add_keeps_set_normalized() {
        let mut s = set(&[(1, 3), (10, 12)]);
        s.add(Interval::new(4, 9));
        assert_eq!(pairs(&s), [(1, 12)]);
        s.add(Interval::new(20, 15));
        assert_eq!(pairs(&s), [(1, 12)]);
        s.add(Interval::new(-5, -2));
        assert_eq!(pairs(&s), [(-5, -2), (1, 12)]);

        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.as_slice(), [Interval::new(-5, -2), Interval::new(1, 12)]);
        assert_eq!(s.clone().into_vec(), s.as_slice());
        assert_eq!(s.into_iter().map(|i| i.end()).collect::<Vec<_>>(), [-2, 12]);
    }

    #[test]
    fn empty_set() {
        let mut s = IntervalSet::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        s.add(Interval::new(3, 1));
        assert!(s.is_empty());
        assert_eq!(s, IntervalSet::default());
        assert!(s.into_vec().is_empty());
    }

    #[test]
    fn find_returns_containing_segment() {
        let s = set(&[(1, 3), (10, 12)]);
        assert_eq!(s.find(11), Some(Interval::new(10, 12)));
        assert_eq!(s.find(3), Some(Interval::new(1, 3)));
        assert_eq!(s.find(5), None);
        assert_eq!(s.find(13), None);
        assert!(!s.contains(0));
    }

    #[test]
    fn serializes_as_list() {
        let json = serde_json::to_string(&set(&[(1, 2)])).unwrap();
        assert_eq!(json, r#"[{"start":1,"end":2}]"#);
    }

    fn interval() -> impl Strategy<Value = Interval> {
        (-50i64..50, 0i64..15).prop_map(|(start, len)| Interval::new(start, start + len))
    }

    fn intervals() -> impl Strategy<Value = Vec<Interval>> {
        prop::collection::vec(interval(), 0..12)
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(xs in intervals()) {
            let once = merge(xs);
            prop_assert_eq!(merge(once.clone()), once);
        }

        #[test]
        fn merged_segments_are_separated(xs in intervals()) {
            let merged = merge(xs);
            for pair in merged.windows(2) {
                prop_assert!(pair[0].end() + 1 < pair[1].start(), "{:?}", pair);
            }
        }

        #[test]
        fn difference_matches_pointwise_model(includes in intervals(), excludes in intervals()) {
            let inc: IntervalSet = includes.iter().copied().collect();
            let exc: IntervalSet = excludes.iter().copied().collect();
            let output = inc.difference(&exc);

            // containment
            for o in &output {
                prop_assert!(inc.iter().any(|i| i.covers(o)), "{} escapes includes", o);
            }
            // exclusivity
            for o in &output {
                prop_assert!(!exc.iter().any(|e| e.overlaps(o)), "{} hits excludes", o);
            }
            // completeness, each point exactly once
            for p in -60..70 {
                let expected = usize::from(inc.contains(p) && !exc.contains(p));
                let covering = output.iter().filter(|o| o.contains(p)).count();
                prop_assert_eq!(covering, expected, "point {}", p);
            }
        }

        #[test]
        fn difference_is_sorted(includes in intervals(), excludes in intervals()) {
            let inc: IntervalSet = includes.into_iter().collect();
            let exc: IntervalSet = excludes.into_iter().collect();
            let output = inc.difference(&exc);
            prop_assert!(output.windows(2).all(|w| w[0].end() < w[1].start()));
        }
    }
}
