use crate::{Interval, IntervalSet};

/// Merge both lists, then subtract the excludes from the includes.
pub fn process_intervals(
    includes: impl IntoIterator<Item = Interval>,
    excludes: impl IntoIterator<Item = Interval>,
) -> Vec<Interval> {
    let includes: IntervalSet = includes.into_iter().collect();
    let excludes: IntervalSet = excludes.into_iter().collect();
    includes.difference(&excludes)
}
