use std::fmt::Display;
use std::ops::RangeInclusive;

/// A closed integer range `[start, end]`.
///
/// An interval with `start > end` contains no points and is considered empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> i64 {
        self.start
    }

    pub const fn end(&self) -> i64 {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// `Some(self)` unless the interval is empty
    pub fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }

    pub fn contains(&self, point: i64) -> bool {
        self.start <= point && point <= self.end
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.start <= self.end
            && other.end >= self.start
    }

    /// Whether every point of `other` is also in `self`.
    pub fn covers(&self, other: &Interval) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub(crate) const fn with_start(self, start: i64) -> Self {
        Self { start, ..self }
    }

    pub(crate) const fn with_end(self, end: i64) -> Self {
        Self { end, ..self }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

impl From<RangeInclusive<i64>> for Interval {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<Interval> for RangeInclusive<i64> {
    fn from(interval: Interval) -> Self {
        interval.start..=interval.end
    }
}
