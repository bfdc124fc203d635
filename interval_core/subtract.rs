use crate::Interval;

/// How an exclude interval lies relative to the remaining part of an include interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Overlap {
    Disjoint,
    Covers,
    Start,
    End,
    Inside,
}

impl Overlap {
    pub fn classify(include: &Interval, exclude: &Interval) -> Overlap {
        if exclude.end() < include.start() || exclude.start() > include.end() {
            Overlap::Disjoint
        } else if exclude.covers(include) {
            Overlap::Covers
        } else if exclude.start() <= include.start() {
            Overlap::Start
        } else if exclude.end() >= include.end() {
            Overlap::End
        } else {
            Overlap::Inside
        }
    }
}

/// Fold state while carving a single include interval.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carve {
    /// What is left of the include, `None` once an exclude covered all of it.
    pub remaining: Option<Interval>,
    /// Finished pieces left of an interior exclude, in ascending order.
    pub fragments: Vec<Interval>,
}

impl Carve {
    pub fn new(include: Interval) -> Self {
        Self { remaining: include.non_empty(), fragments: Vec::new() }
    }

    /// Apply one exclude to the remaining interval.
    ///
    /// Excludes have to be applied in ascending order: an interior exclude finishes the
    /// fragment to its left, so nothing left of it may still be carved afterwards.
    pub fn step(mut self, exclude: &Interval) -> Self {
        let Some(include) = self.remaining else { return self };

        // The +1/-1 below cannot overflow: each is bounded by the other endpoint of `include`.
        self.remaining = match Overlap::classify(&include, exclude) {
            Overlap::Disjoint => Some(include),
            Overlap::Covers => None,
            Overlap::Start => Some(include.with_start(exclude.end() + 1)),
            Overlap::End => Some(include.with_end(exclude.start() - 1)),
            Overlap::Inside => {
                self.fragments.push(include.with_end(exclude.start() - 1));
                Some(include.with_start(exclude.end() + 1))
            }
        };
        self
    }

    pub fn finish(self) -> Vec<Interval> {
        let mut fragments = self.fragments;
        fragments.extend(self.remaining);
        fragments
    }
}

/// The parts of `includes` not covered by `excludes`.
///
/// Both lists must already be merged (see [`crate::merge`]). The result is then sorted and
/// disjoint as well.
pub fn subtract(includes: &[Interval], excludes: &[Interval]) -> Vec<Interval> {
    includes.iter().flat_map(|&include| carve(include, excludes)).collect()
}

fn carve(include: Interval, excludes: &[Interval]) -> Vec<Interval> {
    excludes
        .iter()
        // sorted, so nothing past the include's end can touch it
        .take_while(|exclude| exclude.start() <= include.end())
        .fold(Carve::new(include), Carve::step)
        .finish()
}
