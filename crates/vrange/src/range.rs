//! Normalized sets of disjoint intervals and their algebra

use std::cmp::Ordering;
use std::fmt;

use crate::interval::Interval;
use crate::version::{Version, VersionError};

/// A normalized version range.
///
/// The interval list is always free of empty members, sorted by the version
/// order of the bounds, and pairwise non-mergeable. Every operation returns
/// a new range; construction from an arbitrary interval list re-normalizes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionRange {
    intervals: Vec<Interval>,
}

impl VersionRange {
    /// Build a range from arbitrary intervals, dropping empty members and
    /// merging every combinable pair.
    pub fn new(intervals: Vec<Interval>) -> Self {
        let mut kept: Vec<Interval> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
        kept.sort_by(interval_order);

        let mut iter = kept.into_iter();
        let mut current = match iter.next() {
            Some(first) => first,
            None => return VersionRange::default(),
        };
        let mut merged = Vec::new();
        for next in iter {
            match current.union(&next) {
                Some(combined) => current = combined,
                None => {
                    merged.push(current);
                    current = next;
                }
            }
        }
        merged.push(current);
        VersionRange { intervals: merged }
    }

    /// The range containing every version
    pub fn unbounded() -> Self {
        VersionRange {
            intervals: vec![Interval::unbounded()],
        }
    }

    /// The range containing no version
    pub fn empty() -> Self {
        VersionRange::default()
    }

    /// The range containing exactly the given version
    pub fn exact(version: &str) -> Result<Self, VersionError> {
        let version = Version::parse(version)?;
        Ok(VersionRange {
            intervals: vec![Interval::point(version)],
        })
    }

    /// Every version above the given one
    pub fn greater_than(version: &str, inclusive: bool) -> Result<Self, VersionError> {
        let version = Version::parse(version)?;
        Ok(VersionRange {
            intervals: vec![Interval::new(Some(version), inclusive, None, false)],
        })
    }

    /// Every version below the given one
    pub fn less_than(version: &str, inclusive: bool) -> Result<Self, VersionError> {
        let version = Version::parse(version)?;
        Ok(VersionRange {
            intervals: vec![Interval::new(None, false, Some(version), inclusive)],
        })
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_unbounded(&self) -> bool {
        self.intervals.len() == 1 && self.intervals[0].is_unbounded()
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.intervals.iter().any(|i| i.contains(version))
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut intervals = self.intervals.clone();
        intervals.extend(other.intervals.iter().cloned());
        VersionRange::new(intervals)
    }

    /// Cross product of member intersections
    pub fn intersect(&self, other: &Self) -> Self {
        let mut intervals = Vec::new();
        for a in &self.intervals {
            for b in &other.intervals {
                let shared = a.intersect(b);
                if !shared.is_empty() {
                    intervals.push(shared);
                }
            }
        }
        VersionRange::new(intervals)
    }

    /// Every version not in this range
    pub fn complement(&self) -> Self {
        if self.intervals.is_empty() {
            return VersionRange::unbounded();
        }
        if self.is_unbounded() {
            return VersionRange::empty();
        }

        let mut intervals = Vec::new();
        let first = &self.intervals[0];
        if let Some(min) = first.min() {
            intervals.push(Interval::new(
                None,
                false,
                Some(min.clone()),
                !first.min_inclusive(),
            ));
        }
        for pair in self.intervals.windows(2) {
            if let (Some(max), Some(min)) = (pair[0].max(), pair[1].min()) {
                let gap = Interval::new(
                    Some(max.clone()),
                    !pair[0].max_inclusive(),
                    Some(min.clone()),
                    !pair[1].min_inclusive(),
                );
                if !gap.is_empty() {
                    intervals.push(gap);
                }
            }
        }
        if let Some(last) = self.intervals.last() {
            if let Some(max) = last.max() {
                intervals.push(Interval::new(
                    Some(max.clone()),
                    !last.max_inclusive(),
                    None,
                    false,
                ));
            }
        }
        // Gap intervals of a normalized range are already disjoint and
        // separated, no re-normalization needed
        VersionRange { intervals }
    }

    /// Remove a single version from the range. Intervals containing the
    /// point are split in two; everything else passes through unchanged.
    pub fn exclude(&self, version: &Version) -> Self {
        if !self.contains(version) {
            return self.clone();
        }
        let mut intervals = Vec::with_capacity(self.intervals.len() + 1);
        for interval in &self.intervals {
            if !interval.contains(version) {
                intervals.push(interval.clone());
                continue;
            }
            let left = Interval::new(
                interval.min().cloned(),
                interval.min_inclusive(),
                Some(version.clone()),
                false,
            );
            if !left.is_empty() {
                intervals.push(left);
            }
            let right = Interval::new(
                Some(version.clone()),
                false,
                interval.max().cloned(),
                interval.max_inclusive(),
            );
            if !right.is_empty() {
                intervals.push(right);
            }
        }
        VersionRange::new(intervals)
    }
}

// Intervals sort by their lower bound in version order, an absent lower
// bound first and inclusive endpoints ahead of exclusive ones, then by the
// upper bound with an absent upper bound last.
fn interval_order(a: &Interval, b: &Interval) -> Ordering {
    let by_min = match (a.min(), b.min()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(y).then(match (a.min_inclusive(), b.min_inclusive()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }),
    };
    by_min.then_with(|| match (a.max(), b.max()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(y),
    })
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "∅");
        }
        for (idx, interval) in self.intervals.iter().enumerate() {
            if idx > 0 {
                write!(f, "∪")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}
