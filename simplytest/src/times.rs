//! The [`times`](self) module contains the types used to define how often a
//! mocked function is expected to be called.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps track of the observed and the expected number of calls of a mock.
#[derive(Default, Debug)]
pub struct Times {
    count: AtomicUsize,
    range: TimesRange,
}

impl Times {
    /// Create a new [`Times`] instance from the passed `range`.
    pub fn new<R: Into<TimesRange>>(range: R) -> Self {
        Self {
            count: AtomicUsize::default(),
            range: range.into(),
        }
    }

    /// Increment the observed call count and return the new value.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of calls observed so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// The expected number of calls.
    pub fn range(&self) -> &TimesRange {
        &self.range
    }

    /// Return `true` if the lower bound of the range is fulfilled.
    pub fn is_ready(&self) -> bool {
        match &self.range.lower {
            Bound::Unbounded => true,
            Bound::Included(x) => *x <= self.count(),
            Bound::Excluded(x) => *x < self.count(),
        }
    }

    /// Return `true` if more calls than allowed by the upper bound were observed.
    pub fn is_exceeded(&self) -> bool {
        match &self.range.upper {
            Bound::Unbounded => false,
            Bound::Included(x) => self.count() > *x,
            Bound::Excluded(x) => self.count() >= *x,
        }
    }

    /// Return `true` if the observed count lies within the expected range.
    pub fn is_satisfied(&self) -> bool {
        self.is_ready() && !self.is_exceeded()
    }
}

/// Defines the range of expected calls with a lower and a upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimesRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl Default for TimesRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl From<usize> for TimesRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for TimesRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);

impl Display for TimesRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let (Bound::Included(lower), Bound::Included(upper)) = (&self.lower, &self.upper) {
            if lower == upper {
                return write!(f, "{lower}");
            }
        }

        match &self.lower {
            Bound::Included(x) => write!(f, "{x}")?,
            Bound::Excluded(x) => write!(f, "{}", x + 1)?,
            Bound::Unbounded => (),
        }

        match &self.upper {
            Bound::Included(x) => write!(f, "..={x}"),
            Bound::Excluded(x) => write!(f, "..{x}"),
            Bound::Unbounded => write!(f, ".."),
        }
    }
}
