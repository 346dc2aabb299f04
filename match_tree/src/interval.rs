/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Integer and number intervals used by interval dimensions.
//!
//! Both interval types have optional bounds (an absent bound leaves that side
//! unconstrained) and an independent exclusion flag per bound. A bound's flag
//! is meaningless while the bound is absent and is ignored by equality.
//!
//! [`NumberInterval`] tolerates floating point noise: two bounds within
//! [`EPSILON`] of each other are equal, an inclusive bound admits points up
//! to [`EPSILON`] beyond it, and an exclusive bound rejects points up to
//! [`EPSILON`] inside it.

use std::fmt;

/// Tolerance used by [`NumberInterval`] comparisons.
pub const EPSILON: f64 = 1e-10;

/// Operations shared by the interval kinds, used by the interval node tables.
pub(crate) trait Interval {
    /// The type of the points the interval may contain.
    type Point: Copy;

    /// Whether `point` lies within the interval.
    fn contains(&self, point: Self::Point) -> bool;

    /// Whether `self` and `other` describe the same interval.
    fn equals(&self, other: &Self) -> bool;
}

/// A closed, open, or half-open interval over `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerInterval {
    /// Lower bound, `None` for unbounded.
    pub min: Option<i64>,
    /// Whether `min` itself is outside the interval.
    pub min_is_excluded: bool,
    /// Upper bound, `None` for unbounded.
    pub max: Option<i64>,
    /// Whether `max` itself is outside the interval.
    pub max_is_excluded: bool,
}

impl IntegerInterval {
    /// `[min, max]`
    pub const fn closed(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            min_is_excluded: false,
            max: Some(max),
            max_is_excluded: false,
        }
    }

    /// `(min, max)`
    pub const fn open(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            min_is_excluded: true,
            max: Some(max),
            max_is_excluded: true,
        }
    }

    /// `[min, +inf)`
    pub const fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            ..Self::unbounded()
        }
    }

    /// `(min, +inf)`
    pub const fn greater_than(min: i64) -> Self {
        Self {
            min: Some(min),
            min_is_excluded: true,
            ..Self::unbounded()
        }
    }

    /// `(-inf, max]`
    pub const fn at_most(max: i64) -> Self {
        Self {
            max: Some(max),
            ..Self::unbounded()
        }
    }

    /// `(-inf, max)`
    pub const fn less_than(max: i64) -> Self {
        Self {
            max: Some(max),
            max_is_excluded: true,
            ..Self::unbounded()
        }
    }

    /// `(-inf, +inf)`
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            min_is_excluded: false,
            max: None,
            max_is_excluded: false,
        }
    }

    /// Whether `x` lies within the interval.
    pub const fn contains(&self, x: i64) -> bool {
        if let Some(min) = self.min {
            if self.min_is_excluded {
                if x <= min {
                    return false;
                }
            } else if x < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if self.max_is_excluded {
                if x >= max {
                    return false;
                }
            } else if x > max {
                return false;
            }
        }
        true
    }

    /// Whether both intervals have the same bounds and flags.
    pub fn equals(&self, other: &Self) -> bool {
        bound_equals(
            (self.min, self.min_is_excluded),
            (other.min, other.min_is_excluded),
            |a, b| a == b,
        ) && bound_equals(
            (self.max, self.max_is_excluded),
            (other.max, other.max_is_excluded),
            |a, b| a == b,
        )
    }
}

impl PartialEq for IntegerInterval {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for IntegerInterval {}

impl Interval for IntegerInterval {
    type Point = i64;

    fn contains(&self, point: i64) -> bool {
        IntegerInterval::contains(self, point)
    }

    fn equals(&self, other: &Self) -> bool {
        IntegerInterval::equals(self, other)
    }
}

/// A closed, open, or half-open interval over `f64`, compared with [`EPSILON`]
/// tolerance.
///
/// Deliberately not [`PartialEq`]: tolerant equality is not transitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberInterval {
    /// Lower bound, `None` for unbounded.
    pub min: Option<f64>,
    /// Whether `min` itself is outside the interval.
    pub min_is_excluded: bool,
    /// Upper bound, `None` for unbounded.
    pub max: Option<f64>,
    /// Whether `max` itself is outside the interval.
    pub max_is_excluded: bool,
}

impl NumberInterval {
    /// `[min, max]`
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            min_is_excluded: false,
            max: Some(max),
            max_is_excluded: false,
        }
    }

    /// `(min, max)`
    pub const fn open(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            min_is_excluded: true,
            max: Some(max),
            max_is_excluded: true,
        }
    }

    /// `[min, +inf)`
    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::unbounded()
        }
    }

    /// `(min, +inf)`
    pub const fn greater_than(min: f64) -> Self {
        Self {
            min: Some(min),
            min_is_excluded: true,
            ..Self::unbounded()
        }
    }

    /// `(-inf, max]`
    pub const fn at_most(max: f64) -> Self {
        Self {
            max: Some(max),
            ..Self::unbounded()
        }
    }

    /// `(-inf, max)`
    pub const fn less_than(max: f64) -> Self {
        Self {
            max: Some(max),
            max_is_excluded: true,
            ..Self::unbounded()
        }
    }

    /// `(-inf, +inf)`
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            min_is_excluded: false,
            max: None,
            max_is_excluded: false,
        }
    }

    /// Whether `x` lies within the interval, with [`EPSILON`] tolerance.
    pub fn contains(&self, x: f64) -> bool {
        if let Some(min) = self.min {
            if self.min_is_excluded {
                if x <= min + EPSILON {
                    return false;
                }
            } else if x < min - EPSILON {
                return false;
            }
        }
        if let Some(max) = self.max {
            if self.max_is_excluded {
                if x >= max - EPSILON {
                    return false;
                }
            } else if x > max + EPSILON {
                return false;
            }
        }
        true
    }

    /// Whether both intervals have bounds within [`EPSILON`] of each other and
    /// the same flags.
    pub fn equals(&self, other: &Self) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() < EPSILON;
        bound_equals(
            (self.min, self.min_is_excluded),
            (other.min, other.min_is_excluded),
            close,
        ) && bound_equals(
            (self.max, self.max_is_excluded),
            (other.max, other.max_is_excluded),
            close,
        )
    }
}

impl Interval for NumberInterval {
    type Point = f64;

    fn contains(&self, point: f64) -> bool {
        NumberInterval::contains(self, point)
    }

    fn equals(&self, other: &Self) -> bool {
        NumberInterval::equals(self, other)
    }
}

impl fmt::Display for IntegerInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(
            f,
            (self.min, self.min_is_excluded),
            (self.max, self.max_is_excluded),
        )
    }
}

impl fmt::Display for NumberInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_interval(
            f,
            (self.min, self.min_is_excluded),
            (self.max, self.max_is_excluded),
        )
    }
}

/// Write an interval in bracket notation, e.g. `[1, 5)` or `(-inf, 3]`.
fn write_interval<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    (min, min_is_excluded): (Option<T>, bool),
    (max, max_is_excluded): (Option<T>, bool),
) -> fmt::Result {
    match min {
        Some(min) if !min_is_excluded => write!(f, "[{min}, ")?,
        Some(min) => write!(f, "({min}, ")?,
        None => f.write_str("(-inf, ")?,
    }
    match max {
        Some(max) if !max_is_excluded => write!(f, "{max}]"),
        Some(max) => write!(f, "{max})"),
        None => f.write_str("+inf)"),
    }
}

/// Compare one side of two intervals. Flags only matter for present bounds.
fn bound_equals<T: Copy>(
    (a, a_excluded): (Option<T>, bool),
    (b, b_excluded): (Option<T>, bool),
    eq: impl Fn(T, T) -> bool,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => eq(a, b) && a_excluded == b_excluded,
        _ => false,
    }
}
