use std::fmt;

use crate::foundation::core::Point;
use crate::foundation::error::{VectorError, VectorResult};

/// Value carried by an [`Attribute`](crate::Attribute).
pub trait AttrValue: Clone + PartialEq + fmt::Debug + 'static {
    /// The value an attribute reports before its creation instant.
    ///
    /// It has the same shape as `self` (tuple arity, color kind) with every
    /// component zeroed.
    fn zero_like(&self) -> Self;
}

/// Values that can be layered additively (`add`, `add_from`, ...).
pub trait Additive: AttrValue {
    /// Component-wise sum.
    fn add(&self, other: &Self) -> Self;
}

/// Interpolation contract for attribute value types.
pub trait Lerp: AttrValue {
    /// Interpolate from `a` to `b` with normalized factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Reject endpoint pairs of different concrete kinds.
    fn check_compatible(_a: &Self, _b: &Self) -> VectorResult<()> {
        Ok(())
    }
}

impl AttrValue for f64 {
    fn zero_like(&self) -> Self {
        0.0
    }
}

impl Additive for f64 {
    fn add(&self, other: &Self) -> Self {
        self + other
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl AttrValue for bool {
    fn zero_like(&self) -> Self {
        false
    }
}

impl AttrValue for String {
    fn zero_like(&self) -> Self {
        String::new()
    }
}

impl AttrValue for Point {
    fn zero_like(&self) -> Self {
        Point::ZERO
    }
}

impl Additive for Point {
    fn add(&self, other: &Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl AttrValue for Vec<f64> {
    fn zero_like(&self) -> Self {
        vec![0.0; self.len()]
    }
}

impl Additive for Vec<f64> {
    fn add(&self, other: &Self) -> Self {
        self.iter().zip(other).map(|(a, b)| a + b).collect()
    }
}

impl Lerp for Vec<f64> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.iter().zip(b).map(|(a, b)| a + (b - a) * t).collect()
    }

    fn check_compatible(a: &Self, b: &Self) -> VectorResult<()> {
        if a.len() != b.len() {
            return Err(VectorError::config(format!(
                "cannot interpolate tuples of length {} and {}",
                a.len(),
                b.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
