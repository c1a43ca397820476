// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear interpolation for animatable values.

use kurbo::{Rect, RoundedRect, RoundedRectRadii};

/// A value that can be blended toward another value of the same type.
///
/// `t = 0.0` yields `self`, `t = 1.0` yields `other`. Values of `t` outside
/// `[0, 1]` extrapolate, which spring overshoot relies on.
pub trait Interpolate: Clone {
    /// Blends `self` toward `other` by `t`.
    #[must_use]
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        lerp(*self, *other, t)
    }
}

impl Interpolate for Rect {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self::new(
            lerp(self.x0, other.x0, t),
            lerp(self.y0, other.y0, t),
            lerp(self.x1, other.x1, t),
            lerp(self.y1, other.y1, t),
        )
    }
}

impl Interpolate for RoundedRectRadii {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self::new(
            lerp(self.top_left, other.top_left, t),
            lerp(self.top_right, other.top_right, t),
            lerp(self.bottom_right, other.bottom_right, t),
            lerp(self.bottom_left, other.bottom_left, t),
        )
    }
}

impl Interpolate for RoundedRect {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self::from_rect(
            self.rect().interpolate(&other.rect(), t),
            self.radii().interpolate(&other.radii(), t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_midpoint() {
        let a = Rect::new(0.0, 0.0, 100.0, 30.0);
        let b = Rect::new(200.0, 0.0, 300.0, 30.0);
        assert_eq!(a.interpolate(&b, 0.5), Rect::new(100.0, 0.0, 200.0, 30.0));
    }

    #[test]
    fn rect_extrapolates_past_one() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(a.interpolate(&b, 1.5), Rect::new(15.0, 0.0, 25.0, 10.0));
    }

    #[test]
    fn rounded_rect_keeps_radii_when_equal() {
        let a = RoundedRect::new(0.0, 0.0, 100.0, 30.0, 14.5);
        let b = RoundedRect::new(100.0, 0.0, 200.0, 30.0, 14.5);
        let mid = a.interpolate(&b, 0.25);
        assert_eq!(mid.rect(), Rect::new(25.0, 0.0, 125.0, 30.0));
        assert_eq!(mid.radii(), RoundedRectRadii::from_single_radius(14.5));
    }

    #[test]
    fn endpoints_are_exact() {
        let a = Rect::new(3.0, 4.0, 9.5, 12.0);
        let b = Rect::new(-7.0, 11.0, 0.25, 40.0);
        assert_eq!(a.interpolate(&b, 0.0), a);
        assert_eq!(a.interpolate(&b, 1.0), b);
        assert_eq!(2.0_f64.interpolate(&6.0, 0.5), 4.0);
    }
}
