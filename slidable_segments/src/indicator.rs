// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection indicator's animated shape.

use kurbo::{Rect, RoundedRect};
use slidable_animation::Interpolate;

/// Frame of the indicator plus the rounded-rect mask that reveals the
/// selected labels underneath it.
///
/// Both are animated as one value so they always move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorShape {
    /// Indicator frame in control coordinates.
    pub frame: Rect,
    /// Clip path for the selected-label layer.
    pub mask: RoundedRect,
}

impl Default for IndicatorShape {
    fn default() -> Self {
        Self::hidden()
    }
}

impl IndicatorShape {
    /// A collapsed, invisible indicator with an empty mask.
    #[must_use]
    pub fn hidden() -> Self {
        Self::new(Rect::ZERO, 0.0)
    }

    /// Indicator covering `frame`, masked with `corner_radius`.
    #[must_use]
    pub fn new(frame: Rect, corner_radius: f64) -> Self {
        Self {
            frame,
            mask: RoundedRect::from_rect(frame, corner_radius),
        }
    }

    /// Returns `true` if the indicator has no area.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.frame.area() == 0.0
    }
}

impl Interpolate for IndicatorShape {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Self {
            frame: self.frame.interpolate(&other.frame, t),
            mask: self.mask.interpolate(&other.mask, t),
        }
    }
}
