// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-time snapping: which segment a dragged indicator settles on.
//!
//! ## Policy
//!
//! 1) Measure the signed distance from the indicator center to every segment
//!    center (`segment - indicator`; negative means the segment lies to the left).
//! 2) Stable-sort by absolute distance and keep the two closest.
//! 3) The *left nearest* is the closest entry if its distance is `<= 0`, else the
//!    runner-up. The *right nearest* is the closest entry if its distance is
//!    `>= 0`, else the runner-up. An indicator sitting exactly on a center makes
//!    that segment both.
//! 4) A release at or beyond `-trigger_velocity` picks the left nearest; at or
//!    beyond `+trigger_velocity` picks the right nearest. Otherwise the closer of
//!    the two wins, with ties going left.
//!
//! ```
//! use slidable_segments::SnapPolicy;
//!
//! let centers = [50.0, 150.0, 250.0, 350.0];
//! let policy = SnapPolicy::default();
//!
//! // Slow release: the closest center wins.
//! assert_eq!(policy.resolve(centers, 260.0, 0.0), Some(2));
//! // Fast flick to the right from just past segment 2's center.
//! assert_eq!(policy.resolve(centers, 260.0, 900.0), Some(3));
//! ```

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::DEFAULT_PAN_TRIGGER_VELOCITY;

/// A segment considered as a snap target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapCandidate {
    /// Segment index.
    pub index: usize,
    /// Signed distance `segment_center - indicator_center`.
    pub distance: f64,
}

/// The nearest segment on each side of the indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapNeighbors {
    /// Nearest segment whose center is at or left of the indicator, falling
    /// back to the runner-up when the closest lies to the right.
    pub left: SnapCandidate,
    /// Nearest segment whose center is at or right of the indicator, falling
    /// back to the runner-up when the closest lies to the left.
    pub right: SnapCandidate,
}

impl SnapNeighbors {
    /// Finds the two segments bracketing `indicator_center_x`.
    ///
    /// Returns `None` with fewer than two segments.
    #[must_use]
    pub fn find<I>(centers: I, indicator_center_x: f64) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut candidates: Vec<SnapCandidate> = centers
            .into_iter()
            .enumerate()
            .map(|(index, center_x)| SnapCandidate {
                index,
                distance: center_x - indicator_center_x,
            })
            .collect();
        if candidates.len() < 2 {
            return None;
        }
        candidates.sort_by(|a, b| a.distance.abs().total_cmp(&b.distance.abs()));

        let (closest, runner_up) = (candidates[0], candidates[1]);
        let left = if closest.distance <= 0.0 {
            closest
        } else {
            runner_up
        };
        let right = if closest.distance >= 0.0 {
            closest
        } else {
            runner_up
        };
        Some(Self { left, right })
    }
}

/// Velocity-aware nearest-segment snapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPolicy {
    trigger_velocity: f64,
}

impl Default for SnapPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PAN_TRIGGER_VELOCITY)
    }
}

impl SnapPolicy {
    /// Creates a policy that treats releases at or above `trigger_velocity`
    /// (in either direction) as directional flicks.
    #[must_use]
    pub const fn new(trigger_velocity: f64) -> Self {
        Self { trigger_velocity }
    }

    /// Returns the flick threshold.
    #[must_use]
    pub const fn trigger_velocity(&self) -> f64 {
        self.trigger_velocity
    }

    /// Picks between the two bracketing segments for a release at `velocity_x`.
    #[must_use]
    pub fn choose(&self, neighbors: &SnapNeighbors, velocity_x: f64) -> SnapCandidate {
        if velocity_x <= -self.trigger_velocity {
            neighbors.left
        } else if velocity_x >= self.trigger_velocity {
            neighbors.right
        } else if neighbors.left.distance.abs() <= neighbors.right.distance.abs() {
            neighbors.left
        } else {
            neighbors.right
        }
    }

    /// Resolves the segment to select for an indicator released at
    /// `indicator_center_x` with horizontal velocity `velocity_x`.
    ///
    /// Returns `None` with fewer than two segments.
    #[must_use]
    pub fn resolve<I>(&self, centers: I, indicator_center_x: f64, velocity_x: f64) -> Option<usize>
    where
        I: IntoIterator<Item = f64>,
    {
        let neighbors = SnapNeighbors::find(centers, indicator_center_x)?;
        let chosen = self.choose(&neighbors, velocity_x);
        log::debug!(
            "snap at x={indicator_center_x} v={velocity_x}: left={} right={} -> {}",
            neighbors.left.index,
            neighbors.right.index,
            chosen.index
        );
        Some(chosen.index)
    }
}
