// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring model used to drive transitions.
//!
//! The spring moves a normalized progress value from `0.0` toward `1.0`. Its
//! displacement from the target obeys `m·x'' = -k·x - c·v`, integrated with a
//! fixed-step semi-implicit Euler scheme so results are reproducible across
//! hosts regardless of frame timing.
//!
//! ```
//! use core::time::Duration;
//! use slidable_animation::SpringSpec;
//!
//! let spring = SpringSpec::default();
//! let settle = spring.settling_duration();
//! assert!(settle > Duration::from_millis(500));
//!
//! assert_eq!(spring.fraction_at(Duration::ZERO), 0.0);
//! assert!((spring.fraction_at(settle) - 1.0).abs() < 1e-2);
//! ```

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Integration step, in seconds.
const STEP: f64 = 1.0 / 600.0;

/// Upper bound on simulated settling time, in seconds.
const MAX_SETTLING_SECS: f64 = 10.0;

/// Default mass of [`SpringSpec`].
pub const DEFAULT_MASS: f64 = 1.0;
/// Default stiffness of [`SpringSpec`].
pub const DEFAULT_STIFFNESS: f64 = 100.0;
/// Default damping coefficient of [`SpringSpec`].
pub const DEFAULT_DAMPING: f64 = 10.0;
/// Default threshold below which displacement and velocity count as at rest.
pub const DEFAULT_REST_THRESHOLD: f64 = 1e-3;

/// Physical parameters of a damped spring.
///
/// Defaults match a moderately bouncy spring: mass `1`, stiffness `100`,
/// damping `10` (damping ratio `0.5`) and no initial velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    /// Mass attached to the spring. Must be positive.
    pub mass: f64,
    /// Spring constant `k`. Must be positive.
    pub stiffness: f64,
    /// Damping coefficient `c`. Must be non-negative.
    pub damping: f64,
    /// Initial velocity in progress units per second, positive toward the target.
    pub initial_velocity: f64,
    /// Displacement and velocity magnitude under which the spring is at rest.
    pub rest_threshold: f64,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MASS, DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }
}

impl SpringSpec {
    /// Creates a spring with the given mass, stiffness and damping.
    #[must_use]
    pub const fn new(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            initial_velocity: 0.0,
            rest_threshold: DEFAULT_REST_THRESHOLD,
        }
    }

    /// Returns a copy with the given initial velocity.
    #[must_use]
    pub const fn with_initial_velocity(mut self, initial_velocity: f64) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    /// Returns a copy with the given rest threshold.
    #[must_use]
    pub const fn with_rest_threshold(mut self, rest_threshold: f64) -> Self {
        self.rest_threshold = rest_threshold;
        self
    }

    /// Returns `true` if the parameters describe a physically meaningful spring.
    ///
    /// Invalid springs complete instantly: their settling duration is zero and
    /// [`SpringSpec::fraction_at`] always reports `1.0`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.mass.is_finite()
            && self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.initial_velocity.is_finite()
            && self.mass > 0.0
            && self.stiffness > 0.0
            && self.damping >= 0.0
            && self.rest_threshold > 0.0
    }

    /// Time the spring needs to come to rest at its target.
    ///
    /// Found by simulation, capped at ten seconds for springs too weakly
    /// damped to settle in any reasonable time.
    #[must_use]
    pub fn settling_duration(&self) -> Duration {
        if !self.is_valid() {
            return Duration::ZERO;
        }
        let mut state = SpringState::start(self);
        let mut elapsed = 0.0;
        while elapsed < MAX_SETTLING_SECS && !state.is_at_rest(self.rest_threshold) {
            state.step(self, STEP);
            elapsed += STEP;
        }
        Duration::from_secs_f64(elapsed)
    }

    /// Normalized progress after `elapsed` time.
    ///
    /// Starts at `0.0` and converges to `1.0`; underdamped springs overshoot,
    /// so intermediate values may leave the `[0, 1]` range.
    #[must_use]
    pub fn fraction_at(&self, elapsed: Duration) -> f64 {
        if !self.is_valid() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64().min(MAX_SETTLING_SECS);
        let mut state = SpringState::start(self);
        let mut done = 0.0;
        while done + STEP <= t {
            state.step(self, STEP);
            done += STEP;
        }
        let rest = t - done;
        if rest > 0.0 {
            state.step(self, rest);
        }
        1.0 + state.displacement
    }
}

/// Displacement from the target (`progress - 1`) and velocity.
#[derive(Clone, Copy, Debug)]
struct SpringState {
    displacement: f64,
    velocity: f64,
}

impl SpringState {
    fn start(spec: &SpringSpec) -> Self {
        Self {
            displacement: -1.0,
            velocity: spec.initial_velocity,
        }
    }

    fn step(&mut self, spec: &SpringSpec, h: f64) {
        let force = -spec.stiffness * self.displacement - spec.damping * self.velocity;
        self.velocity += force / spec.mass * h;
        self.displacement += self.velocity * h;
    }

    fn is_at_rest(&self, threshold: f64) -> bool {
        self.displacement.abs() < threshold && self.velocity.abs() < threshold
    }
}
