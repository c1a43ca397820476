// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interruptible animated values.
//!
//! ## Usage
//!
//! 1) Create an [`Animated`] with its initial value.
//! 2) Call [`Animated::animate_to`] with a new target and the host's current time.
//! 3) Each frame, read [`Animated::presentation`] for the value to draw.
//! 4) Optionally call [`Animated::settle`] to drop transitions that have finished.
//!
//! Retargeting while a transition is running starts the new transition from the
//! value currently on screen, not from the previous target, so interrupted
//! animations never jump.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use slidable_animation::{Animated, SpringSpec};
//!
//! let spring = SpringSpec::new(1.0, 300.0, 40.0);
//! let mut x = Animated::new(0.0_f64);
//!
//! x.animate_to(100.0, &spring, Duration::ZERO);
//! assert_eq!(*x.target(), 100.0);
//!
//! let early = x.presentation(Duration::from_millis(16));
//! assert!(early > 0.0 && early < 100.0);
//!
//! let end = spring.settling_duration();
//! assert_eq!(x.presentation(end), 100.0);
//! assert!(x.settle(end));
//! assert!(!x.is_animating(end));
//! ```

use core::time::Duration;

use crate::interpolate::Interpolate;
use crate::spring::SpringSpec;

/// A running spring transition between two values.
#[derive(Clone, Debug)]
pub struct Transition<T> {
    /// Value at the start of the transition.
    pub from: T,
    /// Value at the end of the transition.
    pub to: T,
    /// Spring driving the progress curve.
    pub spring: SpringSpec,
    /// Host time at which the transition started.
    pub started_at: Duration,
    /// Total length of the transition (the spring's settling duration).
    pub duration: Duration,
}

impl<T: Interpolate> Transition<T> {
    /// Returns `true` once `now` has reached the end of the transition.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }

    /// Interpolated value at host time `now`.
    ///
    /// Times before `started_at` clamp to `from`; times past the end clamp to `to`.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> T {
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration {
            return self.to.clone();
        }
        self.from
            .interpolate(&self.to, self.spring.fraction_at(elapsed))
    }
}

/// A value with a committed target and an optional in-flight transition.
///
/// The target is the "model" value: what the value will be once motion stops.
/// The presentation is what should be drawn right now.
#[derive(Clone, Debug)]
pub struct Animated<T> {
    target: T,
    transition: Option<Transition<T>>,
}

impl<T: Default> Default for Animated<T> {
    fn default() -> Self {
        Self {
            target: T::default(),
            transition: None,
        }
    }
}

impl<T: Interpolate> Animated<T> {
    /// Creates a value at rest.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            transition: None,
        }
    }

    /// Returns the committed target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns the running transition, if any.
    ///
    /// A finished transition remains here until [`Animated::settle`] or a new
    /// target replaces it.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition<T>> {
        self.transition.as_ref()
    }

    /// Returns `true` if a transition is still in motion at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_finished(now))
    }

    /// Value to draw at host time `now`.
    #[must_use]
    pub fn presentation(&self, now: Duration) -> T {
        match &self.transition {
            Some(transition) => transition.value_at(now),
            None => self.target.clone(),
        }
    }

    /// Starts a spring transition toward `target`, beginning at the current
    /// presentation value.
    ///
    /// A spring whose settling duration is zero applies the target immediately.
    pub fn animate_to(&mut self, target: T, spring: &SpringSpec, now: Duration) {
        let duration = spring.settling_duration();
        if duration.is_zero() {
            self.snap_to(target);
            return;
        }
        let from = self.presentation(now);
        self.transition = Some(Transition {
            from,
            to: target.clone(),
            spring: *spring,
            started_at: now,
            duration,
        });
        self.target = target;
    }

    /// Sets the value immediately, cancelling any transition.
    pub fn snap_to(&mut self, target: T) {
        self.transition = None;
        self.target = target;
    }

    /// Freezes the value at its presentation at `now`, cancelling any transition.
    ///
    /// Returns the frozen value.
    pub fn interrupt(&mut self, now: Duration) -> T {
        let current = self.presentation(now);
        self.snap_to(current.clone());
        current
    }

    /// Drops the transition if it has finished by `now`.
    ///
    /// Returns `true` if a transition was dropped.
    pub fn settle(&mut self, now: Duration) -> bool {
        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
            true
        } else {
            false
        }
    }
}
