// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slidable Animation: host-agnostic, interruptible spring transitions.
//!
//! This crate animates geometric UI values without owning a clock, a frame
//! loop, or a renderer. The host passes its own monotonic timestamps (as
//! [`core::time::Duration`] since any fixed origin) and reads back the value to
//! draw for that moment.
//!
//! - [`SpringSpec`]: a damped spring with a simulated settling duration.
//! - [`Interpolate`]: blending for `f64` and the `kurbo` shapes a UI animates.
//! - [`Animated`]: a target value plus an optional in-flight [`Transition`].
//!
//! Transitions always start from the value currently presented, so retargeting
//! mid-flight continues smoothly from where the value is on screen.
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use slidable_animation::{Animated, SpringSpec};
//!
//! let spring = SpringSpec::default();
//! let mut frame = Animated::new(Rect::new(0.0, 0.0, 100.0, 30.0));
//!
//! frame.animate_to(Rect::new(100.0, 0.0, 200.0, 30.0), &spring, Duration::ZERO);
//!
//! // Draw whatever the host's frame clock says is current.
//! let on_screen = frame.presentation(Duration::from_millis(16));
//! assert!(on_screen.x0 > 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod animated;
mod interpolate;
mod spring;

pub use animated::{Animated, Transition};
pub use interpolate::Interpolate;
pub use spring::{
    DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_REST_THRESHOLD, DEFAULT_STIFFNESS, SpringSpec,
};
