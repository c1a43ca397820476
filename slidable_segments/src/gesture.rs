// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture input and drag-session state.
//!
//! ## Usage
//!
//! 1) When the platform is about to recognize a pan, ask
//!    [`SegmentedControl::should_begin_pan_at`](crate::SegmentedControl::should_begin_pan_at)
//!    with the pointer position and initial velocity. Drags start on the
//!    indicator only. A rejected pan should be offered to other recognizers
//!    (a scroll view, for example).
//! 2) Forward the gesture's phases as [`PanEvent`]s to
//!    [`SegmentedControl::handle_pan`](crate::SegmentedControl::handle_pan):
//!    one [`PanPhase::Began`], any number of [`PanPhase::Changed`], then one of
//!    the terminal phases.
//! 3) Movement may be reported either as incremental translation
//!    ([`PanEvent::changed_by`]) or as absolute pointer positions
//!    ([`PanEvent::moved_to`]); the [`DragSession`] turns positions into deltas.

use kurbo::{Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::SegmentGeometry;

/// Lifecycle phase of a pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// The pan was recognized.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was lifted.
    Ended,
    /// The platform cancelled the gesture.
    Cancelled,
    /// The gesture failed after starting.
    Failed,
}

impl PanPhase {
    /// Returns `true` for the phases that end a gesture.
    ///
    /// All terminal phases resolve the selection the same way.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// How a pan event reports pointer motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanMovement {
    /// No motion information.
    None,
    /// Translation since the previous event.
    Delta(Vec2),
    /// Absolute pointer position in the control's coordinate space.
    Position(Point),
}

/// One pan gesture event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    /// Gesture phase.
    pub phase: PanPhase,
    /// Pointer motion carried by the event.
    pub movement: PanMovement,
    /// Instantaneous pointer velocity in points per second, if sampled.
    pub velocity: Option<Vec2>,
}

impl PanEvent {
    /// A pan recognized with the given initial velocity.
    #[must_use]
    pub fn began(velocity: Vec2) -> Self {
        Self {
            phase: PanPhase::Began,
            movement: PanMovement::None,
            velocity: Some(velocity),
        }
    }

    /// A pan recognized at `position` with the given initial velocity.
    ///
    /// Use this when later events report absolute positions.
    #[must_use]
    pub fn began_at(position: Point, velocity: Vec2) -> Self {
        Self {
            phase: PanPhase::Began,
            movement: PanMovement::Position(position),
            velocity: Some(velocity),
        }
    }

    /// Incremental translation since the previous event.
    #[must_use]
    pub fn changed_by(delta: Vec2, velocity: Option<Vec2>) -> Self {
        Self {
            phase: PanPhase::Changed,
            movement: PanMovement::Delta(delta),
            velocity,
        }
    }

    /// Absolute pointer position.
    #[must_use]
    pub fn moved_to(position: Point, velocity: Option<Vec2>) -> Self {
        Self {
            phase: PanPhase::Changed,
            movement: PanMovement::Position(position),
            velocity,
        }
    }

    /// Pointer lifted with the given release velocity.
    #[must_use]
    pub fn ended(velocity: Option<Vec2>) -> Self {
        Self::terminal(PanPhase::Ended, velocity)
    }

    /// Gesture cancelled by the platform.
    #[must_use]
    pub fn cancelled(velocity: Option<Vec2>) -> Self {
        Self::terminal(PanPhase::Cancelled, velocity)
    }

    /// Gesture failed after starting.
    #[must_use]
    pub fn failed(velocity: Option<Vec2>) -> Self {
        Self::terminal(PanPhase::Failed, velocity)
    }

    fn terminal(phase: PanPhase, velocity: Option<Vec2>) -> Self {
        Self {
            phase,
            movement: PanMovement::None,
            velocity,
        }
    }
}

/// Why a pan was not allowed to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanRejection {
    /// The initial velocity was not predominantly horizontal.
    NotHorizontal,
    /// Fewer than two segments: there is nowhere to slide to.
    TooFewSegments,
    /// Nothing is selected, so there is no indicator to drag.
    NoIndicator,
    /// The pan started away from the indicator.
    OutsideIndicator,
    /// A drag session is already running.
    AlreadyDragging,
}

/// Decides whether a pan may start.
///
/// Accepts only when the velocity is strictly more horizontal than vertical,
/// at least two segments exist, the indicator is visible and no drag is
/// active. When the pointer position at recognition is known it must lie on
/// the indicator.
pub fn evaluate_pan_gate(
    velocity: Vec2,
    start: Option<Point>,
    segment_count: usize,
    indicator: Rect,
    dragging: bool,
) -> Result<(), PanRejection> {
    if dragging {
        return Err(PanRejection::AlreadyDragging);
    }
    if velocity.x.abs() <= velocity.y.abs() {
        return Err(PanRejection::NotHorizontal);
    }
    if segment_count < 2 {
        return Err(PanRejection::TooFewSegments);
    }
    if indicator.area() == 0.0 {
        return Err(PanRejection::NoIndicator);
    }
    if start.is_some_and(|pos| !indicator.contains(pos)) {
        return Err(PanRejection::OutsideIndicator);
    }
    Ok(())
}

/// State of one pan drag, from recognition until release.
///
/// Tracks the indicator frame as it follows the pointer, the last pointer
/// position when positions are absolute, and the most recent velocity sample
/// taken after recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    indicator: Rect,
    last_pos: Option<Point>,
    velocity: Vec2,
}

impl DragSession {
    /// Starts a session with the indicator at `indicator`.
    ///
    /// The velocity starts at zero: the recognition velocity only decides
    /// whether the pan may start and never counts as a release sample.
    #[must_use]
    pub fn new(indicator: Rect, pointer: Option<Point>) -> Self {
        Self {
            indicator,
            last_pos: pointer,
            velocity: Vec2::ZERO,
        }
    }

    /// Current indicator frame.
    #[must_use]
    pub fn indicator(&self) -> Rect {
        self.indicator
    }

    /// Current indicator center on the x axis.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.indicator.center().x
    }

    /// Most recent velocity sample.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Records a velocity sample.
    pub fn record_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Replaces the indicator frame, for example after a layout pass.
    pub fn reset_indicator(&mut self, indicator: Rect) {
        self.indicator = indicator;
    }

    /// Records an absolute pointer position, returning the movement since the
    /// previous one.
    ///
    /// The first position seen by a session that began without one only
    /// establishes the reference and yields `None`.
    pub fn pointer_delta(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Slides the indicator by `dx`, clamped to the container.
    pub fn translate(&mut self, geometry: &SegmentGeometry, dx: f64) {
        self.indicator = geometry.translate_clamped(self.indicator, dx);
    }

    /// Applies an event's movement and velocity sample.
    pub fn apply(&mut self, geometry: &SegmentGeometry, event: &PanEvent) {
        if let Some(velocity) = event.velocity {
            self.record_velocity(velocity);
        }
        let dx = match event.movement {
            PanMovement::None => None,
            PanMovement::Delta(delta) => Some(delta.x),
            PanMovement::Position(pos) => self.pointer_delta(pos).map(|delta| delta.x),
        };
        if let Some(dx) = dx {
            self.translate(geometry, dx);
        }
    }
}
