// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Weak;
use alloc::string::String;
use core::time::Duration;

use kurbo::{Point, Rect, RoundedRect, Size, Vec2};
use slidable_animation::Animated;

use crate::config::ControlConfig;
use crate::error::SelectError;
use crate::geometry::SegmentGeometry;
use crate::gesture::{DragSession, PanEvent, PanMovement, PanPhase, PanRejection, evaluate_pan_gate};
use crate::indicator::IndicatorShape;
use crate::notify::{Listeners, SelectionDelegate, SelectionHandler};
use crate::segments::{Segment, SegmentCollection};

/// A segmented selector with a tappable, draggable selection indicator.
///
/// The control owns its segments, the selected index, the indicator's
/// animated shape and the listener slots. The host feeds it layout passes,
/// frame times and pointer gestures, and reads back geometry to draw.
///
/// Time is host-supplied: call [`SegmentedControl::advance_to`] with a
/// monotonic timestamp before reading animated geometry each frame.
#[derive(Debug)]
pub struct SegmentedControl {
    config: ControlConfig,
    segments: SegmentCollection,
    selected: Option<usize>,
    bounds: Rect,
    now: Duration,
    indicator: Animated<IndicatorShape>,
    drag: Option<DragSession>,
    pub(crate) listeners: Listeners,
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}

impl SegmentedControl {
    /// Creates an empty control with zero-sized bounds.
    #[must_use]
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            segments: SegmentCollection::new(),
            selected: None,
            bounds: Rect::ZERO,
            now: Duration::ZERO,
            indicator: Animated::new(IndicatorShape::hidden()),
            drag: None,
            listeners: Listeners::default(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Replaces the configuration, restyling existing segments.
    pub fn set_config(&mut self, config: ControlConfig) {
        self.config = config;
        self.segments.restyle(&self.config);
        self.update_selecting_layout(false);
    }

    /// Returns the control's current time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Advances the control's clock to `now`.
    ///
    /// Time never runs backwards; earlier timestamps are ignored. Finished
    /// indicator animations are dropped.
    pub fn advance_to(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
        self.indicator.settle(self.now);
    }

    /// Returns the container bounds from the last layout pass.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Applies a layout pass: stores `bounds` and snaps the indicator to the
    /// selected segment.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.update_selecting_layout(false);
    }

    /// Geometry of the current segments inside the current bounds.
    #[must_use]
    pub fn geometry(&self) -> SegmentGeometry {
        SegmentGeometry::new(self.bounds, self.segments.len())
    }

    /// Box of the segment at `index`.
    #[must_use]
    pub fn segment_frame(&self, index: usize) -> Option<Rect> {
        self.geometry().segment_frame(index)
    }

    /// Index of the segment under `point`.
    #[must_use]
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        self.geometry().segment_at(point)
    }

    /// Preferred size when laid out as an equal-width row.
    ///
    /// `measure` returns the natural size of a title at a font size. The row is
    /// as wide as the widest title times the number of segments and as tall as
    /// the tallest title.
    pub fn intrinsic_size(&self, mut measure: impl FnMut(&str, f32) -> Size) -> Size {
        let (widest, tallest) = self.segments.iter().fold((0.0_f64, 0.0_f64), |acc, (_, segment)| {
            let size = measure(segment.title(), segment.normal_label().font_size);
            (acc.0.max(size.width), acc.1.max(size.height))
        });
        Size::new(widest * self.segments.len() as f64, tallest)
    }

    /// Number of segments.
    #[must_use]
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    /// The segments, in order.
    #[must_use]
    pub fn segments(&self) -> &SegmentCollection {
        &self.segments
    }

    /// Title of the segment at `index`.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.segments.title(index)
    }

    /// Inserts a segment titled `title` at `index`, clamped to the number of
    /// segments.
    ///
    /// The first segment inserted into an empty control becomes selected
    /// without a notification. Inserting does not shift an existing selection.
    pub fn insert_segment(&mut self, title: impl Into<String>, index: usize) {
        let segment = Segment::new(title, &self.config);
        let index = self.segments.insert(segment, index);
        if self.segments.len() == 1 {
            self.selected = Some(0);
        }
        log::debug!(
            "inserted segment at {index}; {} segments, selected {:?}",
            self.segments.len(),
            self.selected
        );
        self.update_selecting_layout(false);
    }

    /// Removes the segment at `index`. Out-of-range indices are ignored.
    ///
    /// A selection after `index` shifts down by one; removing the selected
    /// segment clears the selection. Neither fires a notification.
    pub fn remove_segment(&mut self, index: usize) {
        if self.segments.remove(index).is_none() {
            log::trace!("ignored removal of segment {index}: out of range");
            return;
        }
        self.selected = match self.selected {
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) if selected == index => None,
            other => other,
        };
        log::debug!(
            "removed segment at {index}; {} segments, selected {:?}",
            self.segments.len(),
            self.selected
        );
        self.update_selecting_layout(false);
    }

    /// Index of the selected segment, if any.
    #[must_use]
    pub fn selected_segment_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the segment at `index`.
    ///
    /// Moves the indicator (animated only if something was already selected)
    /// and notifies listeners if the index changed. Out-of-range indices are
    /// ignored; use [`SegmentedControl::try_select_segment`] to observe them.
    pub fn select_segment(&mut self, index: usize, animated: bool) {
        if let Err(err) = self.try_select_segment(index, animated) {
            log::warn!("{err}");
        }
    }

    /// Selects the segment at `index`, reporting out-of-range indices.
    pub fn try_select_segment(&mut self, index: usize, animated: bool) -> Result<(), SelectError> {
        let count = self.segments.len();
        if index >= count {
            return Err(SelectError::OutOfRange { index, count });
        }
        let old = self.selected;
        self.selected = Some(index);
        self.update_selecting_layout(old.is_some() && animated);
        if old != Some(index) {
            log::debug!("selected segment {index} (was {old:?})");
            self.notify_selection_changed();
        }
        Ok(())
    }

    /// Sets the delegate. The control keeps only a weak reference.
    pub fn set_delegate(&mut self, delegate: Weak<dyn SelectionDelegate>) {
        self.listeners.set_delegate(Some(delegate));
    }

    /// Removes the delegate.
    pub fn clear_delegate(&mut self) {
        self.listeners.set_delegate(None);
    }

    /// Sets the closure invoked after each selection change.
    pub fn set_on_selection(&mut self, handler: impl FnMut(&mut Self) + 'static) {
        let handler: SelectionHandler = Box::new(handler);
        self.listeners.set_handler(Some(handler));
    }

    /// Removes the selection closure.
    pub fn clear_on_selection(&mut self) {
        self.listeners.set_handler(None);
    }

    /// Indicator frame as it should be drawn now.
    #[must_use]
    pub fn indicator_frame(&self) -> Rect {
        self.indicator.presentation(self.now).frame
    }

    /// Mask revealing the selected labels, as it should be drawn now.
    #[must_use]
    pub fn indicator_mask(&self) -> RoundedRect {
        self.indicator.presentation(self.now).mask
    }

    /// Indicator frame once any running animation completes.
    #[must_use]
    pub fn indicator_target_frame(&self) -> Rect {
        self.indicator.target().frame
    }

    /// Returns `true` while the indicator is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.indicator.is_animating(self.now)
    }

    /// Recomputes the indicator shape for the current selection.
    ///
    /// With no selection the indicator collapses to nothing. An animated update
    /// springs from the shape currently on screen.
    fn update_selecting_layout(&mut self, animated: bool) {
        let target = match self.selected.and_then(|index| self.segment_frame(index)) {
            Some(frame) => IndicatorShape::new(frame, self.config.corner_radius),
            None => IndicatorShape::hidden(),
        };
        if animated {
            self.indicator
                .animate_to(target, &self.config.indicator_spring, self.now);
        } else {
            self.indicator.snap_to(target);
        }
        self.sync_drag_session(target);
    }

    /// Keeps a running drag consistent with a freshly computed indicator.
    fn sync_drag_session(&mut self, target: IndicatorShape) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if target.is_hidden() || self.segments.len() < 2 {
            log::trace!("drag session dropped: indicator no longer draggable");
            self.drag = None;
        } else {
            session.reset_indicator(target.frame);
        }
    }

    /// Returns `true` while a pan drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The running drag session, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Handles a recognized tap at `point`.
    ///
    /// Selects (animated) the segment under the point and returns its index.
    /// Taps that miss every segment, or arrive while a drag is running, do nothing.
    pub fn handle_tap(&mut self, point: Point) -> Option<usize> {
        if self.drag.is_some() {
            log::trace!("tap at {point:?} ignored during drag");
            return None;
        }
        let index = self.segment_at(point)?;
        self.select_segment(index, true);
        Some(index)
    }

    /// Whether a pan with initial `velocity` may start.
    ///
    /// Pans must be predominantly horizontal and need at least two segments and
    /// a visible indicator. Rejected pans should be left for other recognizers.
    #[must_use]
    pub fn should_begin_pan(&self, velocity: Vec2) -> bool {
        self.pan_gate(velocity, None).is_ok()
    }

    /// Whether a pan recognized at `point` with initial `velocity` may start.
    ///
    /// Like [`SegmentedControl::should_begin_pan`], and additionally requires
    /// the pan to start on the indicator.
    #[must_use]
    pub fn should_begin_pan_at(&self, point: Point, velocity: Vec2) -> bool {
        self.pan_gate(velocity, Some(point)).is_ok()
    }

    fn pan_gate(&self, velocity: Vec2, start: Option<Point>) -> Result<(), PanRejection> {
        evaluate_pan_gate(
            velocity,
            start,
            self.segments.len(),
            self.indicator_frame(),
            self.drag.is_some(),
        )
    }

    /// Handles one pan event.
    ///
    /// `Began` re-checks the pan gate, including the start position when the
    /// event carries one. If accepted, it freezes any running indicator
    /// animation where it is and starts a drag from there. `Changed` slides
    /// the indicator. Terminal phases end the drag and snap to a segment.
    /// Events for a pan that never began are ignored.
    pub fn handle_pan(&mut self, event: PanEvent) {
        match event.phase {
            PanPhase::Began => self.begin_pan(&event),
            PanPhase::Changed => self.update_pan(&event),
            PanPhase::Ended | PanPhase::Cancelled | PanPhase::Failed => self.end_pan(&event),
        }
    }

    fn begin_pan(&mut self, event: &PanEvent) {
        let velocity = event.velocity.unwrap_or(Vec2::ZERO);
        let pointer = match event.movement {
            PanMovement::Position(pos) => Some(pos),
            PanMovement::None | PanMovement::Delta(_) => None,
        };
        if let Err(rejection) = self.pan_gate(velocity, pointer) {
            log::trace!("pan rejected: {rejection:?}");
            return;
        }
        let shape = self.indicator.interrupt(self.now);
        log::trace!("pan began with indicator at {:?}", shape.frame);
        self.drag = Some(DragSession::new(shape.frame, pointer));
    }

    fn update_pan(&mut self, event: &PanEvent) {
        let geometry = self.geometry();
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.apply(&geometry, event);
        let shape = IndicatorShape::new(session.indicator(), self.config.corner_radius);
        self.indicator.snap_to(shape);
    }

    fn end_pan(&mut self, event: &PanEvent) {
        let Some(mut session) = self.drag.take() else {
            return;
        };
        if let Some(velocity) = event.velocity {
            session.record_velocity(velocity);
        }
        let geometry = self.geometry();
        let resolved = self.config.snap_policy().resolve(
            geometry.centers(),
            session.center_x(),
            session.velocity().x,
        );
        match resolved {
            Some(index) => self.select_segment(index, true),
            None => log::trace!("pan ended with fewer than two segments"),
        }
    }
}
