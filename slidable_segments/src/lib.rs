// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slidable Segments: a segmented selector with a draggable indicator.
//!
//! A [`SegmentedControl`] shows a row of equal-width segments and a highlighted
//! indicator over the selected one. The indicator can be tapped to jump, or
//! dragged to slide between segments; on release it snaps to a neighbor based
//! on where it was let go and how fast it was moving.
//!
//! The crate holds the selection state machine and geometry only. It does not
//! draw, measure text, or talk to a platform gesture system. The host:
//!
//! - calls [`SegmentedControl::layout`] with the container bounds;
//! - calls [`SegmentedControl::advance_to`] with its frame clock;
//! - forwards taps to [`SegmentedControl::handle_tap`] and pans to
//!   [`SegmentedControl::should_begin_pan_at`] / [`SegmentedControl::handle_pan`];
//! - draws from [`SegmentedControl::paint`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Vec2};
//! use slidable_segments::{PanEvent, SegmentedControl};
//!
//! let mut control = SegmentedControl::default();
//! control.layout(Rect::new(0.0, 0.0, 300.0, 29.0));
//! control.insert_segment("First", 0);
//! control.insert_segment("Second", 1);
//! control.insert_segment("Third", 2);
//! assert_eq!(control.selected_segment_index(), Some(0));
//!
//! // Tap the third segment.
//! control.handle_tap(Point::new(250.0, 10.0));
//! assert_eq!(control.selected_segment_index(), Some(2));
//!
//! // Let the indicator settle, then drag it most of the way back left.
//! control.advance_to(Duration::from_secs(5));
//! let velocity = Vec2::new(-120.0, 4.0);
//! assert!(control.should_begin_pan(velocity));
//! control.handle_pan(PanEvent::began(velocity));
//! control.handle_pan(PanEvent::changed_by(Vec2::new(-170.0, 0.0), Some(velocity)));
//! control.handle_pan(PanEvent::ended(Some(Vec2::new(-40.0, 0.0))));
//!
//! // Released at x = 80 with a slow velocity: segment 0 (center 50) is closest.
//! assert_eq!(control.selected_segment_index(), Some(0));
//! ```
//!
//! ## Selection notifications
//!
//! Every committed selection change is reported to an optional
//! [`SelectionDelegate`] (held weakly) and an optional closure installed with
//! [`SegmentedControl::set_on_selection`]. Inserting the first segment and
//! removing the selected one change the selection silently.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Rect;
//! use slidable_segments::SegmentedControl;
//!
//! let changes = Rc::new(Cell::new(0));
//! let mut control = SegmentedControl::default();
//! control.layout(Rect::new(0.0, 0.0, 200.0, 30.0));
//! control.insert_segment("A", 0);
//! control.insert_segment("B", 1);
//!
//! let seen = changes.clone();
//! control.set_on_selection(move |_| seen.set(seen.get() + 1));
//!
//! control.select_segment(1, true);
//! control.select_segment(1, true);
//! assert_eq!(changes.get(), 1);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `debug` for committed changes
//! and snap decisions, `trace` for gesture gating, `warn` for rejected
//! selections. Install any logger to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod control;
mod error;
mod geometry;
mod indicator;
mod notify;
mod paint;
mod segments;

pub mod config;
pub mod gesture;
pub mod snap;

pub use config::{ControlConfig, LabelStyle};
pub use control::SegmentedControl;
pub use error::SelectError;
pub use geometry::SegmentGeometry;
pub use gesture::{DragSession, PanEvent, PanMovement, PanPhase, PanRejection};
pub use indicator::IndicatorShape;
pub use notify::{SelectionDelegate, SelectionHandler};
pub use paint::{ControlPaint, IndicatorPaint, SegmentPaint};
pub use segments::{Segment, SegmentCollection};
pub use snap::{SnapCandidate, SnapNeighbors, SnapPolicy};
