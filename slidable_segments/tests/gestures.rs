// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and pan behavior of `slidable_segments`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Rect, Vec2};
use slidable_segments::{PanEvent, SegmentedControl};

const HORIZONTAL: Vec2 = Vec2::new(200.0, 10.0);

/// Four 100-wide segments in a 400-wide control, segment 0 selected.
fn four_segments() -> SegmentedControl {
    let mut control = SegmentedControl::default();
    control.layout(Rect::new(0.0, 0.0, 400.0, 30.0));
    for (i, title) in ["One", "Two", "Three", "Four"].into_iter().enumerate() {
        control.insert_segment(title, i);
    }
    control
}

/// Drags the indicator by `dx` and releases it with `release` velocity.
fn drag_by(control: &mut SegmentedControl, dx: f64, release: Vec2) {
    control.handle_pan(PanEvent::began(HORIZONTAL));
    control.handle_pan(PanEvent::changed_by(Vec2::new(dx, 3.0), Some(HORIZONTAL)));
    control.handle_pan(PanEvent::ended(Some(release)));
}

fn counting_handler(control: &mut SegmentedControl) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    control.set_on_selection(move |_| seen.set(seen.get() + 1));
    count
}

#[test]
fn tap_selects_segment_under_point() {
    let mut control = four_segments();
    let changes = counting_handler(&mut control);
    assert_eq!(control.handle_tap(Point::new(320.0, 12.0)), Some(3));
    assert_eq!(control.selected_segment_index(), Some(3));
    assert!(control.is_animating());
    assert_eq!(changes.get(), 1);
}

#[test]
fn tap_outside_segments_does_nothing() {
    let mut control = four_segments();
    assert_eq!(control.handle_tap(Point::new(120.0, 45.0)), None);
    assert_eq!(control.handle_tap(Point::new(-3.0, 10.0)), None);
    assert_eq!(control.selected_segment_index(), Some(0));
}

#[test]
fn release_near_a_center_selects_it() {
    let mut control = four_segments();
    drag_by(&mut control, 210.0, Vec2::ZERO);
    assert_eq!(control.selected_segment_index(), Some(2));
    assert!(!control.is_dragging());
}

#[test]
fn fast_flick_on_a_center_stays_on_that_segment() {
    // Indicator released exactly on segment 1's center: it is both the left
    // and right neighbor, so even a fast leftward flick lands on it.
    let mut control = four_segments();
    drag_by(&mut control, 100.0, Vec2::new(-600.0, 0.0));
    assert_eq!(control.selected_segment_index(), Some(1));
}

#[test]
fn flick_direction_overrides_distance() {
    let mut control = four_segments();
    drag_by(&mut control, 60.0, Vec2::new(-800.0, 0.0));
    assert_eq!(control.selected_segment_index(), Some(0));

    let mut control = four_segments();
    drag_by(&mut control, 60.0, Vec2::ZERO);
    assert_eq!(control.selected_segment_index(), Some(1));

    let mut control = four_segments();
    drag_by(&mut control, 140.0, Vec2::new(500.0, 0.0));
    assert_eq!(control.selected_segment_index(), Some(2));

    let mut control = four_segments();
    drag_by(&mut control, 140.0, Vec2::new(499.0, 0.0));
    assert_eq!(control.selected_segment_index(), Some(1));
}

#[test]
fn vertical_pan_never_starts() {
    let mut control = four_segments();
    let vertical = Vec2::new(40.0, 40.0);
    assert!(!control.should_begin_pan(vertical));

    control.handle_pan(PanEvent::began(vertical));
    assert!(!control.is_dragging());
    control.handle_pan(PanEvent::changed_by(Vec2::new(150.0, 0.0), None));
    control.handle_pan(PanEvent::ended(Some(Vec2::ZERO)));

    assert_eq!(control.selected_segment_index(), Some(0));
    assert_eq!(control.indicator_frame(), Rect::new(0.0, 0.0, 100.0, 30.0));
}

#[test]
fn single_segment_cannot_be_dragged() {
    let mut control = SegmentedControl::default();
    control.layout(Rect::new(0.0, 0.0, 100.0, 30.0));
    control.insert_segment("Only", 0);
    assert!(!control.should_begin_pan(HORIZONTAL));
}

#[test]
fn no_selection_cannot_be_dragged() {
    let mut control = four_segments();
    control.remove_segment(0);
    assert_eq!(control.selected_segment_index(), None);
    assert!(!control.should_begin_pan(HORIZONTAL));
}

#[test]
fn indicator_follows_the_pointer() {
    let mut control = four_segments();
    control.handle_pan(PanEvent::began(HORIZONTAL));
    assert!(control.is_dragging());
    assert!(!control.should_begin_pan(HORIZONTAL));

    control.handle_pan(PanEvent::changed_by(Vec2::new(30.0, 8.0), None));
    control.handle_pan(PanEvent::changed_by(Vec2::new(45.0, -2.0), None));
    assert_eq!(control.indicator_frame(), Rect::new(75.0, 0.0, 175.0, 30.0));
    assert_eq!(control.indicator_mask().rect(), control.indicator_frame());
    assert_eq!(control.selected_segment_index(), Some(0));
}

#[test]
fn indicator_stays_inside_the_control() {
    let mut control = four_segments();
    control.handle_pan(PanEvent::began(HORIZONTAL));
    control.handle_pan(PanEvent::changed_by(Vec2::new(-60.0, 0.0), None));
    assert_eq!(control.indicator_frame(), Rect::new(0.0, 0.0, 100.0, 30.0));
    control.handle_pan(PanEvent::changed_by(Vec2::new(900.0, 0.0), None));
    assert_eq!(control.indicator_frame(), Rect::new(300.0, 0.0, 400.0, 30.0));

    control.handle_pan(PanEvent::ended(Some(Vec2::ZERO)));
    assert_eq!(control.selected_segment_index(), Some(3));
}

#[test]
fn absolute_positions_drive_the_drag() {
    let mut control = four_segments();
    control.handle_pan(PanEvent::began_at(Point::new(40.0, 15.0), HORIZONTAL));
    control.handle_pan(PanEvent::moved_to(Point::new(140.0, 18.0), None));
    control.handle_pan(PanEvent::moved_to(Point::new(245.0, 20.0), None));
    assert_eq!(control.indicator_frame(), Rect::new(205.0, 0.0, 305.0, 30.0));

    control.handle_pan(PanEvent::ended(None));
    assert_eq!(control.selected_segment_index(), Some(2));
}

#[test]
fn cancel_and_fail_resolve_like_end() {
    let mut cancelled = four_segments();
    cancelled.handle_pan(PanEvent::began(HORIZONTAL));
    cancelled.handle_pan(PanEvent::changed_by(Vec2::new(210.0, 0.0), None));
    cancelled.handle_pan(PanEvent::cancelled(Some(Vec2::ZERO)));
    assert_eq!(cancelled.selected_segment_index(), Some(2));
    assert!(!cancelled.is_dragging());

    let mut failed = four_segments();
    failed.handle_pan(PanEvent::began(HORIZONTAL));
    failed.handle_pan(PanEvent::changed_by(Vec2::new(210.0, 0.0), None));
    failed.handle_pan(PanEvent::failed(Some(Vec2::ZERO)));
    assert_eq!(failed.selected_segment_index(), Some(2));
}

#[test]
fn release_animates_from_the_dropped_position() {
    let mut control = four_segments();
    drag_by(&mut control, 210.0, Vec2::ZERO);
    assert!(control.is_animating());
    assert_eq!(control.indicator_frame(), Rect::new(210.0, 0.0, 310.0, 30.0));
    assert_eq!(
        control.indicator_target_frame(),
        Rect::new(200.0, 0.0, 300.0, 30.0)
    );

    let settle = control.config().indicator_spring.settling_duration();
    control.advance_to(settle);
    assert_eq!(control.indicator_frame(), Rect::new(200.0, 0.0, 300.0, 30.0));
}

#[test]
fn release_notifies_only_on_change() {
    let mut control = four_segments();
    let changes = counting_handler(&mut control);

    drag_by(&mut control, 20.0, Vec2::ZERO);
    assert_eq!(control.selected_segment_index(), Some(0));
    assert_eq!(changes.get(), 0);

    drag_by(&mut control, 90.0, Vec2::ZERO);
    assert_eq!(control.selected_segment_index(), Some(1));
    assert_eq!(changes.get(), 1);
}

#[test]
fn pan_freezes_a_running_animation() {
    let mut control = four_segments();
    control.select_segment(2, true);
    control.advance_to(Duration::from_millis(100));
    let midway = control.indicator_frame();
    assert!(midway.x0 > 0.0 && midway.x0 < 200.0);

    control.handle_pan(PanEvent::began(HORIZONTAL));
    assert!(!control.is_animating());
    assert_eq!(control.indicator_frame(), midway);

    control.advance_to(Duration::from_secs(3));
    assert_eq!(control.indicator_frame(), midway);
}

#[test]
fn taps_are_ignored_while_dragging() {
    let mut control = four_segments();
    control.handle_pan(PanEvent::began(HORIZONTAL));
    assert_eq!(control.handle_tap(Point::new(350.0, 10.0)), None);
    assert_eq!(control.selected_segment_index(), Some(0));
    control.handle_pan(PanEvent::ended(Some(Vec2::ZERO)));
    assert_eq!(control.handle_tap(Point::new(350.0, 10.0)), Some(3));
}

#[test]
fn events_without_a_began_are_ignored() {
    let mut control = four_segments();
    let changes = counting_handler(&mut control);
    control.handle_pan(PanEvent::changed_by(Vec2::new(250.0, 0.0), None));
    control.handle_pan(PanEvent::ended(Some(Vec2::new(900.0, 0.0))));
    assert_eq!(control.selected_segment_index(), Some(0));
    assert_eq!(control.indicator_frame(), Rect::new(0.0, 0.0, 100.0, 30.0));
    assert_eq!(changes.get(), 0);
}

#[test]
fn removing_down_to_one_segment_ends_the_drag() {
    let mut control = four_segments();
    control.select_segment(3, false);
    control.handle_pan(PanEvent::began(HORIZONTAL));
    control.remove_segment(0);
    control.remove_segment(0);
    assert!(control.is_dragging());
    control.remove_segment(0);
    assert!(!control.is_dragging());

    control.handle_pan(PanEvent::ended(Some(Vec2::ZERO)));
    assert_eq!(control.selected_segment_index(), Some(0));
    assert_eq!(control.indicator_frame(), Rect::new(0.0, 0.0, 400.0, 30.0));
}

#[test]
fn relayout_during_drag_restarts_from_the_selection() {
    let mut control = four_segments();
    control.handle_pan(PanEvent::began(HORIZONTAL));
    control.handle_pan(PanEvent::changed_by(Vec2::new(130.0, 0.0), None));
    control.layout(Rect::new(0.0, 0.0, 800.0, 30.0));
    assert!(control.is_dragging());
    assert_eq!(control.indicator_frame(), Rect::new(0.0, 0.0, 200.0, 30.0));

    control.handle_pan(PanEvent::changed_by(Vec2::new(250.0, 0.0), None));
    control.handle_pan(PanEvent::ended(Some(Vec2::ZERO)));
    assert_eq!(control.selected_segment_index(), Some(1));
}

#[test]
fn pan_starting_off_the_indicator_is_rejected() {
    let mut control = four_segments();
    assert!(!control.should_begin_pan_at(Point::new(350.0, 15.0), HORIZONTAL));
    assert!(control.should_begin_pan_at(Point::new(60.0, 15.0), HORIZONTAL));

    control.handle_pan(PanEvent::began_at(Point::new(350.0, 15.0), HORIZONTAL));
    assert!(!control.is_dragging());
    control.handle_pan(PanEvent::moved_to(Point::new(380.0, 15.0), None));
    control.handle_pan(PanEvent::ended(Some(Vec2::ZERO)));

    assert_eq!(control.selected_segment_index(), Some(0));
    assert_eq!(control.indicator_frame(), Rect::new(0.0, 0.0, 100.0, 30.0));
}

#[test]
fn recognition_velocity_is_not_a_release_sample() {
    let mut control = four_segments();
    control.handle_pan(PanEvent::began(Vec2::new(600.0, 0.0)));
    control.handle_pan(PanEvent::changed_by(Vec2::new(140.0, 0.0), None));
    control.handle_pan(PanEvent::ended(None));
    assert_eq!(control.selected_segment_index(), Some(1));
}
