// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equal-width segment geometry.
//!
//! Segment boxes are derived from the container bounds and the segment count;
//! nothing here is stored between layout passes.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use slidable_segments::SegmentGeometry;
//!
//! let geometry = SegmentGeometry::new(Rect::new(0.0, 0.0, 400.0, 30.0), 4);
//! assert_eq!(geometry.segment_width(), 100.0);
//! assert_eq!(geometry.segment_frame(2), Some(Rect::new(200.0, 0.0, 300.0, 30.0)));
//! assert_eq!(geometry.segment_at(Point::new(399.0, 10.0)), Some(3));
//! assert_eq!(geometry.segment_at(Point::new(400.0, 10.0)), None);
//! ```

use kurbo::{Point, Rect};

/// Segment layout for a container split into `count` equal columns.
///
/// Segment `i` spans `[x0 + i·w, x0 + (i+1)·w)` horizontally and the full
/// container height, where `w = width / count`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentGeometry {
    bounds: Rect,
    count: usize,
}

impl SegmentGeometry {
    /// Creates the geometry for `count` segments inside `bounds`.
    #[must_use]
    pub fn new(bounds: Rect, count: usize) -> Self {
        Self { bounds, count }
    }

    /// Returns the container bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Width of a single segment, or `0.0` when there are no segments.
    #[must_use]
    pub fn segment_width(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.bounds.width() / self.count as f64
        }
    }

    /// Height of a single segment: the container height.
    #[must_use]
    pub fn segment_height(&self) -> f64 {
        self.bounds.height()
    }

    /// Box of the segment at `index`.
    #[must_use]
    pub fn segment_frame(&self, index: usize) -> Option<Rect> {
        if index >= self.count {
            return None;
        }
        let width = self.segment_width();
        let x0 = self.bounds.x0 + index as f64 * width;
        Some(Rect::new(
            x0,
            self.bounds.y0,
            x0 + width,
            self.bounds.y0 + self.segment_height(),
        ))
    }

    /// Horizontal center of the segment at `index`.
    #[must_use]
    pub fn segment_center_x(&self, index: usize) -> Option<f64> {
        self.segment_frame(index).map(|frame| frame.center().x)
    }

    /// Horizontal centers of all segments, in order.
    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).filter_map(|index| self.segment_center_x(index))
    }

    /// Index of the segment whose box contains `point`.
    ///
    /// Boxes are half-open, so a point on a shared edge belongs to the segment
    /// on its right, and points on the container's right or bottom edge hit nothing.
    #[must_use]
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        (0..self.count).find(|&index| {
            self.segment_frame(index)
                .is_some_and(|frame| frame.contains(point))
        })
    }

    /// Moves `frame` horizontally by `dx`, keeping it inside the container.
    ///
    /// A move that would push the frame past either horizontal edge pins it
    /// flush against that edge instead.
    #[must_use]
    pub fn translate_clamped(&self, frame: Rect, dx: f64) -> Rect {
        let half_width = frame.width() / 2.0;
        let center_x = if frame.x1 + dx > self.bounds.x1 {
            self.bounds.x1 - half_width
        } else if frame.x0 + dx < self.bounds.x0 {
            self.bounds.x0 + half_width
        } else {
            frame.center().x + dx
        };
        frame.with_origin(Point::new(center_x - half_width, frame.y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn four_wide() -> SegmentGeometry {
        SegmentGeometry::new(Rect::new(0.0, 0.0, 400.0, 30.0), 4)
    }

    #[test]
    fn empty_geometry_has_no_segments() {
        let geometry = SegmentGeometry::new(Rect::new(0.0, 0.0, 400.0, 30.0), 0);
        assert_eq!(geometry.segment_width(), 0.0);
        assert_eq!(geometry.segment_frame(0), None);
        assert_eq!(geometry.segment_at(Point::new(10.0, 10.0)), None);
        assert_eq!(geometry.centers().count(), 0);
    }

    #[test]
    fn centers_are_evenly_spaced() {
        let centers: Vec<f64> = four_wide().centers().collect();
        assert_eq!(centers, [50.0, 150.0, 250.0, 350.0]);
    }

    #[test]
    fn frames_respect_bounds_origin() {
        let geometry = SegmentGeometry::new(Rect::new(20.0, 5.0, 220.0, 35.0), 2);
        assert_eq!(
            geometry.segment_frame(1),
            Some(Rect::new(120.0, 5.0, 220.0, 35.0))
        );
    }

    #[test]
    fn shared_edge_belongs_to_right_segment() {
        assert_eq!(four_wide().segment_at(Point::new(100.0, 10.0)), Some(1));
        assert_eq!(four_wide().segment_at(Point::new(0.0, 0.0)), Some(0));
    }

    #[test]
    fn points_outside_vertically_miss() {
        assert_eq!(four_wide().segment_at(Point::new(50.0, -1.0)), None);
        assert_eq!(four_wide().segment_at(Point::new(50.0, 30.0)), None);
    }

    #[test]
    fn translate_inside_bounds_moves_by_delta() {
        let frame = Rect::new(100.0, 0.0, 200.0, 30.0);
        let moved = four_wide().translate_clamped(frame, 35.0);
        assert_eq!(moved, Rect::new(135.0, 0.0, 235.0, 30.0));
    }

    #[test]
    fn translate_clamps_at_right_edge() {
        let frame = Rect::new(250.0, 0.0, 350.0, 30.0);
        let moved = four_wide().translate_clamped(frame, 120.0);
        assert_eq!(moved, Rect::new(300.0, 0.0, 400.0, 30.0));
    }

    #[test]
    fn translate_clamps_at_left_edge() {
        let frame = Rect::new(30.0, 0.0, 130.0, 30.0);
        let moved = four_wide().translate_clamped(frame, -80.0);
        assert_eq!(moved, Rect::new(0.0, 0.0, 100.0, 30.0));
    }
}
