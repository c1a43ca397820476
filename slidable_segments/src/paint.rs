// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only drawing description of a control.
//!
//! A renderer draws, in order:
//!
//! 1) the [`ControlPaint::background`] shape filled with
//!    [`ControlPaint::background_color`];
//! 2) each segment's title centered in its frame with its normal label style;
//! 3) if an [`IndicatorPaint`] is present, the indicator fill and border, then
//!    every segment's title again with its selected label style, clipped to
//!    [`IndicatorPaint::mask`].

use alloc::vec::Vec;

use kurbo::{Rect, RoundedRect};
use peniko::Color;

use crate::SegmentedControl;
use crate::config::LabelStyle;

/// One segment's drawing data.
#[derive(Clone, Copy, Debug)]
pub struct SegmentPaint<'a> {
    /// Segment index.
    pub index: usize,
    /// Box the labels are centered in.
    pub frame: Rect,
    /// Title text.
    pub title: &'a str,
    /// Style of the label drawn on the control background.
    pub normal: LabelStyle,
    /// Style of the label revealed through the indicator.
    pub selected: LabelStyle,
}

/// The selection indicator's drawing data.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorPaint {
    /// Indicator frame as currently presented.
    pub frame: Rect,
    /// Corner radius of the indicator.
    pub corner_radius: f64,
    /// Fill color of the indicator and of the selected-label layer.
    pub fill_color: Color,
    /// Border color.
    pub border_color: Color,
    /// Border width.
    pub border_width: f64,
    /// Clip for the selected-label layer.
    pub mask: RoundedRect,
}

/// Everything needed to draw a control for the current frame.
#[derive(Clone, Debug)]
pub struct ControlPaint<'a> {
    /// Rounded background of the whole control.
    pub background: RoundedRect,
    /// Background fill color.
    pub background_color: Color,
    /// Segments in order.
    pub segments: Vec<SegmentPaint<'a>>,
    /// The indicator, absent when nothing is selected.
    pub indicator: Option<IndicatorPaint>,
}

impl SegmentedControl {
    /// Describes how to draw the control at its current time.
    #[must_use]
    pub fn paint(&self) -> ControlPaint<'_> {
        let config = self.config();
        let geometry = self.geometry();
        let segments = self
            .segments()
            .iter()
            .filter_map(|(index, segment)| {
                Some(SegmentPaint {
                    index,
                    frame: geometry.segment_frame(index)?,
                    title: segment.title(),
                    normal: segment.normal_label(),
                    selected: segment.selected_label(),
                })
            })
            .collect();

        let frame = self.indicator_frame();
        let indicator = (frame.area() > 0.0).then(|| IndicatorPaint {
            frame,
            corner_radius: config.corner_radius,
            fill_color: config.selected_background_color,
            border_color: config.selected_border_color,
            border_width: config.selected_border_width,
            mask: self.indicator_mask(),
        });

        ControlPaint {
            background: RoundedRect::from_rect(self.bounds(), config.corner_radius),
            background_color: config.normal_background_color,
            segments,
            indicator,
        }
    }
}
