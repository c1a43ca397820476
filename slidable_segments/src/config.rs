// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance and behavior settings for a [`SegmentedControl`](crate::SegmentedControl).

use peniko::Color;
use slidable_animation::SpringSpec;

use crate::snap::SnapPolicy;

/// Default corner radius of the control and of the selection indicator.
pub const DEFAULT_CORNER_RADIUS: f64 = 14.5;
/// Default label font size, in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
/// Default width of the border drawn around the selection indicator.
pub const DEFAULT_SELECTED_BORDER_WIDTH: f64 = 1.0;
/// Default release speed (points per second) above which a pan snaps in the
/// direction of travel instead of to the closest segment.
pub const DEFAULT_PAN_TRIGGER_VELOCITY: f64 = 500.0;

/// How one label representation of a segment is drawn.
#[derive(Clone, Copy, Debug)]
pub struct LabelStyle {
    /// Font size in points.
    pub font_size: f32,
    /// Text color.
    pub text_color: Color,
}

/// Settings shared by every segment of a control.
///
/// Presentation fields only affect [`ControlPaint`](crate::ControlPaint) and the
/// indicator mask; [`ControlConfig::pan_trigger_velocity`] and
/// [`ControlConfig::indicator_spring`] affect behavior.
#[derive(Clone, Copy, Debug)]
pub struct ControlConfig {
    /// Corner radius of the control background and the indicator.
    pub corner_radius: f64,
    /// Font size used for both label representations.
    pub font_size: f32,
    /// Text color of unselected labels.
    pub normal_text_color: Color,
    /// Background color of the control.
    pub normal_background_color: Color,
    /// Text color of labels shown through the indicator.
    pub selected_text_color: Color,
    /// Fill color of the indicator.
    pub selected_background_color: Color,
    /// Border color of the indicator.
    pub selected_border_color: Color,
    /// Border width of the indicator.
    pub selected_border_width: f64,
    /// Release speed at which a pan overrides nearest-segment snapping.
    pub pan_trigger_velocity: f64,
    /// Spring used for animated indicator moves.
    pub indicator_spring: SpringSpec,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
            normal_text_color: Color::from_rgb8(159, 159, 159),
            normal_background_color: Color::from_rgb8(237, 237, 237),
            selected_text_color: Color::from_rgb8(252, 104, 33),
            selected_background_color: Color::WHITE,
            selected_border_color: Color::from_rgb8(252, 104, 33),
            selected_border_width: DEFAULT_SELECTED_BORDER_WIDTH,
            pan_trigger_velocity: DEFAULT_PAN_TRIGGER_VELOCITY,
            indicator_spring: SpringSpec::default(),
        }
    }
}

impl ControlConfig {
    /// Returns a copy with the given corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Returns a copy with the given font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns a copy with the given unselected and selected text colors.
    #[must_use]
    pub fn with_text_colors(mut self, normal: Color, selected: Color) -> Self {
        self.normal_text_color = normal;
        self.selected_text_color = selected;
        self
    }

    /// Returns a copy with the given indicator border.
    #[must_use]
    pub fn with_selected_border(mut self, color: Color, width: f64) -> Self {
        self.selected_border_color = color;
        self.selected_border_width = width;
        self
    }

    /// Returns a copy with the given pan trigger velocity.
    #[must_use]
    pub fn with_pan_trigger_velocity(mut self, velocity: f64) -> Self {
        self.pan_trigger_velocity = velocity;
        self
    }

    /// Returns a copy with the given indicator spring.
    #[must_use]
    pub fn with_indicator_spring(mut self, spring: SpringSpec) -> Self {
        self.indicator_spring = spring;
        self
    }

    /// Style of unselected labels.
    #[must_use]
    pub fn normal_label(&self) -> LabelStyle {
        LabelStyle {
            font_size: self.font_size,
            text_color: self.normal_text_color,
        }
    }

    /// Style of the label revealed through the indicator.
    #[must_use]
    pub fn selected_label(&self) -> LabelStyle {
        LabelStyle {
            font_size: self.font_size,
            text_color: self.selected_text_color,
        }
    }

    /// Snapping policy derived from [`ControlConfig::pan_trigger_velocity`].
    #[must_use]
    pub fn snap_policy(&self) -> SnapPolicy {
        SnapPolicy::new(self.pan_trigger_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ControlConfig::default();
        assert_eq!(config.corner_radius, 14.5);
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.selected_border_width, 1.0);
        assert_eq!(config.pan_trigger_velocity, 500.0);
        assert_eq!(config.snap_policy().trigger_velocity(), 500.0);
    }

    #[test]
    fn builders_override_fields() {
        let config = ControlConfig::default()
            .with_corner_radius(4.0)
            .with_font_size(11.0)
            .with_pan_trigger_velocity(800.0);
        assert_eq!(config.corner_radius, 4.0);
        assert_eq!(config.normal_label().font_size, 11.0);
        assert_eq!(config.selected_label().font_size, 11.0);
        assert_eq!(config.snap_policy().trigger_velocity(), 800.0);
    }
}
