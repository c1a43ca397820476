// Copyright 2026 the Slidable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered segment storage.
//!
//! A segment's identity is its position. Inserting or removing shifts every
//! later segment, so indices are always the contiguous range `0..len()`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{ControlConfig, LabelStyle};

/// One segment: its title plus the two label representations drawn for it.
///
/// The `normal` label is what shows when the indicator is elsewhere; the
/// `selected` label is revealed through the indicator's mask.
#[derive(Clone, Debug)]
pub struct Segment {
    title: String,
    normal: LabelStyle,
    selected: LabelStyle,
}

impl Segment {
    /// Creates a segment styled from `config`.
    #[must_use]
    pub fn new(title: impl Into<String>, config: &ControlConfig) -> Self {
        Self {
            title: title.into(),
            normal: config.normal_label(),
            selected: config.selected_label(),
        }
    }

    /// Returns the segment title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unselected label style.
    #[must_use]
    pub fn normal_label(&self) -> LabelStyle {
        self.normal
    }

    /// Returns the selected label style.
    #[must_use]
    pub fn selected_label(&self) -> LabelStyle {
        self.selected
    }

    fn restyle(&mut self, config: &ControlConfig) {
        self.normal = config.normal_label();
        self.selected = config.selected_label();
    }
}

/// Ordered collection of [`Segment`]s. Duplicate titles are allowed.
#[derive(Clone, Debug, Default)]
pub struct SegmentCollection {
    segments: Vec<Segment>,
}

impl SegmentCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Returns the title of the segment at `index`, if any.
    #[must_use]
    pub fn title(&self, index: usize) -> Option<&str> {
        self.get(index).map(Segment::title)
    }

    /// Iterates `(index, segment)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Segment)> + '_ {
        self.segments.iter().enumerate()
    }

    /// Inserts `segment` at `index`, clamped to `len()`.
    ///
    /// Returns the index the segment landed at.
    pub fn insert(&mut self, segment: Segment, index: usize) -> usize {
        let index = index.min(self.segments.len());
        self.segments.insert(index, segment);
        index
    }

    /// Removes and returns the segment at `index`.
    ///
    /// Out-of-range indices are ignored and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Segment> {
        if index < self.segments.len() {
            Some(self.segments.remove(index))
        } else {
            None
        }
    }

    /// Re-applies label styles from `config` to every segment.
    pub fn restyle(&mut self, config: &ControlConfig) {
        for segment in &mut self.segments {
            segment.restyle(config);
        }
    }
}
