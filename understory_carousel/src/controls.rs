// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing for navigation controls.
//!
//! ## Notes
//!
//! Hosts that already route clicks to their previous/next buttons and dots
//! can call [`Carousel::click`](crate::Carousel::click) directly. Hosts that
//! only see raw pointer positions can describe where the controls are with a
//! [`ControlMap`] and resolve a click point to a [`Control`].
//! Controls the markup does not provide are simply never registered and are
//! therefore never hit.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::types::Control;

/// World-space bounds of the carousel's clickable controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlMap {
    previous: Option<Rect>,
    next: Option<Rect>,
    dots: Vec<Rect>,
}

impl ControlMap {
    /// An empty map: nothing is clickable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the bounds of the "previous" button.
    pub fn set_previous(&mut self, bounds: Option<Rect>) {
        self.previous = bounds;
    }

    /// Set or clear the bounds of the "next" button.
    pub fn set_next(&mut self, bounds: Option<Rect>) {
        self.next = bounds;
    }

    /// Replace the dot bounds; the `i`-th rectangle belongs to logical index `i`.
    pub fn set_dots(&mut self, bounds: impl IntoIterator<Item = Rect>) {
        self.dots.clear();
        self.dots.extend(bounds);
    }

    /// Lay out `count` dots of `size` in a row starting at `origin`, `gap` apart.
    pub fn set_dot_row(&mut self, origin: Point, size: Size, gap: f64, count: usize) {
        let step = size.width + gap;
        self.set_dots((0..count).map(|i| {
            Rect::from_origin_size(Point::new(origin.x + step * i as f64, origin.y), size)
        }));
    }

    /// Number of registered dots.
    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Resolve a click position to the control under it.
    ///
    /// Dots are checked first, then "next", then "previous". Among overlapping
    /// dots the last registered wins.
    pub fn hit_test(&self, pt: Point) -> Option<Control> {
        if let Some(i) = self.dots.iter().rposition(|r| r.contains(pt)) {
            return Some(Control::Dot(i));
        }
        if self.next.is_some_and(|r| r.contains(pt)) {
            return Some(Control::Next);
        }
        if self.previous.is_some_and(|r| r.contains(pt)) {
            return Some(Control::Previous);
        }
        None
    }
}
