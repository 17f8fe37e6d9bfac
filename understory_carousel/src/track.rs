// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looping track geometry: boundary clones, sizing, and offsets.
//!
//! ## Layout
//!
//! A track built from `N` slides holds `N + 2` entries:
//! `[clone_of_last, slide_0, …, slide_{N-1}, clone_of_first]`.
//! It is `(N + 2) * 100%` of the viewport wide and every entry fills exactly
//! one viewport. Moving past either real boundary shows the matching clone,
//! after which the carousel repositions onto the equivalent real slide
//! without animating.

use alloc::vec::Vec;

use kurbo::Size;

use crate::error::CarouselError;
use crate::types::Offset;

/// The strip of slides moved behind the viewport.
#[derive(Clone, Debug)]
pub struct Track<S> {
    slides: Vec<S>,
    offset: Offset,
    viewport: Size,
}

impl<S: Clone> Track<S> {
    /// Build a track from the real slides, adding the two boundary clones.
    ///
    /// The track starts resting on logical index `0`, one slot past the
    /// leading clone.
    pub fn new(slides: impl IntoIterator<Item = S>) -> Result<Self, CarouselError> {
        let real: Vec<S> = slides.into_iter().collect();
        let (Some(first), Some(last)) = (real.first(), real.last()) else {
            return Err(CarouselError::NoSlides);
        };

        let mut track = Vec::with_capacity(real.len() + 2);
        track.push(last.clone());
        let first = first.clone();
        track.extend(real);
        track.push(first);

        Ok(Self {
            slides: track,
            offset: Offset::resting(0),
            viewport: Size::ZERO,
        })
    }
}

impl<S> Track<S> {
    /// Number of real slides.
    pub fn len(&self) -> usize {
        self.slides.len() - 2
    }

    /// Always false: a track holds at least one real slide.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots including both clones.
    pub fn slot_count(&self) -> usize {
        self.slides.len()
    }

    /// Every entry on the track, clones included, in display order.
    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Only the real slides.
    pub fn real_slides(&self) -> &[S] {
        &self.slides[1..self.slides.len() - 1]
    }

    /// Track width as a percentage of the viewport.
    pub fn width_percent(&self) -> f64 {
        self.slot_count() as f64 * 100.0
    }

    /// Width of one slot as a percentage of the track.
    pub fn unit_percent(&self) -> f64 {
        100.0 / self.slot_count() as f64
    }

    /// Current offset.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Current offset resolved to pixels.
    pub fn offset_px(&self) -> f64 {
        self.offset.to_pixels(self.viewport.width)
    }

    /// Current offset as a percentage of the track width.
    pub fn offset_percent(&self) -> Option<f64> {
        self.offset.percent_of_track(self.slot_count(), self.viewport.width)
    }

    /// Viewport size last reported by the host.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Record the viewport size. Slot offsets follow automatically.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Position the track in pixels. Used for drag feedback; never changes the index.
    pub fn set_offset(&mut self, px: f64) {
        self.offset = Offset::Pixels(px);
    }

    /// Restore a previously observed offset.
    pub fn restore(&mut self, offset: Offset) {
        self.offset = offset;
    }

    /// Apply the canonical resting offset for `index`.
    ///
    /// Out-of-range indices are accepted: `-1` and `len()` rest on the clones.
    pub fn settle_to(&mut self, index: isize) {
        self.offset = Offset::resting(index);
    }

    /// Whether applying `offset` would leave the track visually where it is.
    ///
    /// Offsets of different kinds are compared in pixels once the viewport
    /// width is known.
    pub fn is_at(&self, offset: Offset) -> bool {
        self.offset == offset
            || (self.viewport.width > 0.0
                && self.offset_px() == offset.to_pixels(self.viewport.width))
    }
}
