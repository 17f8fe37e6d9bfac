// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared types: track offsets, presentational flags, controls, and navigation commands.
//!
//! ## Overview
//!
//! These types describe what the host feeds into a [`Carousel`](crate::Carousel)
//! and what it reads back out to render.

/// Horizontal position of the track relative to the viewport.
///
/// A carousel rests on a [`Slot`](Offset::Slot), which is expressed in
/// viewport widths and therefore survives viewport resizes. While a drag is in
/// progress the track is positioned freely in [`Pixels`](Offset::Pixels).
///
/// Slot `s` places the left edge of the track `s` viewport widths to the left
/// of the viewport, so slot `i + 1` shows logical index `i` and slots `0` and
/// `N + 1` show the boundary clones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Offset {
    /// Resting on a track slot.
    Slot(isize),
    /// Free positioning in pixels (negative moves the track left).
    Pixels(f64),
}

impl Offset {
    /// The resting offset that shows logical index `index`.
    pub const fn resting(index: isize) -> Self {
        Self::Slot(index.saturating_add(1))
    }

    /// Resolve this offset to pixels for a viewport of the given width.
    pub fn to_pixels(self, viewport_width: f64) -> f64 {
        match self {
            Self::Slot(slot) => -(slot as f64) * viewport_width,
            Self::Pixels(px) => px,
        }
    }

    /// Offset as a percentage of the viewport width (the CSS `left` of the track).
    ///
    /// Returns `None` for a pixel offset when the viewport width is unknown.
    pub fn percent_of_viewport(self, viewport_width: f64) -> Option<f64> {
        match self {
            Self::Slot(slot) => Some(-(slot as f64) * 100.0),
            Self::Pixels(px) if viewport_width > 0.0 => Some(px / viewport_width * 100.0),
            Self::Pixels(_) => None,
        }
    }

    /// Offset as a percentage of the whole track width.
    ///
    /// A track of `slot_count` slots is `slot_count` viewports wide, so each
    /// slot is `100 / slot_count` percent of it.
    pub fn percent_of_track(self, slot_count: usize, viewport_width: f64) -> Option<f64> {
        if slot_count == 0 {
            return None;
        }
        self.percent_of_viewport(viewport_width)
            .map(|pct| pct / slot_count as f64)
    }
}

bitflags::bitflags! {
    /// Presentational state flags the host stylesheet is expected to render.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StateFlags: u8 {
        /// The carousel has finished building its track.
        const LOADED   = 0b0000_0001;
        /// A drag gesture is moving the track.
        const DRAGGING = 0b0000_0010;
        /// A settle transition is in flight; offset changes should animate.
        const SHIFTING = 0b0000_0100;
    }
}

impl Default for StateFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A clickable navigation control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// The "previous" button.
    Previous,
    /// The "next" button.
    Next,
    /// The dot indicator for the given logical index.
    Dot(usize),
}

/// A navigation command forwarded to the transition state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Advance by one slide.
    Next,
    /// Go back by one slide.
    Previous,
    /// Settle on a validated logical index.
    JumpTo(usize),
    /// Settle on a raw index without validation. Indices beyond the clones
    /// are reduced onto the real slides first.
    Shift(isize),
}

impl Command {
    /// The tentative index this command produces from `current`.
    pub const fn target_from(self, current: isize) -> isize {
        match self {
            Self::Next => current.saturating_add(1),
            Self::Previous => current.saturating_sub(1),
            Self::JumpTo(index) => index as isize,
            Self::Shift(index) => index,
        }
    }
}

/// The result of issuing a navigation command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// A settle transition toward `target` started; wait for
    /// [`Carousel::transition_end`](crate::Carousel::transition_end).
    Started {
        /// Tentative index being settled on (may be `-1` or `N`, a clone).
        target: isize,
    },
    /// The track was already resting at the requested offset, so no visual
    /// transition will fire; the carousel settled immediately.
    Completed {
        /// Renormalized logical index.
        index: usize,
    },
    /// A transition is in flight; the command replaces any previously queued
    /// one and replays when the transition finishes.
    Queued,
    /// A transition is in flight and the command was dropped.
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_offsets_resolve_against_viewport() {
        assert_eq!(Offset::resting(0), Offset::Slot(1));
        assert_eq!(Offset::Slot(2).to_pixels(300.0), -600.0);
        assert_eq!(Offset::Pixels(-42.0).to_pixels(300.0), -42.0);
        assert_eq!(Offset::Slot(0).to_pixels(300.0), 0.0);
    }

    #[test]
    fn percent_of_viewport_matches_css_left() {
        assert_eq!(Offset::Slot(3).percent_of_viewport(0.0), Some(-300.0));
        assert_eq!(Offset::Pixels(-150.0).percent_of_viewport(300.0), Some(-50.0));
        assert_eq!(Offset::Pixels(-150.0).percent_of_viewport(0.0), None);
    }

    #[test]
    fn percent_of_track_uses_slot_unit() {
        // Three slides plus two clones: each slot is 20% of the track.
        assert_eq!(Offset::Slot(1).percent_of_track(5, 0.0), Some(-20.0));
        assert_eq!(Offset::Slot(3).percent_of_track(5, 0.0), Some(-60.0));
        assert_eq!(Offset::Slot(0).percent_of_track(5, 0.0), Some(0.0));
        assert_eq!(Offset::Slot(1).percent_of_track(0, 0.0), None);
    }

    #[test]
    fn command_targets() {
        assert_eq!(Command::Next.target_from(0), 1);
        assert_eq!(Command::Previous.target_from(0), -1);
        assert_eq!(Command::JumpTo(4).target_from(1), 4);
        assert_eq!(Command::Shift(-3).target_from(1), -3);
        assert_eq!(Command::Next.target_from(isize::MAX), isize::MAX);
        assert_eq!(Command::Previous.target_from(isize::MIN), isize::MIN);
        assert_eq!(Offset::resting(isize::MAX), Offset::Slot(isize::MAX));
    }

    #[test]
    fn state_flags_default_empty() {
        assert!(StateFlags::default().is_empty());
        let f = StateFlags::LOADED | StateFlags::SHIFTING;
        assert!(f.contains(StateFlags::SHIFTING));
        assert!(!f.contains(StateFlags::DRAGGING));
    }
}
