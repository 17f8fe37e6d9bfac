// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gestures: one session per pointer-down, normalized across mouse and touch.
//!
//! ## Session lifetime
//!
//! [`Carousel::begin_drag`](crate::Carousel::begin_drag) returns a [`DragSession`].
//! The host passes it by reference to every
//! [`drag_move`](crate::Carousel::drag_move) and hands it back by value to
//! [`end_drag`](crate::Carousel::end_drag) or
//! [`cancel_drag`](crate::Carousel::cancel_drag), which consume it.
//! Mouse sessions want document-level move/up listeners for exactly that
//! lifetime (see [`DragSession::wants_document_listeners`]); when the session
//! is consumed those listeners should be detached.
//!
//! ## Classification
//!
//! - The first [`MOVE_FILTER`] moves of a session are ignored as jitter.
//! - A touch gesture whose vertical travel since the start exceeds its
//!   horizontal travel, before any horizontal drag was confirmed, is a page
//!   scroll and never moves the track.
//! - Mouse gestures are confirmed drags from the start.
//! - On release, a displacement beyond the threshold navigates; anything
//!   smaller snaps back.

use kurbo::Point;

use crate::types::Offset;

/// Number of initial move events ignored in every session.
pub const MOVE_FILTER: u32 = 4;

/// Default minimum drag distance, in pixels, that triggers navigation.
pub const DEFAULT_THRESHOLD: f64 = 30.0;

/// Input device family driving a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse-down, mouse-move, mouse-up.
    Mouse,
    /// Touch-start, touch-move, touch-end.
    Touch,
}

/// What a single move event did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragMove {
    /// Still inside the initial jitter filter.
    Filtered,
    /// Vertical movement dominates an unconfirmed touch; let the page scroll.
    Scroll,
    /// The track moved by `dx` pixels.
    Moved {
        /// Horizontal pointer travel since the previously applied position.
        dx: f64,
    },
    /// The session is no longer the carousel's active gesture.
    Inactive,
}

/// How a finished gesture resolves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// Dragged left past the threshold.
    Next,
    /// Dragged right past the threshold.
    Previous,
    /// Not far enough; return to the origin.
    SnapBack,
}

impl Release {
    /// Classify a total track displacement (final offset minus origin offset).
    pub fn classify(displacement: f64, threshold: f64) -> Self {
        if displacement < -threshold {
            Self::Next
        } else if displacement > threshold {
            Self::Previous
        } else {
            Self::SnapBack
        }
    }
}

/// State of one drag gesture, from pointer-down to its matching up or cancel.
#[derive(Clone, Debug, PartialEq)]
#[must_use = "a drag session must be ended or cancelled"]
pub struct DragSession {
    id: u32,
    kind: PointerKind,
    start: Point,
    last: Point,
    origin: Offset,
    origin_px: f64,
    moves: u32,
    dragging: bool,
}

impl DragSession {
    pub(crate) fn new(
        id: u32,
        kind: PointerKind,
        start: Point,
        origin: Offset,
        origin_px: f64,
    ) -> Self {
        Self {
            id,
            kind,
            start,
            last: start,
            origin,
            origin_px,
            moves: 0,
            dragging: kind == PointerKind::Mouse,
        }
    }

    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    /// Device family that started the gesture.
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Pointer position at gesture start.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Track offset at gesture start.
    pub fn origin(&self) -> Offset {
        self.origin
    }

    /// Track offset at gesture start, in pixels.
    pub fn origin_px(&self) -> f64 {
        self.origin_px
    }

    /// Move events observed so far, including filtered ones.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether horizontal dragging has been confirmed.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the host should listen for move/up on the whole document
    /// (and prevent the default action on pointer-down) while this session lives.
    ///
    /// Touch sessions receive their events on the track itself and must stay
    /// passive so that vertical page scrolling keeps working.
    pub fn wants_document_listeners(&self) -> bool {
        self.kind == PointerKind::Mouse
    }

    /// Feed one move event and classify it.
    pub fn observe(&mut self, pos: Point) -> DragMove {
        self.moves = self.moves.saturating_add(1);
        if self.moves <= MOVE_FILTER {
            return DragMove::Filtered;
        }

        let travel = pos - self.start;
        if !self.dragging && travel.y * travel.y > travel.x * travel.x {
            return DragMove::Scroll;
        }

        self.dragging = true;
        let dx = pos.x - self.last.x;
        self.last = pos;
        DragMove::Moved { dx }
    }
}
