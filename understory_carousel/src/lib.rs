// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, `no_std` core for looping carousels.
//!
//! ## Overview
//!
//! This crate owns the state of a carousel widget: which slide is showing, where the slide
//! track sits, whether a drag or a settle animation is in progress, and which dot indicator
//! is active.
//! It does not render anything and does not own an event loop.
//! The host feeds input in (clicks, pointer samples, the end of a CSS-style transition) and
//! renders the state it reads back.
//!
//! ## The looping track
//!
//! A [`Track`] built from `N` slides holds `[clone_of_last, slide_0, …, slide_{N-1}, clone_of_first]`.
//! Stepping past either end settles onto a clone; when the transition finishes the carousel
//! renormalizes its index and jumps, without animating, to the matching real slide.
//! At rest the track offset is always [`Offset::Slot`]`(index + 1)`, i.e. `-(index + 1)`
//! slots of `100 / (N + 2)` percent of the track width each.
//!
//! ## Input
//!
//! - Clicks on previous/next buttons and dots: [`Carousel::click`] with a [`Control`].
//!   [`ControlMap`](crate::controls::ControlMap) resolves raw click points for hosts without
//!   their own event targeting.
//! - Drags: [`Carousel::begin_drag`] returns a [`DragSession`](crate::gesture::DragSession)
//!   that the host passes to [`Carousel::drag_move`] and finally to [`Carousel::end_drag`]
//!   or [`Carousel::cancel_drag`].
//!   Mouse and touch are normalized; a vertical touch swipe is left to the page as a scroll.
//! - Programmatic: [`Carousel::next`], [`Carousel::previous`], [`Carousel::jump_to`],
//!   [`Carousel::shift`].
//!
//! ## Transitions
//!
//! Navigation settles the track with [`StateFlags::SHIFTING`] set, which tells the host to
//! animate. The host reports completion with [`Carousel::transition_end`].
//! Commands that arrive while a transition is in flight follow the configured
//! [`BusyPolicy`]: they are either rejected or the latest one is queued and replayed.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_carousel::{Carousel, CarouselOptions, Offset, ShiftOutcome, StateFlags};
//!
//! let mut carousel = Carousel::new(["A", "B", "C"], CarouselOptions::default().with_dots(".dots"))
//!     .unwrap();
//! assert_eq!(carousel.offset(), Offset::Slot(1));
//!
//! // Step back from the first slide: the track settles on the clone of "C".
//! assert_eq!(carousel.previous(), ShiftOutcome::Started { target: -1 });
//! assert!(carousel.flags().contains(StateFlags::SHIFTING));
//! assert_eq!(carousel.offset(), Offset::Slot(0));
//!
//! // Once the animation ends, the carousel rests on the real "C".
//! assert!(carousel.transition_end());
//! assert_eq!(carousel.index(), 2);
//! assert_eq!(carousel.offset(), Offset::Slot(3));
//! assert_eq!(carousel.indicators().unwrap().active(), Some(2));
//! ```
//!
//! ### Dragging
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_carousel::gesture::PointerKind;
//! use understory_carousel::{Carousel, CarouselOptions, ShiftOutcome};
//!
//! let mut carousel = Carousel::new(1..=4, CarouselOptions::default()).unwrap();
//! carousel.set_viewport(Size::new(400.0, 300.0));
//!
//! let mut session = carousel.begin_drag(PointerKind::Touch, Point::new(300.0, 100.0)).unwrap();
//! for x in [295.0, 290.0, 280.0, 270.0, 240.0, 200.0] {
//!     let _ = carousel.drag_move(&mut session, Point::new(x, 102.0));
//! }
//! assert_eq!(carousel.end_drag(session), Some(ShiftOutcome::Started { target: 1 }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
pub mod controls;
mod error;
pub mod gesture;
pub mod indicators;
mod options;
pub mod track;
pub mod transition;
pub mod types;

pub use carousel::Carousel;
pub use error::CarouselError;
pub use options::CarouselOptions;
pub use track::Track;
pub use transition::BusyPolicy;
pub use types::{Command, Control, Offset, ShiftOutcome, StateFlags};
