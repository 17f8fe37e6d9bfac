// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel: routes input into navigation commands and drives the track.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use tracing::{debug, trace, warn};

use crate::error::CarouselError;
use crate::gesture::{DragMove, DragSession, PointerKind, Release};
use crate::indicators::{IndicatorEvent, Indicators};
use crate::options::CarouselOptions;
use crate::track::Track;
use crate::transition::{Gate, TransitionState, Transitions, renormalize};
use crate::types::{Command, Control, Offset, ShiftOutcome, StateFlags};

/// A looping carousel over slides of type `S`.
///
/// ## Usage
///
/// - Build with [`Carousel::new`] and report the viewport with
///   [`Carousel::set_viewport`] once layout is known.
/// - Forward input: [`Carousel::click`] for buttons and dots,
///   [`Carousel::begin_drag`] / [`Carousel::drag_move`] /
///   [`Carousel::end_drag`] / [`Carousel::cancel_drag`] for gestures.
/// - Forward the host's transition-finished signal to
///   [`Carousel::transition_end`].
/// - After each call, render [`Carousel::offset`] and [`Carousel::flags`];
///   animate offset changes only while [`StateFlags::SHIFTING`] is set.
///   Apply [`Carousel::take_indicator_events`] to the dots.
#[derive(Clone, Debug)]
pub struct Carousel<S> {
    track: Track<S>,
    index: isize,
    flags: StateFlags,
    transitions: Transitions,
    indicators: Option<Indicators>,
    indicator_events: Vec<IndicatorEvent>,
    options: CarouselOptions,
    gesture_epoch: u32,
    active_gesture: Option<u32>,
}

impl<S: Clone> Carousel<S> {
    /// Build the track from `slides` and mark the carousel loaded.
    ///
    /// Fails only when `slides` is empty.
    pub fn new(
        slides: impl IntoIterator<Item = S>,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        let track = Track::new(slides)?;
        let indicators = options.dots.as_ref().map(|_| Indicators::new(track.len()));
        let mut carousel = Self {
            track,
            index: 0,
            flags: StateFlags::LOADED,
            transitions: Transitions::new(options.busy_policy),
            indicators,
            indicator_events: Vec::new(),
            options,
            gesture_epoch: 0,
            active_gesture: None,
        };
        carousel.refresh_indicators(0);
        debug!(
            slides = carousel.track.len(),
            dots = carousel.indicators.is_some(),
            "carousel loaded"
        );
        Ok(carousel)
    }
}

impl<S> Carousel<S> {
    /// Number of real slides.
    pub fn len(&self) -> usize {
        self.track.len()
    }

    /// Always false: a carousel holds at least one slide.
    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    /// Logical index the carousel shows, or will rest on once the current
    /// transition finishes.
    pub fn index(&self) -> usize {
        renormalize(self.index, self.track.len())
    }

    /// Transition state.
    pub fn transition(&self) -> TransitionState {
        self.transitions.state()
    }

    /// Presentational state flags.
    pub fn flags(&self) -> StateFlags {
        self.flags
    }

    /// Current track offset.
    pub fn offset(&self) -> Offset {
        self.track.offset()
    }

    /// The track, including its boundary clones.
    pub fn track(&self) -> &Track<S> {
        &self.track
    }

    /// Dot indicators, when configured.
    pub fn indicators(&self) -> Option<&Indicators> {
        self.indicators.as_ref()
    }

    /// Options the carousel was built with.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Whether a drag gesture is moving the track.
    pub fn is_dragging(&self) -> bool {
        self.flags.contains(StateFlags::DRAGGING)
    }

    /// Indicator changes accumulated since the last call.
    pub fn take_indicator_events(&mut self) -> Vec<IndicatorEvent> {
        core::mem::take(&mut self.indicator_events)
    }

    /// Record the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.track.set_viewport(viewport);
    }

    /// Advance by one slide.
    pub fn next(&mut self) -> ShiftOutcome {
        self.dispatch(Command::Next)
    }

    /// Go back by one slide.
    pub fn previous(&mut self) -> ShiftOutcome {
        self.dispatch(Command::Previous)
    }

    /// Settle on logical index `index`.
    ///
    /// Indices outside `0..len()` are rejected with
    /// [`CarouselError::InvalidIndex`]; nothing changes.
    pub fn jump_to(&mut self, index: isize) -> Result<ShiftOutcome, CarouselError> {
        let len = self.track.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(self.dispatch(Command::JumpTo(i))),
            _ => {
                warn!(index, len, "jump rejected: invalid index");
                Err(CarouselError::InvalidIndex {
                    index: index as i128,
                    len,
                })
            }
        }
    }

    /// Settle directly on a raw index without validation.
    ///
    /// `-1` and `len()` settle on the clones and are renormalized when the
    /// transition finishes; indices further out are reduced onto the real
    /// slides before settling.
    pub fn shift(&mut self, index: isize) -> ShiftOutcome {
        self.dispatch(Command::Shift(index))
    }

    /// Handle a click on a navigation control.
    ///
    /// A dot click refreshes the indicators right away instead of waiting for
    /// the transition to finish.
    pub fn click(&mut self, control: Control) -> Result<ShiftOutcome, CarouselError> {
        match control {
            Control::Previous => Ok(self.previous()),
            Control::Next => Ok(self.next()),
            Control::Dot(i) => {
                let len = self.track.len();
                if i >= len {
                    warn!(index = i, len, "dot rejected: invalid index");
                    return Err(CarouselError::InvalidIndex {
                        index: i as i128,
                        len,
                    });
                }
                let outcome = self.dispatch(Command::JumpTo(i));
                self.refresh_indicators(self.index());
                Ok(outcome)
            }
        }
    }

    /// Handle the host's transition-finished signal.
    ///
    /// Renormalizes the index, repositions the track without animation,
    /// refreshes the indicators, and replays a queued command. Returns `false`
    /// when no transition was in flight.
    ///
    /// A replayed command may start a new transition or complete on the spot;
    /// read [`Carousel::transition`] and [`Carousel::flags`] afterwards to
    /// tell which.
    pub fn transition_end(&mut self) -> bool {
        if !self.transitions.is_transitioning() {
            trace!("transition end while idle ignored");
            return false;
        }
        let queued = self.transitions.finish();
        self.settle_in_place();
        if let Some(command) = queued {
            debug!(?command, "replaying queued command");
            let _ = self.dispatch(command);
        }
        true
    }

    /// Start a drag gesture at `pos`.
    ///
    /// Returns `None` while a transition is in flight: the drag and the settle
    /// animation would both drive the track. Starting a new gesture detaches
    /// any session the host never ended.
    pub fn begin_drag(&mut self, kind: PointerKind, pos: Point) -> Option<DragSession> {
        if self.transitions.is_transitioning() {
            trace!(?kind, "drag refused during transition");
            return None;
        }
        self.flags.remove(StateFlags::DRAGGING);
        self.gesture_epoch = self.gesture_epoch.wrapping_add(1);
        self.active_gesture = Some(self.gesture_epoch);
        Some(DragSession::new(
            self.gesture_epoch,
            kind,
            pos,
            self.track.offset(),
            self.track.offset_px(),
        ))
    }

    /// Feed a move event of `session`.
    pub fn drag_move(&mut self, session: &mut DragSession, pos: Point) -> DragMove {
        if !self.owns(session) {
            return DragMove::Inactive;
        }
        let step = session.observe(pos);
        if let DragMove::Moved { dx } = step {
            self.flags.insert(StateFlags::DRAGGING);
            self.track.set_offset(self.track.offset_px() + dx);
        }
        step
    }

    /// Finish `session`: navigate when it travelled past the threshold,
    /// otherwise snap back to where it started.
    ///
    /// Returns the navigation outcome, or `None` for a snap back or a session
    /// that is no longer active.
    pub fn end_drag(&mut self, session: DragSession) -> Option<ShiftOutcome> {
        if !self.owns(&session) {
            return None;
        }
        self.release_gesture();
        let displacement = self.track.offset_px() - session.origin_px();
        match Release::classify(displacement, self.options.effective_threshold()) {
            Release::Next => Some(self.dispatch(Command::Next)),
            Release::Previous => Some(self.dispatch(Command::Previous)),
            Release::SnapBack => {
                trace!(displacement, "drag below threshold, snapping back");
                self.track.restore(session.origin());
                None
            }
        }
    }

    /// Abort `session` without navigating, e.g. when pointer capture is lost.
    pub fn cancel_drag(&mut self, session: DragSession) {
        if !self.owns(&session) {
            return;
        }
        self.release_gesture();
        self.track.restore(session.origin());
    }

    fn owns(&self, session: &DragSession) -> bool {
        self.active_gesture == Some(session.id())
    }

    fn release_gesture(&mut self) {
        self.active_gesture = None;
        self.flags.remove(StateFlags::DRAGGING);
    }

    fn dispatch(&mut self, command: Command) -> ShiftOutcome {
        match self.transitions.gate(command) {
            Gate::Open => {}
            Gate::Queued => {
                debug!(?command, "command queued behind transition");
                return ShiftOutcome::Queued;
            }
            Gate::Rejected => {
                debug!(?command, "command rejected during transition");
                return ShiftOutcome::Rejected;
            }
        }

        // A command overrides a drag in progress.
        if self.active_gesture.is_some() {
            trace!("drag abandoned by navigation");
            self.release_gesture();
        }

        let len = self.track.len();
        let mut target = command.target_from(self.index);
        // Only the two clones may be settled on outside the real slides.
        if target < -1 || target > len as isize {
            target = renormalize(target, len) as isize;
        }
        self.index = target;
        let resting = Offset::resting(target);
        if self.track.is_at(resting) {
            // No visual change means no transition-finished signal will come.
            self.settle_in_place();
            return ShiftOutcome::Completed {
                index: self.index(),
            };
        }

        debug!(?command, to = target, "settling");
        self.flags.insert(StateFlags::SHIFTING);
        self.track.settle_to(target);
        self.transitions.begin(target);
        ShiftOutcome::Started { target }
    }

    fn settle_in_place(&mut self) {
        self.flags.remove(StateFlags::SHIFTING);
        let index = self.index();
        self.index = index as isize;
        self.track.settle_to(self.index);
        self.refresh_indicators(index);
    }

    fn refresh_indicators(&mut self, current: usize) {
        if let Some(indicators) = &mut self.indicators {
            let events = indicators.refresh(current);
            self.indicator_events.extend(events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::MOVE_FILTER;
    use crate::transition::BusyPolicy;
    use alloc::vec;

    const VIEWPORT: Size = Size::new(400.0, 300.0);

    fn abc() -> Carousel<&'static str> {
        let mut c = Carousel::new(["A", "B", "C"], CarouselOptions::default().with_dots(".dots"))
            .unwrap();
        c.set_viewport(VIEWPORT);
        c
    }

    fn settled_percent<S>(c: &Carousel<S>) -> f64 {
        c.track().offset_percent().unwrap()
    }

    /// Drag horizontally by `dx` pixels in one applied move after the filter.
    fn drag_by<S>(c: &mut Carousel<S>, kind: PointerKind, dx: f64) -> Option<ShiftOutcome> {
        let start = Point::new(200.0, 150.0);
        let mut s = c.begin_drag(kind, start).unwrap();
        for _ in 0..MOVE_FILTER {
            assert_eq!(c.drag_move(&mut s, start), DragMove::Filtered);
        }
        assert_eq!(
            c.drag_move(&mut s, Point::new(start.x + dx, start.y)),
            DragMove::Moved { dx }
        );
        c.end_drag(s)
    }

    #[test]
    fn loads_resting_on_first_slide() {
        let mut c = abc();
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert_eq!(c.flags(), StateFlags::LOADED);
        assert_eq!(c.offset(), Offset::Slot(1));
        assert_eq!(settled_percent(&c), -20.0);
        assert_eq!(c.track().slides(), &["C", "A", "B", "C", "A"]);
        assert_eq!(c.indicators().unwrap().active(), Some(0));
        assert_eq!(c.take_indicator_events(), vec![IndicatorEvent::Activate(0)]);
        assert!(c.take_indicator_events().is_empty());
    }

    #[test]
    fn empty_slides_fail() {
        let err = Carousel::<u8>::new([], CarouselOptions::default()).unwrap_err();
        assert_eq!(err, CarouselError::NoSlides);
    }

    #[test]
    fn next_then_finish() {
        let mut c = abc();
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
        assert!(c.flags().contains(StateFlags::SHIFTING));
        assert_eq!(c.transition(), TransitionState::Transitioning { target: 1 });
        assert_eq!(settled_percent(&c), -40.0);

        assert!(c.transition_end());
        assert_eq!(c.index(), 1);
        assert_eq!(settled_percent(&c), -40.0);
        assert!(!c.flags().contains(StateFlags::SHIFTING));
        assert_eq!(c.transition(), TransitionState::Idle);
        assert_eq!(c.indicators().unwrap().active(), Some(1));
    }

    #[test]
    fn previous_from_first_wraps_through_clone() {
        let mut c = abc();
        assert_eq!(c.previous(), ShiftOutcome::Started { target: -1 });
        // Showing the clone of the last slide.
        assert_eq!(c.offset(), Offset::Slot(0));
        assert_eq!(settled_percent(&c), 0.0);
        assert_eq!(c.index(), 2);

        assert!(c.transition_end());
        assert_eq!(c.index(), 2);
        assert_eq!(c.offset(), Offset::Slot(3));
        assert_eq!(settled_percent(&c), -60.0);
        // Repositioned without animating.
        assert!(!c.flags().contains(StateFlags::SHIFTING));
        assert_eq!(c.indicators().unwrap().active(), Some(2));
    }

    #[test]
    fn next_wraps_around_for_every_size() {
        for n in 2..8_usize {
            let mut c = Carousel::new(0..n, CarouselOptions::default()).unwrap();
            c.set_viewport(VIEWPORT);
            let initial = c.offset();
            for _ in 0..n {
                assert!(matches!(c.next(), ShiftOutcome::Started { .. }));
                assert!(c.transition_end());
            }
            assert_eq!(c.index(), 0);
            assert_eq!(c.offset(), initial);
        }
    }

    #[test]
    fn settled_offset_law() {
        for n in 1..7_usize {
            let mut c = Carousel::new(0..n, CarouselOptions::default()).unwrap();
            c.set_viewport(VIEWPORT);
            let unit = 100.0 / (n + 2) as f64;
            for i in 0..n {
                let _ = c.jump_to(i as isize).unwrap();
                let _ = c.transition_end();
                assert_eq!(c.index(), i);
                let expected = -((i + 1) as f64) * unit;
                let error = settled_percent(&c) - expected;
                assert!(error < 1e-9 && error > -1e-9);
            }
        }
    }

    #[test]
    fn single_slide_still_loops() {
        let mut c = Carousel::new(["only"], CarouselOptions::default().with_dots("#d")).unwrap();
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
        assert!(c.transition_end());
        assert_eq!(c.index(), 0);
        assert_eq!(c.offset(), Offset::Slot(1));
        assert_eq!(c.indicators().unwrap().active(), Some(0));
    }

    #[test]
    fn invalid_jumps_change_nothing() {
        for n in 1..5_usize {
            let mut c = Carousel::new(0..n, CarouselOptions::default()).unwrap();
            let before = (c.index(), c.offset(), c.transition());
            for bad in [-1, n as isize] {
                assert_eq!(
                    c.jump_to(bad),
                    Err(CarouselError::InvalidIndex {
                        index: bad as i128,
                        len: n,
                    })
                );
                assert_eq!((c.index(), c.offset(), c.transition()), before);
            }
        }
    }

    #[test]
    fn jump_to_current_completes_immediately() {
        let mut c = abc();
        let _ = c.take_indicator_events();
        assert_eq!(c.jump_to(0), Ok(ShiftOutcome::Completed { index: 0 }));
        assert_eq!(c.transition(), TransitionState::Idle);
        assert!(!c.flags().contains(StateFlags::SHIFTING));
        // Still able to navigate afterwards.
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
    }

    #[test]
    fn reject_policy_ignores_busy_commands() {
        let mut c = abc();
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
        assert_eq!(c.next(), ShiftOutcome::Rejected);
        assert_eq!(c.jump_to(2), Ok(ShiftOutcome::Rejected));
        assert_eq!(c.index(), 1);
        assert_eq!(c.offset(), Offset::Slot(2));

        assert!(c.transition_end());
        assert_eq!(c.index(), 1);
        assert_eq!(c.transition(), TransitionState::Idle);
    }

    #[test]
    fn queue_policy_replays_latest() {
        let mut c = Carousel::new(
            ["A", "B", "C", "D"],
            CarouselOptions::default().with_busy_policy(BusyPolicy::QueueLatest),
        )
        .unwrap();
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
        assert_eq!(c.next(), ShiftOutcome::Queued);
        assert_eq!(c.previous(), ShiftOutcome::Queued);
        assert_eq!(c.jump_to(3), Ok(ShiftOutcome::Queued));
        // Nothing moves until the transition ends.
        assert_eq!(c.index(), 1);

        assert!(c.transition_end());
        assert_eq!(c.transition(), TransitionState::Transitioning { target: 3 });
        assert!(c.flags().contains(StateFlags::SHIFTING));
        assert!(c.transition_end());
        assert_eq!(c.index(), 3);
        assert_eq!(c.transition(), TransitionState::Idle);
        assert!(!c.transition_end());
    }

    #[test]
    fn queued_replay_can_complete_immediately() {
        let mut c = Carousel::new(
            ["A", "B", "C"],
            CarouselOptions::default()
                .with_dots(".dots")
                .with_busy_policy(BusyPolicy::QueueLatest),
        )
        .unwrap();
        c.set_viewport(VIEWPORT);
        let _ = c.take_indicator_events();
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
        // Queued jump to the slide the running transition already targets.
        assert_eq!(c.jump_to(1), Ok(ShiftOutcome::Queued));

        assert!(c.transition_end());
        assert_eq!(c.transition(), TransitionState::Idle);
        assert!(!c.flags().contains(StateFlags::SHIFTING));
        assert_eq!(c.index(), 1);
        assert_eq!(c.offset(), Offset::Slot(2));
        assert_eq!(
            c.take_indicator_events(),
            vec![IndicatorEvent::Deactivate(0), IndicatorEvent::Activate(1)]
        );
        assert!(!c.transition_end());
    }

    #[test]
    fn stray_transition_end_is_ignored() {
        let mut c = abc();
        assert!(!c.transition_end());
        assert_eq!(c.offset(), Offset::Slot(1));
    }

    #[test]
    fn shift_accepts_raw_indices() {
        let mut c = abc();
        assert_eq!(c.shift(3), ShiftOutcome::Started { target: 3 });
        assert_eq!(c.offset(), Offset::Slot(4));
        assert!(c.transition_end());
        assert_eq!(c.index(), 0);
        assert_eq!(c.offset(), Offset::Slot(1));

        // Beyond the clones: reduced onto a real slide before settling.
        assert_eq!(c.shift(4), ShiftOutcome::Started { target: 1 });
        assert_eq!(c.offset(), Offset::Slot(2));
        assert!(c.transition_end());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn shift_to_extreme_indices_settles_on_a_real_slide() {
        for raw in [isize::MAX, isize::MIN, isize::MIN + 1, isize::MAX - 1] {
            let mut c = abc();
            let _ = c.shift(raw);
            let _ = c.transition_end();
            assert_eq!(c.transition(), TransitionState::Idle);
            assert!(c.index() < c.len());
            assert_eq!(c.offset(), Offset::resting(c.index() as isize));
            assert_eq!(c.indicators().unwrap().active(), Some(c.index()));
        }
        // Stepping from an extreme settled index keeps working.
        let mut c = abc();
        let _ = c.shift(isize::MAX);
        let _ = c.transition_end();
        let _ = c.next();
        let _ = c.transition_end();
        assert!(c.index() < c.len());
    }

    #[test]
    fn drag_threshold_boundary() {
        let threshold = 30.0;
        for kind in [PointerKind::Mouse, PointerKind::Touch] {
            let mut c = abc();
            assert_eq!(drag_by(&mut c, kind, -(threshold - 1.0)), None);
            assert_eq!(c.offset(), Offset::Slot(1));
            assert_eq!(c.transition(), TransitionState::Idle);

            assert_eq!(drag_by(&mut c, kind, threshold - 1.0), None);
            assert_eq!(c.offset(), Offset::Slot(1));

            assert_eq!(
                drag_by(&mut c, kind, -(threshold + 1.0)),
                Some(ShiftOutcome::Started { target: 1 })
            );
            assert!(c.transition_end());
            assert_eq!(c.index(), 1);

            assert_eq!(
                drag_by(&mut c, kind, threshold + 1.0),
                Some(ShiftOutcome::Started { target: 0 })
            );
            assert!(c.transition_end());
            assert_eq!(c.index(), 0);
        }
    }

    #[test]
    fn custom_threshold_applies() {
        let mut c = Carousel::new(["A", "B"], CarouselOptions::default().with_threshold(80.0))
            .unwrap();
        c.set_viewport(VIEWPORT);
        assert_eq!(drag_by(&mut c, PointerKind::Mouse, -60.0), None);
        assert_eq!(
            drag_by(&mut c, PointerKind::Mouse, -81.0),
            Some(ShiftOutcome::Started { target: 1 })
        );
    }

    #[test]
    fn drag_moves_track_and_sets_flag() {
        let mut c = abc();
        let start = Point::new(200.0, 150.0);
        let mut s = c.begin_drag(PointerKind::Mouse, start).unwrap();
        assert!(s.wants_document_listeners());
        for _ in 0..MOVE_FILTER {
            let _ = c.drag_move(&mut s, start);
        }
        assert!(!c.is_dragging());
        let _ = c.drag_move(&mut s, Point::new(190.0, 150.0));
        let _ = c.drag_move(&mut s, Point::new(170.0, 150.0));
        assert!(c.is_dragging());
        assert_eq!(c.offset(), Offset::Pixels(-430.0));

        assert_eq!(c.end_drag(s), None);
        assert!(!c.is_dragging());
        assert_eq!(c.offset(), Offset::Slot(1));
    }

    #[test]
    fn vertical_touch_scroll_leaves_track_alone() {
        let mut c = abc();
        let start = Point::new(200.0, 150.0);
        let mut s = c.begin_drag(PointerKind::Touch, start).unwrap();
        assert!(!s.wants_document_listeners());
        for y in 1..=8 {
            let pos = Point::new(200.0 - f64::from(y), 150.0 + 20.0 * f64::from(y));
            let step = c.drag_move(&mut s, pos);
            assert!(matches!(step, DragMove::Filtered | DragMove::Scroll));
        }
        assert!(!c.is_dragging());
        assert_eq!(c.offset(), Offset::Slot(1));
        assert_eq!(c.end_drag(s), None);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn cancel_restores_origin() {
        let mut c = abc();
        let start = Point::new(200.0, 150.0);
        let mut s = c.begin_drag(PointerKind::Mouse, start).unwrap();
        for _ in 0..=MOVE_FILTER {
            let _ = c.drag_move(&mut s, Point::new(100.0, 150.0));
        }
        assert_eq!(c.offset(), Offset::Pixels(-500.0));
        c.cancel_drag(s);
        assert!(!c.is_dragging());
        assert_eq!(c.offset(), Offset::Slot(1));
        assert_eq!(c.transition(), TransitionState::Idle);
    }

    #[test]
    fn drag_refused_while_transitioning() {
        let mut c = abc();
        let _ = c.next();
        assert!(c.begin_drag(PointerKind::Touch, Point::ZERO).is_none());
        assert!(c.transition_end());
        assert!(c.begin_drag(PointerKind::Touch, Point::ZERO).is_some());
    }

    #[test]
    fn new_gesture_detaches_stale_session() {
        let mut c = abc();
        let start = Point::new(200.0, 150.0);
        let mut lost = c.begin_drag(PointerKind::Mouse, start).unwrap();
        for _ in 0..=MOVE_FILTER {
            let _ = c.drag_move(&mut lost, Point::new(180.0, 150.0));
        }
        assert!(c.is_dragging());

        let fresh = c.begin_drag(PointerKind::Mouse, start).unwrap();
        assert!(!c.is_dragging());
        assert_eq!(c.drag_move(&mut lost, Point::new(0.0, 150.0)), DragMove::Inactive);
        assert_eq!(c.end_drag(lost), None);
        c.cancel_drag(fresh);
    }

    #[test]
    fn navigation_abandons_drag() {
        let mut c = abc();
        let start = Point::new(200.0, 150.0);
        let mut s = c.begin_drag(PointerKind::Mouse, start).unwrap();
        for _ in 0..=MOVE_FILTER {
            let _ = c.drag_move(&mut s, Point::new(190.0, 150.0));
        }
        assert_eq!(c.next(), ShiftOutcome::Started { target: 1 });
        assert!(!c.is_dragging());
        assert_eq!(c.drag_move(&mut s, Point::new(0.0, 150.0)), DragMove::Inactive);
        assert_eq!(c.end_drag(s), None);
        assert_eq!(c.offset(), Offset::Slot(2));
    }

    #[test]
    fn clicks_route_to_commands() {
        let mut c = abc();
        assert_eq!(c.click(Control::Next), Ok(ShiftOutcome::Started { target: 1 }));
        let _ = c.transition_end();
        assert_eq!(c.click(Control::Previous), Ok(ShiftOutcome::Started { target: 0 }));
        let _ = c.transition_end();
        assert_eq!(
            c.click(Control::Dot(7)),
            Err(CarouselError::InvalidIndex { index: 7, len: 3 })
        );
        // Dot indices beyond `isize::MAX` are reported as given.
        assert_eq!(
            c.click(Control::Dot(usize::MAX)),
            Err(CarouselError::InvalidIndex {
                index: usize::MAX as i128,
                len: 3,
            })
        );
        assert_eq!(c.transition(), TransitionState::Idle);
    }

    #[test]
    fn dot_click_refreshes_immediately() {
        let mut c = abc();
        let _ = c.take_indicator_events();
        assert_eq!(c.click(Control::Dot(2)), Ok(ShiftOutcome::Started { target: 2 }));
        assert_eq!(c.indicators().unwrap().active(), Some(2));
        assert_eq!(
            c.take_indicator_events(),
            vec![IndicatorEvent::Deactivate(0), IndicatorEvent::Activate(2)]
        );
        assert!(c.transition_end());
        assert!(c.take_indicator_events().is_empty());
    }

    #[test]
    fn exactly_one_indicator_after_settling() {
        let mut c = Carousel::new(0..5, CarouselOptions::default().with_dots(".dots")).unwrap();
        let script = [
            Command::Previous,
            Command::Previous,
            Command::Next,
            Command::JumpTo(4),
            Command::Next,
            Command::Shift(-2),
        ];
        for command in script {
            let _ = c.dispatch(command);
            let _ = c.transition_end();
            let dots = c.indicators().unwrap();
            assert_eq!(dots.iter().filter(|&a| a).count(), 1);
            assert_eq!(dots.active(), Some(c.index()));
        }
    }

    #[test]
    fn without_dots_there_are_no_indicators() {
        let mut c = Carousel::new(["A", "B"], CarouselOptions::default()).unwrap();
        assert!(c.indicators().is_none());
        let _ = c.next();
        let _ = c.transition_end();
        assert!(c.take_indicator_events().is_empty());
    }

    #[test]
    fn resize_keeps_resting_slot() {
        let mut c = abc();
        let _ = c.jump_to(2);
        let _ = c.transition_end();
        c.set_viewport(Size::new(800.0, 600.0));
        assert_eq!(c.offset(), Offset::Slot(3));
        assert_eq!(c.track().offset_px(), -2400.0);
    }
}
