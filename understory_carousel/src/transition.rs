// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition state machine: serializes navigation against an in-flight settle.
//!
//! ## States
//!
//! - [`TransitionState::Idle`]: nothing is animating; a command settles right away.
//! - [`TransitionState::Transitioning`]: a settle animation is in flight.
//!   Commands that arrive now are handled by the configured [`BusyPolicy`].
//!
//! The machine leaves `Transitioning` only through [`Transitions::finish`],
//! driven by the host's transition-finished signal.

use crate::types::Command;

/// What to do with a command that arrives while a transition is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BusyPolicy {
    /// Drop the command. Rapid clicks beyond the first are ignored.
    #[default]
    Reject,
    /// Keep only the most recent command and replay it once the current
    /// transition finishes.
    QueueLatest,
}

/// Whether a settle animation is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransitionState {
    /// Resting.
    #[default]
    Idle,
    /// Animating toward a tentative index.
    Transitioning {
        /// Tentative index being settled on (`-1` and `N` are the clones).
        target: isize,
    },
}

/// Admission decision for an incoming command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Idle: apply the command now.
    Open,
    /// Busy: the command was stored for replay.
    Queued,
    /// Busy: the command was dropped.
    Rejected,
}

/// The two-state transition machine plus its queue of one.
#[derive(Clone, Debug, Default)]
pub struct Transitions {
    state: TransitionState,
    policy: BusyPolicy,
    queued: Option<Command>,
}

impl Transitions {
    /// Create an idle machine with the given busy policy.
    pub fn new(policy: BusyPolicy) -> Self {
        Self {
            state: TransitionState::Idle,
            policy,
            queued: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Configured busy policy.
    pub fn policy(&self) -> BusyPolicy {
        self.policy
    }

    /// Whether a settle animation is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// The command waiting for the current transition, if any.
    pub fn queued(&self) -> Option<Command> {
        self.queued
    }

    /// Decide whether `command` may run now.
    pub fn gate(&mut self, command: Command) -> Gate {
        if !self.is_transitioning() {
            return Gate::Open;
        }
        match self.policy {
            BusyPolicy::Reject => Gate::Rejected,
            BusyPolicy::QueueLatest => {
                self.queued = Some(command);
                Gate::Queued
            }
        }
    }

    /// Enter `Transitioning` toward `target`.
    pub fn begin(&mut self, target: isize) {
        self.state = TransitionState::Transitioning { target };
    }

    /// Return to `Idle`, handing back the queued command for replay.
    ///
    /// Returns `None` without changing anything when already idle.
    pub fn finish(&mut self) -> Option<Command> {
        if !self.is_transitioning() {
            return None;
        }
        self.state = TransitionState::Idle;
        self.queued.take()
    }
}

/// Map a tentative index onto `0..len`.
///
/// `len` must be non-zero.
pub fn renormalize(index: isize, len: usize) -> usize {
    // A track never holds more than `isize::MAX` slides.
    index.rem_euclid(len as isize) as usize
}
