// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot indicators: a projection of the logical index onto one control per slide.
//!
//! ## Usage
//!
//! Call [`Indicators::refresh`] with the current logical index to get the
//! minimal `Deactivate(..)` / `Activate(..)` changes, then apply them to the
//! host's dot elements.
//!
//! ```
//! use understory_carousel::indicators::{IndicatorEvent, Indicators};
//! let mut dots = Indicators::new(3);
//! assert_eq!(dots.refresh(0), vec![IndicatorEvent::Activate(0)]);
//! assert_eq!(
//!     dots.refresh(2),
//!     vec![IndicatorEvent::Deactivate(0), IndicatorEvent::Activate(2)]
//! );
//! ```

use alloc::vec;
use alloc::vec::Vec;

/// A change to a single indicator's active state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndicatorEvent {
    /// The indicator at this index became active.
    Activate(usize),
    /// The indicator at this index is no longer active.
    Deactivate(usize),
}

/// Active state of one indicator per real slide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Indicators {
    active: Vec<bool>,
}

impl Indicators {
    /// Create `len` inactive indicators.
    pub fn new(len: usize) -> Self {
        Self {
            active: vec![false; len],
        }
    }

    /// Number of indicators.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether there are no indicators.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether the indicator at `index` is active.
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Index of the active indicator, if any.
    pub fn active(&self) -> Option<usize> {
        self.active.iter().position(|&a| a)
    }

    /// Active state of every indicator, in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.active.iter().copied()
    }

    /// Recompute every indicator from `current` and return what changed.
    ///
    /// Deactivations are listed before activations. An out-of-range `current`
    /// leaves every indicator inactive.
    pub fn refresh(&mut self, current: usize) -> Vec<IndicatorEvent> {
        let mut deactivated = Vec::new();
        let mut activated = Vec::new();
        for (i, slot) in self.active.iter_mut().enumerate() {
            let want = i == current;
            if *slot == want {
                continue;
            }
            *slot = want;
            if want {
                activated.push(IndicatorEvent::Activate(i));
            } else {
                deactivated.push(IndicatorEvent::Deactivate(i));
            }
        }
        deactivated.extend(activated);
        deactivated
    }
}
