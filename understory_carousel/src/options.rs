// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! With the `serde` feature, [`CarouselOptions`] deserializes from host
//! configuration; missing fields take their defaults.

use alloc::string::String;

use crate::gesture::DEFAULT_THRESHOLD;
use crate::transition::BusyPolicy;

/// Options recognized by [`Carousel::new`](crate::Carousel::new).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct CarouselOptions {
    /// Minimum drag distance in pixels that triggers navigation.
    ///
    /// Zero, negative, and non-finite values fall back to the default of 30.
    pub threshold: f64,
    /// Host selector of the container that receives one dot per slide.
    ///
    /// The carousel does not interpret it; `Some` enables the indicator set.
    pub dots: Option<String>,
    /// Handling of commands that arrive during a transition.
    pub busy_policy: BusyPolicy,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            dots: None,
            busy_policy: BusyPolicy::default(),
        }
    }
}

impl CarouselOptions {
    /// Set the drag threshold in pixels.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable dot indicators, generated into the container named by `selector`.
    #[must_use]
    pub fn with_dots(mut self, selector: impl Into<String>) -> Self {
        self.dots = Some(selector.into());
        self
    }

    /// Set the busy policy.
    #[must_use]
    pub fn with_busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }

    /// The threshold actually applied to drags.
    pub fn effective_threshold(&self) -> f64 {
        if self.threshold.is_finite() && self.threshold > 0.0 {
            self.threshold
        } else {
            DEFAULT_THRESHOLD
        }
    }
}
