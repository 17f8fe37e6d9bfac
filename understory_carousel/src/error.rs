// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for carousel construction and navigation.

/// Errors reported by a [`Carousel`](crate::Carousel).
///
/// None of these are fatal: the carousel state is left untouched whenever one
/// is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// A jump target outside `0..len`.
    #[error("invalid index {index}: carousel has {len} slides")]
    InvalidIndex {
        /// The rejected target, wide enough for any `isize` or `usize` input.
        index: i128,
        /// Number of real slides.
        len: usize,
    },
    /// A carousel was built from an empty slide sequence.
    #[error("a carousel needs at least one slide")]
    NoSlides,
}
