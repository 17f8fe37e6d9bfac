// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Builds a three-slide carousel with dots, steps through it with the
//! previous/next commands, and prints the track and indicators after every
//! settled state, including the silent jump off the boundary clones.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_basics`

use understory_carousel::{Carousel, CarouselOptions, ShiftOutcome};

fn describe(label: &str, c: &Carousel<&str>) {
    let dots: String = c
        .indicators()
        .map(|d| d.iter().map(|a| if a { '●' } else { '○' }).collect())
        .unwrap_or_default();
    println!(
        "{label:<18} index={} slide={:?} offset={:?} ({:>6.1}% of track) flags={:?} dots={dots}",
        c.index(),
        c.track().real_slides()[c.index()],
        c.offset(),
        c.track().offset_percent().unwrap_or(f64::NAN),
        c.flags(),
    );
}

fn main() {
    let mut carousel = Carousel::new(
        ["A", "B", "C"],
        CarouselOptions::default().with_dots(".slider-dots"),
    )
    .expect("three slides");
    println!("track: {:?}", carousel.track().slides());
    describe("loaded", &carousel);

    let outcome = carousel.next();
    describe("next (animating)", &carousel);
    assert_eq!(outcome, ShiftOutcome::Started { target: 1 });
    carousel.transition_end();
    describe("next (settled)", &carousel);

    let _ = carousel.jump_to(0);
    carousel.transition_end();
    let _ = carousel.previous();
    describe("prev (animating)", &carousel);
    carousel.transition_end();
    describe("prev (settled)", &carousel);

    match carousel.jump_to(3) {
        Ok(outcome) => println!("unexpected: {outcome:?}"),
        Err(err) => println!("jump_to(3): {err}"),
    }
    describe("after bad jump", &carousel);
}
