// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options from host configuration, and the busy policies.
//!
//! Parses `CarouselOptions` from TOML (the `serde` feature), then sends a
//! burst of clicks during a single transition under each busy policy to show
//! the difference between rejecting and queueing.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_config`

use understory_carousel::{BusyPolicy, Carousel, CarouselOptions, Control};

const CONFIG: &str = r#"
threshold = 45.0
dots = ".slider-dots"
busy_policy = "queue_latest"
"#;

fn burst(options: CarouselOptions) {
    let policy = options.busy_policy;
    let mut carousel = Carousel::new(["A", "B", "C", "D"], options).expect("four slides");
    for control in [Control::Next, Control::Next, Control::Dot(3)] {
        let outcome = carousel.click(control);
        println!("{policy:?}: {control:?} -> {outcome:?}");
    }
    while carousel.transition_end() {
        println!("{policy:?}: transition finished, index {}", carousel.index());
    }
    println!("{policy:?}: final index {}", carousel.index());
}

fn main() {
    let options: CarouselOptions = toml::from_str(CONFIG).expect("valid carousel config");
    println!("parsed: {options:?}");
    assert_eq!(options.effective_threshold(), 45.0);

    // Missing fields take their defaults.
    let defaults: CarouselOptions = toml::from_str("").expect("empty config");
    assert_eq!(defaults, CarouselOptions::default());

    burst(options.clone().with_busy_policy(BusyPolicy::Reject));
    burst(options);
}
