// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gestures and control hit testing.
//!
//! Replays a few scripted pointer sequences against a carousel: a short mouse
//! drag that snaps back, a long one that navigates, a vertical touch swipe
//! that is left to the page, and clicks resolved through a `ControlMap`.
//! Set `RUST_LOG=debug` (or `trace`) to see the carousel's own diagnostics.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example carousel_drag`

use kurbo::{Point, Rect, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_carousel::controls::ControlMap;
use understory_carousel::gesture::{DragMove, PointerKind};
use understory_carousel::{Carousel, CarouselOptions};

const VIEWPORT: Size = Size::new(400.0, 300.0);

fn drag(c: &mut Carousel<u32>, kind: PointerKind, path: &[(f64, f64)]) {
    let Some((&(x0, y0), rest)) = path.split_first() else {
        return;
    };
    let Some(mut session) = c.begin_drag(kind, Point::new(x0, y0)) else {
        info!("drag refused");
        return;
    };
    info!(
        ?kind,
        document_listeners = session.wants_document_listeners(),
        "pointer down"
    );
    for &(x, y) in rest {
        match c.drag_move(&mut session, Point::new(x, y)) {
            DragMove::Moved { dx } => info!(dx, offset = ?c.offset(), "moved"),
            DragMove::Scroll => info!("page scroll"),
            DragMove::Filtered | DragMove::Inactive => {}
        }
    }
    let outcome = c.end_drag(session);
    info!(?outcome, offset = ?c.offset(), "pointer up");
    if c.transition_end() {
        info!(index = c.index(), "settled");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut carousel = Carousel::new(10..15, CarouselOptions::default().with_dots(".dots"))
        .expect("five slides");
    carousel.set_viewport(VIEWPORT);

    // Short mouse drag: 20px is under the 30px threshold.
    drag(
        &mut carousel,
        PointerKind::Mouse,
        &[
            (200.0, 150.0),
            (199.0, 150.0),
            (195.0, 150.0),
            (190.0, 150.0),
            (185.0, 150.0),
            (180.0, 150.0),
        ],
    );

    // Long mouse drag to the left: next slide.
    drag(
        &mut carousel,
        PointerKind::Mouse,
        &[
            (300.0, 150.0),
            (290.0, 150.0),
            (280.0, 150.0),
            (270.0, 150.0),
            (260.0, 150.0),
            (200.0, 150.0),
            (120.0, 150.0),
        ],
    );

    // Vertical touch swipe: the page scrolls, the track stays put.
    drag(
        &mut carousel,
        PointerKind::Touch,
        &[
            (200.0, 100.0),
            (200.0, 110.0),
            (201.0, 120.0),
            (201.0, 130.0),
            (202.0, 140.0),
            (203.0, 200.0),
            (204.0, 260.0),
        ],
    );

    // Buttons at the viewport edges and a row of dots underneath.
    let mut controls = ControlMap::new();
    controls.set_previous(Some(Rect::new(0.0, 130.0, 40.0, 170.0)));
    controls.set_next(Some(Rect::new(360.0, 130.0, 400.0, 170.0)));
    controls.set_dot_row(Point::new(150.0, 280.0), Size::new(12.0, 12.0), 8.0, carousel.len());

    for click in [Point::new(380.0, 150.0), Point::new(215.0, 285.0), Point::new(200.0, 150.0)] {
        let Some(control) = controls.hit_test(click) else {
            info!(?click, "click missed every control");
            continue;
        };
        match carousel.click(control) {
            Ok(outcome) => info!(?control, ?outcome, "clicked"),
            Err(err) => info!(?control, %err, "click rejected"),
        }
        for event in carousel.take_indicator_events() {
            info!(?event, "indicator");
        }
        carousel.transition_end();
    }

    println!(
        "final: index={} slide={} offset={:?}",
        carousel.index(),
        carousel.track().real_slides()[carousel.index()],
        carousel.offset()
    );
}
