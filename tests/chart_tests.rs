// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpilot::engine::chart::{Canvas, ChartPlan, ease, render_plan};
use finpilot::models::ProjectionPoint;
use rust_decimal::Decimal;

fn points(values: &[i64]) -> Vec<ProjectionPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ProjectionPoint {
            month: i as u32 + 1,
            value: Decimal::from(*v),
        })
        .collect()
}

#[test]
fn empty_projection_is_placeholder() {
    assert_eq!(render_plan(&[], Canvas::default(), 40), ChartPlan::Placeholder);
}

#[test]
fn equal_values_draw_flat_line() {
    let canvas = Canvas {
        width: 200.0,
        height: 100.0,
        padding: 10.0,
    };
    assert_eq!(
        render_plan(&points(&[5, 5, 5]), canvas, 40),
        ChartPlan::Flat { y: 50.0 }
    );
}

#[test]
fn last_frame_is_settled_chart() {
    let canvas = Canvas {
        width: 220.0,
        height: 120.0,
        padding: 10.0,
    };
    let ChartPlan::Animated(frames) = render_plan(&points(&[0, 50, 100]), canvas, 40) else {
        panic!("expected animation");
    };
    assert_eq!(frames.len(), 40);
    let last = frames.last().unwrap();
    assert_eq!(last.progress, 1.0);
    assert_eq!(last.points, vec![(10.0, 110.0), (110.0, 60.0), (210.0, 10.0)]);

    // early frames are squeezed towards the y axis but keep their heights
    let first = &frames[0];
    assert!(first.points[2].0 < 20.0);
    assert_eq!(first.points[2].1, 10.0);
}

#[test]
fn easing_is_smoothstep() {
    assert_eq!(ease(0.0), 0.0);
    assert_eq!(ease(0.5), 0.5);
    assert_eq!(ease(1.0), 1.0);
    assert_eq!(ease(2.0), 1.0);
}
