// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::ProjectionPoint;

pub const DEFAULT_FRAMES: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 160.0,
            padding: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub index: u32,
    pub progress: f64,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPlan {
    /// Nothing to draw yet.
    Placeholder,
    /// Every value is equal: a horizontal line at `y`.
    Flat { y: f64 },
    Animated(Vec<Frame>),
}

/// Smoothstep.
pub fn ease(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Every frame of the projection line's reveal, precomputed. The caller
/// owns timing; the last frame is the settled chart.
pub fn render_plan(points: &[ProjectionPoint], canvas: Canvas, total_frames: u32) -> ChartPlan {
    if points.is_empty() {
        return ChartPlan::Placeholder;
    }
    let values: Vec<f64> = points
        .iter()
        .map(|p| p.value.to_f64().unwrap_or(0.0))
        .collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return ChartPlan::Flat {
            y: canvas.height / 2.0,
        };
    }

    let Canvas {
        width: w,
        height: h,
        padding: pad,
    } = canvas;
    let spans = (values.len() - 1).max(1) as f64;
    let scale_x = (w - 2.0 * pad) / spans;
    let scale_y = (h - 2.0 * pad) / (max - min);
    let total = total_frames.max(1);

    let frames = (1..=total)
        .map(|index| {
            let progress = ease(f64::from(index) / f64::from(total));
            let points = values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = pad + i as f64 * scale_x;
                    let y = h - pad - (v - min) * scale_y;
                    (pad + (x - pad) * progress, y)
                })
                .collect();
            Frame {
                index,
                progress,
                points,
            }
        })
        .collect();
    ChartPlan::Animated(frames)
}
