// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::MonthlyBucket;

/// Number of trailing months the fit looks at.
pub const WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increase,
    StableOrLower,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// The buckets the line was fitted over, oldest first.
    pub window: Vec<MonthlyBucket>,
    pub last: Decimal,
    pub predicted: Decimal,
    pub direction: TrendDirection,
}

/// Least-squares forecast of the month after `buckets`. `None` until at
/// least two months of data exist.
pub fn forecast(buckets: &[MonthlyBucket]) -> Option<Forecast> {
    if buckets.len() < 2 {
        return None;
    }
    let window = &buckets[buckets.len().saturating_sub(WINDOW)..];
    let ys: Vec<Decimal> = window.iter().map(|b| b.total).collect();
    let last = *ys.last()?;

    // a degenerate or out-of-range fit repeats the last month
    let predicted = fit_next(&ys).unwrap_or(last).max(Decimal::ZERO);
    let direction = if predicted > last {
        TrendDirection::Increase
    } else {
        TrendDirection::StableOrLower
    };
    Some(Forecast {
        window: window.to_vec(),
        last,
        predicted,
        direction,
    })
}

/// Fits `y = a*x + b` over `x = 1..=n` and evaluates it at `n + 1`.
/// `None` when the system is degenerate or the sums leave `Decimal` range.
fn fit_next(ys: &[Decimal]) -> Option<Decimal> {
    let n = Decimal::from(ys.len());
    let mut sum_x = Decimal::ZERO;
    let mut sum_y = Decimal::ZERO;
    let mut sum_xy = Decimal::ZERO;
    let mut sum_x2 = Decimal::ZERO;
    for (i, y) in ys.iter().enumerate() {
        let x = Decimal::from(i + 1);
        sum_x += x;
        sum_y = sum_y.checked_add(*y)?;
        sum_xy = sum_xy.checked_add(x.checked_mul(*y)?)?;
        sum_x2 += x * x;
    }
    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.is_zero() {
        return None;
    }
    let a = n
        .checked_mul(sum_xy)?
        .checked_sub(sum_x.checked_mul(sum_y)?)?
        .checked_div(denom)?;
    let b = sum_y.checked_sub(a.checked_mul(sum_x)?)?.checked_div(n)?;
    a.checked_mul(n + Decimal::ONE)?.checked_add(b)
}
