// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpilot::engine::trend::{TrendDirection, forecast};
use finpilot::models::MonthlyBucket;
use rust_decimal::Decimal;

fn buckets(totals: &[i64]) -> Vec<MonthlyBucket> {
    totals
        .iter()
        .enumerate()
        .map(|(i, t)| MonthlyBucket {
            month: format!("2024-{:02}", i + 1),
            total: Decimal::from(*t),
        })
        .collect()
}

#[test]
fn needs_two_months() {
    assert!(forecast(&[]).is_none());
    assert!(forecast(&buckets(&[500])).is_none());
}

#[test]
fn two_points_extrapolate_line() {
    let f = forecast(&buckets(&[400, 300])).unwrap();
    assert_eq!(f.window.len(), 2);
    assert_eq!(f.last, Decimal::from(300));
    assert_eq!(f.predicted, Decimal::from(200));
    assert_eq!(f.direction, TrendDirection::StableOrLower);
}

#[test]
fn rising_expenses_predict_increase() {
    let f = forecast(&buckets(&[100, 200, 300])).unwrap();
    assert_eq!(f.predicted, Decimal::from(400));
    assert_eq!(f.direction, TrendDirection::Increase);
}

#[test]
fn only_last_three_months_are_used() {
    // the 5000 spike falls outside the window
    let f = forecast(&buckets(&[5000, 100, 200, 300])).unwrap();
    assert_eq!(f.window.len(), 3);
    assert_eq!(f.window[0].month, "2024-02");
    assert_eq!(f.predicted, Decimal::from(400));
}

#[test]
fn prediction_never_goes_negative() {
    let f = forecast(&buckets(&[300, 100])).unwrap();
    assert_eq!(f.predicted, Decimal::ZERO);
    assert_eq!(f.direction, TrendDirection::StableOrLower);
}

#[test]
fn flat_history_is_stable() {
    let f = forecast(&buckets(&[250, 250, 250])).unwrap();
    assert_eq!(f.predicted, Decimal::from(250));
    assert_eq!(f.direction, TrendDirection::StableOrLower);
}

#[test]
fn out_of_range_fit_repeats_last_month() {
    let huge: Decimal = "30000000000000000000000000000".parse().unwrap();
    let window: Vec<MonthlyBucket> = (1..=3)
        .map(|m| MonthlyBucket {
            month: format!("2024-{:02}", m),
            total: huge,
        })
        .collect();
    let f = forecast(&window).unwrap();
    assert_eq!(f.last, huge);
    assert_eq!(f.predicted, huge);
    assert_eq!(f.direction, TrendDirection::StableOrLower);
}
