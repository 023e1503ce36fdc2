// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::engine::aggregate::last_total;
use crate::models::{MonthlyBucket, ProjectionPoint, SimulationParams};

fn growth_factor(pct: Decimal) -> Decimal {
    Decimal::ONE + pct / Decimal::ONE_HUNDRED
}

/// Cumulative net-worth projection seeded from the latest month of each
/// history. Month 1 uses the seeds as-is; later months compound the growth
/// rates. Empty when neither history has data.
pub fn project(
    params: &SimulationParams,
    income_history: &[MonthlyBucket],
    expense_history: &[MonthlyBucket],
) -> Vec<ProjectionPoint> {
    if income_history.is_empty() && expense_history.is_empty() {
        return Vec::new();
    }
    let income_factor = growth_factor(params.income_growth_pct);
    let expense_factor = growth_factor(params.expense_growth_pct);

    let mut income = last_total(income_history);
    let mut expense = last_total(expense_history);
    let mut net_worth = Decimal::ZERO;
    let mut points = Vec::with_capacity(params.months as usize);

    for i in 0..params.months {
        if i > 0 {
            income = income.saturating_mul(income_factor);
            expense = expense.saturating_mul(expense_factor);
        }
        net_worth = net_worth.saturating_add(income.saturating_sub(expense));
        points.push(ProjectionPoint {
            month: i + 1,
            value: net_worth,
        });
    }
    points
}
