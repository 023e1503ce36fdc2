// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Goal, Summary};

/// Savings at or above this multiple of the requirement are comfortable.
pub const COMFORTABLE_RATIO: Decimal = Decimal::from_parts(12, 0, 0, false, 1);
/// Savings at or above this multiple (and below comfortable) are tight.
pub const TIGHT_RATIO: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalVerdict {
    /// Nothing is being saved at all.
    NeedsMoreIncome,
    Comfortable,
    Tight,
    OutOfReach,
}

impl GoalVerdict {
    pub fn tone(&self) -> &'static str {
        match self {
            GoalVerdict::Comfortable => "success",
            GoalVerdict::Tight => "warning",
            GoalVerdict::OutOfReach | GoalVerdict::NeedsMoreIncome => "danger",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            GoalVerdict::Comfortable => "#4ade80",
            GoalVerdict::Tight => "#facc15",
            GoalVerdict::OutOfReach => "#fb7185",
            GoalVerdict::NeedsMoreIncome => "#f97373",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalAssessment {
    pub monthly_savings: Decimal,
    pub required_per_month: Decimal,
    /// `None` when nothing is saved and the ratio is meaningless.
    pub ratio: Option<Decimal>,
    pub verdict: GoalVerdict,
}

pub fn evaluate(goal: &Goal, summary: &Summary) -> GoalAssessment {
    let monthly_savings = if summary.income > Decimal::ZERO {
        summary.income.saturating_sub(summary.expense)
    } else {
        Decimal::ZERO
    };
    let required_per_month = goal.amount / Decimal::from(goal.months.max(1));

    let unrated = |verdict| GoalAssessment {
        monthly_savings,
        required_per_month,
        ratio: None,
        verdict,
    };
    if monthly_savings <= Decimal::ZERO {
        return unrated(GoalVerdict::NeedsMoreIncome);
    }
    if required_per_month.is_zero() {
        // nothing left to save
        return unrated(GoalVerdict::Comfortable);
    }

    let ratio = monthly_savings
        .checked_div(required_per_month)
        .unwrap_or(Decimal::MAX);
    let verdict = if ratio >= COMFORTABLE_RATIO {
        GoalVerdict::Comfortable
    } else if ratio >= TIGHT_RATIO {
        GoalVerdict::Tight
    } else {
        GoalVerdict::OutOfReach
    };
    GoalAssessment {
        monthly_savings,
        required_per_month,
        ratio: Some(ratio),
        verdict,
    }
}

pub fn feedback(goal: &Goal, a: &GoalAssessment, ccy: &str) -> String {
    match a.verdict {
        GoalVerdict::NeedsMoreIncome => format!(
            "❌ Right now your net monthly savings are ~{}{:.0}. This goal needs either more income or lower expenses.",
            ccy, a.monthly_savings
        ),
        GoalVerdict::Comfortable => format!(
            "✅ You can comfortably reach {} ({}{:.0}) in {} months. Your current savings already exceed what is needed.",
            goal.name, ccy, goal.amount, goal.months
        ),
        GoalVerdict::Tight => format!(
            "⚠️ {} is possible but tight. You need ~{}{:.0}/month; you currently save ~{}{:.0}/month. Trim 1-2 categories slightly to create margin.",
            goal.name, ccy, a.required_per_month, ccy, a.monthly_savings
        ),
        GoalVerdict::OutOfReach => format!(
            "🚨 {} in {} months needs ~{}{:.0}/month, but you save only ~{}{:.0}/month. Extend the timeline or increase income.",
            goal.name, goal.months, ccy, a.required_per_month, ccy, a.monthly_savings
        ),
    }
}
