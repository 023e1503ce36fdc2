// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::engine::aggregate::top_category;
use crate::engine::trend::{TrendDirection, forecast};
use crate::models::{CategoryTotals, MonthlyBucket, Summary, Transaction};

const EXCELLENT_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const MODERATE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

pub const NO_DATA: &str =
    "No data yet. Add a few transactions so the copilot can analyze your behavior.";

/// Everything the rule set looks at for one refresh.
pub struct InsightInput<'a> {
    pub transactions: &'a [Transaction],
    pub summary: &'a Summary,
    pub monthly_expense: &'a [MonthlyBucket],
    pub category_totals: &'a CategoryTotals,
    pub previous: Option<&'a Summary>,
    pub currency: &'a str,
}

/// Rule-based commentary, one line per finding.
pub fn generate(input: &InsightInput<'_>) -> Vec<String> {
    if input.transactions.is_empty() {
        return vec![NO_DATA.to_string()];
    }
    let s = input.summary;
    let ccy = input.currency;
    let mut lines = Vec::new();

    if s.balance >= Decimal::ZERO {
        lines.push(format!(
            "✅ Cash flow positive. Net balance is {:.2}.",
            s.balance
        ));
    } else {
        lines.push(format!(
            "⚠️ Cash flow negative. You are overspending by {:.2}.",
            s.balance.abs()
        ));
    }

    if s.savings_rate >= EXCELLENT_RATE {
        lines.push(format!(
            "🎯 Savings rate at {:.1}%, excellent for long-term goals.",
            s.savings_rate
        ));
    } else if s.savings_rate >= MODERATE_RATE {
        lines.push(format!(
            "📈 Savings rate at {:.1}%. Aim for 20-30% to build stronger buffers.",
            s.savings_rate
        ));
    } else {
        lines.push(format!(
            "🚨 Savings rate only {:.1}%. Consider trimming a few non-essential categories.",
            s.savings_rate
        ));
    }

    if let Some((name, total)) = top_category(input.category_totals, input.transactions) {
        lines.push(format!(
            "💡 Highest spend category: {} ({}{:.2}). A small 5-10% cut here unlocks savings quickly.",
            name, ccy, total
        ));
    }

    match input.previous {
        Some(prev) => {
            let d_income = s.income.saturating_sub(prev.income);
            let d_expense = s.expense.saturating_sub(prev.expense);
            lines.push(format!(
                "🕒 Since last check-in, your income {} by {}{:.0} and expenses {} by {}{:.0}.",
                direction_word(d_income),
                ccy,
                d_income.abs(),
                direction_word(d_expense),
                ccy,
                d_expense.abs()
            ));
        }
        None => lines.push(
            "👋 This is your first analyzed session. Future visits will show how your behavior shifts over time."
                .to_string(),
        ),
    }

    match forecast(input.monthly_expense) {
        Some(f) => {
            let months: Vec<String> = f
                .window
                .iter()
                .map(|m| format!("{}: {}{:.0}", m.month, ccy, m.total))
                .collect();
            lines.push(format!("📊 Last months: {}.", months.join(", ")));
            lines.push(format!(
                "🤖 Estimated next-month expenses: {}{:.0} (simple trend-based estimate).",
                ccy, f.predicted
            ));
            lines.push(match f.direction {
                TrendDirection::Increase => "🔎 Trend suggests a possible increase next month. Plan a buffer so it does not hurt your savings rate.".to_string(),
                TrendDirection::StableOrLower => "✅ Trend suggests stable or lower expenses next month if your behavior stays similar.".to_string(),
            });
        }
        None => lines.push(
            "🧪 Track at least 2-3 months of expenses to unlock more accurate trend analysis."
                .to_string(),
        ),
    }

    lines.push(format!(
        "💭 Micro-habit ideas:\n  • Auto-rule: every time you receive Salary, move 5-10% to a savings bucket.\n  • Round-up rule: for big discretionary spends, auto-save the nearest {}100 difference.\n  • Subscription scan: once a month, cancel at least one low-value recurring cost.",
        ccy
    ));
    lines
}

fn direction_word(delta: Decimal) -> &'static str {
    if delta >= Decimal::ZERO {
        "increased"
    } else {
        "decreased"
    }
}
