// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{CategoryTotals, MonthlyBucket, Summary, Transaction, TxKind};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

pub fn summary(txs: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in txs {
        match t.kind {
            TxKind::Income => income = income.saturating_add(t.amount),
            TxKind::Expense => expense = expense.saturating_add(t.amount),
            TxKind::Other(_) => {}
        }
    }
    let balance = income.saturating_sub(expense);
    let savings_rate = savings_rate(balance, income);
    Summary {
        income,
        expense,
        balance,
        savings_rate,
    }
}

/// `balance / income` as a percentage, zero without income. Totals near
/// the limits of `Decimal` saturate instead of overflowing.
fn savings_rate(balance: Decimal, income: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match balance.checked_div(income) {
        Some(ratio) => ratio.saturating_mul(HUNDRED),
        None if balance.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Reads a transaction date: `YYYY-MM-DD`, an RFC 3339 timestamp, or a
/// naive `YYYY-MM-DDTHH:MM:SS`. Blank or anything else is `None`.
pub fn parse_tx_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|d| d.date())
        })
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Totals per calendar month for one kind, ascending by `YYYY-MM`.
pub fn monthly_buckets(txs: &[Transaction], kind: &TxKind) -> Vec<MonthlyBucket> {
    let mut map: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in txs.iter().filter(|t| &t.kind == kind) {
        let Some(date) = parse_tx_date(&t.date) else {
            continue;
        };
        let total = map.entry(month_key(date)).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount);
    }
    map.into_iter()
        .map(|(month, total)| MonthlyBucket { month, total })
        .collect()
}

pub fn category_totals(txs: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for t in txs.iter().filter(|t| t.kind == TxKind::Expense) {
        let total = totals.entry(t.category.clone()).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount);
    }
    totals
}

/// Largest expense category. Ties go to the category whose first expense
/// was recorded earliest in `txs`.
pub fn top_category<'a>(
    totals: &'a CategoryTotals,
    txs: &[Transaction],
) -> Option<(&'a str, Decimal)> {
    let first_seen = |name: &str| {
        txs.iter()
            .position(|t| t.kind == TxKind::Expense && t.category == name)
            .unwrap_or(usize::MAX)
    };
    totals
        .iter()
        .max_by(|(a_name, a_amt), (b_name, b_amt)| {
            a_amt
                .cmp(b_amt)
                .then_with(|| first_seen(b_name.as_str()).cmp(&first_seen(a_name.as_str())))
        })
        .map(|(name, amt)| (name.as_str(), *amt))
}

pub fn last_total(buckets: &[MonthlyBucket]) -> Decimal {
    buckets.last().map(|b| b.total).unwrap_or(Decimal::ZERO)
}
