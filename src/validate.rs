// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{Goal, NewTransaction, TxKind};

fn positive_decimal(raw: &str) -> Option<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|d| *d > Decimal::ZERO)
}

pub fn transaction_input(
    kind: &str,
    category: &str,
    amount: &str,
    date: Option<&str>,
    description: Option<&str>,
) -> Result<NewTransaction, ValidationError> {
    let kind: TxKind = kind.parse()?;
    let amount =
        positive_decimal(amount).ok_or_else(|| ValidationError::InvalidAmount(amount.to_string()))?;
    let date = date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or(ValidationError::MissingDate)?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Ok(NewTransaction {
        kind,
        category: category.trim().to_string(),
        amount,
        date: date.format("%Y-%m-%d").to_string(),
        description,
    })
}

pub fn goal_input(name: &str, amount: &str, months: &str) -> Result<Goal, ValidationError> {
    let name = name.trim();
    let amount = positive_decimal(amount);
    let months = months.trim().parse::<u32>().ok().filter(|m| *m > 0);
    match (name.is_empty(), amount, months) {
        (false, Some(amount), Some(months)) => Ok(Goal {
            name: name.to_string(),
            amount,
            months,
        }),
        _ => Err(ValidationError::InvalidGoal),
    }
}
