// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TxKind {
    Income,
    Expense,
    /// Anything else found in a stored document, kept verbatim so it is
    /// written back and exported unchanged. Ignored by every aggregate.
    Other(String),
}

impl TxKind {
    pub fn as_str(&self) -> &str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
            TxKind::Other(raw) => raw,
        }
    }
}

impl Default for TxKind {
    /// A record with no `type` at all.
    fn default() -> Self {
        TxKind::Other(String::new())
    }
}

impl Serialize for TxKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TxKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("income") => TxKind::Income,
            Some("expense") => TxKind::Expense,
            _ => TxKind::Other(lenient_text(value)),
        })
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: TxKind,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    /// Kept as entered; bucketing parses it and skips what it cannot read.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(
        default,
        deserialize_with = "lenient_description",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// A transaction before the ledger has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TxKind,
    pub category: String,
    pub amount: Decimal,
    pub date: String,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn with_id(self, id: i64) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

/// Text form of a stored scalar: strings as-is, numbers and booleans
/// printed, `null` and containers blank.
fn lenient_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(Value::deserialize(deserializer)?))
}

fn lenient_description<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(lenient_text(other)),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .unwrap_or(0))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

/// Numeric coercion for stored amounts: numbers and numeric strings are
/// read as-is, everything else counts as zero.
pub fn coerce_amount(value: &Value) -> Decimal {
    let parse = |s: &str| {
        let s = s.trim();
        if s.is_empty() {
            return Some(Decimal::ZERO);
        }
        s.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(s))
            .ok()
    };
    match value {
        Value::Number(n) => parse(&n.to_string()),
        Value::String(s) => parse(s),
        Value::Bool(true) => Some(Decimal::ONE),
        _ => None,
    }
    .unwrap_or(Decimal::ZERO)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub savings_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub month: String, // YYYY-MM
    pub total: Decimal,
}

/// Expense totals keyed by the category string as entered.
pub type CategoryTotals = BTreeMap<String, Decimal>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub last_summary: Option<Summary>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitId {
    LogDaily,
    NoFoodDelivery,
    ReviewDashboard,
}

impl HabitId {
    pub const ALL: [HabitId; 3] = [
        HabitId::LogDaily,
        HabitId::NoFoodDelivery,
        HabitId::ReviewDashboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitId::LogDaily => "log_daily",
            HabitId::NoFoodDelivery => "no_food_delivery",
            HabitId::ReviewDashboard => "review_dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HabitId::LogDaily => "Log expenses daily",
            HabitId::NoFoodDelivery => "No food delivery",
            HabitId::ReviewDashboard => "Review dashboard",
        }
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HabitId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HabitId::ALL
            .into_iter()
            .find(|h| h.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownHabit(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitState {
    pub streak: u32,
    pub last_done: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub amount: Decimal,
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationParams {
    pub months: u32,
    pub income_growth_pct: Decimal,
    pub expense_growth_pct: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub value: Decimal,
}
