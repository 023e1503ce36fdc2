// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::db::{self, HABITS_KEY, META_KEY, TRANSACTIONS_KEY};
use crate::engine::goal::{self, GoalAssessment};
use crate::engine::habits::{HabitTransition, Habits};
use crate::engine::insights::{self, InsightInput};
use crate::engine::{aggregate, networth};
use crate::error::StoreError;
use crate::ledger::Ledger;
use crate::models::{
    CategoryTotals, Goal, HabitId, Meta, MonthlyBucket, NewTransaction, ProjectionPoint,
    SimulationParams, Summary, Transaction, TxKind,
};

/// Loads the document under `key`, substituting the default when it is
/// missing, malformed, or unreadable.
pub fn load_or_default<T: DeserializeOwned + Default>(conn: &Connection, key: &str) -> T {
    match db::load_doc(conn, key) {
        Ok(Some(doc)) => doc,
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err, "discarding unreadable document");
            T::default()
        }
    }
}

/// Loads the transaction document one record at a time, so a record that
/// cannot be read is skipped without losing the rest of the ledger.
fn load_transactions(conn: &Connection) -> Vec<Transaction> {
    let records: Vec<Value> = load_or_default(conn, TRANSACTIONS_KEY);
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(tx) => Some(tx),
            Err(err) => {
                warn!(index, error = %err, "skipping unreadable transaction");
                None
            }
        })
        .collect()
}

/// The whole application state: ledger, insight snapshot and habits, backed
/// by one storage connection. Every mutation is written through.
pub struct Session<'c> {
    conn: &'c Connection,
    ledger: Ledger,
    meta: Meta,
    habits: Habits,
}

impl<'c> Session<'c> {
    pub fn load(conn: &'c Connection) -> Self {
        Self {
            conn,
            ledger: Ledger::new(load_transactions(conn)),
            meta: load_or_default(conn, META_KEY),
            habits: load_or_default(conn, HABITS_KEY),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn habits(&self) -> &Habits {
        &self.habits
    }

    /// Records `tx` and counts it towards today's `log_daily` habit.
    pub fn add_transaction(
        &mut self,
        tx: NewTransaction,
        today: NaiveDate,
    ) -> Result<Transaction, StoreError> {
        let stored = self.ledger.add(tx);
        db::save_doc(self.conn, TRANSACTIONS_KEY, self.ledger.transactions())?;
        info!(id = stored.id, kind = %stored.kind, "transaction added");
        self.mark_habit(HabitId::LogDaily, today)?;
        Ok(stored)
    }

    pub fn delete_transaction(&mut self, id: i64) -> Result<bool, StoreError> {
        let removed = self.ledger.delete(id);
        db::save_doc(self.conn, TRANSACTIONS_KEY, self.ledger.transactions())?;
        if removed {
            info!(id, "transaction deleted");
        }
        Ok(removed)
    }

    pub fn summary(&self) -> Summary {
        aggregate::summary(self.ledger.transactions())
    }

    pub fn monthly(&self, kind: &TxKind) -> Vec<MonthlyBucket> {
        aggregate::monthly_buckets(self.ledger.transactions(), kind)
    }

    pub fn category_totals(&self) -> CategoryTotals {
        aggregate::category_totals(self.ledger.transactions())
    }

    /// Builds the insight lines and, when there was anything to analyse,
    /// snapshots the current summary for the next comparison.
    pub fn refresh_insights(
        &mut self,
        currency: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>, StoreError> {
        let summary = self.summary();
        let monthly_expense = self.monthly(&TxKind::Expense);
        let category_totals = self.category_totals();
        let lines = insights::generate(&InsightInput {
            transactions: self.ledger.transactions(),
            summary: &summary,
            monthly_expense: &monthly_expense,
            category_totals: &category_totals,
            previous: self.meta.last_summary.as_ref(),
            currency,
        });
        if !self.ledger.is_empty() {
            self.meta.last_summary = Some(summary);
            self.meta.last_updated = Some(now);
            db::save_doc(self.conn, META_KEY, &self.meta)?;
        }
        Ok(lines)
    }

    pub fn evaluate_goal(&self, goal: &Goal) -> GoalAssessment {
        goal::evaluate(goal, &self.summary())
    }

    pub fn simulate(&self, params: &SimulationParams) -> Vec<ProjectionPoint> {
        networth::project(
            params,
            &self.monthly(&TxKind::Income),
            &self.monthly(&TxKind::Expense),
        )
    }

    pub fn mark_habit(
        &mut self,
        id: HabitId,
        today: NaiveDate,
    ) -> Result<HabitTransition, StoreError> {
        let transition = self.habits.mark_done(id, today);
        if transition != HabitTransition::AlreadyDone {
            db::save_doc(self.conn, HABITS_KEY, &self.habits)?;
        }
        Ok(transition)
    }
}
