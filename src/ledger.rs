// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;

use crate::models::{NewTransaction, Transaction};

/// In-memory transaction list, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Appends `tx` with a clock-derived id.
    pub fn add(&mut self, tx: NewTransaction) -> Transaction {
        self.add_at(tx, Utc::now().timestamp_millis())
    }

    /// Appends `tx` using `now_millis` as the candidate id. Ids never repeat:
    /// a candidate at or below the current maximum becomes `max + 1`.
    pub fn add_at(&mut self, tx: NewTransaction, now_millis: i64) -> Transaction {
        let id = match self.transactions.iter().map(|t| t.id).max() {
            Some(max) if now_millis <= max => max.saturating_add(1),
            _ => now_millis,
        };
        let stored = tx.with_id(id);
        self.transactions.push(stored.clone());
        stored
    }

    /// Removes the transaction with `id`. Returns false (and changes nothing)
    /// when no such transaction exists.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    pub fn list(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
