// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::aggregate::parse_tx_date;
use crate::models::{Transaction, TxKind};
use crate::session::Session;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Records the engine tolerates silently but that skew its numbers.
pub fn find_issues(txs: &[Transaction]) -> Vec<(String, String)> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for t in txs {
        if !seen.insert(t.id) {
            issues.push(("duplicate_id".into(), t.id.to_string()));
        }
        if parse_tx_date(&t.date).is_none() {
            issues.push(("unparseable_date".into(), format!("{} '{}'", t.id, t.date)));
        }
        if t.amount <= Decimal::ZERO {
            issues.push(("non_positive_amount".into(), format!("{} {}", t.id, t.amount)));
        }
        if let TxKind::Other(raw) = &t.kind {
            issues.push(("unknown_type".into(), format!("{} '{}'", t.id, raw)));
        }
    }
    issues
}

pub fn handle(conn: &Connection) -> Result<()> {
    let session = Session::load(conn);
    let rows: Vec<Vec<String>> = find_issues(session.ledger().transactions())
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
