// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::{Path, PathBuf};

use crate::models::Transaction;

pub const HEADER: [&str; 6] = ["id", "type", "category", "amount", "date", "description"];

/// Header line as-is, then one row per transaction with every field quoted
/// and embedded quotes doubled.
pub fn to_csv(txs: &[Transaction]) -> Result<String> {
    let mut out = HEADER.join(",").into_bytes();
    out.push(b'\n');
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    for t in txs {
        wtr.write_record([
            t.id.to_string(),
            t.kind.to_string(),
            t.category.clone(),
            t.amount.to_string(),
            t.date.clone(),
            t.description.clone().unwrap_or_default(),
        ])?;
    }
    let out = wtr
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV: {}", e.error()))?;
    Ok(String::from_utf8(out)?)
}

pub fn file_name(date: NaiveDate) -> String {
    format!("finance-report-{}.csv", date.format("%Y-%m-%d"))
}

pub fn write_report(dir: &Path, date: NaiveDate, txs: &[Transaction]) -> Result<PathBuf> {
    let path = dir.join(file_name(date));
    let csv = to_csv(txs)?;
    std::fs::write(&path, csv).with_context(|| format!("Write {}", path.display()))?;
    Ok(path)
}
