// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::get_currency_symbol;
use crate::engine::aggregate::parse_tx_date;
use crate::models::Transaction;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table, today};
use crate::validate;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, sub)?;
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<Transaction> {
    let day = today();
    let default_date = day.format("%Y-%m-%d").to_string();
    let date = sub
        .get_one::<String>("date")
        .map(|s| s.as_str())
        .unwrap_or(default_date.as_str());
    let tx = validate::transaction_input(
        sub.get_one::<String>("type").unwrap(),
        sub.get_one::<String>("category").unwrap(),
        sub.get_one::<String>("amount").unwrap(),
        Some(date),
        sub.get_one::<String>("description").map(|s| s.as_str()),
    )?;

    let mut session = Session::load(conn);
    let stored = session.add_transaction(tx, day)?;
    println!(
        "Recorded {} {} on {} in '{}' (id {})",
        stored.kind, stored.amount, stored.date, stored.category, stored.id
    );
    Ok(stored)
}

/// All transactions, most recent date first; undated entries sort last.
pub fn sorted_for_display(session: &Session<'_>) -> Vec<Transaction> {
    let mut rows = session.ledger().list();
    rows.sort_by_key(|t| std::cmp::Reverse(parse_tx_date(&t.date)));
    rows
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let session = Session::load(conn);
    let data = sorted_for_display(&session);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No transactions yet. Add your first one!");
        return Ok(());
    }
    let ccy = get_currency_symbol(conn)?;
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.date.clone(),
                t.kind.to_string(),
                t.category.clone(),
                t.description.clone().unwrap_or_else(|| "-".into()),
                fmt_money(&t.amount, &ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Date", "Type", "Category", "Description", "Amount"],
            rows
        )
    );
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut session = Session::load(conn);
    if session.delete_transaction(id)? {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}
