// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::get_currency_symbol;
use crate::models::TxKind;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let s = Session::load(conn).summary();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let ccy = get_currency_symbol(conn)?;
        let rows = vec![vec![
            fmt_money(&s.income, &ccy),
            fmt_money(&s.expense, &ccy),
            fmt_money(&s.balance, &ccy),
            format!("{:.1}%", s.savings_rate),
        ]];
        println!(
            "{}",
            pretty_table(&["Income", "Expense", "Balance", "Savings rate"], rows)
        );
    }
    Ok(())
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let buckets = Session::load(conn).monthly(&kind);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &buckets)? {
        let ccy = get_currency_symbol(conn)?;
        let rows = buckets
            .iter()
            .map(|b| vec![b.month.clone(), fmt_money(&b.total, &ccy)])
            .collect();
        let hdr = format!("Total {}", kind);
        println!("{}", pretty_table(&["Month", &hdr], rows));
    }
    Ok(())
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let totals = Session::load(conn).category_totals();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let ccy = get_currency_symbol(conn)?;
        let mut items: Vec<_> = totals.into_iter().collect();
        items.sort_by(|a, b| b.1.cmp(&a.1));
        let rows = items
            .into_iter()
            .map(|(cat, amt)| vec![cat, fmt_money(&amt, &ccy)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
