// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpilot::commands::{doctor, simulate, transactions};
use finpilot::db::{self, TRANSACTIONS_KEY};
use finpilot::models::{HabitId, TxKind};
use finpilot::session::Session;
use finpilot::{cli, utils};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_add(conn: &Connection, args: &[&str]) -> anyhow::Result<finpilot::models::Transaction> {
    let mut argv = vec!["finpilot", "tx", "add"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            return transactions::add(conn, add_m);
        }
    }
    panic!("no tx add subcommand");
}

#[test]
fn add_records_and_defaults_date_to_today() {
    let conn = setup();
    let tx = run_add(
        &conn,
        &["--type", "expense", "--category", "Food", "--amount", "12.5"],
    )
    .unwrap();
    assert_eq!(tx.kind, TxKind::Expense);
    assert_eq!(tx.date, utils::today().format("%Y-%m-%d").to_string());

    let session = Session::load(&conn);
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.summary().expense, "12.5".parse::<Decimal>().unwrap());
    let habit = session.habits().get(HabitId::LogDaily);
    assert_eq!(habit.streak, 1);
    assert_eq!(habit.last_done, Some(utils::today()));
}

#[test]
fn add_rejects_invalid_amount_without_writing() {
    let conn = setup();
    let err = run_add(
        &conn,
        &["--type", "income", "--category", "Salary", "--amount", "-3", "--date", "2024-01-01"],
    );
    assert!(err.is_err());
    assert!(db::get_raw(&conn, TRANSACTIONS_KEY).unwrap().is_none());
}

#[test]
fn list_sorts_newest_first() {
    let conn = setup();
    for date in ["2024-01-05", "2024-03-01", "2024-02-10"] {
        run_add(
            &conn,
            &["--type", "expense", "--category", "Food", "--amount", "1", "--date", date],
        )
        .unwrap();
    }
    let session = Session::load(&conn);
    let dates: Vec<String> = transactions::sorted_for_display(&session)
        .into_iter()
        .map(|t| t.date)
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-10", "2024-01-05"]);
}

#[test]
fn simulate_args_accept_negative_growth() {
    let matches = cli::build_cli().get_matches_from([
        "finpilot",
        "simulate",
        "--months",
        "24",
        "--income-growth",
        "-2.5",
    ]);
    let Some(("simulate", sim_m)) = matches.subcommand() else {
        panic!("no simulate subcommand");
    };
    let params = simulate::params_from(sim_m).unwrap();
    assert_eq!(params.months, 24);
    assert_eq!(params.income_growth_pct, "-2.5".parse::<Decimal>().unwrap());
    assert_eq!(params.expense_growth_pct, Decimal::ZERO);
}

#[test]
fn doctor_flags_what_aggregates_skip() {
    let conn = setup();
    db::set_raw(
        &conn,
        TRANSACTIONS_KEY,
        r#"[
            {"id": 1, "type": "expense", "category": "Food", "amount": 5, "date": "yesterday"},
            {"id": 1, "type": "gift", "category": "Misc", "amount": "x", "date": "2024-01-01"}
        ]"#,
    )
    .unwrap();
    let session = Session::load(&conn);
    let kinds: Vec<String> = doctor::find_issues(session.ledger().transactions())
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "unparseable_date",
            "duplicate_id",
            "non_positive_amount",
            "unknown_type"
        ]
    );
}
