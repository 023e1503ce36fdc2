// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use finpilot::db::{self, HABITS_KEY, META_KEY, TRANSACTIONS_KEY};
use finpilot::engine::habits::HabitTransition;
use finpilot::engine::insights::NO_DATA;
use finpilot::error::StoreError;
use finpilot::models::{HabitId, Meta, NewTransaction, Transaction, TxKind};
use finpilot::session::Session;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
}

fn new_tx(kind: TxKind, category: &str, amount: i64, date: &str) -> NewTransaction {
    NewTransaction {
        kind,
        category: category.into(),
        amount: Decimal::from(amount),
        date: date.into(),
        description: Some("note".into()),
    }
}

#[test]
fn fresh_store_loads_defaults() {
    let conn = setup();
    let session = Session::load(&conn);
    assert!(session.ledger().is_empty());
    assert_eq!(session.meta(), &Meta::default());
    assert_eq!(session.habits().get(HabitId::LogDaily).streak, 0);
}

#[test]
fn corrupt_documents_degrade_to_defaults() {
    let conn = setup();
    db::set_raw(&conn, TRANSACTIONS_KEY, "{not json").unwrap();
    db::set_raw(&conn, META_KEY, "[1,2,3]").unwrap();
    db::set_raw(&conn, HABITS_KEY, "\"oops\"").unwrap();

    assert!(matches!(
        db::load_doc::<Vec<Transaction>>(&conn, TRANSACTIONS_KEY),
        Err(StoreError::Parse(_))
    ));

    let session = Session::load(&conn);
    assert!(session.ledger().is_empty());
    assert_eq!(session.meta(), &Meta::default());
    assert_eq!(session.habits().view(today()).len(), 3);
}

#[test]
fn odd_records_do_not_cost_the_ledger() {
    let conn = setup();
    db::set_raw(
        &conn,
        TRANSACTIONS_KEY,
        r#"[
            {"id": 1, "type": "income", "category": "Salary", "amount": 1000, "date": "2024-01-10"},
            {"id": 2, "type": "expense", "category": null, "amount": 50, "date": null},
            {"id": 3, "category": "Gift", "amount": 20, "date": "2024-01-12"},
            "garbage"
        ]"#,
    )
    .unwrap();

    let mut session = Session::load(&conn);
    assert_eq!(session.ledger().len(), 3);
    assert_eq!(session.summary().income, Decimal::from(1000));
    assert_eq!(session.summary().expense, Decimal::from(50));

    session
        .add_transaction(new_tx(TxKind::Expense, "Food", 30, "2024-01-13"), today())
        .unwrap();
    let stored: Vec<Transaction> = db::load_doc(&conn, TRANSACTIONS_KEY).unwrap().unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[1].category, "");
    assert_eq!(stored[2].kind, TxKind::Other(String::new()));
}

#[test]
fn mutations_are_written_through() {
    let conn = setup();
    let id = {
        let mut session = Session::load(&conn);
        session
            .add_transaction(new_tx(TxKind::Income, "Salary", 1000, "2024-01-10"), today())
            .unwrap();
        let rent = session
            .add_transaction(new_tx(TxKind::Expense, "Rent", 400, "2024-01-15"), today())
            .unwrap();
        rent.id
    };

    let mut reloaded = Session::load(&conn);
    assert_eq!(reloaded.ledger().len(), 2);
    assert_eq!(reloaded.ledger().transactions()[1].description.as_deref(), Some("note"));
    assert_eq!(reloaded.summary().balance, Decimal::from(600));

    assert!(reloaded.delete_transaction(id).unwrap());
    assert!(!reloaded.delete_transaction(id).unwrap());
    assert_eq!(Session::load(&conn).ledger().len(), 1);
}

#[test]
fn adding_a_transaction_logs_the_daily_habit() {
    let conn = setup();
    let mut session = Session::load(&conn);
    session
        .add_transaction(new_tx(TxKind::Expense, "Food", 12, "2024-02-10"), today())
        .unwrap();
    session
        .add_transaction(new_tx(TxKind::Expense, "Food", 8, "2024-02-10"), today())
        .unwrap();
    let state = Session::load(&conn).habits().get(HabitId::LogDaily);
    assert_eq!(state.streak, 1);
    assert_eq!(state.last_done, Some(today()));
}

#[test]
fn habit_marks_persist() {
    let conn = setup();
    let mut session = Session::load(&conn);
    let yesterday = today().pred_opt().unwrap();
    session.mark_habit(HabitId::ReviewDashboard, yesterday).unwrap();
    assert_eq!(
        session.mark_habit(HabitId::ReviewDashboard, today()).unwrap(),
        HabitTransition::Extended(2)
    );
    assert_eq!(
        Session::load(&conn).habits().get(HabitId::ReviewDashboard).streak,
        2
    );
}

#[test]
fn empty_refresh_leaves_meta_alone() {
    let conn = setup();
    let mut session = Session::load(&conn);
    let lines = session.refresh_insights("₹", Utc::now()).unwrap();
    assert_eq!(lines, vec![NO_DATA.to_string()]);
    assert!(db::get_raw(&conn, META_KEY).unwrap().is_none());
}

#[test]
fn refresh_snapshots_summary_and_reports_deltas() {
    let conn = setup();
    let now = Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap();
    let mut session = Session::load(&conn);
    session
        .add_transaction(new_tx(TxKind::Income, "Salary", 1000, "2024-01-10"), today())
        .unwrap();
    session
        .add_transaction(new_tx(TxKind::Expense, "Rent", 400, "2024-01-15"), today())
        .unwrap();

    let first = session.refresh_insights("₹", now).unwrap();
    assert!(first.iter().any(|l| l.contains("first analyzed session")));
    assert!(first.iter().any(|l| l.contains("Track at least 2-3 months")));

    let meta = Session::load(&conn).meta().clone();
    assert_eq!(meta.last_updated, Some(now));
    assert_eq!(meta.last_summary.unwrap().expense, Decimal::from(400));

    session
        .add_transaction(new_tx(TxKind::Expense, "Food", 300, "2024-02-01"), today())
        .unwrap();
    let mut session = Session::load(&conn);
    let second = session.refresh_insights("₹", now).unwrap();
    assert!(second.iter().any(|l| l.contains("income increased by ₹0")));
    assert!(second.iter().any(|l| l.contains("expenses increased by ₹300")));
    assert!(second.iter().any(|l| l.contains("Highest spend category: Rent")));
    assert!(second.iter().any(|l| l.contains("Estimated next-month expenses: ₹200")));
    assert!(second.iter().any(|l| l.contains("stable or lower")));
}

#[test]
fn simulation_reads_latest_months() {
    let conn = setup();
    let mut session = Session::load(&conn);
    session
        .add_transaction(new_tx(TxKind::Income, "Salary", 1000, "2024-01-10"), today())
        .unwrap();
    session
        .add_transaction(new_tx(TxKind::Expense, "Rent", 400, "2024-01-15"), today())
        .unwrap();
    session
        .add_transaction(new_tx(TxKind::Expense, "Food", 300, "2024-02-01"), today())
        .unwrap();
    let points = session.simulate(&finpilot::models::SimulationParams {
        months: 1,
        income_growth_pct: Decimal::ZERO,
        expense_growth_pct: Decimal::ZERO,
    });
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].value, Decimal::from(700));
}
