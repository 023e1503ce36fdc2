// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::get_currency_symbol;
use crate::engine::goal::{GoalAssessment, feedback};
use crate::session::Session;
use crate::utils::maybe_print_json;
use crate::validate;
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Serialize)]
struct GoalReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    assessment: &'a GoalAssessment,
    tone: &'static str,
    color: &'static str,
    message: String,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let goal = validate::goal_input(
        m.get_one::<String>("name").unwrap(),
        m.get_one::<String>("amount").unwrap(),
        m.get_one::<String>("months").unwrap(),
    )?;
    let ccy = get_currency_symbol(conn)?;
    let assessment = Session::load(conn).evaluate_goal(&goal);
    let report = GoalReport {
        name: &goal.name,
        assessment: &assessment,
        tone: assessment.verdict.tone(),
        color: assessment.verdict.color(),
        message: feedback(&goal, &assessment, &ccy),
    };
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &report)? {
        println!("{}", report.message);
    }
    Ok(())
}
