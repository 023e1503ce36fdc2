// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::get_currency_symbol;
use crate::engine::chart::{Canvas, DEFAULT_FRAMES, render_plan};
use crate::models::SimulationParams;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn params_from(m: &clap::ArgMatches) -> Result<SimulationParams> {
    Ok(SimulationParams {
        months: *m.get_one::<u32>("months").unwrap(),
        income_growth_pct: parse_decimal(m.get_one::<String>("income_growth").unwrap())?,
        expense_growth_pct: parse_decimal(m.get_one::<String>("expense_growth").unwrap())?,
    })
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let params = params_from(m)?;
    let points = Session::load(conn).simulate(&params);

    if m.get_flag("frames") {
        let plan = render_plan(&points, Canvas::default(), DEFAULT_FRAMES);
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &points)? {
        return Ok(());
    }
    if points.is_empty() {
        println!("Not enough data to simulate yet.");
        return Ok(());
    }
    let ccy = get_currency_symbol(conn)?;
    let rows = points
        .iter()
        .map(|p| vec![p.month.to_string(), fmt_money(&p.value, &ccy)])
        .collect();
    println!("{}", pretty_table(&["Month", "Net worth"], rows));
    Ok(())
}
