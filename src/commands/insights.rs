// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::get_currency_symbol;
use crate::session::Session;
use crate::utils::maybe_print_json;
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let ccy = get_currency_symbol(conn)?;
    let mut session = Session::load(conn);
    let lines = session.refresh_insights(&ccy, Utc::now())?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &lines)? {
        for line in lines {
            println!("{}", line);
        }
    }
    Ok(())
}
