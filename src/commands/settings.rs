// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, get_currency_symbol, set_currency_symbol};
use crate::db;
use crate::utils::pretty_table;
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap().trim();
            if symbol.is_empty() {
                bail!("Currency symbol cannot be empty");
            }
            set_currency_symbol(conn, symbol)?;
            println!("Currency symbol set to {}", symbol);
        }
        Some(("show", _)) | None => {
            let rows = vec![
                vec!["data_dir".into(), config::data_dir()?.display().to_string()],
                vec!["database".into(), db::db_path()?.display().to_string()],
                vec!["currency_symbol".into(), get_currency_symbol(conn)?],
                vec![
                    "log_filter".into(),
                    std::env::var(config::LOG_ENV)
                        .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.to_string()),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
