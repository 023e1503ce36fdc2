// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::write_report;
use crate::session::Session;
use crate::utils::today;
use anyhow::{Result, bail};
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let dir = m.get_one::<String>("dir").unwrap();
    let session = Session::load(conn);
    let all = session.ledger().transactions();
    if all.is_empty() {
        bail!("No transactions to export.");
    }
    let path = write_report(Path::new(dir), today(), all)?;
    println!("Exported {} transactions to {}", all.len(), path.display());
    Ok(())
}
