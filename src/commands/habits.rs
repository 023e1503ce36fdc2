// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::habits::HabitTransition;
use crate::models::HabitId;
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table, today};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("done", sub)) => {
            let id: HabitId = sub.get_one::<String>("habit").unwrap().parse()?;
            let mut session = Session::load(conn);
            match session.mark_habit(id, today())? {
                HabitTransition::AlreadyDone => println!("{} already done today", id.label()),
                HabitTransition::Extended(n) => println!("{}: streak {}🔥", id.label(), n),
                HabitTransition::Restarted => println!("{}: streak started 🔥", id.label()),
            }
        }
        Some(("list", sub)) => {
            let view = Session::load(conn).habits().view(today());
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
                let rows = view
                    .iter()
                    .map(|h| {
                        vec![
                            h.id.to_string(),
                            h.label.to_string(),
                            format!("{}🔥", h.streak),
                            if h.done_today { "yes" } else { "" }.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Habit", "Description", "Streak", "Done today"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
