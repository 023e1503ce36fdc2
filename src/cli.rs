// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("finpilot")
        .version(crate_version!())
        .about("Personal finance tracker: KPIs, insights, goals, habits and projections")
        .subcommand(Command::new("init").about("Create the data store"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income | expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest date first")
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(clap::value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregate reports")
                .subcommand(
                    Command::new("summary")
                        .about("Income, expense, balance and savings rate")
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Monthly totals for one transaction type")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("income | expense"),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("categories")
                        .about("Expense totals per category")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("insights")
                .about("Refresh rule-based insights and the trend forecast")
                .args(json_args()),
        )
        .subcommand(
            Command::new("goal")
                .about("Check whether a savings goal is reachable")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("months").long("months").required(true))
                .args(json_args()),
        )
        .subcommand(
            Command::new("simulate")
                .about("Project net worth from the latest month")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .default_value("12")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("income_growth")
                        .long("income-growth")
                        .default_value("0")
                        .allow_hyphen_values(true)
                        .help("Monthly income growth, percent"),
                )
                .arg(
                    Arg::new("expense_growth")
                        .long("expense-growth")
                        .default_value("0")
                        .allow_hyphen_values(true)
                        .help("Monthly expense growth, percent"),
                )
                .arg(
                    Arg::new("frames")
                        .long("frames")
                        .action(ArgAction::SetTrue)
                        .help("Emit the chart animation plan as JSON"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("habit")
                .about("Daily money habits")
                .subcommand(
                    Command::new("done")
                        .about("Mark a habit done today")
                        .arg(
                            Arg::new("habit")
                                .required(true)
                                .help("log_daily | no_food_delivery | review_dashboard"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("Show streaks")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write finance-report-YYYY-MM-DD.csv")
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .default_value(".")
                        .help("Directory to write the report into"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(Command::new("show").about("Show effective settings"))
                .subcommand(
                    Command::new("currency")
                        .about("Set the currency symbol used in reports")
                        .arg(Arg::new("symbol").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Report data-quality issues"))
}
