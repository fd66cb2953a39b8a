// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .about("Personal income/expense tracking, budgets, and savings goals")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("user")
                .about("Manage the local user registry and session")
                .subcommand(
                    Command::new("create")
                        .about("Register a new user")
                        .arg(Arg::new("username").long("username").required(true))
                        .arg(Arg::new("password").long("password").required(true))
                        .arg(Arg::new("name").long("name").help("Display name")),
                )
                .subcommand(
                    Command::new("login")
                        .about("Log in and start a session")
                        .arg(Arg::new("username").long("username").required(true))
                        .arg(Arg::new("password").long("password").required(true)),
                )
                .subcommand(Command::new("logout").about("End the current session"))
                .subcommand(Command::new("current").about("Show the logged-in user"))
                .subcommand(json_flags(Command::new("list").about("List registered users")))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a user and their data")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Browse the seeded category catalog")
                .subcommand(json_flags(
                    Command::new("list").about("List categories").arg(
                        Arg::new("type")
                            .long("type")
                            .value_parser(["income", "expense"]),
                    ),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true).help(
                            "Catalog category id",
                        ))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(
                            Arg::new("method")
                                .long("method")
                                .default_value("other")
                                .value_parser(["cash", "credit", "bankTransfer", "other"]),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("recent")
                        .about("Most recent transactions, newest first")
                        .arg(
                            Arg::new("count")
                                .long("count")
                                .default_value("5")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage category budgets")
                .subcommand(
                    Command::new("add")
                        .about("Create a budget for a category")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .default_value("monthly")
                                .value_parser(["daily", "weekly", "monthly", "yearly"]),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a budget by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .value_parser(["daily", "weekly", "monthly", "yearly"]),
                        ),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a budget by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("status").about("Budgets with spent-to-date and percent used"),
                ))
                .subcommand(json_flags(
                    Command::new("period")
                        .about("Daily/weekly budget equivalents and spend so far")
                        .arg(
                            Arg::new("granularity")
                                .long("granularity")
                                .default_value("daily")
                                .value_parser(["daily", "weekly"]),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Treat this date as today (YYYY-MM-DD)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a savings goal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("category").long("category").default_value(""))
                        .arg(Arg::new("initial").long("initial").default_value("0")),
                )
                .subcommand(json_flags(Command::new("list").about("List savings goals"))
                )
                .subcommand(
                    Command::new("update")
                        .about("Update a savings goal by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("target").long("target"))
                        .arg(Arg::new("current").long("current"))
                        .arg(Arg::new("deadline").long("deadline"))
                        .arg(Arg::new("category").long("category")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a savings goal by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("transfer")
                .about("Move money into savings (records an income transaction)")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("goal").long("goal").help("Savings goal id"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Transfer date, defaults to today (YYYY-MM-DD)"),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Per-user financial settings")
                .subcommand(json_flags(Command::new("show").about("Show settings")))
                .subcommand(
                    Command::new("set")
                        .about("Update settings fields")
                        .arg(Arg::new("income-goal").long("income-goal"))
                        .arg(Arg::new("expense-limit").long("expense-limit"))
                        .arg(Arg::new("savings-goal").long("savings-goal"))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("name").long("name")),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Aggregate snapshot of all transactions"),
        ))
        .subcommand(
            Command::new("report")
                .about("Derived views")
                .subcommand(json_flags(
                    Command::new("by-category").about("Totals grouped by category name"),
                ))
                .subcommand(json_flags(
                    Command::new("cash").about("Cash payment statistics"),
                ))
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Calendar-month snapshot")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to the current month")),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions to a file")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_parser(["csv", "json"]),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check store slots for problems"))
}
