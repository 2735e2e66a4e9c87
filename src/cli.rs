// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn window_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("year")
            .long("year")
            .default_value("all")
            .help("Year (YYYY) or 'all'"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .default_value("all")
            .help("Month number 1-12 or 'all'"),
    )
}

fn draft_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
        .arg(Arg::new("category").long("category").required(true))
        .arg(Arg::new("amount").long("amount").required(true))
        .arg(Arg::new("notes").long("notes"))
}

pub fn build_cli() -> Command {
    Command::new("spendboard")
        .about("Expense dashboard: summaries, reports, SVG charts and display preferences")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .help("CSV or JSON file with expense records (default: built-in sample)"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .global(true)
                .help("User profile JSON (default: config dir, then built-in)"),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Preferences database path (default: platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("init").about("Create the preferences database"))
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Summary cards for the current month")
                .arg(
                    Arg::new("today")
                        .long("today")
                        .help("Reference date YYYY-MM-DD (default: today)"),
                ),
        ))
        .subcommand(
            Command::new("expenses")
                .about("List and edit expenses")
                .subcommand(json_flags(window_args(
                    Command::new("list")
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .default_value("date")
                                .help("date|category|amount"),
                        )
                        .arg(
                            Arg::new("dir")
                                .long("dir")
                                .default_value("desc")
                                .help("asc|desc"),
                        )
                        .arg(
                            Arg::new("page")
                                .long("page")
                                .value_parser(value_parser!(usize))
                                .default_value("1"),
                        )
                        .arg(
                            Arg::new("per-page")
                                .long("per-page")
                                .value_parser(value_parser!(usize))
                                .default_value("10"),
                        ),
                )))
                .subcommand(draft_args(Command::new("add")))
                .subcommand(draft_args(
                    Command::new("edit").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated totals")
                .subcommand(json_flags(window_args(Command::new("categories"))))
                .subcommand(json_flags(
                    Command::new("monthly").arg(
                        Arg::new("year")
                            .long("year")
                            .required(true)
                            .value_parser(value_parser!(i32)),
                    ),
                ))
                .subcommand(json_flags(Command::new("years"))),
        )
        .subcommand(
            Command::new("chart")
                .about("Render SVG charts")
                .subcommand(window_args(
                    Command::new("pie")
                        .arg(Arg::new("highlight").long("highlight"))
                        .arg(Arg::new("out").long("out").required(true)),
                ))
                .subcommand(
                    Command::new("line")
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .required(true)
                                .value_parser(value_parser!(i32)),
                        )
                        .arg(
                            Arg::new("width")
                                .long("width")
                                .value_parser(value_parser!(f64))
                                .default_value("800"),
                        )
                        .arg(
                            Arg::new("height")
                                .long("height")
                                .value_parser(value_parser!(f64))
                                .default_value("300"),
                        )
                        .arg(
                            Arg::new("progress")
                                .long("progress")
                                .value_parser(value_parser!(f64))
                                .default_value("1.0")
                                .help("Reveal fraction 0-1"),
                        )
                        .arg(Arg::new("compact").long("compact").action(ArgAction::SetTrue))
                        .arg(Arg::new("no-area").long("no-area").action(ArgAction::SetTrue))
                        .arg(Arg::new("no-grid").long("no-grid").action(ArgAction::SetTrue))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("prefs")
                .about("Display preferences")
                .subcommand(json_flags(Command::new("show")))
                .subcommand(
                    Command::new("set-theme")
                        .arg(Arg::new("theme").required(true).help("light|dark|system")),
                )
                .subcommand(
                    Command::new("set-view")
                        .arg(Arg::new("view").required(true).help("compact|detailed")),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export expenses as CSV or JSON")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Validate and load an expense file")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("backup")
                .about("Write profile, preferences and expenses to a JSON backup")
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("restore")
                .about("Restore preferences from a backup and load its expenses")
                .arg(Arg::new("path").long("path").required(true)),
        )
}
