use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use roma_cli::commands::{check_ops, load_settings, load_table, replay_ops, table_ops};
use roma_cli::trace_init::init_tracing;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "romatool", about = "Romaji typing matcher tools")]
struct Cli {
    /// Romanization table TOML (defaults to the embedded table)
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Matcher settings TOML (defaults to the embedded settings)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Directory for JSON trace output (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report target lines containing units with no spellings
    Check {
        /// File with one target per line
        file: PathBuf,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Feed keystrokes to a matcher and show each outcome
    Replay {
        /// Kana target
        target: String,
        /// Keystrokes, one character each
        keys: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical keystrokes for a target, aligned by unit
    Romanize {
        /// Kana target
        target: String,
    },
    /// Romanization table maintenance
    Table {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Matcher settings maintenance
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default
    Export,
    /// Validate a custom file
    Validate { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        init_tracing(dir);
    }
    if let Some(path) = &cli.settings {
        die!(load_settings(path), "Error loading settings: {}");
    }

    match cli.command {
        Command::Check { file, json } => {
            let table = die!(load_table(cli.table.as_deref()), "Error: {}");
            let path = file.display();
            let content = die!(fs::read_to_string(&file), "Error reading {path}: {}");
            let issues = check_ops::check_targets(&content, &table);
            if json {
                println!("{}", die!(serde_json::to_string_pretty(&issues), "Error: {}"));
            } else {
                for issue in &issues {
                    println!("{}: {}  [{}]", issue.line, issue.target, issue.units.join(" "));
                }
                println!("{} line(s) with unknown units", issues.len());
            }
            if !issues.is_empty() {
                process::exit(1);
            }
        }
        Command::Replay { target, keys, json } => {
            let table = die!(load_table(cli.table.as_deref()), "Error: {}");
            let report = replay_ops::replay(&target, &keys, table);
            die!(replay_ops::print_replay(&report, json), "Error: {}");
        }
        Command::Romanize { target } => {
            let table = die!(load_table(cli.table.as_deref()), "Error: {}");
            let columns = die!(replay_ops::romanize(&target, table), "Error: {}");
            replay_ops::print_romanize(&columns);
        }
        Command::Table { action } => match action {
            ConfigAction::Export => table_ops::table_export(),
            ConfigAction::Validate { file } => {
                let units = die!(table_ops::table_validate(&file), "Error: {}");
                println!("OK: {units} units");
            }
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => table_ops::settings_export(),
            ConfigAction::Validate { file } => {
                die!(table_ops::settings_validate(&file), "Error: {}");
                println!("OK");
            }
        },
    }
}
