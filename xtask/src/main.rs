use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand};

mod config;
mod plugins;
mod utils;

use config::XtaskConfig;
use utils::{project_root, TaskResult};

#[macro_use]
extern crate log;

/// xtask - board configuration tasks
#[derive(Debug, Parser)]
#[command(name = "xtask", after_help = tasks_help())]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
pub enum Task {
    /// Load and validate board files
    Check {
        /// Boards to check; the configured default when empty
        boards: Vec<String>,
        /// Check every file in the boards directory
        #[arg(long, conflicts_with = "boards")]
        all: bool,
    },
    /// Print the resolved board configuration
    Show {
        board: Option<String>,
        /// Print canonical TOML instead of a summary
        #[arg(long)]
        toml: bool,
    },
    /// Write the MicroPython board header
    Header {
        board: Option<String>,
        /// Output path; defaults to `<header.out_dir>/<board>/mpconfigboard.h`
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List board files
    List,
}

fn tasks_help() -> String {
    let mut help = String::from("Tasks:\n");
    for (task, description) in plugins::list_tasks() {
        help.push_str(&format!("  {:<8} {}\n", task, description));
    }
    help
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main() {
        error!("{}", e);
        exit(1);
    }
}

fn try_main() -> TaskResult<()> {
    let cli = Cli::parse();

    // Load the task settings first
    let config = XtaskConfig::load(&project_root())?;

    let plugin = plugins::fetch_task(cli.task, config)?;
    plugin.execute()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_all() {
        let cli = Cli::try_parse_from(["xtask", "check", "--all"]).unwrap();
        assert!(matches!(cli.task, Task::Check { all: true, ref boards } if boards.is_empty()));
    }

    #[test]
    fn check_all_conflicts_with_names() {
        assert!(Cli::try_parse_from(["xtask", "check", "esp32c3-module", "--all"]).is_err());
    }

    #[test]
    fn parses_header_out() {
        let cli =
            Cli::try_parse_from(["xtask", "header", "esp32-devkitc", "--out", "x.h"]).unwrap();
        match cli.task {
            Task::Header { board, out } => {
                assert_eq!(board.as_deref(), Some("esp32-devkitc"));
                assert_eq!(out, Some(PathBuf::from("x.h")));
            }
            other => panic!("unexpected task: {other:?}"),
        }
    }
}
