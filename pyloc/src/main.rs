//! # pyloc
//!
//! A CLI tool for counting lines of Python code, with docstrings, comments
//! and blank lines reported separately.
//!
//! ## Usage
//!
//! ```bash
//! # Bare code total for one file
//! pyloc app.py
//!
//! # Whole tree, verbose, one row per file
//! pyloc . -rvf
//!
//! # Several inputs, verbose totals
//! pyloc src/ tests/ -v
//!
//! # Count type stubs instead of modules
//! pyloc . -r --extension pyi
//!
//! # Machine-readable output
//! pyloc . -r --json
//! ```

mod render;

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pyloclib::{count_paths, CountOptions};

use crate::render::{render, RenderOptions, DEFAULT_COL_WIDTH};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines of Python code, docstrings, comments and blank lines")
        .arg(
            Arg::new("paths")
                .help("Files and directories to count")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("recurse")
                .short('r')
                .long("recurse")
                .action(ArgAction::SetTrue)
                .help("Recurse subdirectories"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Report docstrings, comments and empty lines in addition to code"),
        )
        .arg(
            Arg::new("files")
                .short('f')
                .long("files")
                .action(ArgAction::SetTrue)
                .help("Show details about each file"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .default_value("py")
                .help("Source-file extension to count (without the dot)"),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .value_parser(value_parser!(usize))
                .default_value("8")
                .help("Column width for table output"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["verbose", "files", "width"])
                .help("Emit per-file counts and totals as JSON"),
        )
}

/// Extract count options from matches
fn build_options(matches: &ArgMatches) -> CountOptions {
    let extension = matches
        .get_one::<String>("extension")
        .map(|s| s.trim_start_matches('.'))
        .unwrap_or("py");

    CountOptions::new()
        .recurse(matches.get_flag("recurse"))
        .extension(extension)
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let inputs: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    let options = build_options(matches);
    let result = count_paths(&inputs, &options)?;

    if matches.get_flag("json") {
        let mut output = serde_json::to_string_pretty(&result)?;
        output.push('\n');
        return Ok(output);
    }

    let render_options = RenderOptions {
        verbose: matches.get_flag("verbose"),
        per_file: matches.get_flag("files"),
        col_width: matches
            .get_one::<usize>("width")
            .copied()
            .unwrap_or(DEFAULT_COL_WIDTH),
    };

    Ok(render(&result, &render_options))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
