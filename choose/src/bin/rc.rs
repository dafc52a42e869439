/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! `rc` shows a chooser over the lines piped in via `stdin`, then runs a
//! command with each selected line substituted for `%`.
//!
//! ```shell
//! cat TODO.todo | rc -s single -c "echo %"
//! ls | rc -s multiple -c "wc -l %" --filter
//! ```

use std::{io::{stdin, BufRead},
          process::Command};

use clap::{CommandFactory, Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, WrapErr};
use r3bl_choose::{is_stdin_piped, is_stdout_piped, preset_theme, Chooser,
                  ChooserConfig, MultiChooser, MultiChooserConfig,
                  StandardVariant, StdinIsPipedResult, StdoutIsPipedResult,
                  StyleOverrides};
use StdinIsPipedResult::*;
use StdoutIsPipedResult::*;

const SELECTED_ITEM_SYMBOL: char = '%';
const DEFAULT_TUI_HEIGHT: usize = 10;

#[derive(Debug, Parser)]
#[command(bin_name = "rc")]
#[command(about = "Select one or more lines piped in via stdin, then run a command with each selection", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
struct CliArgs {
    /// Show TUI to allow you to select one or more options from a list,
    /// piped in via stdin 👉
    #[arg(value_name = "mode", long, short = 's')]
    selection_mode: SelectionMode,

    /// Each selected item is passed to this command as `%` and executed in
    /// your shell. For eg: "echo %". Please wrap the command in quotes 💡
    #[arg(value_name = "command", long, short = 'c')]
    command_to_run_with_selection: String,

    /// Optional maximum height of the list TUI (in rows)
    #[arg(value_name = "height", long, short = 't')]
    tui_height: Option<usize>,

    /// Enable the substring filter row
    #[arg(long, short = 'f')]
    filter: bool,

    /// Preset theme name (eg: matrix) or path to a theme JSON file
    #[arg(value_name = "theme", long)]
    theme: Option<String>,

    /// Write debug logs to rc.log in the current directory. You can use
    /// `tail -f rc.log` to watch them.
    #[arg(long)]
    log: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SelectionMode {
    /// Select only one option from list.
    Single,
    /// Select multiple options from list.
    Multiple,
}

fn main() -> Result<()> {
    // If no args are passed, the following line will fail, and help will be
    // printed thanks to `arg_required_else_help(true)` in the `CliArgs`
    // struct.
    let cli_args = CliArgs::parse();

    let _log_guard = cli_args.log.then(enable_file_logging);
    tracing::debug!(?cli_args, "starting rc");

    let command = CliArgs::command();
    let bin_name = command.get_bin_name().unwrap_or("rc");

    match (is_stdin_piped(), is_stdout_piped()) {
        (StdinIsPiped, StdoutIsNotPiped) => show_tui(cli_args)?,
        (StdinIsPiped, StdoutIsPiped) => {
            show_error_do_not_pipe_stdout(bin_name);
        }
        (StdinIsNotPiped, StdoutIsPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
            show_error_do_not_pipe_stdout(bin_name);
        }
        (StdinIsNotPiped, StdoutIsNotPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
        }
    }

    Ok(())
}

fn show_error_need_to_pipe_stdin(bin_name: &str) {
    println!(
        "Please pipe the output of another command into {bin_name}. \
         \n✅ For example: `ls -l | {bin_name} -s single -c \"echo %\"`",
    );
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    println!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `ls -l | {bin_name} -s single -c \"echo %\" | cat`",
    );
}

fn show_tui(cli_args: CliArgs) -> Result<()> {
    let lines: Vec<String> = stdin().lock().lines().map_while(|line| line.ok()).collect();
    tracing::debug!(count = lines.len(), "read lines from stdin");

    // Early return, nothing to do. No content found in stdin.
    if lines.is_empty() {
        return Ok(());
    }

    let styles = resolve_theme(cli_args.theme.as_deref())?;
    let config = ChooserConfig {
        max_height: Some(cli_args.tui_height.unwrap_or(DEFAULT_TUI_HEIGHT)),
        filtering: cli_args.filter,
        styles,
        ..ChooserConfig::default()
    };

    // Actually get input from the user.
    let selected_items: Vec<String> = match cli_args.selection_mode {
        SelectionMode::Single => Chooser::<StandardVariant>::with_config(lines, config)
            .run()
            .map(|picked| vec![picked.value])
            .unwrap_or_default(),
        SelectionMode::Multiple => MultiChooser::with_config(
            lines,
            MultiChooserConfig {
                base: config,
                ..MultiChooserConfig::default()
            },
        )
        .run()
        .map(|(values, _indices)| values)
        .unwrap_or_default(),
    };
    tracing::debug!(?selected_items, "user selection");

    for selected_item in selected_items {
        let actual_command_to_run = cli_args
            .command_to_run_with_selection
            .replace(SELECTED_ITEM_SYMBOL, &selected_item);
        execute_command(&actual_command_to_run)?;
    }

    Ok(())
}

fn resolve_theme(theme: Option<&str>) -> Result<StyleOverrides> {
    let Some(theme) = theme else {
        return Ok(StyleOverrides::default());
    };
    if let Some(preset) = preset_theme(theme) {
        return Ok(preset);
    }
    let contents = std::fs::read_to_string(theme)
        .into_diagnostic()
        .wrap_err(format!("could not read theme file `{theme}`"))?;
    serde_json::from_str(&contents)
        .into_diagnostic()
        .wrap_err(format!("could not parse theme file `{theme}`"))
}

fn execute_command(cmd_str: &str) -> Result<()> {
    // This let binding is required to make the code below work.
    let mut command = if cfg!(target_os = "windows") {
        Command::new("cmd")
    } else {
        Command::new("sh")
    };

    let command = if cfg!(target_os = "windows") {
        command.arg("/C").arg(cmd_str)
    } else {
        command.arg("-c").arg(cmd_str)
    };

    let output = command.output().into_diagnostic()?;
    print!("{}", String::from_utf8_lossy(&output.stdout));
    Ok(())
}

fn enable_file_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "rc.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .init();
    guard
}
