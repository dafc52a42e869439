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

use std::io::{stderr, stdin, stdout, IsTerminal as _};

use crossterm::terminal::size;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// Get the terminal width. If there is a problem, return the default width.
pub fn get_terminal_width() -> usize {
    match size() {
        Ok((columns, _rows)) => columns as usize,
        Err(_) => DEFAULT_WIDTH,
    }
}

/// Get the terminal height. If there is a problem, return the default height.
pub fn get_terminal_height() -> usize {
    match size() {
        Ok((_columns, rows)) => rows as usize,
        Err(_) => DEFAULT_HEIGHT,
    }
}

#[derive(Debug)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

#[derive(Debug)]
pub enum StdoutIsPipedResult {
    StdoutIsPiped,
    StdoutIsNotPiped,
}

/// If you run `echo "test" | rc` the following will return true.
/// More info: <https://unix.stackexchange.com/questions/597083/how-does-piping-affect-stdin>
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if !stdin().is_terminal() {
        StdinIsPipedResult::StdinIsPiped
    } else {
        StdinIsPipedResult::StdinIsNotPiped
    }
}

/// If you run `rc | grep foo` the following will return true.
pub fn is_stdout_piped() -> StdoutIsPipedResult {
    if !stdout().is_terminal() {
        StdoutIsPipedResult::StdoutIsPiped
    } else {
        StdoutIsPipedResult::StdoutIsNotPiped
    }
}

#[derive(Debug)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [TTYResult::IsInteractive] if stdin is fully interactive.
pub fn is_fully_interactive_terminal() -> TTYResult {
    if stdin().is_terminal() {
        TTYResult::IsInteractive
    } else {
        TTYResult::IsNotInteractive
    }
}

/// Returns [TTYResult::IsNotInteractive] if stdin, stdout, and stderr are
/// *all* fully uninteractive. This happens when `cargo test` runs.
///
/// There are situations where some can be interactive and others not, such as
/// when piping is active.
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    if !stdin().is_terminal() && !stdout().is_terminal() && !stderr().is_terminal() {
        TTYResult::IsNotInteractive
    } else {
        TTYResult::IsInteractive
    }
}
