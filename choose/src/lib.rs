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

//! # r3bl_choose
//!
//! This crate can be used in two ways:
//! 1. As a library. Add interactive chooser controls to any CLI app written
//!    in Rust: a scrollable single-select list ([Chooser]), substring
//!    filtering ([FilterChooser]), checkbox multi-select ([MultiChooser]),
//!    direct-jump keyboard shortcuts ([ShortcutChooser]), and a drill-down
//!    file browser ([FileChooser]).
//! 1. As a binary. The binary target is called `rc`; it shows a chooser over
//!    lines piped in via `stdin` and runs a command with each selection.
//!
//! ## How to use it as a library?
//!
//! Every control renders an inline, live-updating list inside the terminal:
//! scroll-windowed with arrow indicators, optionally bordered and titled,
//! erased on exit when transient. Navigation is key driven (arrows, Home /
//! End, PageUp / PageDown, Enter, Esc) with optional wrap-around, and the
//! keybinding table can be overridden per action.
//!
//! ```no_run
//! use r3bl_choose::{Chooser, ChooserConfig};
//!
//! let mut chooser = Chooser::with_config(
//!     ["item 1", "item 2", "item 3"],
//!     ChooserConfig {
//!         title: "Select an item".into(),
//!         max_height: Some(10),
//!         ..ChooserConfig::default()
//!     },
//! );
//! match chooser.run() {
//!     Some(picked) => println!("User selected: {} ({})", picked.value, picked.index),
//!     None => println!("User did not select anything"),
//! }
//! ```
//!
//! Lifecycle hooks (`before_run`, `after_run`, `on_change`, `on_key`,
//! `on_confirm`, `should_exit`) hang off [BaseControl::hooks] and let a
//! caller remap keys, veto confirmations, or force an exit without the
//! engine knowing why.
//!
//! `run()` never fails: cancellation, a confirmed-but-empty selection, a
//! fully uninteractive terminal (CI, `cargo test`), and I/O errors all
//! collapse to the empty result. The only fatal errors are construction-time
//! configuration mistakes ([ConfigError]).
//!
//! ## How to use it as a binary?
//!
//! ```shell
//! cat TODO.todo | rc --selection-mode single --command-to-run-with-selection "echo %"
//! ```
//!
//! `rc` reads the list from `stdin`, shows the chooser, and substitutes each
//! selected line for `%` in the command. See `rc --help` for selection
//! modes, height, themes, and logging.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod base_control;
pub mod bindings;
pub mod choice;
pub mod chooser;
pub mod error;
pub mod file_chooser;
pub mod filter_chooser;
pub mod keypress;
pub mod layout;
pub mod messages;
pub mod multi_chooser;
pub mod render;
pub mod scroll;
pub mod shortcut_chooser;
pub mod state;
pub mod styles;
pub mod term;
pub mod test_utils;

pub use base_control::*;
pub use bindings::*;
pub use choice::*;
pub use chooser::*;
pub use error::*;
pub use file_chooser::*;
pub use filter_chooser::*;
pub use keypress::*;
pub use layout::*;
pub use messages::*;
pub use multi_chooser::*;
pub use render::*;
pub use scroll::*;
pub use shortcut_chooser::*;
pub use state::*;
pub use styles::*;
pub use term::*;
