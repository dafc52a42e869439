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

//! Chooser with direct-jump keyboard shortcuts: pressing a bound key moves
//! the cursor to that choice, and optionally confirms it immediately.

use std::collections::{HashMap, HashSet};

use crate::{Choice, Chooser, ChooserConfig, ChooserState, ConfigError, Key, KeyOutcome,
            Keybindings, LayoutRow, StyleSheet, Variant};

const AUTO_KEYS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// Extension-point implementation for [ShortcutChooser].
#[derive(Debug, Default, Clone)]
pub struct ShortcutVariant {
    key_to_index: HashMap<char, usize>,
    no_confirm: bool,
}

impl Variant for ShortcutVariant {
    fn render_row(&self, choice: &Choice, styles: &StyleSheet) -> LayoutRow {
        let prefix = match choice.shortcut_key {
            Some(key) => format!("{key}) "),
            None => String::new(),
        };
        if choice.is_highlighted {
            LayoutRow::new(
                format!("{} {}{}", styles.selection_caret, prefix, choice.value),
                styles.selection_style.clone(),
            )
        } else {
            LayoutRow::new(
                format!("  {}{}", prefix, choice.value),
                styles.body_style.clone(),
            )
        }
    }

    fn handle_other_key(
        &mut self,
        key: Key,
        state: &mut ChooserState,
        _bindings: &Keybindings,
    ) -> KeyOutcome {
        let Key::Char(ch) = key else {
            return KeyOutcome::NotHandled;
        };
        let Some(&master_index) = self.key_to_index.get(&ch) else {
            return KeyOutcome::NotHandled;
        };
        if let Some(position) = state
            .display_indices()
            .iter()
            .position(|&index| index == master_index)
        {
            state.highlighted_filtered_index = position;
            if self.no_confirm {
                return KeyOutcome::Confirm;
            }
            return KeyOutcome::Changed;
        }
        KeyOutcome::NotHandled
    }
}

#[derive(Debug, Clone)]
pub struct ShortcutChooserConfig {
    pub base: ChooserConfig,
    /// Explicit per-choice keys. `None` = auto mode: `1`..`9`, `0` for the
    /// first ten choices, nothing beyond ten.
    pub shortcut_keys: Option<Vec<char>>,
    /// Pressing a shortcut key confirms the choice immediately.
    pub no_confirm: bool,
    /// Show the key label as a `k) ` prefix on each row. Keys still work when
    /// hidden.
    pub show_shortcuts: bool,
    /// Make a mismatched key count or a duplicate key a construction-time
    /// error instead of tolerating it.
    pub strict: bool,
}

impl Default for ShortcutChooserConfig {
    fn default() -> Self {
        ShortcutChooserConfig {
            base: ChooserConfig::default(),
            shortcut_keys: None,
            no_confirm: false,
            show_shortcuts: true,
            strict: false,
        }
    }
}

/// A chooser whose entries are bound to keyboard shortcuts.
///
/// In lenient mode (the default) excess keys are dropped silently and a
/// duplicate key resolves to the last choice it was assigned to. In strict
/// mode both conditions fail construction with a [ConfigError].
pub type ShortcutChooser = Chooser<ShortcutVariant>;

impl Chooser<ShortcutVariant> {
    /// Auto mode, lenient, shortcut labels shown.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        let keys = auto_keys(choices.len());
        ShortcutChooser::build(choices, ShortcutChooserConfig::default(), keys)
    }

    pub fn with_config<I, S>(
        choices: I,
        config: ShortcutChooserConfig,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        let keys = assign_shortcut_keys(
            choices.len(),
            config.shortcut_keys.as_deref(),
            config.strict,
        )?;
        Ok(ShortcutChooser::build(choices, config, keys))
    }

    fn build(
        choices: Vec<String>,
        config: ShortcutChooserConfig,
        keys: Vec<char>,
    ) -> Self {
        let mut key_to_index = HashMap::new();
        for (index, key) in keys.iter().enumerate() {
            // Lenient mode: a later duplicate overwrites the earlier binding.
            key_to_index.insert(*key, index);
        }

        let auto_mode = config.shortcut_keys.is_none();
        let show_shortcuts = config.show_shortcuts;
        let variant = ShortcutVariant {
            key_to_index,
            no_confirm: config.no_confirm,
        };
        let mut chooser = Chooser::assemble(choices, config.base, variant);

        if show_shortcuts {
            for (index, key) in keys.iter().enumerate() {
                chooser.state.choices[index].shortcut_key = Some(*key);
            }
        }

        // Swap the confirm hint for the shortcut hint in the footer.
        let select_hint = if auto_mode {
            chooser
                .messages
                .shortcut_select_range
                .replace("{start}", "1")
                .replace("{end}", &keys.len().to_string())
        } else if show_shortcuts {
            chooser.messages.shortcut_select_key.clone()
        } else {
            String::new()
        };
        chooser.footer_parts =
            vec![select_hint, chooser.messages.nav_instructions.clone()];

        chooser
    }
}

/// Auto mode covers the first ten choices with `1`..`9`, `0`; entries beyond
/// ten get no key.
fn auto_keys(choice_count: usize) -> Vec<char> {
    AUTO_KEYS
        .into_iter()
        .take(choice_count.min(AUTO_KEYS.len()))
        .collect()
}

/// Assign one key per choice. Explicit keys are truncated to the choice
/// count; strict mode turns a wrong count or a duplicate among the used keys
/// into an error.
fn assign_shortcut_keys(
    choice_count: usize,
    explicit: Option<&[char]>,
    strict: bool,
) -> Result<Vec<char>, ConfigError> {
    let Some(explicit) = explicit else {
        return Ok(auto_keys(choice_count));
    };

    if strict {
        if explicit.len() < choice_count {
            return Err(ConfigError::TooFewShortcutKeys {
                given: explicit.len(),
                required: choice_count,
            });
        }
        if explicit.len() > choice_count {
            return Err(ConfigError::TooManyShortcutKeys {
                given: explicit.len(),
                required: choice_count,
            });
        }
        let mut seen = HashSet::new();
        for key in &explicit[..choice_count.min(explicit.len())] {
            if !seen.insert(*key) {
                return Err(ConfigError::DuplicateShortcutKey { key: *key });
            }
        }
    }

    Ok(explicit.iter().copied().take(choice_count).collect())
}
