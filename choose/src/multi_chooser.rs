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

//! Multi-select chooser with checkboxes.

use std::io::Result;

use crate::{filter_edit_key, is_fully_uninteractive_terminal, Choice, Chooser,
            ChooserConfig, ChooserState, CrosstermKeyReader, CrosstermRenderer, Key,
            KeyOutcome, KeyReader, Keybindings, LayoutRow, Messages, Renderer,
            StyleSheet, TTYResult, Variant};

/// Extension-point implementation for [MultiChooser]: space toggles the
/// highlighted choice, rows carry a checkbox glyph, and confirmation is
/// gated on the selected count.
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiVariant {
    pub min_selected: Option<usize>,
    pub max_selected: Option<usize>,
}

impl Variant for MultiVariant {
    fn handle_other_key(
        &mut self,
        key: Key,
        state: &mut ChooserState,
        bindings: &Keybindings,
    ) -> KeyOutcome {
        if key == Key::Space {
            if state.toggle_highlighted_selected() {
                return KeyOutcome::Changed;
            }
            return KeyOutcome::Handled;
        }
        filter_edit_key(key, state, bindings)
    }

    fn render_row(&self, choice: &Choice, styles: &StyleSheet) -> LayoutRow {
        let checkbox = if choice.is_selected {
            &styles.checkbox_checked
        } else {
            &styles.checkbox_unchecked
        };
        if choice.is_highlighted {
            LayoutRow::new(
                format!("{} {} {}", styles.selection_caret, checkbox, choice.value),
                styles.selection_style.clone(),
            )
        } else {
            LayoutRow::new(
                format!("  {} {}", checkbox, choice.value),
                styles.body_style.clone(),
            )
        }
    }

    fn validate(&self, state: &ChooserState, messages: &Messages) -> Option<String> {
        let count = state.selected_count();
        match (self.min_selected, self.max_selected) {
            (Some(min), Some(max)) => {
                if count < min || count > max {
                    Some(
                        messages
                            .range_selected_error
                            .replace("{min}", &min.to_string())
                            .replace("{max}", &max.to_string()),
                    )
                } else {
                    None
                }
            }
            (Some(min), None) if count < min => Some(
                messages
                    .min_selected_error
                    .replace("{min}", &min.to_string()),
            ),
            (None, Some(max)) if count > max => Some(
                messages
                    .max_selected_error
                    .replace("{max}", &max.to_string()),
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultiChooserConfig {
    pub base: ChooserConfig,
    /// Reject confirmation with fewer than this many selected.
    pub min_selected: Option<usize>,
    /// Reject confirmation with more than this many selected.
    pub max_selected: Option<usize>,
    /// Choices pre-selected at construction, by master index.
    pub initial_indices: Vec<usize>,
    /// Choices pre-selected at construction, by value (exact match).
    pub initial_values: Vec<String>,
}

/// A chooser that selects any number of items with checkboxes. Space toggles
/// the highlighted item; Enter confirms the whole selection, subject to the
/// min/max count constraints. A rejected confirmation shows a transient
/// overlay and keeps the loop (and the selection) intact.
pub struct MultiChooser {
    pub inner: Chooser<MultiVariant>,
}

impl MultiChooser {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MultiChooser::with_config(choices, MultiChooserConfig::default())
    }

    pub fn with_config<I, S>(choices: I, config: MultiChooserConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variant = MultiVariant {
            min_selected: config.min_selected,
            max_selected: config.max_selected,
        };
        let mut inner = Chooser::assemble(choices, config.base, variant);
        for index in config.initial_indices {
            if let Some(choice) = inner.state.choices.get_mut(index) {
                choice.is_selected = true;
            }
        }
        for choice in &mut inner.state.choices {
            if config.initial_values.contains(&choice.value) {
                choice.is_selected = true;
            }
        }
        MultiChooser { inner }
    }

    /// Run against the real terminal. Returns the selected values and their
    /// master-list indices, or `None` for cancellation and for a confirmed
    /// empty selection alike.
    pub fn run(&mut self) -> Option<(Vec<String>, Vec<usize>)> {
        if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
            return None;
        }
        let mut reader = match CrosstermKeyReader::acquire() {
            Ok(reader) => reader,
            Err(_) => return None,
        };
        let mut renderer = CrosstermRenderer::stdout(self.inner.base.transient);
        match self.run_with(&mut reader, &mut renderer) {
            Ok(result) => result,
            Err(_) => None,
        }
    }

    pub fn run_with(
        &mut self,
        reader: &mut dyn KeyReader,
        renderer: &mut dyn Renderer,
    ) -> Result<Option<(Vec<String>, Vec<usize>)>> {
        let confirmed = self.inner.run_session(reader, renderer)?;
        if !confirmed {
            return Ok(None);
        }

        let mut values = Vec::new();
        let mut indices = Vec::new();
        for choice in &self.inner.state.choices {
            if choice.is_selected {
                values.push(choice.value.clone());
                indices.push(choice.index);
            }
        }
        if values.is_empty() {
            return Ok(None);
        }
        Ok(Some((values, indices)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{CaptureRenderer, TestVecKeyReader};

    fn run_keys(
        chooser: &mut MultiChooser,
        keys: Vec<Key>,
    ) -> (
        Option<(Vec<String>, Vec<usize>)>,
        TestVecKeyReader,
        CaptureRenderer,
    ) {
        let mut reader = TestVecKeyReader::new(keys);
        let mut renderer = CaptureRenderer::default();
        let result = chooser.run_with(&mut reader, &mut renderer).unwrap();
        (result, reader, renderer)
    }

    #[test]
    fn space_selects_and_enter_collects() {
        let mut chooser = MultiChooser::new(["a", "b", "c"]);
        let (result, _, _) = run_keys(
            &mut chooser,
            vec![Key::Space, Key::Down, Key::Space, Key::Enter],
        );
        let (values, indices) = result.unwrap();
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn toggling_the_same_item_off_confirms_to_the_empty_result() {
        let mut chooser = MultiChooser::new(["a", "b", "c"]);
        let (result, _, _) =
            run_keys(&mut chooser, vec![Key::Space, Key::Space, Key::Enter]);
        assert_eq!(result, None);
    }

    #[test]
    fn selection_survives_filtering() {
        let config = MultiChooserConfig {
            base: ChooserConfig {
                filtering: true,
                ..ChooserConfig::default()
            },
            ..MultiChooserConfig::default()
        };
        let mut chooser = MultiChooser::with_config(["apple", "banana", "cherry"], config);
        // Select apple, filter it out of view, select banana, confirm.
        let (result, _, _) = run_keys(
            &mut chooser,
            vec![Key::Space, Key::Char('b'), Key::Space, Key::Enter],
        );
        let (values, indices) = result.unwrap();
        assert_eq!(values, vec!["apple".to_string(), "banana".to_string()]);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn min_constraint_gates_confirmation_without_terminating() {
        let config = MultiChooserConfig {
            min_selected: Some(2),
            ..MultiChooserConfig::default()
        };
        let mut chooser = MultiChooser::with_config(["a", "b", "c"], config);
        // Confirm with one selected: rejected, overlay shown, next key clears
        // it, and a later cancel is still honored.
        let (result, reader, renderer) = run_keys(
            &mut chooser,
            vec![Key::Space, Key::Enter, Key::Down, Key::Esc],
        );
        assert_eq!(result, None);
        assert!(reader.is_exhausted());
        // The selection was left intact through the rejection.
        assert_eq!(chooser.inner.state.selected_count(), 1);
        // The overlay frame was painted with the templated message.
        assert!(renderer.saw_overlay_containing("at least 2"));
    }

    #[test]
    fn satisfying_the_min_constraint_after_a_rejection_confirms() {
        let config = MultiChooserConfig {
            min_selected: Some(2),
            ..MultiChooserConfig::default()
        };
        let mut chooser = MultiChooser::with_config(["a", "b", "c"], config);
        let (result, _, _) = run_keys(
            &mut chooser,
            vec![
                Key::Space,
                Key::Enter, // rejected: only one selected
                Key::Down,  // dismisses the overlay (not processed further)
                Key::Down,  // actually moves to b
                Key::Space,
                Key::Enter,
            ],
        );
        let (values, _) = result.unwrap();
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn max_constraint_uses_the_max_template() {
        let config = MultiChooserConfig {
            max_selected: Some(1),
            ..MultiChooserConfig::default()
        };
        let mut chooser = MultiChooser::with_config(["a", "b"], config);
        let (result, _, renderer) = run_keys(
            &mut chooser,
            vec![
                Key::Space,
                Key::Down,
                Key::Space,
                Key::Enter,
                Key::Down,
                Key::Esc,
            ],
        );
        assert_eq!(result, None);
        assert!(renderer.saw_overlay_containing("at most 1"));
    }

    #[test]
    fn range_constraint_uses_the_range_template() {
        let config = MultiChooserConfig {
            min_selected: Some(1),
            max_selected: Some(2),
            ..MultiChooserConfig::default()
        };
        let mut chooser = MultiChooser::with_config(["a", "b", "c"], config);
        let (result, _, renderer) =
            run_keys(&mut chooser, vec![Key::Enter, Key::Down, Key::Esc]);
        assert_eq!(result, None);
        assert!(renderer.saw_overlay_containing("between 1 and 2"));
    }

    #[test]
    fn initial_selections_by_index_and_value() {
        let config = MultiChooserConfig {
            initial_indices: vec![0],
            initial_values: vec!["c".into()],
            ..MultiChooserConfig::default()
        };
        let mut chooser = MultiChooser::with_config(["a", "b", "c"], config);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Enter]);
        let (values, indices) = result.unwrap();
        assert_eq!(values, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn rows_render_checkbox_glyphs() {
        let mut chooser = MultiChooser::new(["a", "b"]);
        let (_, _, renderer) =
            run_keys(&mut chooser, vec![Key::Space, Key::Enter]);
        let layout = renderer.last.unwrap();
        let texts: Vec<&str> = layout.rows.iter().map(|row| row.text.as_str()).collect();
        assert!(texts.iter().any(|text| text.contains('☒')));
        assert!(texts.iter().any(|text| text.contains('☐')));
    }
}
