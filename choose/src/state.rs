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

use crate::Choice;

/// Mutable state shared by every chooser control: the master choice list, the
/// filtered display view over it, and the two cursor indices.
///
/// `highlighted_index` is a master-list index ("what is logically selected");
/// `highlighted_filtered_index` is a position within the display view ("where
/// the cursor visually sits"). After every state-changing operation
/// [ChooserState::set_highlighted] resynchronizes the two.
///
/// The display view is recomputed wholesale on every mutation rather than
/// patched incrementally. Lists are tens to low hundreds of entries.
#[derive(Debug, Default)]
pub struct ChooserState {
    pub choices: Vec<Choice>,
    pub filter_text: String,
    pub filtering_enabled: bool,
    /// Leading synthetic entries (file chooser `./`, `..{sep}`) that are never
    /// subject to text filtering and always occupy the top of the display.
    pub pinned_count: usize,
    pub highlighted_index: usize,
    pub highlighted_filtered_index: usize,
    pub wrap_navigation: bool,
    display: Vec<usize>,
}

impl ChooserState {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = ChooserState {
            choices: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| Choice::new(index, value))
                .collect(),
            wrap_navigation: true,
            ..ChooserState::default()
        };
        state.refilter();
        state
    }

    /// Swap in a brand new master list (file chooser rebuilds after directory
    /// navigation). The filter text is kept; the caller positions the cursor.
    pub fn replace_choices(&mut self, values: Vec<String>, pinned_count: usize) {
        self.choices = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Choice::new(index, value))
            .collect();
        self.pinned_count = pinned_count;
        self.highlighted_index = 0;
        self.highlighted_filtered_index = 0;
    }

    /// The current display view: master-list indices of the choices eligible
    /// for navigation and rendering, in master-list order.
    pub fn display_indices(&self) -> &[usize] {
        &self.display
    }

    pub fn display_len(&self) -> usize {
        self.display.len()
    }

    pub fn choice_at_display(&self, position: usize) -> Option<&Choice> {
        self.display
            .get(position)
            .map(|&master_index| &self.choices[master_index])
    }

    pub fn highlighted_choice(&self) -> Option<&Choice> {
        self.choice_at_display(self.highlighted_filtered_index)
    }

    pub fn selected_count(&self) -> usize {
        self.choices.iter().filter(|choice| choice.is_selected).count()
    }

    /// Flip `is_selected` on the choice under the cursor. Returns false when
    /// the display view is empty.
    pub fn toggle_highlighted_selected(&mut self) -> bool {
        match self.display.get(self.highlighted_filtered_index) {
            Some(&master_index) => {
                let choice = &mut self.choices[master_index];
                choice.is_selected = !choice.is_selected;
                true
            }
            None => false,
        }
    }

    pub fn select_initial_index(&mut self, index: usize) {
        if index < self.choices.len() {
            self.highlighted_index = index;
        }
    }

    pub fn select_initial_value(&mut self, value: &str) {
        for choice in &self.choices {
            if choice.value.eq_ignore_ascii_case(value) {
                self.highlighted_index = choice.index;
                break;
            }
        }
    }

    /// Recompute the display view from the master list and the current filter
    /// text, then resync the cursor.
    ///
    /// Pinned entries always pass. Otherwise a choice is shown when filtering
    /// is off, the filter is empty, or its text contains the filter
    /// (case-insensitive).
    pub fn refilter(&mut self) {
        let needle = self.filter_text.to_lowercase();
        self.display.clear();
        for choice in &self.choices {
            let shown = choice.index < self.pinned_count
                || !self.filtering_enabled
                || needle.is_empty()
                || choice.value.to_lowercase().contains(&needle);
            if shown {
                self.display.push(choice.index);
            }
        }

        // Keep the cursor on the same logical entry, or reset to the top when
        // it has been filtered out.
        self.highlighted_filtered_index = self
            .display
            .iter()
            .position(|&master_index| master_index == self.highlighted_index)
            .unwrap_or(0);
        self.set_highlighted();
    }

    /// Resync `highlighted_index` and the derived `is_highlighted` flags from
    /// the cursor position. Returns true when the highlighted entry changed.
    pub fn set_highlighted(&mut self) -> bool {
        let previous = self.highlighted_index;
        for choice in &mut self.choices {
            choice.is_highlighted = false;
        }
        match self.display.get(self.highlighted_filtered_index) {
            Some(&master_index) => {
                self.highlighted_index = master_index;
                self.choices[master_index].is_highlighted = true;
            }
            None => {
                self.highlighted_index = 0;
            }
        }
        previous != self.highlighted_index
    }
}
