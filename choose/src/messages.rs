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

use serde::Deserialize;

/// User-facing message strings for the chooser controls, overridable for
/// customization or localization. Templates use `{min}`, `{max}`, `{start}`,
/// `{end}` placeholders.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Messages {
    pub nav_instructions: String,
    pub confirm_instructions: String,
    /// Separator between footer parts.
    pub footer_separator: String,
    pub filter_label: String,
    pub shortcut_select_range: String,
    pub shortcut_select_key: String,
    pub min_selected_error: String,
    pub max_selected_error: String,
    pub range_selected_error: String,
    /// Title of the validation error overlay.
    pub error_title: String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            nav_instructions: "↑↓ Navigate".into(),
            confirm_instructions: "Enter Confirm".into(),
            footer_separator: " • ".into(),
            filter_label: "Filter: ".into(),
            shortcut_select_range: "Press {start}-{end} to Select".into(),
            shortcut_select_key: "Press Highlighted Key to Select".into(),
            min_selected_error: "Please select at least {min} items".into(),
            max_selected_error: "Please select at most {max} items".into(),
            range_selected_error: "Please select between {min} and {max} items".into(),
            error_title: "Error".into(),
        }
    }
}

/// Partial message table; only supplied fields override the defaults.
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize)]
#[serde(default)]
pub struct MessageOverrides {
    pub nav_instructions: Option<String>,
    pub confirm_instructions: Option<String>,
    pub footer_separator: Option<String>,
    pub filter_label: Option<String>,
    pub shortcut_select_range: Option<String>,
    pub shortcut_select_key: Option<String>,
    pub min_selected_error: Option<String>,
    pub max_selected_error: Option<String>,
    pub range_selected_error: Option<String>,
    pub error_title: Option<String>,
}

macro_rules! apply_override {
    ($messages:ident, $overrides:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$overrides.$field {
                $messages.$field = value.clone();
            }
        )+
    };
}

impl Messages {
    pub fn merged(overrides: &MessageOverrides) -> Self {
        let mut messages = Messages::default();
        apply_override!(
            messages,
            overrides,
            nav_instructions,
            confirm_instructions,
            footer_separator,
            filter_label,
            shortcut_select_range,
            shortcut_select_key,
            min_selected_error,
            max_selected_error,
            range_selected_error,
            error_title,
        );
        messages
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_overlays_only_supplied_fields() {
        let overrides = MessageOverrides {
            filter_label: Some("Find: ".into()),
            ..MessageOverrides::default()
        };
        let messages = Messages::merged(&overrides);
        assert_eq!(messages.filter_label, "Find: ");
        assert_eq!(
            messages.nav_instructions,
            Messages::default().nav_instructions
        );
    }
}
