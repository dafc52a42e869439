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

/// Style configuration for a chooser control. Style values are space
/// separated token strings ("bold white on grey30") interpreted leniently by
/// the renderer backend; unknown tokens are ignored.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StyleSheet {
    /// Style for regular choice rows.
    pub body_style: String,
    /// Style for the row under the cursor.
    pub selection_style: String,
    /// Character(s) displayed before the highlighted choice.
    pub selection_caret: String,
    pub header_style: String,
    pub footer_style: String,
    pub border_style: String,
    /// Whether to draw the panel border.
    pub show_border: bool,
    pub filter_style: String,
    /// Cursor glyph appended to the filter input line.
    pub filter_cursor: String,
    pub scroll_indicator_style: String,
    pub scroll_indicator_up: String,
    pub scroll_indicator_down: String,
    pub checkbox_checked: String,
    pub checkbox_unchecked: String,
    /// Style for the validation error overlay.
    pub error_style: String,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            body_style: String::new(),
            selection_style: "bold white on grey30".into(),
            selection_caret: "▶".into(),
            header_style: "bold".into(),
            footer_style: "grey70".into(),
            border_style: "grey70".into(),
            show_border: true,
            filter_style: "cyan".into(),
            filter_cursor: "_".into(),
            scroll_indicator_style: "grey50".into(),
            scroll_indicator_up: "··· ▲ ···".into(),
            scroll_indicator_down: "··· ▼ ···".into(),
            checkbox_checked: "☒".into(),
            checkbox_unchecked: "☐".into(),
            error_style: "bright_white on dark_red".into(),
        }
    }
}

/// Partial style sheet: callers only specify what they want to customize.
/// Deserializable so themes can be loaded from JSON.
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub body_style: Option<String>,
    pub selection_style: Option<String>,
    pub selection_caret: Option<String>,
    pub header_style: Option<String>,
    pub footer_style: Option<String>,
    pub border_style: Option<String>,
    pub show_border: Option<bool>,
    pub filter_style: Option<String>,
    pub filter_cursor: Option<String>,
    pub scroll_indicator_style: Option<String>,
    pub scroll_indicator_up: Option<String>,
    pub scroll_indicator_down: Option<String>,
    pub checkbox_checked: Option<String>,
    pub checkbox_unchecked: Option<String>,
    pub error_style: Option<String>,
}

macro_rules! apply_override {
    ($sheet:ident, $overrides:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$overrides.$field {
                $sheet.$field = value.clone();
            }
        )+
    };
}

impl StyleSheet {
    /// Shallow merge: user overrides win field by field over the defaults.
    pub fn merged(overrides: &StyleOverrides) -> Self {
        let mut sheet = StyleSheet::default();
        apply_override!(
            sheet,
            overrides,
            body_style,
            selection_style,
            selection_caret,
            header_style,
            footer_style,
            border_style,
            filter_style,
            filter_cursor,
            scroll_indicator_style,
            scroll_indicator_up,
            scroll_indicator_down,
            checkbox_checked,
            checkbox_unchecked,
            error_style,
        );
        if let Some(show_border) = overrides.show_border {
            sheet.show_border = show_border;
        }
        sheet
    }
}

/// Preset themes.
pub fn ocean_blue() -> StyleOverrides {
    StyleOverrides {
        body_style: Some("white on blue".into()),
        selection_style: Some("bold black on bright_cyan".into()),
        header_style: Some("bold bright_cyan".into()),
        footer_style: Some("bright_blue".into()),
        border_style: Some("blue".into()),
        filter_style: Some("bright_cyan".into()),
        ..StyleOverrides::default()
    }
}

pub fn forest_green() -> StyleOverrides {
    StyleOverrides {
        body_style: Some("white on green".into()),
        selection_style: Some("bold black on bright_green".into()),
        header_style: Some("bold bright_green".into()),
        footer_style: Some("bright_green".into()),
        border_style: Some("green".into()),
        filter_style: Some("bright_green".into()),
        ..StyleOverrides::default()
    }
}

pub fn matrix() -> StyleOverrides {
    StyleOverrides {
        body_style: Some("green on black".into()),
        selection_style: Some("bold black on bright_green".into()),
        selection_caret: Some("►".into()),
        header_style: Some("bold bright_green".into()),
        footer_style: Some("green".into()),
        border_style: Some("bright_green".into()),
        filter_style: Some("bold bright_green".into()),
        ..StyleOverrides::default()
    }
}

pub fn terminal_classic() -> StyleOverrides {
    StyleOverrides {
        body_style: Some("bright_green on black".into()),
        selection_style: Some("reverse".into()),
        selection_caret: Some(">".into()),
        header_style: Some("bold bright_white".into()),
        footer_style: Some("bright_green".into()),
        border_style: Some("bright_green".into()),
        filter_style: Some("bright_green".into()),
        ..StyleOverrides::default()
    }
}

pub fn midnight_blue() -> StyleOverrides {
    StyleOverrides {
        body_style: Some("bright_white on blue".into()),
        selection_style: Some("bold blue on bright_white".into()),
        header_style: Some("bold bright_white".into()),
        footer_style: Some("bright_blue".into()),
        border_style: Some("bright_blue".into()),
        filter_style: Some("bold bright_blue".into()),
        ..StyleOverrides::default()
    }
}

/// Look up a preset theme by name (as accepted by the `rc` binary).
pub fn preset_theme(name: &str) -> Option<StyleOverrides> {
    match name {
        "ocean_blue" => Some(ocean_blue()),
        "forest_green" => Some(forest_green()),
        "matrix" => Some(matrix()),
        "terminal_classic" => Some(terminal_classic()),
        "midnight_blue" => Some(midnight_blue()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_overlays_only_supplied_fields() {
        let overrides = StyleOverrides {
            selection_caret: Some("→".into()),
            show_border: Some(false),
            ..StyleOverrides::default()
        };
        let sheet = StyleSheet::merged(&overrides);
        assert_eq!(sheet.selection_caret, "→");
        assert!(!sheet.show_border);
        // Untouched fields keep their defaults.
        assert_eq!(sheet.selection_style, StyleSheet::default().selection_style);
    }

    #[test]
    fn overrides_deserialize_from_partial_json() {
        let overrides: StyleOverrides =
            serde_json::from_str(r#"{ "selection_caret": "*", "show_border": false }"#)
                .unwrap();
        assert_eq!(overrides.selection_caret.as_deref(), Some("*"));
        assert_eq!(overrides.show_border, Some(false));
        assert_eq!(overrides.body_style, None);
    }

    #[test]
    fn presets_resolve_by_name() {
        assert!(preset_theme("matrix").is_some());
        assert!(preset_theme("no_such_theme").is_none());
    }
}
