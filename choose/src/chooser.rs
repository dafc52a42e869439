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

//! The chooser engine: a scrollable inline list control driven by logical
//! key tokens.
//!
//! The engine owns the choice model, the cursor, the visible-window
//! computation, the render-tree assembly, and the main input loop with its
//! confirm/validate/retry protocol. Specializations ([crate::FilterChooser],
//! [crate::MultiChooser], [crate::ShortcutChooser], [crate::FileChooser])
//! plug in through the [Variant] extension points instead of inheriting the
//! loop.

use std::io::Result;

use crate::{compute_scroll_window, floor_visible_budget, get_terminal_height,
            is_fully_uninteractive_terminal, Action, BaseControl, Choice, ChooserState,
            CrosstermKeyReader, CrosstermRenderer, Frame, HeaderBlock, HeaderPlacement,
            Key, KeyReader, Keybindings, Layout, LayoutRow, MessageOverrides, Messages,
            Overlay, Renderer, StyleOverrides, StyleSheet, TTYResult, Width};

/// The finalized pick of a single-select run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Picked {
    pub value: String,
    pub index: usize,
}

/// What a variant's "handle other key" extension point did with a key that
/// is not bound to a navigation action.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyOutcome {
    /// Not consumed; the engine ignores the key.
    NotHandled,
    /// Consumed; re-render.
    Handled,
    /// Consumed and the visible selection state changed; re-render and fire
    /// `on_change`.
    Changed,
    /// Consumed and the selection should be confirmed immediately.
    Confirm,
}

/// Per-iteration verdict of the key dispatch.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EventLoopResult {
    Continue,
    ContinueAndRerender,
    Confirmed,
    Cancelled,
}

/// Construction options shared by every chooser control.
#[derive(Debug, Clone)]
pub struct ChooserConfig {
    /// Title shown in the border (or centered above the list when
    /// borderless).
    pub title: String,
    pub header: String,
    pub header_placement: HeaderPlacement,
    /// Absolute total height including border, header, and footer rows;
    /// shorter content is padded with blank rows. `None` = auto-size.
    pub height: Option<usize>,
    /// Height cap without padding. `None` = bounded by the terminal.
    pub max_height: Option<usize>,
    pub width: Width,
    pub initial_index: Option<usize>,
    /// Initial selection by value (case-insensitive); wins over
    /// `initial_index` when both are given and the value matches.
    pub initial_value: Option<String>,
    pub wrap_navigation: bool,
    /// Enable the text filter row on the base control.
    pub filtering: bool,
    /// Erase the control from the screen after exit.
    pub transient: bool,
    pub keybindings: Vec<(Action, Vec<Key>)>,
    pub styles: StyleOverrides,
    pub messages: MessageOverrides,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        ChooserConfig {
            title: String::new(),
            header: String::new(),
            header_placement: HeaderPlacement::InsideTop,
            height: None,
            max_height: None,
            width: Width::Auto,
            initial_index: None,
            initial_value: None,
            wrap_navigation: true,
            filtering: false,
            transient: true,
            keybindings: Vec::new(),
            styles: StyleOverrides::default(),
            messages: MessageOverrides::default(),
        }
    }
}

/// The capability set a specialization can override. Every method has the
/// base control's behavior as its default, so a variant implements only what
/// it changes.
pub trait Variant {
    /// Refresh or rebuild the choice lists before (re-)entering the loop.
    /// `row_budget` is the number of rows available for choice items, for
    /// variants that size themselves against it.
    fn prepare(&mut self, state: &mut ChooserState, row_budget: usize) {
        let _ = row_budget;
        state.refilter();
    }

    /// The ordered view of master-list indices to render and navigate. Must
    /// stay consistent with the state's display view.
    fn display_choices<'a>(&self, state: &'a ChooserState) -> &'a [usize] {
        state.display_indices()
    }

    /// Produce the cell content and style for one choice row.
    fn render_row(&self, choice: &Choice, styles: &StyleSheet) -> LayoutRow {
        if choice.is_highlighted {
            LayoutRow::new(
                format!("{} {}", styles.selection_caret, choice.value),
                styles.selection_style.clone(),
            )
        } else {
            LayoutRow::new(format!("  {}", choice.value), styles.body_style.clone())
        }
    }

    /// Check the selection at confirm time. An error message keeps the loop
    /// alive and is shown as a transient overlay.
    fn validate(&self, state: &ChooserState, messages: &Messages) -> Option<String> {
        let _ = (state, messages);
        None
    }

    /// Consume a key outside the navigation set.
    fn handle_other_key(
        &mut self,
        key: Key,
        state: &mut ChooserState,
        bindings: &Keybindings,
    ) -> KeyOutcome {
        filter_edit_key(key, state, bindings)
    }

    /// Accept or reject a validated confirmation (a user `on_confirm` hook
    /// takes precedence when set). Rejecting re-runs [Variant::prepare] and
    /// keeps the loop going.
    fn confirm(&mut self, state: &mut ChooserState) -> bool {
        let _ = state;
        true
    }
}

/// The base control's filter editing: backspace trims, space and printable
/// characters append, every mutation re-filters and resyncs the cursor.
pub fn filter_edit_key(
    key: Key,
    state: &mut ChooserState,
    bindings: &Keybindings,
) -> KeyOutcome {
    if !state.filtering_enabled {
        return KeyOutcome::NotHandled;
    }
    if bindings.matches(Action::Backspace, key) {
        if !state.filter_text.is_empty() {
            state.filter_text.pop();
            state.refilter();
        }
        KeyOutcome::Handled
    } else if key == Key::Space {
        state.filter_text.push(' ');
        state.refilter();
        KeyOutcome::Handled
    } else if let Some(ch) = key.printable_char() {
        state.filter_text.push(ch);
        state.refilter();
        KeyOutcome::Handled
    } else {
        KeyOutcome::NotHandled
    }
}

/// The plain single-select control with no extension points overridden.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardVariant;

impl Variant for StandardVariant {}

/// A scrollable inline chooser control.
pub struct Chooser<V: Variant = StandardVariant> {
    pub base: BaseControl,
    pub state: ChooserState,
    pub styles: StyleSheet,
    pub messages: Messages,
    pub title: String,
    pub header: String,
    pub header_placement: HeaderPlacement,
    pub height: Option<usize>,
    pub max_height: Option<usize>,
    pub width: Width,
    /// Instruction strings joined by the footer separator. Empty parts are
    /// skipped; an all-empty list drops the footer row.
    pub footer_parts: Vec<String>,
    pub(crate) variant: V,
    pub(crate) error_message: Option<String>,
}

impl Chooser<StandardVariant> {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Chooser::<StandardVariant>::with_config(choices, ChooserConfig::default())
    }

    pub fn with_config<I, S>(choices: I, config: ChooserConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Chooser::assemble(choices, config, StandardVariant)
    }
}

impl<V: Variant> Chooser<V> {
    pub(crate) fn assemble<I, S>(choices: I, config: ChooserConfig, variant: V) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = ChooserState::new(choices);
        state.filtering_enabled = config.filtering;
        state.wrap_navigation = config.wrap_navigation;
        if let Some(index) = config.initial_index {
            state.select_initial_index(index);
        }
        if let Some(value) = &config.initial_value {
            state.select_initial_value(value);
        }
        state.refilter();

        let messages = Messages::merged(&config.messages);
        let footer_parts = vec![
            messages.nav_instructions.clone(),
            messages.confirm_instructions.clone(),
        ];

        Chooser {
            base: BaseControl::new(config.transient, &config.keybindings),
            state,
            styles: StyleSheet::merged(&config.styles),
            messages,
            title: config.title,
            header: config.header,
            header_placement: config.header_placement,
            height: config.height,
            max_height: config.max_height,
            width: config.width,
            footer_parts,
            variant,
            error_message: None,
        }
    }

    /// Run the control against the real terminal and block until the user
    /// confirms, cancels, or `should_exit` fires.
    ///
    /// Never fails: in a fully uninteractive terminal (CI, `cargo test`) or
    /// on any I/O error this returns the empty result.
    pub fn run(&mut self) -> Option<Picked> {
        if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
            return None;
        }
        let mut reader = match CrosstermKeyReader::acquire() {
            Ok(reader) => reader,
            Err(_) => return None,
        };
        let mut renderer = CrosstermRenderer::stdout(self.base.transient);
        match self.run_with(&mut reader, &mut renderer) {
            Ok(result) => result,
            Err(_) => None,
        }
    }

    /// Run with an injected reader and renderer. This is the seam the tests
    /// drive.
    pub fn run_with(
        &mut self,
        reader: &mut dyn KeyReader,
        renderer: &mut dyn Renderer,
    ) -> Result<Option<Picked>> {
        let confirmed = self.run_session(reader, renderer)?;
        if !confirmed {
            return Ok(None);
        }
        Ok(self.state.highlighted_choice().map(|choice| Picked {
            value: choice.value.clone(),
            index: choice.index,
        }))
    }

    /// The full lifecycle: `before_run`, prepare, the key loop with the
    /// confirm/validate/retry protocol, renderer teardown, `after_run`.
    /// Returns whether the run ended in a confirmation.
    pub(crate) fn run_session(
        &mut self,
        reader: &mut dyn KeyReader,
        renderer: &mut dyn Renderer,
    ) -> Result<bool> {
        if let Some(hook) = self.base.hooks.before_run.as_mut() {
            hook(&self.state);
        }
        let budget = self.prepare_budget();
        self.variant.prepare(&mut self.state, budget);

        let outcome = self.run_loop(reader, renderer);
        // The renderer is torn down on every exit path, error included.
        let teardown = renderer.finish();

        if let Some(hook) = self.base.hooks.after_run.as_mut() {
            hook(&self.state);
        }

        let confirmed = outcome?;
        teardown?;
        Ok(confirmed)
    }

    fn run_loop(
        &mut self,
        reader: &mut dyn KeyReader,
        renderer: &mut dyn Renderer,
    ) -> Result<bool> {
        loop {
            let confirmed = self.choose(reader, renderer)?;
            if !confirmed {
                return Ok(false);
            }

            self.state.set_highlighted();

            if let Some(error) = self.variant.validate(&self.state, &self.messages) {
                tracing::debug!(%error, "selection rejected by validation");
                self.error_message = Some(error);
                continue;
            }

            // A caller-supplied on_confirm hook replaces the variant's own
            // confirm behavior.
            let accepted = match self.base.hooks.on_confirm.as_mut() {
                Some(hook) => hook(&self.state),
                None => self.variant.confirm(&mut self.state),
            };
            if !accepted {
                let budget = self.prepare_budget();
                self.variant.prepare(&mut self.state, budget);
                continue;
            }

            self.state.set_highlighted();
            return Ok(true);
        }
    }

    /// One pass of the read-key/react/render cycle, until the user confirms
    /// or cancels.
    fn choose(
        &mut self,
        reader: &mut dyn KeyReader,
        renderer: &mut dyn Renderer,
    ) -> Result<bool> {
        renderer.draw(&self.layout())?;
        loop {
            if let Some(hook) = self.base.hooks.should_exit.as_mut() {
                if hook(&self.state) {
                    return Ok(false);
                }
            }

            let key = reader.read_key();
            if key == Key::Noop {
                continue;
            }

            // A pending error overlay is dismissed by any key, with no
            // further processing.
            if self.error_message.is_some() {
                self.error_message = None;
                renderer.draw(&self.layout())?;
                continue;
            }

            let key = match self.base.hooks.on_key.as_mut() {
                Some(hook) => match hook(key, &self.state) {
                    Some(key) => key,
                    None => {
                        renderer.draw(&self.layout())?;
                        continue;
                    }
                },
                None => key,
            };

            match self.dispatch(key) {
                EventLoopResult::Confirmed => return Ok(true),
                EventLoopResult::Cancelled => return Ok(false),
                EventLoopResult::ContinueAndRerender => {
                    renderer.draw(&self.layout())?;
                }
                EventLoopResult::Continue => {}
            }
        }
    }

    fn dispatch(&mut self, key: Key) -> EventLoopResult {
        let display_len = self.variant.display_choices(&self.state).len();
        tracing::trace!(?key, display_len, "dispatch");

        match self.base.keybindings.action_for(key) {
            Some(Action::Confirm) => return EventLoopResult::Confirmed,
            Some(Action::Cancel) => return EventLoopResult::Cancelled,
            Some(Action::Up) => {
                if self.state.highlighted_filtered_index > 0 {
                    self.state.highlighted_filtered_index -= 1;
                } else if self.state.wrap_navigation && display_len > 0 {
                    self.state.highlighted_filtered_index = display_len - 1;
                }
            }
            Some(Action::Down) => {
                if display_len > 0
                    && self.state.highlighted_filtered_index < display_len - 1
                {
                    self.state.highlighted_filtered_index += 1;
                } else if self.state.wrap_navigation && display_len > 0 {
                    self.state.highlighted_filtered_index = 0;
                }
            }
            Some(Action::Home) => {
                self.state.highlighted_filtered_index = 0;
            }
            Some(Action::End) => {
                if display_len > 0 {
                    self.state.highlighted_filtered_index = display_len - 1;
                }
            }
            Some(Action::PageUp) => {
                let step = self.visible_count().saturating_sub(1).max(1);
                self.state.highlighted_filtered_index = self
                    .state
                    .highlighted_filtered_index
                    .saturating_sub(step);
            }
            Some(Action::PageDown) => {
                if display_len > 0 {
                    let step = self.visible_count().saturating_sub(1).max(1);
                    self.state.highlighted_filtered_index = (self
                        .state
                        .highlighted_filtered_index
                        + step)
                        .min(display_len - 1);
                }
            }
            Some(Action::Backspace) | None => {
                return match self.variant.handle_other_key(
                    key,
                    &mut self.state,
                    &self.base.keybindings,
                ) {
                    KeyOutcome::Confirm => EventLoopResult::Confirmed,
                    KeyOutcome::Changed => self.after_state_change(true),
                    KeyOutcome::Handled => self.after_state_change(false),
                    KeyOutcome::NotHandled => EventLoopResult::Continue,
                };
            }
        }

        self.after_state_change(false)
    }

    /// Resync the cursor invariant and fire `on_change` when the highlighted
    /// entry moved (or a variant reported a visible change).
    fn after_state_change(&mut self, variant_changed: bool) -> EventLoopResult {
        let moved = self.state.set_highlighted();
        if moved || variant_changed {
            if let Some(hook) = self.base.hooks.on_change.as_mut() {
                hook(&self.state);
            }
        }
        EventLoopResult::ContinueAndRerender
    }

    /// Rows already spoken for above the choice items.
    fn consumed_rows(&self) -> usize {
        let mut rows = 0;
        if !self.styles.show_border && !self.title.is_empty() {
            rows += 1;
        }
        if !self.header.is_empty() && self.header_placement == HeaderPlacement::InsideTop
        {
            rows += 1;
        }
        if self.state.filtering_enabled {
            rows += 1;
        }
        rows
    }

    fn available_rows(&self, consumed: usize) -> usize {
        let mut rows = self
            .height
            .or(self.max_height)
            .unwrap_or_else(get_terminal_height);
        if self.styles.show_border {
            rows = rows.saturating_sub(2);
        }
        rows = rows.saturating_sub(consumed);
        if self.has_footer() {
            rows = rows.saturating_sub(1);
        }
        rows
    }

    /// Visible row budget for choice items, floored so a scrolling window
    /// stays usable.
    fn visible_count(&self) -> usize {
        let available = self.available_rows(self.consumed_rows());
        floor_visible_budget(
            self.variant.display_choices(&self.state).len(),
            available,
        )
    }

    pub(crate) fn prepare_budget(&self) -> usize {
        self.available_rows(0).max(1)
    }

    fn has_footer(&self) -> bool {
        self.footer_parts.iter().any(|part| !part.is_empty())
    }

    fn footer_text(&self) -> String {
        self.footer_parts
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<String>>()
            .join(&self.messages.footer_separator)
    }

    /// Assemble the render tree for the current frame.
    fn layout(&self) -> Layout {
        let show_border = self.styles.show_border;
        let mut rows: Vec<LayoutRow> = Vec::new();

        if !show_border && !self.title.is_empty() {
            rows.push(LayoutRow::centered(
                self.title.clone(),
                self.styles.header_style.clone(),
            ));
        }
        if !self.header.is_empty() && self.header_placement == HeaderPlacement::InsideTop
        {
            rows.push(LayoutRow::new(
                self.header.clone(),
                self.styles.header_style.clone(),
            ));
        }
        if self.state.filtering_enabled {
            let shown = self.variant.display_choices(&self.state).len();
            let total = self.state.choices.len();
            rows.push(LayoutRow::new(
                format!(
                    "{}{}{}\t({}/{})",
                    self.messages.filter_label,
                    self.state.filter_text,
                    self.styles.filter_cursor,
                    shown,
                    total
                ),
                self.styles.filter_style.clone(),
            ));
        }

        let display = self.variant.display_choices(&self.state);
        let window = compute_scroll_window(
            display.len(),
            self.visible_count(),
            self.state.highlighted_filtered_index,
        );

        if window.show_up_arrow {
            rows.push(LayoutRow::new(
                format!("  {}", self.styles.scroll_indicator_up),
                self.styles.scroll_indicator_style.clone(),
            ));
        }
        for position in window.start..window.end {
            let choice = &self.state.choices[display[position]];
            rows.push(self.variant.render_row(choice, &self.styles));
        }
        if window.show_down_arrow {
            rows.push(LayoutRow::new(
                format!("  {}", self.styles.scroll_indicator_down),
                self.styles.scroll_indicator_style.clone(),
            ));
        }

        // Pad with blank rows up to an absolute height.
        if let Some(height) = self.height {
            let mut target = height;
            if show_border {
                target = target.saturating_sub(2);
            }
            if self.has_footer() {
                target = target.saturating_sub(1);
            }
            while rows.len() < target {
                rows.push(LayoutRow::default());
            }
        }

        if self.has_footer() {
            rows.push(LayoutRow::centered(
                self.footer_text(),
                self.styles.footer_style.clone(),
            ));
        }

        let body_height = rows.len();
        Layout {
            frame: show_border.then(|| Frame {
                title: (!self.title.is_empty()).then(|| self.title.clone()),
                style: self.styles.border_style.clone(),
            }),
            header: (!self.header.is_empty()
                && self.header_placement != HeaderPlacement::InsideTop)
                .then(|| HeaderBlock {
                    text: self.header.clone(),
                    style: self.styles.header_style.clone(),
                    placement: self.header_placement,
                }),
            rows,
            overlay: self.error_message.as_ref().map(|message| Overlay {
                title: self.messages.error_title.clone(),
                message: message.clone(),
                style: self.styles.error_style.clone(),
                height: body_height,
            }),
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{CaptureRenderer, TestVecKeyReader};

    fn run_keys(
        chooser: &mut Chooser,
        keys: Vec<Key>,
    ) -> (Option<Picked>, TestVecKeyReader, CaptureRenderer) {
        let mut reader = TestVecKeyReader::new(keys);
        let mut renderer = CaptureRenderer::default();
        let result = chooser.run_with(&mut reader, &mut renderer).unwrap();
        (result, reader, renderer)
    }

    #[test]
    fn down_down_enter_selects_the_third_choice() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b", "c"]);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Down, Key::Down, Key::Enter]);
        assert_eq!(
            result,
            Some(Picked {
                value: "c".into(),
                index: 2
            })
        );
    }

    #[test]
    fn esc_cancels_with_the_empty_result() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b"]);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Esc]);
        assert_eq!(result, None);
    }

    #[test]
    fn up_from_the_top_wraps_to_the_bottom() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b", "c"]);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Up, Key::Enter]);
        assert_eq!(result.unwrap().index, 2);
    }

    #[test]
    fn down_from_the_bottom_wraps_to_the_top() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b", "c"]);
        let (result, _, _) =
            run_keys(&mut chooser, vec![Key::End, Key::Down, Key::Enter]);
        assert_eq!(result.unwrap().index, 0);
    }

    #[test]
    fn boundary_is_a_noop_without_wrap() {
        let mut chooser = Chooser::<StandardVariant>::with_config(
            ["a", "b", "c"],
            ChooserConfig {
                wrap_navigation: false,
                ..ChooserConfig::default()
            },
        );
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Up, Key::Enter]);
        assert_eq!(result.unwrap().index, 0);

        let mut chooser = Chooser::<StandardVariant>::with_config(
            ["a", "b", "c"],
            ChooserConfig {
                wrap_navigation: false,
                ..ChooserConfig::default()
            },
        );
        let (result, _, _) =
            run_keys(&mut chooser, vec![Key::End, Key::Down, Key::Enter]);
        assert_eq!(result.unwrap().index, 2);
    }

    #[test]
    fn home_and_end_jump_to_the_edges() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b", "c", "d"]);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::End, Key::Enter]);
        assert_eq!(result.unwrap().index, 3);

        let mut chooser = Chooser::<StandardVariant>::new(["a", "b", "c", "d"]);
        let (result, _, _) =
            run_keys(&mut chooser, vec![Key::End, Key::Home, Key::Enter]);
        assert_eq!(result.unwrap().index, 0);
    }

    #[test]
    fn page_keys_step_by_the_window_and_clamp() {
        let items: Vec<String> = (0..20).map(|i| format!("item {i}")).collect();
        let config = ChooserConfig {
            height: Some(10),
            ..ChooserConfig::default()
        };
        // 10 rows - 2 border - 1 footer = 7 visible, so the step is 6.
        let mut chooser = Chooser::<StandardVariant>::with_config(items.clone(), config.clone());
        let (result, _, _) = run_keys(&mut chooser, vec![Key::PageDown, Key::Enter]);
        assert_eq!(result.unwrap().index, 6);

        let mut chooser = Chooser::<StandardVariant>::with_config(items.clone(), config.clone());
        let (result, _, _) = run_keys(
            &mut chooser,
            vec![
                Key::PageDown,
                Key::PageDown,
                Key::PageDown,
                Key::PageDown,
                Key::Enter,
            ],
        );
        // Clamped to the last entry, never wrapping.
        assert_eq!(result.unwrap().index, 19);

        let mut chooser = Chooser::<StandardVariant>::with_config(items, config);
        let (result, _, _) =
            run_keys(&mut chooser, vec![Key::PageDown, Key::PageUp, Key::Enter]);
        assert_eq!(result.unwrap().index, 0);
    }

    #[test]
    fn filtering_narrows_then_selects_by_true_index() {
        let config = ChooserConfig {
            filtering: true,
            ..ChooserConfig::default()
        };
        let mut chooser =
            Chooser::<StandardVariant>::with_config(["apple", "banana", "cherry"], config.clone());
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Char('b'), Key::Enter]);
        assert_eq!(
            result,
            Some(Picked {
                value: "banana".into(),
                index: 1
            })
        );

        // A filter that removes every match confirms to the empty result.
        let mut chooser = Chooser::<StandardVariant>::with_config(["apple", "banana", "cherry"], config);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Char('z'), Key::Enter]);
        assert_eq!(result, None);
    }

    #[test]
    fn on_key_hook_swallows_and_remaps_keys() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b", "c"]);
        chooser.base.hooks.on_key = Some(Box::new(|key, _state| match key {
            Key::Char('x') => None,
            Key::Char('j') => Some(Key::Down),
            other => Some(other),
        }));
        let (result, _, _) = run_keys(
            &mut chooser,
            vec![Key::Char('x'), Key::Char('j'), Key::Enter],
        );
        assert_eq!(result.unwrap().index, 1);
    }

    #[test]
    fn should_exit_forces_the_empty_result_without_reading_keys() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b"]);
        chooser.base.hooks.should_exit = Some(Box::new(|_state| true));
        // An exhausting reader proves no key is consumed.
        let (result, reader, _) = run_keys(&mut chooser, vec![]);
        assert_eq!(result, None);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn on_confirm_veto_keeps_the_loop_alive() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b"]);
        let mut first = true;
        chooser.base.hooks.on_confirm = Some(Box::new(move |_state| {
            if first {
                first = false;
                false
            } else {
                true
            }
        }));
        let (result, reader, _) = run_keys(&mut chooser, vec![Key::Enter, Key::Enter]);
        assert_eq!(result.unwrap().index, 0);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn before_and_after_run_hooks_fire_once_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b"]);
        let before_events = events.clone();
        chooser.base.hooks.before_run = Some(Box::new(move |_state| {
            before_events.borrow_mut().push("before");
        }));
        let after_events = events.clone();
        chooser.base.hooks.after_run = Some(Box::new(move |_state| {
            after_events.borrow_mut().push("after");
        }));
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Enter]);
        assert_eq!(result.unwrap().index, 0);
        assert_eq!(*events.borrow(), vec!["before", "after"]);
    }

    #[test]
    fn on_change_fires_only_when_the_highlight_moves() {
        let changes = Rc::new(RefCell::new(0));
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b"]);
        let counter = changes.clone();
        chooser.base.hooks.on_change = Some(Box::new(move |_state| {
            *counter.borrow_mut() += 1;
        }));
        // Home while already at the top does not move the highlight.
        let (_, _, _) = run_keys(
            &mut chooser,
            vec![Key::Home, Key::Down, Key::Up, Key::Enter],
        );
        assert_eq!(*changes.borrow(), 2);
    }

    #[test]
    fn unmapped_keys_are_ignored_without_a_repaint() {
        let mut chooser = Chooser::<StandardVariant>::new(["a", "b"]);
        let (result, _, renderer) =
            run_keys(&mut chooser, vec![Key::Char('q'), Key::Enter]);
        assert_eq!(result.unwrap().index, 0);
        // Only the initial frame: the unhandled key triggers no redraw.
        assert_eq!(renderer.frames, 1);
    }

    #[test]
    fn initial_selection_by_index_and_value() {
        let config = ChooserConfig {
            initial_index: Some(2),
            ..ChooserConfig::default()
        };
        let mut chooser = Chooser::<StandardVariant>::with_config(["a", "b", "c"], config);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Enter]);
        assert_eq!(result.unwrap().index, 2);

        let config = ChooserConfig {
            initial_value: Some("B".into()),
            ..ChooserConfig::default()
        };
        let mut chooser = Chooser::<StandardVariant>::with_config(["a", "b", "c"], config);
        let (result, _, _) = run_keys(&mut chooser, vec![Key::Enter]);
        assert_eq!(result.unwrap().index, 1);
    }

    #[test]
    fn long_lists_grow_scroll_arrows_in_the_layout() {
        let items: Vec<String> = (0..20).map(|i| format!("item {i}")).collect();
        let mut chooser = Chooser::<StandardVariant>::with_config(
            items,
            ChooserConfig {
                height: Some(10),
                ..ChooserConfig::default()
            },
        );
        let (_, _, renderer) = run_keys(
            &mut chooser,
            vec![Key::PageDown, Key::PageDown, Key::Enter],
        );
        let layout = renderer.last.unwrap();
        let texts: Vec<&str> = layout.rows.iter().map(|row| row.text.as_str()).collect();
        assert!(texts.iter().any(|text| text.contains('▲')));
        assert!(texts.iter().any(|text| text.contains('▼')));
    }

    #[test]
    fn absolute_height_pads_with_blank_rows() {
        let mut chooser = Chooser::<StandardVariant>::with_config(
            ["a", "b"],
            ChooserConfig {
                height: Some(10),
                ..ChooserConfig::default()
            },
        );
        let (_, _, renderer) = run_keys(&mut chooser, vec![Key::Enter]);
        let layout = renderer.last.unwrap();
        // 10 total - 2 border - 1 footer = 7 body rows + footer row.
        assert_eq!(layout.rows.len(), 8);
    }
}
