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

use std::fmt;

use crate::{Action, ChooserState, Key, Keybindings};

pub type BeforeRunHook = Box<dyn FnMut(&ChooserState)>;
pub type AfterRunHook = Box<dyn FnMut(&ChooserState)>;
pub type OnChangeHook = Box<dyn FnMut(&ChooserState)>;
pub type OnKeyHook = Box<dyn FnMut(Key, &ChooserState) -> Option<Key>>;
pub type OnConfirmHook = Box<dyn FnMut(&ChooserState) -> bool>;
pub type ShouldExitHook = Box<dyn FnMut(&ChooserState) -> bool>;

/// The six lifecycle hook slots shared by every control. Each receives the
/// control's current public state, never its internals.
///
/// - `before_run` / `after_run`: called once around the main loop.
/// - `on_change`: called when the highlighted entry changes.
/// - `on_key`: called before default key handling. Return `None` to swallow
///   the key (the control just re-renders), or a possibly different key to
///   continue processing with.
/// - `on_confirm`: called when the user confirms. Return `false` to reject
///   the confirmation and stay in the loop.
/// - `should_exit`: polled once per loop iteration before reading a key.
///   Return `true` to force-exit with an empty result.
#[derive(Default)]
pub struct Hooks {
    pub before_run: Option<BeforeRunHook>,
    pub after_run: Option<AfterRunHook>,
    pub on_change: Option<OnChangeHook>,
    pub on_key: Option<OnKeyHook>,
    pub on_confirm: Option<OnConfirmHook>,
    pub should_exit: Option<ShouldExitHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_run", &self.before_run.is_some())
            .field("after_run", &self.after_run.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_key", &self.on_key.is_some())
            .field("on_confirm", &self.on_confirm.is_some())
            .field("should_exit", &self.should_exit.is_some())
            .finish()
    }
}

/// Common construction contract for every control: the transient-display
/// flag, the merged keybinding table, and the lifecycle hooks. Pure
/// configuration assembly; no state machine of its own.
#[derive(Debug, Default)]
pub struct BaseControl {
    /// Erase the control from the screen after exit.
    pub transient: bool,
    pub keybindings: Keybindings,
    pub hooks: Hooks,
}

impl BaseControl {
    pub fn new(transient: bool, keybinding_overrides: &[(Action, Vec<Key>)]) -> Self {
        BaseControl {
            transient,
            keybindings: Keybindings::merged(keybinding_overrides),
            hooks: Hooks::default(),
        }
    }
}
