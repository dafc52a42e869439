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

use smallvec::{smallvec, SmallVec};

use crate::Key;

/// Most actions are bound to one or two keys.
pub type KeyList = SmallVec<[Key; 2]>;

/// Logical actions the chooser engine understands. [Action::Backspace] is
/// dispatched through the "handle other key" extension point so variants can
/// repurpose it (e.g. filter editing).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Action {
    Up,
    Down,
    Confirm,
    Cancel,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Up,
        Action::Down,
        Action::Confirm,
        Action::Cancel,
        Action::Home,
        Action::End,
        Action::PageUp,
        Action::PageDown,
        Action::Backspace,
    ];

    fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Confirm => 2,
            Action::Cancel => 3,
            Action::Home => 4,
            Action::End => 5,
            Action::PageUp => 6,
            Action::PageDown => 7,
            Action::Backspace => 8,
        }
    }
}

/// Mapping from action to the raw key tokens bound to it. Built once at
/// construction and read-only afterwards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Keybindings {
    table: [KeyList; 9],
}

impl Default for Keybindings {
    fn default() -> Self {
        Keybindings {
            table: [
                smallvec![Key::Up],
                smallvec![Key::Down],
                smallvec![Key::Enter],
                smallvec![Key::Esc, Key::CtrlC],
                smallvec![Key::Home],
                smallvec![Key::End],
                smallvec![Key::PageUp],
                smallvec![Key::PageDown],
                smallvec![Key::Backspace],
            ],
        }
    }
}

impl Keybindings {
    /// Overlay user overrides on the defaults. An override fully replaces the
    /// default key list for that action; it is not merged key-by-key.
    pub fn merged(overrides: &[(Action, Vec<Key>)]) -> Self {
        let mut bindings = Keybindings::default();
        for (action, keys) in overrides {
            bindings.set(*action, keys);
        }
        bindings
    }

    pub fn set(&mut self, action: Action, keys: &[Key]) {
        self.table[action.index()] = KeyList::from_slice(keys);
    }

    pub fn keys_for(&self, action: Action) -> &[Key] {
        &self.table[action.index()]
    }

    pub fn matches(&self, action: Action, key: Key) -> bool {
        self.keys_for(action).contains(&key)
    }

    /// First action (in [Action::ALL] order) with `key` bound to it.
    pub fn action_for(&self, key: Key) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.matches(*action, key))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_cover_every_action() {
        let bindings = Keybindings::default();
        for action in Action::ALL {
            assert!(!bindings.keys_for(action).is_empty());
        }
        assert_eq!(bindings.action_for(Key::Esc), Some(Action::Cancel));
        assert_eq!(bindings.action_for(Key::CtrlC), Some(Action::Cancel));
        assert_eq!(bindings.action_for(Key::Char('q')), None);
    }

    #[test]
    fn override_replaces_the_whole_key_list() {
        let bindings =
            Keybindings::merged(&[(Action::Up, vec![Key::Char('k')])]);
        // The default Up arrow binding is gone, not merged in.
        assert_eq!(bindings.keys_for(Action::Up), &[Key::Char('k')]);
        assert_eq!(bindings.action_for(Key::Up), None);
        assert_eq!(bindings.action_for(Key::Char('k')), Some(Action::Up));
        // Untouched actions keep their defaults.
        assert_eq!(bindings.action_for(Key::Down), Some(Action::Down));
    }
}
