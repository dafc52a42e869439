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

use std::io::Result;

use crossterm::{event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                terminal::{disable_raw_mode, enable_raw_mode}};

/// One logical key token. The chooser engine dispatches on these and never
/// sees raw bytes or escape sequences; decoding is entirely the reader's job.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Key {
    Up,
    Down,
    Enter,
    Esc,
    CtrlC,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Space,
    Char(char),
    /// Empty / unrecognized input. Silently ignored by the engine.
    #[default]
    Noop,
}

impl Key {
    /// The character this key would type into a filter, if any. [Key::Space]
    /// is reported separately so it can double as the multi-select toggle.
    pub fn printable_char(&self) -> Option<char> {
        match self {
            Key::Char(ch) if !ch.is_control() => Some(*ch),
            _ => None,
        }
    }
}

/// Yields one logical key token per call. The engine blocks here and only
/// here.
pub trait KeyReader {
    fn read_key(&mut self) -> Key;
}

/// Reads key presses from the real terminal via crossterm.
///
/// This is a scoped resource: [CrosstermKeyReader::acquire] puts the terminal
/// into raw mode, and the prior mode is restored when the reader is dropped,
/// on every exit path.
#[derive(Debug)]
pub struct CrosstermKeyReader {
    raw_mode_entered: bool,
}

impl CrosstermKeyReader {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        Ok(CrosstermKeyReader {
            raw_mode_entered: true,
        })
    }
}

impl Drop for CrosstermKeyReader {
    fn drop(&mut self) {
        if self.raw_mode_entered {
            let _ = disable_raw_mode();
        }
    }
}

impl KeyReader for CrosstermKeyReader {
    fn read_key(&mut self) -> Key {
        match read() {
            Ok(Event::Key(key_event)) => translate_key_event(key_event),
            _ => Key::Noop,
        }
    }
}

/// [KeyEvent::kind] is [KeyEventKind::Release] on Windows for every key-up;
/// only key-down events produce tokens.
fn translate_key_event(key_event: KeyEvent) -> Key {
    if key_event.kind != KeyEventKind::Press {
        return Key::Noop;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') => Key::CtrlC,
            _ => Key::Noop,
        };
    }

    match key_event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(ch) => Key::Char(ch),
        _ => Key::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn translates_navigation_keys() {
        assert_eq!(translate_key_event(press(KeyCode::Up)), Key::Up);
        assert_eq!(translate_key_event(press(KeyCode::PageDown)), Key::PageDown);
        assert_eq!(translate_key_event(press(KeyCode::Enter)), Key::Enter);
    }

    #[test]
    fn translates_space_and_printables() {
        assert_eq!(translate_key_event(press(KeyCode::Char(' '))), Key::Space);
        assert_eq!(translate_key_event(press(KeyCode::Char('x'))), Key::Char('x'));
        assert_eq!(Key::Char('x').printable_char(), Some('x'));
        assert_eq!(Key::Space.printable_char(), None);
    }

    #[test]
    fn release_events_are_noop() {
        let mut key_event = press(KeyCode::Enter);
        key_event.kind = KeyEventKind::Release;
        assert_eq!(translate_key_event(key_event), Key::Noop);
    }

    #[test]
    fn ctrl_c_is_recognized() {
        let mut key_event = press(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(translate_key_event(key_event), Key::CtrlC);
    }
}
