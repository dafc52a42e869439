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

//! Deterministic reader and renderer doubles for driving a chooser in tests
//! without a terminal.

use std::io::{Result, Write};

use crate::{Key, KeyReader, Layout, Renderer};

/// Replays a fixed key script.
///
/// Panics when read past the end: a control that consumes more keys than the
/// script supplies did not exit when the test expected it to.
#[derive(Debug, Default)]
pub struct TestVecKeyReader {
    pub keys: Vec<Key>,
    pub position: usize,
}

impl TestVecKeyReader {
    pub fn new(keys: Vec<Key>) -> Self {
        TestVecKeyReader { keys, position: 0 }
    }

    /// True when the whole script was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.keys.len()
    }
}

impl KeyReader for TestVecKeyReader {
    fn read_key(&mut self) -> Key {
        assert!(
            self.position < self.keys.len(),
            "key reader exhausted before the control exited"
        );
        let key = self.keys[self.position];
        self.position += 1;
        key
    }
}

/// Records every layout handed to it instead of painting.
#[derive(Debug, Default)]
pub struct CaptureRenderer {
    /// Number of frames drawn.
    pub frames: usize,
    /// The most recent layout.
    pub last: Option<Layout>,
    /// Overlay messages seen across all frames.
    pub overlay_messages: Vec<String>,
    pub finished: bool,
}

impl CaptureRenderer {
    pub fn saw_overlay_containing(&self, needle: &str) -> bool {
        self.overlay_messages
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl Renderer for CaptureRenderer {
    fn draw(&mut self, layout: &Layout) -> Result<()> {
        self.frames += 1;
        if let Some(overlay) = &layout.overlay {
            self.overlay_messages.push(overlay.message.clone());
        }
        self.last = Some(layout.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// A `Write` that collects UTF-8 output into a string, for exercising the
/// crossterm renderer off-terminal.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    pub fn new() -> Self {
        TestStringWriter::default()
    }

    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match std::str::from_utf8(buf) {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CrosstermRenderer, LayoutRow};

    #[test]
    fn capture_renderer_records_frames_and_overlays() {
        let mut renderer = CaptureRenderer::default();
        let mut layout = Layout {
            rows: vec![LayoutRow::new("row", "")],
            ..Layout::default()
        };
        renderer.draw(&layout).unwrap();
        layout.overlay = Some(crate::Overlay {
            title: "Error".into(),
            message: "nope".into(),
            style: String::new(),
            height: 1,
        });
        renderer.draw(&layout).unwrap();
        renderer.finish().unwrap();

        assert_eq!(renderer.frames, 2);
        assert!(renderer.saw_overlay_containing("nope"));
        assert!(renderer.finished);
    }

    #[test]
    fn crossterm_renderer_paints_rows_and_erases_when_transient() {
        let layout = Layout {
            rows: vec![LayoutRow::new("alpha", ""), LayoutRow::new("beta", "bold")],
            ..Layout::default()
        };
        let mut renderer = CrosstermRenderer::new(TestStringWriter::new(), true);
        renderer.draw(&layout).unwrap();
        renderer.finish().unwrap();

        let output = renderer.write.get_buffer();
        assert!(output.contains("alpha"));
        assert!(output.contains("beta"));
        // Transient teardown clears from the cursor down.
        assert!(output.contains("\u{1b}[J"));
    }
}
