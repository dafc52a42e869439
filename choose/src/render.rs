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

//! Paints a [Layout] to the terminal. The whole frame is redrawn in place
//! after every state change (no diffing); when the control is transient it
//! erases itself on exit.

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{cursor::{Hide, MoveToColumn, MoveToNextLine, MoveToPreviousLine, Show},
                queue,
                style::{Attribute, Color, Print, ResetColor, SetAttribute,
                        SetBackgroundColor, SetForegroundColor},
                terminal::{Clear, ClearType}};

use crate::{get_terminal_width, Frame, HeaderPlacement, Layout, LayoutRow, Overlay,
            RowAlign, Width};

/// Consumes the layout tree produced by the engine and paints it.
pub trait Renderer {
    fn draw(&mut self, layout: &Layout) -> Result<()>;

    /// Called exactly once when the control exits, on every exit path.
    fn finish(&mut self) -> Result<()>;
}

/// One fully resolved screen line: fixed-width text plus the style string it
/// is painted with.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ComposedLine {
    pub text: String,
    pub style: String,
}

/// Live-updating crossterm paint surface.
#[derive(Debug)]
pub struct CrosstermRenderer<W: Write> {
    pub write: W,
    transient: bool,
    painted_height: u16,
    cursor_hidden: bool,
}

impl CrosstermRenderer<Stdout> {
    pub fn stdout(transient: bool) -> Self {
        CrosstermRenderer::new(stdout(), transient)
    }
}

impl<W: Write> CrosstermRenderer<W> {
    pub fn new(write: W, transient: bool) -> Self {
        CrosstermRenderer {
            write,
            transient,
            painted_height: 0,
            cursor_hidden: false,
        }
    }
}

impl<W: Write> Renderer for CrosstermRenderer<W> {
    fn draw(&mut self, layout: &Layout) -> Result<()> {
        let lines = compose_lines(layout, get_terminal_width());
        let height = lines.len() as u16;

        if !self.cursor_hidden {
            queue!(self.write, Hide)?;
            self.cursor_hidden = true;
        }

        // Allocate rows below the current frame when this one is taller, so
        // the cursor-up repaint has rows to move over even at the bottom of
        // the screen.
        let grown_by = height.saturating_sub(self.painted_height);
        for _ in 0..grown_by {
            queue!(self.write, Print("\r\n"))?;
        }
        let move_up = self.painted_height + grown_by;
        if move_up > 0 {
            queue!(self.write, MoveToPreviousLine(move_up))?;
        }
        queue!(self.write, MoveToColumn(0))?;

        for line in &lines {
            queue!(self.write, Clear(ClearType::CurrentLine), ResetColor)?;
            queue_style(&mut self.write, &line.style)?;
            queue!(
                self.write,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor,
                MoveToNextLine(1)
            )?;
        }

        // Erase leftover rows from a taller previous frame.
        if self.painted_height > height {
            let extra = self.painted_height - height;
            for _ in 0..extra {
                queue!(self.write, Clear(ClearType::CurrentLine), MoveToNextLine(1))?;
            }
            queue!(self.write, MoveToPreviousLine(extra))?;
        }

        self.painted_height = height;
        self.write.flush()
    }

    fn finish(&mut self) -> Result<()> {
        if self.transient && self.painted_height > 0 {
            queue!(
                self.write,
                MoveToPreviousLine(self.painted_height),
                Clear(ClearType::FromCursorDown)
            )?;
            self.painted_height = 0;
        }
        if self.cursor_hidden {
            queue!(self.write, Show)?;
            self.cursor_hidden = false;
        }
        self.write.flush()
    }
}

/// Resolve a layout into fixed-width screen lines. Pure; unit testable.
pub fn compose_lines(layout: &Layout, terminal_width: usize) -> Vec<ComposedLine> {
    if let Some(overlay) = &layout.overlay {
        return compose_overlay(overlay, layout.width, terminal_width);
    }

    let inner_width = resolve_inner_width(layout, terminal_width);

    let mut body: Vec<ComposedLine> = layout
        .rows
        .iter()
        .map(|row| ComposedLine {
            text: fit_row(row, inner_width),
            style: row.style.clone(),
        })
        .collect();

    if let Some(header) = &layout.header {
        if header.placement.is_side() && header.placement.is_inside() {
            attach_side_column(&mut body, &header.text, header.placement.is_left());
        }
    }

    let mut lines = match &layout.frame {
        Some(frame) => {
            let framed_width = body
                .first()
                .map_or(inner_width, |line| char_count(&line.text));
            frame_lines(body, framed_width, frame)
        }
        None => body,
    };

    if let Some(header) = &layout.header {
        if header.placement.is_side() && !header.placement.is_inside() {
            attach_side_column(&mut lines, &header.text, header.placement.is_left());
        } else if header.placement == HeaderPlacement::OutsideTop {
            lines.insert(
                0,
                ComposedLine {
                    text: header.text.clone(),
                    style: header.style.clone(),
                },
            );
        }
    }

    lines
}

fn resolve_inner_width(layout: &Layout, terminal_width: usize) -> usize {
    let mut natural = 0;
    for row in &layout.rows {
        let row_width = match row.text.split_once('\t') {
            Some((left, right)) => char_count(left) + char_count(right) + 2,
            None => char_count(&row.text),
        };
        natural = natural.max(row_width);
    }
    if let Some(title) = layout.frame.as_ref().and_then(|frame| frame.title.as_ref()) {
        natural = natural.max(char_count(title) + 2);
    }

    let frame_cols = if layout.frame.is_some() { 4 } else { 0 };
    match layout.width {
        Width::Auto => natural,
        Width::Fill => terminal_width.saturating_sub(frame_cols),
        Width::Fixed(total) => total.saturating_sub(frame_cols),
    }
}

/// Resolve the `'\t'` right-align split, clip to width, then pad per the row
/// alignment.
fn fit_row(row: &LayoutRow, width: usize) -> String {
    let text = match row.text.split_once('\t') {
        Some((left, right)) => {
            let left_width = char_count(left);
            let right_width = char_count(right);
            if left_width + right_width + 1 <= width {
                let gap = width - left_width - right_width;
                format!("{left}{}{right}", " ".repeat(gap))
            } else {
                format!("{left} {right}")
            }
        }
        None => row.text.clone(),
    };

    let text = clip_to_width(&text, width);
    let pad_total = width.saturating_sub(char_count(&text));
    match row.align {
        RowAlign::Left => format!("{text}{}", " ".repeat(pad_total)),
        RowAlign::Center => {
            let left_pad = pad_total / 2;
            let right_pad = pad_total - left_pad;
            format!(
                "{}{text}{}",
                " ".repeat(left_pad),
                " ".repeat(right_pad)
            )
        }
    }
}

/// Clip over-wide text with a trailing ellipsis, on char boundaries.
pub fn clip_to_width(text: &str, width: usize) -> String {
    if char_count(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let clipped: String = text.chars().take(width - 3).collect();
    format!("{clipped}...")
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

fn frame_lines(
    body: Vec<ComposedLine>,
    inner_width: usize,
    frame: &Frame,
) -> Vec<ComposedLine> {
    let span = inner_width + 2;
    let top_fill = match &frame.title {
        Some(title) => {
            let label = format!(" {} ", clip_to_width(title, span.saturating_sub(2)));
            let fill = span.saturating_sub(char_count(&label));
            let left = fill / 2;
            let right = fill - left;
            format!("{}{label}{}", "─".repeat(left), "─".repeat(right))
        }
        None => "─".repeat(span),
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(ComposedLine {
        text: format!("╭{top_fill}╮"),
        style: frame.style.clone(),
    });
    for line in body {
        lines.push(ComposedLine {
            text: format!("│ {} │", line.text),
            style: line.style,
        });
    }
    lines.push(ComposedLine {
        text: format!("╰{}╯", "─".repeat(span)),
        style: frame.style.clone(),
    });
    lines
}

/// Attach a header text column to the left or right of already-composed
/// lines. The text sits on the first line; the rest are padded so the block
/// stays rectangular.
fn attach_side_column(lines: &mut [ComposedLine], text: &str, left: bool) {
    let column_width = char_count(text) + 1;
    for (row_index, line) in lines.iter_mut().enumerate() {
        let cell = if row_index == 0 {
            format!("{text}{}", " ".repeat(column_width - char_count(text)))
        } else {
            " ".repeat(column_width)
        };
        line.text = if left {
            format!("{cell}{}", line.text)
        } else {
            format!("{}{cell}", line.text)
        };
    }
}

/// The error overlay replaces the whole control: same body height, always
/// framed, message centered.
fn compose_overlay(
    overlay: &Overlay,
    width: Width,
    terminal_width: usize,
) -> Vec<ComposedLine> {
    let inner_width = match width {
        Width::Auto => char_count(&overlay.message).max(char_count(&overlay.title) + 2),
        Width::Fill => terminal_width.saturating_sub(4),
        Width::Fixed(total) => total.saturating_sub(4),
    };

    let height = overlay.height.max(1);
    let message_row = height / 2;

    let mut body = Vec::with_capacity(height);
    for row_index in 0..height {
        let row = if row_index == message_row {
            LayoutRow::centered(overlay.message.clone(), overlay.style.clone())
        } else {
            LayoutRow::new("", overlay.style.clone())
        };
        body.push(ComposedLine {
            text: fit_row(&row, inner_width),
            style: row.style,
        });
    }

    frame_lines(
        body,
        inner_width,
        &Frame {
            title: Some(overlay.title.clone()),
            style: overlay.style.clone(),
        },
    )
}

/// Queue the crossterm commands for a space-separated style token string.
/// Lenient: unknown tokens are ignored; `on` switches to background colors.
fn queue_style<W: Write>(write: &mut W, style: &str) -> Result<()> {
    let mut background = false;
    for token in style.split_whitespace() {
        if token == "on" {
            background = true;
        } else if let Some(color) = parse_color(token) {
            if background {
                queue!(write, SetBackgroundColor(color))?;
            } else {
                queue!(write, SetForegroundColor(color))?;
            }
        } else if let Some(attribute) = parse_attribute(token) {
            queue!(write, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

fn parse_color(token: &str) -> Option<Color> {
    // grey0..grey100 map onto the xterm greyscale ramp.
    if let Some(level) = token
        .strip_prefix("grey")
        .or_else(|| token.strip_prefix("gray"))
        .and_then(|rest| rest.parse::<u32>().ok())
    {
        let level = level.min(100);
        return Some(Color::AnsiValue(232 + (level * 23 / 100) as u8));
    }

    match token {
        "black" => Some(Color::Black),
        "red" | "dark_red" => Some(Color::DarkRed),
        "green" | "dark_green" => Some(Color::DarkGreen),
        "yellow" | "dark_yellow" => Some(Color::DarkYellow),
        "blue" | "dark_blue" => Some(Color::DarkBlue),
        "magenta" | "dark_magenta" => Some(Color::DarkMagenta),
        "cyan" | "dark_cyan" => Some(Color::DarkCyan),
        "white" => Some(Color::Grey),
        "grey" | "gray" | "bright_black" => Some(Color::DarkGrey),
        "bright_red" => Some(Color::Red),
        "bright_green" => Some(Color::Green),
        "bright_yellow" => Some(Color::Yellow),
        "bright_blue" => Some(Color::Blue),
        "bright_magenta" => Some(Color::Magenta),
        "bright_cyan" => Some(Color::Cyan),
        "bright_white" => Some(Color::White),
        _ => None,
    }
}

fn parse_attribute(token: &str) -> Option<Attribute> {
    match token {
        "bold" => Some(Attribute::Bold),
        "dim" => Some(Attribute::Dim),
        "italic" => Some(Attribute::Italic),
        "underline" => Some(Attribute::Underlined),
        "reverse" => Some(Attribute::Reverse),
        "blink" => Some(Attribute::SlowBlink),
        "blink2" => Some(Attribute::RapidBlink),
        "strikethrough" => Some(Attribute::CrossedOut),
        "hidden" => Some(Attribute::Hidden),
        _ => None,
    }
}
