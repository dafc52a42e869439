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

//! The layout tree the chooser engine hands to a [crate::Renderer]: ordered
//! rows with a row-level style, optionally wrapped in a bordered frame with a
//! title, optionally composed with a header block, optionally covered by a
//! transient overlay. Plain data; the renderer owns all painting concerns.

/// Where a header block sits relative to the choice panel.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum HeaderPlacement {
    #[default]
    InsideTop,
    OutsideTop,
    InsideLeft,
    OutsideLeft,
    InsideRight,
    OutsideRight,
}

impl HeaderPlacement {
    pub fn is_inside(self) -> bool {
        matches!(
            self,
            HeaderPlacement::InsideTop
                | HeaderPlacement::InsideLeft
                | HeaderPlacement::InsideRight
        )
    }

    pub fn is_side(self) -> bool {
        matches!(
            self,
            HeaderPlacement::InsideLeft
                | HeaderPlacement::OutsideLeft
                | HeaderPlacement::InsideRight
                | HeaderPlacement::OutsideRight
        )
    }

    pub fn is_left(self) -> bool {
        matches!(
            self,
            HeaderPlacement::InsideLeft | HeaderPlacement::OutsideLeft
        )
    }
}

/// Horizontal sizing mode of the control.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Width {
    /// Fit the widest row.
    #[default]
    Auto,
    /// Expand to the terminal width.
    Fill,
    /// Fixed total column count, border included.
    Fixed(usize),
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum RowAlign {
    #[default]
    Left,
    Center,
}

/// One renderable row. A `'\t'` in `text` splits it into a left part and a
/// right-aligned remainder (used by the filter count).
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct LayoutRow {
    pub text: String,
    pub style: String,
    pub align: RowAlign,
}

impl LayoutRow {
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        LayoutRow {
            text: text.into(),
            style: style.into(),
            align: RowAlign::Left,
        }
    }

    pub fn centered(text: impl Into<String>, style: impl Into<String>) -> Self {
        LayoutRow {
            text: text.into(),
            style: style.into(),
            align: RowAlign::Center,
        }
    }
}

/// Bordered frame around the rows, with an optional centered title.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Frame {
    pub title: Option<String>,
    pub style: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderBlock {
    pub text: String,
    pub style: String,
    pub placement: HeaderPlacement,
}

/// Transient message covering the control (validation errors). Dismissed by
/// the next key press; `height` matches the body it covers so the control
/// does not jump.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Overlay {
    pub title: String,
    pub message: String,
    pub style: String,
    pub height: usize,
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Layout {
    pub frame: Option<Frame>,
    pub header: Option<HeaderBlock>,
    pub rows: Vec<LayoutRow>,
    pub overlay: Option<Overlay>,
    pub width: Width,
}
