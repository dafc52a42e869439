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

//! ### Scroll windowing
//!
//! Given the display list length and a visible row budget, compute which
//! slice of the list to paint and whether the arrow indicator rows are
//! needed. The cursor is kept [SCROLL_TOP_OFFSET] rows from the top of the
//! window, so scrolling reads as the list moving under a mostly-stationary
//! cursor instead of the cursor racing to an edge.
//!
//! ```text
//!   ··· ▲ ···      <- up arrow, shown iff start > 0 (consumes one row)
//!   item 4
//!   item 5
//!   item 6
//! ▶ item 7         <- cursor, SCROLL_TOP_OFFSET rows below the window top
//!   item 8
//!   ··· ▼ ···      <- down arrow, shown iff more items below (one row)
//! ```

/// Rows between the top of the window and the cursor, capped at half the
/// window when the budget is small.
pub const SCROLL_TOP_OFFSET: usize = 3;

/// Floor on the row budget once scrolling is required. Anything smaller makes
/// the offset rule degenerate.
pub const MIN_VISIBLE_WHEN_SCROLLING: usize = SCROLL_TOP_OFFSET + 2;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScrollWindow {
    /// First display-list position to paint.
    pub start: usize,
    /// One past the last display-list position to paint.
    pub end: usize,
    pub show_up_arrow: bool,
    pub show_down_arrow: bool,
}

/// Compute the visible slice for a display list of `total_items` given
/// `max_items` rows and the cursor at `highlighted_filtered_index`.
///
/// Each shown arrow consumes one row out of the budget. When the up arrow is
/// shown, the window skips one extra row so two items scroll fully under the
/// arrow rather than one.
pub fn compute_scroll_window(
    total_items: usize,
    max_items: usize,
    highlighted_filtered_index: usize,
) -> ScrollWindow {
    if total_items <= max_items {
        return ScrollWindow {
            start: 0,
            end: total_items,
            show_up_arrow: false,
            show_down_arrow: false,
        };
    }

    // Position the cursor SCROLL_TOP_OFFSET rows from the top of the window.
    let top_offset = SCROLL_TOP_OFFSET.min(max_items / 2);
    let mut start = highlighted_filtered_index.saturating_sub(top_offset);

    let show_up_arrow = start > 0;
    let show_down_arrow = (start + max_items) < total_items;
    let arrow_rows = usize::from(show_up_arrow) + usize::from(show_down_arrow);

    if show_up_arrow {
        start += 1;
    }

    // Never scroll past the bottom.
    let choice_rows = max_items.saturating_sub(arrow_rows).max(1);
    start = start.min(total_items - choice_rows);
    let end = start + choice_rows;

    ScrollWindow {
        start,
        end,
        show_up_arrow,
        show_down_arrow,
    }
}

/// Floor the row budget once the list no longer fits, then make sure at least
/// one row survives whatever the header/footer accounting subtracted.
pub fn floor_visible_budget(total_items: usize, available_rows: usize) -> usize {
    let floored = if total_items > available_rows {
        available_rows.max(MIN_VISIBLE_WHEN_SCROLLING)
    } else {
        available_rows
    };
    floored.max(1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn everything_fits_no_arrows() {
        let window = compute_scroll_window(4, 10, 2);
        assert_eq!(
            window,
            ScrollWindow {
                start: 0,
                end: 4,
                show_up_arrow: false,
                show_down_arrow: false,
            }
        );
    }

    #[test]
    fn at_the_top_only_the_down_arrow_shows() {
        let window = compute_scroll_window(20, 7, 0);
        assert_eq!(window.start, 0);
        assert!(!window.show_up_arrow);
        assert!(window.show_down_arrow);
        // One row lost to the down arrow.
        assert_eq!(window.end - window.start, 6);
    }

    #[test]
    fn mid_list_shows_both_arrows_and_skips_a_row_under_the_up_arrow() {
        let window = compute_scroll_window(20, 7, 10);
        // start = 10 - 3 = 7, then +1 for the up-arrow skip rule.
        assert_eq!(window.start, 8);
        assert!(window.show_up_arrow);
        assert!(window.show_down_arrow);
        // Two rows lost to arrows.
        assert_eq!(window.end - window.start, 5);
        // Cursor stays inside the painted band.
        assert!((window.start..window.end).contains(&10));
    }

    #[test]
    fn bottom_of_list_clamps_and_drops_the_down_arrow() {
        let window = compute_scroll_window(20, 7, 19);
        assert!(window.show_up_arrow);
        assert!(!window.show_down_arrow);
        assert_eq!(window.end, 20);
        assert_eq!(window.start, 14);
        assert!((window.start..window.end).contains(&19));
    }

    #[test]
    fn top_offset_is_capped_at_half_the_budget() {
        // max_items = 5 caps the offset at 2, so the cursor sits 2 rows in.
        let window = compute_scroll_window(20, 5, 10);
        assert_eq!(window.start, 9); // 10 - 2, +1 for the up-arrow skip.
        assert!((window.start..window.end).contains(&10));
    }

    #[test]
    fn cursor_never_escapes_the_band_while_walking_the_list() {
        for cursor in 0..30 {
            let window = compute_scroll_window(30, 7, cursor);
            assert!(
                (window.start..window.end).contains(&cursor),
                "cursor {cursor} escaped window {window:?}"
            );
        }
    }

    #[test]
    fn budget_floor_applies_only_when_scrolling() {
        assert_eq!(floor_visible_budget(3, 2), 2);
        assert_eq!(floor_visible_budget(30, 2), MIN_VISIBLE_WHEN_SCROLLING);
        assert_eq!(floor_visible_budget(0, 0), 1);
    }
}
