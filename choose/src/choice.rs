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

/// One list entry.
///
/// `index` is the position in the unfiltered master list and never changes
/// once assigned; filtering produces a view over the master list, never a
/// renumbering. `is_highlighted` is derived state, recomputed every pass.
/// `is_selected` is persistent and only meaningful for multi-select.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Choice {
    pub index: usize,
    pub value: String,
    pub is_highlighted: bool,
    pub is_selected: bool,
    pub shortcut_key: Option<char>,
}

impl Choice {
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Choice {
            index,
            value: value.into(),
            ..Choice::default()
        }
    }
}
