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

use crate::{Chooser, ChooserConfig, Variant};

/// Marker variant for [FilterChooser]. All behavior is the base control's;
/// construction turns the filter row on.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterVariant;

impl Variant for FilterVariant {}

/// A scrollable chooser with substring filtering always enabled: typing
/// narrows the list, backspace widens it again, and every mutation re-filters
/// the master list and resyncs the cursor. Use a plain [crate::Chooser] when
/// filtering should stay off.
pub type FilterChooser = Chooser<FilterVariant>;

impl Chooser<FilterVariant> {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterChooser::with_config(choices, ChooserConfig::default())
    }

    pub fn with_config<I, S>(choices: I, config: ChooserConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = ChooserConfig {
            filtering: true,
            ..config
        };
        Chooser::assemble(choices, config, FilterVariant)
    }
}
