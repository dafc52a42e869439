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

use thiserror::Error;

/// Construction-time configuration errors. These are the only fatal errors
/// in the crate: everything at run time is recovered internally and `run()`
/// simply returns the empty result.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("too few shortcut keys: {given} keys for {required} choices")]
    TooFewShortcutKeys { given: usize, required: usize },

    #[error("too many shortcut keys: {given} keys for {required} choices")]
    TooManyShortcutKeys { given: usize, required: usize },

    #[error("duplicate shortcut key: {key:?}")]
    DuplicateShortcutKey { key: char },

    #[error("invalid glob pattern")]
    InvalidGlob(#[from] globset::Error),
}
