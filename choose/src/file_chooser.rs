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

//! Chooser over a directory listing, with drill-down navigation: confirming
//! a directory descends into it instead of exiting; confirming a file (or, in
//! directory mode, the synthetic "select this directory" entry) finalizes
//! with the resolved path.

use std::{fs,
          io::Result,
          path::{Path, PathBuf, MAIN_SEPARATOR}};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{is_fully_uninteractive_terminal, Chooser, ChooserConfig, ChooserState,
            ConfigError, CrosstermKeyReader, CrosstermRenderer, KeyReader, Renderer,
            TTYResult, Variant};

/// What a master-list entry stands for. Parallel to the choice list; rebuilt
/// together with it on every directory change.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    /// Synthetic "select this directory" row (directory mode).
    SelectHere,
    /// Synthetic `./` row.
    SelfDir,
    /// Synthetic `../` row.
    ParentDir,
    Dir(String),
    File(String),
}

/// Extension-point implementation for [FileChooser]: `prepare` re-reads the
/// current directory into a fresh master list, and `confirm` turns
/// Enter-on-a-directory into a descend instead of an exit.
#[derive(Debug)]
pub struct FileVariant {
    current_path: PathBuf,
    choose_dirs: bool,
    files_at_top: bool,
    exclude_hidden: bool,
    exclude_dunder: bool,
    globs: GlobSet,
    auto_filter: bool,
    entries: Vec<Entry>,
}

impl FileVariant {
    fn excluded(&self, name: &str) -> bool {
        (self.exclude_hidden && name.starts_with('.'))
            || (self.exclude_dunder && name.starts_with("__"))
    }
}

impl Variant for FileVariant {
    fn prepare(&mut self, state: &mut ChooserState, row_budget: usize) {
        // Silent recoveries: a missing path falls back to the working
        // directory, a file path resolves to its parent with that file
        // pre-highlighted.
        let mut highlighted_file = String::new();
        if !self.current_path.exists() {
            self.current_path = PathBuf::from(".");
        }
        if self.current_path.is_file() {
            if let Some(name) = self.current_path.file_name() {
                highlighted_file = name.to_string_lossy().into_owned();
            }
            if let Some(parent) = self.current_path.parent() {
                self.current_path = parent.to_path_buf();
            }
        }
        if let Ok(resolved) = fs::canonicalize(&self.current_path) {
            self.current_path = resolved;
        }
        let path = self.current_path.clone();
        tracing::debug!(path = %path.display(), "listing directory");

        let mut dirs: Vec<String> = Vec::new();
        let mut files: Vec<String> = Vec::new();
        if let Ok(read_dir) = fs::read_dir(&path) {
            for dir_entry in read_dir.flatten() {
                let name = dir_entry.file_name().to_string_lossy().into_owned();
                if self.excluded(&name) {
                    continue;
                }
                match dir_entry.file_type() {
                    Ok(file_type) if file_type.is_dir() => dirs.push(name),
                    Ok(file_type) if file_type.is_file() => {
                        if self.globs.is_match(&name) {
                            files.push(name);
                        }
                    }
                    _ => {}
                }
            }
        }
        dirs.sort_by_key(|name| name.to_lowercase());
        files.sort_by_key(|name| name.to_lowercase());

        // Synthetic entries are pinned: never filtered, always on top.
        let mut values: Vec<String> = Vec::new();
        let mut entries: Vec<Entry> = Vec::new();
        if self.choose_dirs {
            values.push(format!("SELECT {}{}", path.display(), MAIN_SEPARATOR));
            entries.push(Entry::SelectHere);
        } else {
            values.push(format!(".{}    ({})", MAIN_SEPARATOR, path.display()));
            entries.push(Entry::SelfDir);
        }
        if let Some(parent) = path.parent() {
            values.push(format!("..{}   ({})", MAIN_SEPARATOR, parent.display()));
            entries.push(Entry::ParentDir);
        }
        let pinned_count = values.len();

        let mut listing: Vec<(String, Entry)> = Vec::new();
        if self.choose_dirs {
            for name in dirs {
                listing.push((format!("{name}{MAIN_SEPARATOR}"), Entry::Dir(name)));
            }
        } else {
            for name in files {
                listing.push((name.clone(), Entry::File(name)));
            }
            for name in dirs {
                listing.push((format!("{name}{MAIN_SEPARATOR}"), Entry::Dir(name)));
            }
            if !self.files_at_top {
                listing.sort_by_key(|(value, _)| value.to_lowercase());
            }
        }

        // First listed entry gets the cursor; in directory mode the SELECT
        // row does. A remembered file wins when present.
        let mut highlighted_index = 0;
        if !self.choose_dirs && !listing.is_empty() {
            highlighted_index = pinned_count;
            if !highlighted_file.is_empty() {
                if let Some(position) = listing
                    .iter()
                    .position(|(_, entry)| *entry == Entry::File(highlighted_file.clone()))
                {
                    highlighted_index = pinned_count + position;
                }
            }
        }

        for (value, entry) in listing {
            values.push(value);
            entries.push(entry);
        }
        self.entries = entries;

        state.replace_choices(values, pinned_count);
        state.highlighted_index = highlighted_index;
        state.highlighted_filtered_index = highlighted_index;

        // The filter row only appears once the listing outgrows the visible
        // budget (unless auto_filter is off, which keeps it always on).
        state.filtering_enabled =
            !self.auto_filter || state.choices.len() > row_budget;

        state.refilter();
    }

    fn confirm(&mut self, state: &mut ChooserState) -> bool {
        match self.entries.get(state.highlighted_index) {
            Some(Entry::SelectHere) | None => true,
            Some(Entry::SelfDir) => {
                // Re-list the same directory; do not exit.
                false
            }
            Some(Entry::ParentDir) => {
                if let Some(parent) = self.current_path.parent() {
                    self.current_path = parent.to_path_buf();
                }
                false
            }
            Some(Entry::Dir(name)) => {
                self.current_path = self.current_path.join(name);
                false
            }
            Some(Entry::File(name)) => {
                self.current_path = self.current_path.join(name);
                true
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileChooserConfig {
    pub base: ChooserConfig,
    /// Select a directory instead of a file. Adds the synthetic
    /// `SELECT <dir>` entry and lists only directories.
    pub choose_dirs: bool,
    /// List files grouped before directories instead of merge-sorted.
    pub files_at_top: bool,
    pub exclude_hidden: bool,
    /// Exclude `__dunder__` files and directories.
    pub exclude_dunder: bool,
    /// Glob patterns applied to file names (never to directories).
    pub globs: Vec<String>,
    /// Enable the filter row only when the listing outgrows the window.
    pub auto_filter: bool,
}

impl Default for FileChooserConfig {
    fn default() -> Self {
        FileChooserConfig {
            base: ChooserConfig::default(),
            choose_dirs: false,
            files_at_top: true,
            exclude_hidden: false,
            exclude_dunder: false,
            globs: vec!["*".into()],
            auto_filter: true,
        }
    }
}

/// A chooser over the file system. `run` returns the resolved path of the
/// confirmed file (or directory in directory mode), or `None` on
/// cancellation.
pub struct FileChooser {
    pub inner: Chooser<FileVariant>,
}

impl FileChooser {
    pub fn new(initial_path: impl Into<PathBuf>) -> Result<Self> {
        match FileChooser::with_config(initial_path, FileChooserConfig::default()) {
            Ok(chooser) => Ok(chooser),
            Err(error) => Err(std::io::Error::other(error)),
        }
    }

    pub fn with_config(
        initial_path: impl Into<PathBuf>,
        config: FileChooserConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.globs {
            builder.add(Glob::new(pattern)?);
        }
        let globs = builder.build()?;

        let variant = FileVariant {
            current_path: initial_path.into(),
            choose_dirs: config.choose_dirs,
            files_at_top: config.files_at_top,
            exclude_hidden: config.exclude_hidden,
            exclude_dunder: config.exclude_dunder,
            globs,
            auto_filter: config.auto_filter,
            entries: Vec::new(),
        };
        let inner = Chooser::assemble(Vec::<String>::new(), config.base, variant);
        Ok(FileChooser { inner })
    }

    pub fn current_path(&self) -> &Path {
        &self.inner.variant.current_path
    }

    /// Rebuild the listing for the current path outside of a run.
    pub fn refresh(&mut self) {
        let budget = self.inner.prepare_budget();
        self.inner
            .variant
            .prepare(&mut self.inner.state, budget);
    }

    /// Run against the real terminal; blocks until a file is confirmed or the
    /// control is cancelled.
    pub fn run(&mut self) -> Option<PathBuf> {
        if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
            return None;
        }
        let mut reader = match CrosstermKeyReader::acquire() {
            Ok(reader) => reader,
            Err(_) => return None,
        };
        let mut renderer = CrosstermRenderer::stdout(self.inner.base.transient);
        match self.run_with(&mut reader, &mut renderer) {
            Ok(result) => result,
            Err(_) => None,
        }
    }

    pub fn run_with(
        &mut self,
        reader: &mut dyn KeyReader,
        renderer: &mut dyn Renderer,
    ) -> Result<Option<PathBuf>> {
        let confirmed = self.inner.run_session(reader, renderer)?;
        if !confirmed {
            return Ok(None);
        }
        Ok(Some(self.inner.variant.current_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, File};

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{test_utils::{CaptureRenderer, TestVecKeyReader},
                Key};

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("alpha.txt")).unwrap();
        File::create(dir.path().join("beta.rs")).unwrap();
        create_dir(dir.path().join("subdir")).unwrap();
        File::create(dir.path().join("subdir").join("gamma.txt")).unwrap();
        dir
    }

    fn run_keys(chooser: &mut FileChooser, keys: Vec<Key>) -> Option<PathBuf> {
        let mut reader = TestVecKeyReader::new(keys);
        let mut renderer = CaptureRenderer::default();
        chooser.run_with(&mut reader, &mut renderer).unwrap()
    }

    #[test]
    fn listing_pins_synthetic_entries_and_sorts_the_rest() {
        let dir = fixture_dir();
        let mut chooser = FileChooser::new(dir.path()).unwrap();
        chooser.refresh();

        let values: Vec<&str> = chooser
            .inner
            .state
            .choices
            .iter()
            .map(|choice| choice.value.as_str())
            .collect();
        assert!(values[0].starts_with(&format!(".{MAIN_SEPARATOR}")));
        assert!(values[1].starts_with(&format!("..{MAIN_SEPARATOR}")));
        // Files grouped before directories, each sorted case-insensitively.
        assert_eq!(values[2], "alpha.txt");
        assert_eq!(values[3], "beta.rs");
        assert_eq!(values[4], format!("subdir{MAIN_SEPARATOR}"));
        // The first real file starts highlighted.
        assert_eq!(chooser.inner.state.highlighted_index, 2);
    }

    #[test]
    fn confirming_a_file_returns_its_resolved_path() {
        let dir = fixture_dir();
        let mut chooser = FileChooser::new(dir.path()).unwrap();
        let result = run_keys(&mut chooser, vec![Key::Enter]);
        let expected = fs::canonicalize(dir.path()).unwrap().join("alpha.txt");
        assert_eq!(result, Some(expected));
    }

    #[test]
    fn confirming_a_directory_descends_instead_of_exiting() {
        let dir = fixture_dir();
        let mut chooser = FileChooser::new(dir.path()).unwrap();
        // Cursor starts on alpha.txt (index 2); two Downs reach subdir/.
        let result = run_keys(
            &mut chooser,
            vec![Key::Down, Key::Down, Key::Enter, Key::Enter],
        );
        let expected = fs::canonicalize(dir.path())
            .unwrap()
            .join("subdir")
            .join("gamma.txt");
        assert_eq!(result, Some(expected));
    }

    #[test]
    fn parent_entry_ascends() {
        let dir = fixture_dir();
        let mut chooser = FileChooser::new(dir.path().join("subdir")).unwrap();
        // Home jumps to ./, Down reaches ../; confirming it re-lists the
        // parent, where Enter picks the first file.
        let result = run_keys(
            &mut chooser,
            vec![Key::Home, Key::Down, Key::Enter, Key::Enter],
        );
        let expected = fs::canonicalize(dir.path()).unwrap().join("alpha.txt");
        assert_eq!(result, Some(expected));
    }

    #[test]
    fn directory_mode_confirms_the_select_entry() {
        let dir = fixture_dir();
        let config = FileChooserConfig {
            choose_dirs: true,
            ..FileChooserConfig::default()
        };
        let mut chooser = FileChooser::with_config(dir.path(), config).unwrap();
        chooser.refresh();
        // Only the synthetic entries and directories are listed.
        assert!(chooser
            .inner
            .state
            .choices
            .iter()
            .all(|choice| !choice.value.ends_with(".txt")));
        let result = run_keys(&mut chooser, vec![Key::Enter]);
        assert_eq!(result, Some(fs::canonicalize(dir.path()).unwrap()));
    }

    #[test]
    fn directory_mode_descends_into_subdirectories() {
        let dir = fixture_dir();
        let config = FileChooserConfig {
            choose_dirs: true,
            ..FileChooserConfig::default()
        };
        let mut chooser = FileChooser::with_config(dir.path(), config).unwrap();
        // End reaches subdir/ (last entry), Enter descends, Enter confirms
        // the SELECT row of the subdirectory.
        let result = run_keys(&mut chooser, vec![Key::End, Key::Enter, Key::Enter]);
        let expected = fs::canonicalize(dir.path()).unwrap().join("subdir");
        assert_eq!(result, Some(expected));
    }

    #[test]
    fn glob_patterns_filter_files_only() {
        let dir = fixture_dir();
        let config = FileChooserConfig {
            globs: vec!["*.rs".into()],
            ..FileChooserConfig::default()
        };
        let mut chooser = FileChooser::with_config(dir.path(), config).unwrap();
        chooser.refresh();
        let values: Vec<&str> = chooser
            .inner
            .state
            .choices
            .iter()
            .map(|choice| choice.value.as_str())
            .collect();
        assert!(!values.contains(&"alpha.txt"));
        assert!(values.contains(&"beta.rs"));
        // Directories are not subject to the glob.
        assert!(values.contains(&format!("subdir{MAIN_SEPARATOR}").as_str()));
    }

    #[test]
    fn invalid_glob_is_a_construction_error() {
        let config = FileChooserConfig {
            globs: vec!["[".into()],
            ..FileChooserConfig::default()
        };
        assert!(matches!(
            FileChooser::with_config(".", config),
            Err(ConfigError::InvalidGlob(_))
        ));
    }

    #[test]
    fn initial_file_path_resolves_to_its_parent_with_the_file_highlighted() {
        let dir = fixture_dir();
        let mut chooser = FileChooser::new(dir.path().join("beta.rs")).unwrap();
        chooser.refresh();
        assert_eq!(
            chooser.current_path(),
            fs::canonicalize(dir.path()).unwrap()
        );
        let highlighted = chooser.inner.state.highlighted_choice().unwrap();
        assert_eq!(highlighted.value, "beta.rs");
    }

    #[test]
    #[serial]
    fn missing_initial_path_falls_back_to_the_working_directory() {
        let mut chooser =
            FileChooser::new("/definitely/not/a/real/path/anywhere").unwrap();
        chooser.refresh();
        let expected = fs::canonicalize(std::env::current_dir().unwrap()).unwrap();
        assert_eq!(chooser.current_path(), expected);
    }

    #[test]
    fn hidden_and_dunder_entries_can_be_excluded() {
        let dir = fixture_dir();
        File::create(dir.path().join(".hidden")).unwrap();
        create_dir(dir.path().join("__pycache__")).unwrap();
        let config = FileChooserConfig {
            exclude_hidden: true,
            exclude_dunder: true,
            ..FileChooserConfig::default()
        };
        let mut chooser = FileChooser::with_config(dir.path(), config).unwrap();
        chooser.refresh();
        let values: Vec<&str> = chooser
            .inner
            .state
            .choices
            .iter()
            .map(|choice| choice.value.as_str())
            .collect();
        assert!(!values.iter().any(|value| value.contains(".hidden")));
        assert!(!values.iter().any(|value| value.contains("__pycache__")));
    }
}
