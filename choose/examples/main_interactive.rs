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

//! Interactive tour of the chooser controls. Run with:
//! `cargo run --example main_interactive`

use r3bl_choose::{matrix, Chooser, ChooserConfig, FileChooser, FileChooserConfig,
                  FilterChooser, MultiChooser, MultiChooserConfig, ShortcutChooser,
                  ShortcutChooserConfig, StandardVariant};

fn main() {
    loop {
        let mut menu = ShortcutChooser::with_config(
            [
                "Single select",
                "Filtered select",
                "Multi select (pick 2-3)",
                "Themed select",
                "Browse for a file",
                "Exit",
            ],
            ShortcutChooserConfig {
                base: ChooserConfig {
                    title: "r3bl_choose demos".into(),
                    ..ChooserConfig::default()
                },
                no_confirm: true,
                show_shortcuts: true,
                ..ShortcutChooserConfig::default()
            },
        )
        .expect("demo shortcut keys are valid");

        match menu.run().map(|picked| picked.index) {
            Some(0) => single_select(),
            Some(1) => filtered_select(),
            Some(2) => multi_select(),
            Some(3) => themed_select(),
            Some(4) => browse_for_file(),
            _ => break,
        }
    }
}

fn single_select() {
    let mut chooser = Chooser::<StandardVariant>::with_config(
        ["apple", "banana", "cherry", "dragonfruit", "elderberry"],
        ChooserConfig {
            title: "Pick a fruit".into(),
            max_height: Some(8),
            ..ChooserConfig::default()
        },
    );
    match chooser.run() {
        Some(picked) => println!("You picked: {} (index {})", picked.value, picked.index),
        None => println!("Nothing picked"),
    }
}

fn filtered_select() {
    let cities = [
        "Amsterdam", "Athens", "Austin", "Bangalore", "Barcelona", "Berlin",
        "Boston", "Buenos Aires", "Cairo", "Chicago", "Copenhagen", "Denver",
        "Dublin", "Helsinki", "Istanbul", "Lagos", "Lisbon", "London", "Madrid",
        "Melbourne", "Mexico City", "Mumbai", "Nairobi", "New York", "Oslo",
        "Paris", "Prague", "Seattle", "Seoul", "Singapore", "Stockholm", "Sydney",
        "Tokyo", "Toronto", "Vienna", "Warsaw", "Zurich",
    ];
    let mut chooser = FilterChooser::with_config(
        cities,
        ChooserConfig {
            title: "Pick a city (type to filter)".into(),
            max_height: Some(12),
            ..ChooserConfig::default()
        },
    );
    match chooser.run() {
        Some(picked) => println!("You picked: {}", picked.value),
        None => println!("Nothing picked"),
    }
}

fn multi_select() {
    let mut chooser = MultiChooser::with_config(
        ["rustfmt", "clippy", "miri", "cargo-audit", "cargo-deny", "bacon"],
        MultiChooserConfig {
            base: ChooserConfig {
                title: "Pick your tools (space toggles)".into(),
                max_height: Some(10),
                ..ChooserConfig::default()
            },
            min_selected: Some(2),
            max_selected: Some(3),
            ..MultiChooserConfig::default()
        },
    );
    match chooser.run() {
        Some((values, _indices)) => println!("You picked: {}", values.join(", ")),
        None => println!("Nothing picked"),
    }
}

fn themed_select() {
    let mut chooser = Chooser::<StandardVariant>::with_config(
        ["red pill", "blue pill"],
        ChooserConfig {
            title: "Choose".into(),
            styles: matrix(),
            ..ChooserConfig::default()
        },
    );
    match chooser.run() {
        Some(picked) => println!("You picked: {}", picked.value),
        None => println!("Nothing picked"),
    }
}

fn browse_for_file() {
    let Ok(mut chooser) = FileChooser::with_config(
        ".",
        FileChooserConfig {
            base: ChooserConfig {
                title: "Pick a file".into(),
                max_height: Some(15),
                ..ChooserConfig::default()
            },
            ..FileChooserConfig::default()
        },
    ) else {
        println!("Could not build the file chooser");
        return;
    };
    match chooser.run() {
        Some(path) => println!("You picked: {}", path.display()),
        None => println!("Nothing picked"),
    }
}
