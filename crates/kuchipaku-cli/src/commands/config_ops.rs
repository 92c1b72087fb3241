use std::fs;
use std::path::Path;

use kuchipaku_core::backend::parse_lexicon_toml;
use kuchipaku_core::settings;

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: encoder.punctuation={} chars, custom tags={}",
        s.encoder.punctuation().chars().count(),
        s.markup.custom_paired.len() + s.markup.custom_valued.len() + s.markup.custom_markers.len()
    );
}

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(file: &Path) {
    let content = die!(
        fs::read_to_string(file),
        "Error reading settings {}: {}",
        file.display()
    );
    die!(settings::init_custom(content), "Error in settings: {}");
    tracing::debug!(path = %file.display(), "custom settings installed");
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_lexicon_toml(&content), "Error: {}");
    println!("OK: {} readings", map.len());
}
