//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::unicode::is_text_whitespace;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub encoder: EncoderSettings,
    #[serde(default)]
    pub markup: MarkupSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncoderSettings {
    punctuation: String,
    /// Parsed from `punctuation`.
    #[serde(skip)]
    punctuation_set: HashSet<char>,
}

impl EncoderSettings {
    pub fn punctuation(&self) -> &str {
        &self.punctuation
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation_set.contains(&c)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkupSettings {
    #[serde(default)]
    pub custom_paired: Vec<String>,
    #[serde(default)]
    pub custom_valued: Vec<String>,
    #[serde(default)]
    pub custom_markers: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.encoder.punctuation_set = s.encoder.punctuation.chars().collect();
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.encoder.punctuation.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "encoder.punctuation".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.encoder.punctuation.chars().any(is_text_whitespace) {
        // Whitespace never reaches the punctuation check.
        return Err(SettingsError::InvalidValue {
            field: "encoder.punctuation".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    macro_rules! check_tag_names {
        ($field:ident) => {
            for name in &s.markup.$field {
                if !is_valid_tag_name(name) {
                    return Err(SettingsError::InvalidValue {
                        field: concat!("markup.", stringify!($field)).to_string(),
                        reason: format!(
                            "tag name {:?} must be non-empty ASCII alphanumerics, '-' or '_'",
                            name
                        ),
                    });
                }
            }
        };
    }

    check_tag_names!(custom_paired);
    check_tag_names!(custom_valued);
    check_tag_names!(custom_markers);

    Ok(())
}

fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        for c in ".,。、！？!?；;：:「」『』()（）[]【】〈〉《》\"…‥・".chars() {
            assert!(s.encoder.is_punctuation(c), "{c} should be punctuation");
        }
        assert!(!s.encoder.is_punctuation('\''));
        assert!(!s.encoder.is_punctuation('ー'));
        assert!(!s.encoder.is_punctuation('～'));
        assert!(s.markup.custom_paired.is_empty());
        assert!(s.markup.custom_valued.is_empty());
        assert!(s.markup.custom_markers.is_empty());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[encoder]
punctuation = "。、～"

[markup]
custom_paired = ["ruby"]
custom_markers = ["se"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.encoder.is_punctuation('～'));
        assert!(!s.encoder.is_punctuation('！'));
        assert_eq!(s.encoder.punctuation(), "。、～");
        assert_eq!(s.markup.custom_paired, vec!["ruby".to_string()]);
        assert!(s.markup.custom_valued.is_empty());
        assert_eq!(s.markup.custom_markers, vec!["se".to_string()]);
    }

    #[test]
    fn markup_section_is_optional() {
        let s = parse_settings_toml("[encoder]\npunctuation = \"。\"\n").unwrap();
        assert!(s.markup.custom_paired.is_empty());
    }

    #[test]
    fn error_empty_punctuation() {
        let err = parse_settings_toml("[encoder]\npunctuation = \"\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("encoder.punctuation"));
    }

    #[test]
    fn error_whitespace_in_punctuation() {
        let err = parse_settings_toml("[encoder]\npunctuation = \"。 、\"\n").unwrap_err();
        assert!(err.to_string().contains("whitespace"));
        let err = parse_settings_toml("[encoder]\npunctuation = \"。\\u001C\"\n").unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn error_bad_tag_name() {
        let toml = r#"
[encoder]
punctuation = "。"

[markup]
custom_valued = ["voice]"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("markup.custom_valued"));
    }

    #[test]
    fn error_empty_tag_name() {
        let toml = r#"
[encoder]
punctuation = "。"

[markup]
custom_paired = [""]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("markup.custom_paired"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[markup]\ncustom_paired = []\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
