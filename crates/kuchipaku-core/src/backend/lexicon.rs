use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::unicode::{is_hiragana_reading, is_kanji, katakana_to_hiragana_char};

use super::{BackendError, HiraganaBackend};

#[derive(Deserialize)]
struct LexiconFile {
    readings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[readings] table is empty")]
    Empty,
    #[error("empty surface key")]
    EmptySurface,
    #[error("surface {0:?} is more than one character; readings are looked up per character")]
    CompoundSurface(String),
    #[error("reading for {surface:?} is not hiragana: {reading:?}")]
    InvalidReading { surface: String, reading: String },
}

/// Parse lexicon TOML into a sorted `BTreeMap<surface, reading>`.
///
/// Every surface is a single character: the encoder hands the backend one
/// visible character at a time, so a compound key could never match.
///
/// ```toml
/// [readings]
/// "猫" = "ねこ"
/// "吾" = "わが"
/// ```
pub fn parse_lexicon_toml(toml_str: &str) -> Result<BTreeMap<String, String>, LexiconError> {
    let file: LexiconFile =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    if file.readings.is_empty() {
        return Err(LexiconError::Empty);
    }

    for (surface, reading) in &file.readings {
        if surface.is_empty() {
            return Err(LexiconError::EmptySurface);
        }
        if surface.chars().nth(1).is_some() {
            return Err(LexiconError::CompoundSurface(surface.clone()));
        }
        if !is_hiragana_reading(reading) {
            return Err(LexiconError::InvalidReading {
                surface: surface.clone(),
                reading: reading.clone(),
            });
        }
    }

    Ok(file.readings)
}

/// Character → reading lexicon.
///
/// Characters not covered by any entry are folded like `KanaBackend` does.
/// In strict mode an uncovered kanji is an error instead.
#[derive(Debug, Clone)]
pub struct LexiconBackend {
    readings: HashMap<char, String>,
    strict: bool,
}

impl LexiconBackend {
    /// Entries whose surface is not exactly one character are skipped;
    /// `parse_lexicon_toml` rejects them up front.
    pub fn from_readings(readings: BTreeMap<String, String>) -> Self {
        let readings = readings
            .into_iter()
            .filter_map(|(surface, reading)| {
                let mut chars = surface.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, reading)),
                    _ => None,
                }
            })
            .collect();
        Self {
            readings,
            strict: false,
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconError> {
        Ok(Self::from_readings(parse_lexicon_toml(toml_str)?))
    }

    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        let lexicon = Self::from_toml(&content)?;
        debug!(path = %path.display(), entries = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.readings.get(&c).map(String::as_str)
    }
}

impl HiraganaBackend for LexiconBackend {
    fn to_hiragana(&self, text: &str) -> Result<String, BackendError> {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if let Some(reading) = self.get(c) {
                out.push_str(reading);
            } else if self.strict && is_kanji(c) {
                return Err(BackendError::Unreadable {
                    text: text.to_string(),
                    ch: c,
                });
            } else {
                out.push(katakana_to_hiragana_char(c));
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = r#"
[readings]
"吾" = "わが"
"輩" = "はい"
"猫" = "ねこ"
"今" = "いま"
"#;

    fn lexicon() -> LexiconBackend {
        LexiconBackend::from_toml(LEXICON).unwrap()
    }

    #[test]
    fn single_character_lookup() {
        let lx = lexicon();
        assert_eq!(lx.len(), 4);
        assert_eq!(lx.to_hiragana("猫").unwrap(), "ねこ");
        assert_eq!(lx.to_hiragana("吾").unwrap(), "わが");
    }

    #[test]
    fn multi_character_input_is_read_per_character() {
        let lx = lexicon();
        assert_eq!(lx.to_hiragana("吾輩は猫").unwrap(), "わがはいはねこ");
        assert_eq!(lx.to_hiragana("今日").unwrap(), "いま日");
    }

    #[test]
    fn error_compound_surface() {
        let err = parse_lexicon_toml("[readings]\n\"猫\" = \"ねこ\"\n\"吾輩\" = \"わがはい\"\n")
            .unwrap_err();
        assert!(matches!(err, LexiconError::CompoundSurface(ref s) if s == "吾輩"));
        assert!(LexiconBackend::from_toml("[readings]\n\"今日\" = \"きょう\"\n").is_err());
    }

    #[test]
    fn from_readings_skips_compound_surfaces() {
        let readings = BTreeMap::from([
            ("吾輩".to_string(), "わがはい".to_string()),
            ("猫".to_string(), "ねこ".to_string()),
        ]);
        let lx = LexiconBackend::from_readings(readings);
        assert_eq!(lx.len(), 1);
        assert_eq!(lx.get('猫'), Some("ねこ"));
    }

    #[test]
    fn uncovered_characters_fold_or_pass() {
        let lx = lexicon();
        assert_eq!(lx.to_hiragana("ネコ猫").unwrap(), "ねこねこ");
        assert_eq!(lx.to_hiragana("犬").unwrap(), "犬");
        assert_eq!(lx.to_hiragana("日").unwrap(), "日");
        assert_eq!(lx.to_hiragana("").unwrap(), "");
    }

    #[test]
    fn strict_rejects_uncovered_kanji() {
        let lx = lexicon().strict(true);
        assert!(lx.is_strict());
        assert_eq!(lx.to_hiragana("猫だ").unwrap(), "ねこだ");
        let err = lx.to_hiragana("犬だ").unwrap_err();
        assert!(matches!(err, BackendError::Unreadable { ch: '犬', .. }));
    }

    #[test]
    fn error_empty_readings() {
        let err = parse_lexicon_toml("[readings]\n").unwrap_err();
        assert!(matches!(err, LexiconError::Empty));
    }

    #[test]
    fn error_non_hiragana_reading() {
        let err = parse_lexicon_toml("[readings]\n\"猫\" = \"ネコ\"\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidReading { .. }));
        assert!(err.to_string().contains("猫"));
    }

    #[test]
    fn error_empty_reading() {
        let err = parse_lexicon_toml("[readings]\n\"猫\" = \"\"\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidReading { .. }));
    }

    #[test]
    fn error_empty_surface() {
        let err = parse_lexicon_toml("[readings]\n\"\" = \"ねこ\"\n").unwrap_err();
        assert!(matches!(err, LexiconError::EmptySurface));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_lexicon_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn long_vowel_mark_is_a_valid_reading() {
        let lx = LexiconBackend::from_toml("[readings]\n\"麺\" = \"めーん\"\n").unwrap();
        assert_eq!(lx.get('麺'), Some("めーん"));
    }
}
