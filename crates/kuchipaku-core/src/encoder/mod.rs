//! Script text → per-character phoneme counts and phoneme stream.
//!
//! Pipeline per text: strip markup, drop whitespace, then for every remaining
//! character either emit a silent punctuation slot or read it through the
//! hiragana backend and map each kana to its mouth shape.


use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::backend::{BackendError, HiraganaBackend};
use crate::markup::MarkupStripper;
use crate::phoneme::{sound_of, Phoneme, Sound};
use crate::settings::{settings, EncoderSettings, Settings};
use crate::unicode::is_text_whitespace;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("hiragana backend failed: {0}")]
    Backend(#[from] BackendError),
    #[error("invalid markup rule: {0}")]
    Markup(#[from] regex::Error),
}

/// Slots produced by one visible character. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRecord {
    pub source: char,
    pub sounds: Vec<Sound>,
}

impl CharRecord {
    fn silent(source: char) -> Self {
        Self {
            source,
            sounds: vec![Sound::Silent],
        }
    }

    /// Number of slots; what the count digit for this character encodes.
    pub fn count(&self) -> usize {
        self.sounds.len()
    }

    pub fn phonemes(&self) -> impl Iterator<Item = Phoneme> + '_ {
        self.sounds.iter().flat_map(|s| s.phonemes())
    }
}

/// Serialized result for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// One decimal count per visible character, e.g. `"2212"`.
    pub counts: String,
    /// Comma-joined phoneme tokens, e.g. `"a,a,a,i,a"`.
    pub phonemes: String,
}

impl Conversion {
    /// Result for text with nothing left after markup and whitespace removal.
    pub fn empty() -> Self {
        Self {
            counts: "0".to_string(),
            phonemes: "-".to_string(),
        }
    }

    pub fn from_records(records: &[CharRecord]) -> Self {
        if records.is_empty() {
            return Self::empty();
        }
        let mut counts = String::with_capacity(records.len());
        for r in records {
            let count = r.count();
            if count >= 10 {
                // No separator between counts, so this character's digits run
                // into the next one's.
                warn!(source = %r.source, count, "phoneme count needs more than one digit");
            }
            counts.push_str(&count.to_string());
        }
        let tokens: Vec<&str> = records
            .iter()
            .flat_map(|r| r.phonemes())
            .map(Phoneme::symbol)
            .collect();
        let phonemes = if tokens.is_empty() {
            "-".to_string()
        } else {
            tokens.join(",")
        };
        Self { counts, phonemes }
    }
}

/// Converts script text using one backend for its whole lifetime.
pub struct PhonemeEncoder<B> {
    backend: B,
    encoder: EncoderSettings,
    markup: MarkupStripper,
}

impl<B: HiraganaBackend> PhonemeEncoder<B> {
    /// Encoder configured from the global settings.
    pub fn new(backend: B) -> Result<Self, EncodeError> {
        Self::with_settings(backend, settings())
    }

    pub fn with_settings(backend: B, settings: &Settings) -> Result<Self, EncodeError> {
        Ok(Self {
            backend,
            encoder: settings.encoder.clone(),
            markup: MarkupStripper::from_settings(&settings.markup)?,
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Per-character records for `text`; empty when nothing visible remains.
    ///
    /// A backend failure aborts the whole text: counts and phonemes must stay
    /// aligned, so there is no partial result.
    pub fn encode_records(&self, text: &str) -> Result<Vec<CharRecord>, EncodeError> {
        let stripped = self.markup.strip(text);
        let visible: Vec<char> = stripped.chars().filter(|&c| !is_text_whitespace(c)).collect();
        let _span = debug_span!("encode", chars = visible.len()).entered();

        let mut records = Vec::with_capacity(visible.len());
        for c in visible {
            records.push(self.encode_char(c)?);
        }
        Ok(records)
    }

    /// Encode `text` into its count digits and phoneme stream.
    pub fn encode(&self, text: &str) -> Result<Conversion, EncodeError> {
        let records = self.encode_records(text)?;
        Ok(Conversion::from_records(&records))
    }

    fn encode_char(&self, c: char) -> Result<CharRecord, EncodeError> {
        if self.encoder.is_punctuation(c) {
            debug!(source = %c, "punctuation");
            return Ok(CharRecord::silent(c));
        }

        let reading = self.backend.to_hiragana(c.encode_utf8(&mut [0u8; 4]))?;
        let sounds: Vec<Sound> = reading
            .chars()
            .map(sound_of)
            .filter(|s| !s.is_silent())
            .collect();
        debug!(source = %c, reading = %reading, slots = sounds.len());

        if sounds.is_empty() {
            return Ok(CharRecord::silent(c));
        }
        Ok(CharRecord { source: c, sounds })
    }
}
