//! Phoneme tokens and the kana → mouth-shape table.
//!
//! A kana glyph maps to one `Sound` slot. Serialized, a slot becomes one or
//! two `Phoneme` tokens: bilabial rows (ま/ば/ぱ) close the lips before the
//! vowel, so they are written as `n` followed by the vowel.

mod table;

use std::fmt;

use serde::Serialize;

pub use table::{sound_of, table, KanaPhonemeTable};

/// One token of the serialized phoneme stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phoneme {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "i")]
    I,
    #[serde(rename = "u")]
    U,
    #[serde(rename = "e")]
    E,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "n")]
    N,
    #[serde(rename = "-")]
    Silence,
}

impl Phoneme {
    pub const ALL: [Phoneme; 7] = [
        Phoneme::A,
        Phoneme::I,
        Phoneme::U,
        Phoneme::E,
        Phoneme::O,
        Phoneme::N,
        Phoneme::Silence,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Phoneme::A => "a",
            Phoneme::I => "i",
            Phoneme::U => "u",
            Phoneme::E => "e",
            Phoneme::O => "o",
            Phoneme::N => "n",
            Phoneme::Silence => "-",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Phoneme> {
        Phoneme::ALL.into_iter().find(|p| p.symbol() == s)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub fn from_ascii(c: char) -> Option<Vowel> {
        match c {
            'a' => Some(Vowel::A),
            'i' => Some(Vowel::I),
            'u' => Some(Vowel::U),
            'e' => Some(Vowel::E),
            'o' => Some(Vowel::O),
            _ => None,
        }
    }

    pub fn phoneme(self) -> Phoneme {
        match self {
            Vowel::A => Phoneme::A,
            Vowel::I => Phoneme::I,
            Vowel::U => Phoneme::U,
            Vowel::E => Phoneme::E,
            Vowel::O => Phoneme::O,
        }
    }
}

/// A single logical slot produced by one kana glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Mouth opens straight into the vowel.
    Open(Vowel),
    /// Lips close first (ま/ば/ぱ rows); serialized as `n,<vowel>`.
    Closed(Vowel),
    /// ん
    Nasal,
    /// Geminate, long-vowel mark, punctuation, or anything unknown.
    Silent,
}

impl Sound {
    pub fn is_silent(self) -> bool {
        self == Sound::Silent
    }

    /// Serialized tokens for this slot, in stream order.
    pub fn phonemes(self) -> impl Iterator<Item = Phoneme> {
        let (first, second) = match self {
            Sound::Open(v) => (v.phoneme(), None),
            Sound::Closed(v) => (Phoneme::N, Some(v.phoneme())),
            Sound::Nasal => (Phoneme::N, None),
            Sound::Silent => (Phoneme::Silence, None),
        };
        std::iter::once(first).chain(second)
    }
}

/// Join the tokens of `sounds` with commas. An empty slice serializes as `-`.
pub fn format_sounds(sounds: &[Sound]) -> String {
    let tokens: Vec<&str> = sounds
        .iter()
        .flat_map(|s| s.phonemes())
        .map(Phoneme::symbol)
        .collect();
    if tokens.is_empty() {
        "-".to_string()
    } else {
        tokens.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_slot_serializes_as_two_tokens() {
        let tokens: Vec<Phoneme> = Sound::Closed(Vowel::A).phonemes().collect();
        assert_eq!(tokens, vec![Phoneme::N, Phoneme::A]);
    }

    #[test]
    fn open_nasal_and_silent_serialize_as_one_token() {
        assert_eq!(Sound::Open(Vowel::E).phonemes().count(), 1);
        assert_eq!(Sound::Nasal.phonemes().collect::<Vec<_>>(), vec![Phoneme::N]);
        assert_eq!(
            Sound::Silent.phonemes().collect::<Vec<_>>(),
            vec![Phoneme::Silence]
        );
    }

    #[test]
    fn format_sounds_joins_with_commas() {
        let sounds = [
            Sound::Open(Vowel::A),
            Sound::Closed(Vowel::U),
            Sound::Nasal,
            Sound::Silent,
        ];
        assert_eq!(format_sounds(&sounds), "a,n,u,n,-");
        assert_eq!(format_sounds(&[]), "-");
    }

    #[test]
    fn symbol_round_trips_for_every_phoneme() {
        for p in Phoneme::ALL {
            assert_eq!(Phoneme::from_symbol(p.symbol()), Some(p));
        }
        assert_eq!(Phoneme::from_symbol("na"), None);
    }
}
