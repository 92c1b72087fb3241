use crate::unicode::katakana_to_hiragana;

use super::{BackendError, HiraganaBackend};

/// Dictionary-free backend: folds katakana to hiragana and passes everything
/// else through. Kanji come back unchanged, which the encoder treats as an
/// unreadable glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaBackend;

impl HiraganaBackend for KanaBackend {
    fn to_hiragana(&self, text: &str) -> Result<String, BackendError> {
        Ok(katakana_to_hiragana(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_katakana() {
        assert_eq!(KanaBackend.to_hiragana("キャット").unwrap(), "きゃっと");
    }

    #[test]
    fn passes_hiragana_and_kanji() {
        assert_eq!(KanaBackend.to_hiragana("は").unwrap(), "は");
        assert_eq!(KanaBackend.to_hiragana("猫").unwrap(), "猫");
        assert_eq!(KanaBackend.to_hiragana("").unwrap(), "");
    }
}
