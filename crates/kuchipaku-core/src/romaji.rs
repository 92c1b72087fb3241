//! Romaji → mouth-shape reduction.
//!
//! Works on already-romanized text. Coarser than the kana path: any `n` is
//! read as a nasal, other consonants are dropped, and separators are kept as
//! silent slots.

use crate::phoneme::{Sound, Vowel};

/// Scan lowercase romaji into slots.
pub fn romaji_to_phonemes(romaji: &str) -> Vec<Sound> {
    let chars: Vec<char> = romaji.chars().collect();
    let mut sounds = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        // ma/ba/pa rows close the lips
        if i + 1 < chars.len() && matches!(chars[i], 'm' | 'b' | 'p') {
            if let Some(v) = Vowel::from_ascii(chars[i + 1]) {
                sounds.push(Sound::Closed(v));
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        if let Some(v) = Vowel::from_ascii(c) {
            sounds.push(Sound::Open(v));
        } else if c == 'n' {
            sounds.push(Sound::Nasal);
        } else if matches!(c, ' ' | '\t' | '\n' | '.' | ',' | '。' | '、' | '-') {
            sounds.push(Sound::Silent);
        }
        i += 1;
    }

    sounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::format_sounds;

    fn romaji(s: &str) -> String {
        format_sounds(&romaji_to_phonemes(s))
    }

    #[test]
    fn vowels_and_dropped_consonants() {
        assert_eq!(romaji("aiueo"), "a,i,u,e,o");
        assert_eq!(romaji("kakikukeko"), "a,i,u,e,o");
    }

    #[test]
    fn bilabial_syllables() {
        assert_eq!(romaji("ma"), "n,a");
        assert_eq!(romaji("bu"), "n,u");
        assert_eq!(romaji("po"), "n,o");
        assert_eq!(romaji("sanpo"), "a,n,n,o");
    }

    #[test]
    fn bilabial_consonant_without_vowel_is_dropped() {
        assert_eq!(romaji("mm"), "-");
        assert_eq!(romaji("m"), "-");
        assert_eq!(romaji("pyu"), "u");
    }

    #[test]
    fn nasal_is_read_everywhere() {
        // `na` is not a bilabial syllable; the n is kept as its own slot.
        assert_eq!(romaji("neko"), "n,e,o");
        assert_eq!(romaji("hon"), "o,n");
    }

    #[test]
    fn separators_are_silent() {
        assert_eq!(romaji("wagahai wa neko."), "a,a,a,i,-,a,-,n,e,o,-");
        assert_eq!(romaji("ra-men"), "a,-,n,e,n");
    }

    #[test]
    fn empty_input() {
        assert!(romaji_to_phonemes("").is_empty());
        assert_eq!(romaji(""), "-");
    }
}
