//! Mora counting over kana strings.
//!
//! Independent of the encoder; callers use it directly to size text-advance
//! timing.

/// Small kana that attach to the previous glyph instead of taking a beat.
const SMALL_KANA: &str = "ゃゅょっァィゥェォャュョッ";
/// Separators that never count.
const SEPARATORS: &str = " \t\n.,。、";

pub fn is_small_kana(c: char) -> bool {
    SMALL_KANA.contains(c)
}

/// Count morae in `kana`: every character except small kana and separators.
pub fn count_mora(kana: &str) -> usize {
    kana.chars()
        .filter(|&c| !is_small_kana(c) && !SEPARATORS.contains(c))
        .count()
}
