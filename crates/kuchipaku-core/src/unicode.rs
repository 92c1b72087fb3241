//! Character-level Unicode classification for Japanese script text.

/// Check the full Hiragana block (U+3040..U+309F). The block contains a few
/// unassigned codepoints, but none of them show up in dialogue text, so the
/// block-level check is kept for clarity.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Whitespace as dropped from script text: Unicode `White_Space` plus the
/// ASCII information separators U+001C..U+001F.
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Fold one katakana glyph (ァ U+30A1 ..= ヶ U+30F6) to its hiragana
/// counterpart. Everything else, including the prolonged sound mark ー, is
/// returned unchanged.
pub fn katakana_to_hiragana_char(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a katakana string to hiragana.
/// Non-katakana characters (ー, ASCII, kanji, etc.) are passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(katakana_to_hiragana_char).collect()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters (U+3040..U+309F) and the prolonged sound mark
/// ー (U+30FC, technically katakana) which commonly appears in readings like
/// "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}
