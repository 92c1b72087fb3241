use std::collections::HashMap;
use std::sync::OnceLock;

use super::Sound::{self, Closed, Nasal, Open, Silent};
use super::Vowel::{A, E, I, O, U};

/// Kana glyph → slot. Rows are listed in gojūon order.
#[rustfmt::skip]
const KANA_SOUNDS: &[(char, Sound)] = &[
    // あ
    ('あ', Open(A)), ('い', Open(I)), ('う', Open(U)), ('え', Open(E)), ('お', Open(O)),
    // か / が
    ('か', Open(A)), ('き', Open(I)), ('く', Open(U)), ('け', Open(E)), ('こ', Open(O)),
    ('が', Open(A)), ('ぎ', Open(I)), ('ぐ', Open(U)), ('げ', Open(E)), ('ご', Open(O)),
    // さ / ざ
    ('さ', Open(A)), ('し', Open(I)), ('す', Open(U)), ('せ', Open(E)), ('そ', Open(O)),
    ('ざ', Open(A)), ('じ', Open(I)), ('ず', Open(U)), ('ぜ', Open(E)), ('ぞ', Open(O)),
    // た / だ
    ('た', Open(A)), ('ち', Open(I)), ('つ', Open(U)), ('て', Open(E)), ('と', Open(O)),
    ('だ', Open(A)), ('ぢ', Open(I)), ('づ', Open(U)), ('で', Open(E)), ('ど', Open(O)),
    // な
    ('な', Open(A)), ('に', Open(I)), ('ぬ', Open(U)), ('ね', Open(E)), ('の', Open(O)),
    // は
    ('は', Open(A)), ('ひ', Open(I)), ('ふ', Open(U)), ('へ', Open(E)), ('ほ', Open(O)),
    // ば / ぱ / ま: lips close before the vowel
    ('ば', Closed(A)), ('び', Closed(I)), ('ぶ', Closed(U)), ('べ', Closed(E)), ('ぼ', Closed(O)),
    ('ぱ', Closed(A)), ('ぴ', Closed(I)), ('ぷ', Closed(U)), ('ぺ', Closed(E)), ('ぽ', Closed(O)),
    ('ま', Closed(A)), ('み', Closed(I)), ('む', Closed(U)), ('め', Closed(E)), ('も', Closed(O)),
    // や
    ('や', Open(A)), ('ゆ', Open(U)), ('よ', Open(O)),
    // ら
    ('ら', Open(A)), ('り', Open(I)), ('る', Open(U)), ('れ', Open(E)), ('ろ', Open(O)),
    // わ
    ('わ', Open(A)), ('ゐ', Open(I)), ('ゑ', Open(E)), ('を', Open(O)),
    ('ん', Nasal),
    // small ya-row
    ('ゃ', Open(A)), ('ゅ', Open(U)), ('ょ', Open(O)),
    // sokuon, chōonpu
    ('っ', Silent), ('ー', Silent),
];

/// Immutable glyph → slot lookup. Built once, shared for the process lifetime.
pub struct KanaPhonemeTable {
    map: HashMap<char, Sound>,
}

impl KanaPhonemeTable {
    fn build() -> Self {
        Self {
            map: KANA_SOUNDS.iter().copied().collect(),
        }
    }

    /// Slot for `kana`, or `Silent` for glyphs the table does not know.
    pub fn get(&self, kana: char) -> Sound {
        self.map.get(&kana).copied().unwrap_or(Sound::Silent)
    }

    pub fn contains(&self, kana: char) -> bool {
        self.map.contains_key(&kana)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Sound)> + '_ {
        KANA_SOUNDS.iter().copied()
    }
}

/// Get or initialize the global table singleton.
pub fn table() -> &'static KanaPhonemeTable {
    static INSTANCE: OnceLock<KanaPhonemeTable> = OnceLock::new();
    INSTANCE.get_or_init(KanaPhonemeTable::build)
}

pub fn sound_of(kana: char) -> Sound {
    table().get(kana)
}
