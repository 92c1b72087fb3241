use kuchipaku_core::markup::strip_markup;
use kuchipaku_core::mora::count_mora;
use kuchipaku_core::phoneme::format_sounds;
use kuchipaku_core::romaji::romaji_to_phonemes;

pub fn strip_cmd(text: &str) {
    println!("{}", strip_markup(text));
}

pub fn mora_cmd(text: &str) {
    println!("{}", count_mora(text));
}

pub fn romaji_cmd(text: &str) {
    println!("{}", format_sounds(&romaji_to_phonemes(&text.to_lowercase())));
}
