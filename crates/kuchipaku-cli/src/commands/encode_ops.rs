use std::io::{self, BufRead};
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kuchipaku_core::backend::{Backend, BackendKind, HiraganaBackend};
use kuchipaku_core::encoder::{CharRecord, Conversion, PhonemeEncoder};
use kuchipaku_core::phoneme::format_sounds;

use super::die;

/// One encoded line, as written by `encode --json`.
#[derive(Debug, Serialize)]
pub struct EncodedLine<'a> {
    pub text: &'a str,
    #[serde(flatten)]
    pub conversion: Conversion,
}

pub fn open_encoder(kind: &BackendKind) -> PhonemeEncoder<Backend> {
    let backend = die!(Backend::open(kind), "Error opening backend: {}");
    tracing::debug!(backend = backend.name(), "backend ready");
    die!(PhonemeEncoder::new(backend), "Error building encoder: {}")
}

/// Render one result as `counts<TAB>phonemes` or a JSON object.
pub fn render_line(text: &str, conversion: Conversion, json: bool) -> String {
    if json {
        let line = EncodedLine { text, conversion };
        serde_json::to_string(&line).unwrap_or_else(|e| {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        })
    } else {
        format!("{}\t{}", conversion.counts, conversion.phonemes)
    }
}

/// Encode each of `texts`, or every stdin line when `texts` is empty.
pub fn encode_cmd(kind: &BackendKind, texts: &[String], json: bool) {
    let encoder = open_encoder(kind);
    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Failed to read line: {}");
            encode_one(&encoder, &line, json);
        }
    } else {
        for text in texts {
            encode_one(&encoder, text, json);
        }
    }
}

fn encode_one<B: HiraganaBackend>(encoder: &PhonemeEncoder<B>, text: &str, json: bool) {
    let conversion = die!(encoder.encode(text), "Error encoding {text:?}: {}");
    println!("{}", render_line(text, conversion, json));
}

/// Per-character breakdown table, one row per visible character.
pub fn explain_table(records: &[CharRecord]) -> Vec<String> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(format!("{:<4}  {:>5}  phonemes", "char", "count"));
    for r in records {
        let source = r.source.to_string();
        // CJK glyphs take two terminal columns.
        let pad = 4usize.saturating_sub(source.width());
        rows.push(format!(
            "{}{}  {:>5}  {}",
            source,
            " ".repeat(pad),
            r.count(),
            format_sounds(&r.sounds)
        ));
    }
    rows
}

pub fn explain_cmd(kind: &BackendKind, text: &str) {
    let encoder = open_encoder(kind);
    let records = die!(encoder.encode_records(text), "Error encoding {text:?}: {}");
    for row in explain_table(&records) {
        println!("{row}");
    }
    let conversion = Conversion::from_records(&records);
    println!();
    println!("counts:   {}", conversion.counts);
    println!("phonemes: {}", conversion.phonemes);
}
