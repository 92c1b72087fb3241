//! Rich-text tag removal.
//!
//! Only tags on a fixed allow-list are removed: Unity rich-text tags in
//! `<...>` syntax and the game's own effect tags in `[...]` syntax. Unknown
//! tags are left in place because bracketed text may be meaningful to the
//! game. Names are matched case-sensitively.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, debug_span};

use crate::settings::{settings, MarkupSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `<name>`
    Angle,
    /// `[name]`
    Bracket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagForm {
    /// `<name>` and `</name>`
    Paired,
    /// `<name=value>` and `</name>`
    Valued,
    /// `<name>` with no closing tag
    Marker,
    /// `<name=value>` with no closing tag
    ValuedMarker,
}

use Delimiter::{Angle, Bracket};
use TagForm::{Marker, Paired, Valued, ValuedMarker};

/// Built-in rules in application order.
#[rustfmt::skip]
const BUILTIN_TAGS: &[(&str, TagForm, Delimiter)] = &[
    ("b", Paired, Angle), ("i", Paired, Angle), ("u", Paired, Angle), ("s", Paired, Angle),
    ("sub", Paired, Angle), ("sup", Paired, Angle), ("mark", Paired, Angle),
    ("small", Paired, Angle), ("nobr", Paired, Angle),
    ("color", Valued, Angle), ("size", Valued, Angle), ("font", Valued, Angle),
    ("material", Valued, Angle),
    ("quad", ValuedMarker, Angle), ("sprite", ValuedMarker, Angle), ("space", ValuedMarker, Angle),
    ("style", Valued, Angle), ("align", Valued, Angle), ("alpha", Valued, Angle),
    ("cspace", Valued, Angle), ("font-weight", Valued, Angle), ("indent", Valued, Angle),
    ("line-height", Valued, Angle), ("line-indent", Valued, Angle), ("link", Valued, Angle),
    ("lowercase", Paired, Angle), ("uppercase", Paired, Angle), ("smallcaps", Paired, Angle),
    ("margin", Valued, Angle), ("monospace", Valued, Angle),
    ("mspace", ValuedMarker, Angle),
    ("noparse", Paired, Angle),
    ("page", Marker, Angle),
    ("pos", ValuedMarker, Angle),
    ("rotate", Valued, Angle),
    ("strikethrough", Paired, Angle), ("underline", Paired, Angle),
    ("voffset", Valued, Angle), ("width", Valued, Angle),
    // game effect tags
    ("shake", Paired, Bracket), ("bounce", Paired, Bracket), ("fade", Paired, Bracket),
    ("voice", Valued, Bracket), ("speed", Valued, Bracket),
    ("wait", ValuedMarker, Bracket),
    ("emotion", Valued, Bracket),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRule {
    pub name: String,
    pub form: TagForm,
    pub delimiter: Delimiter,
}

impl TagRule {
    pub fn new(name: impl Into<String>, form: TagForm, delimiter: Delimiter) -> Self {
        Self {
            name: name.into(),
            form,
            delimiter,
        }
    }

    /// Regex source matching every spelling of this tag.
    fn pattern(&self) -> String {
        let (open, close, value) = match self.delimiter {
            Angle => ("<", ">", "[^>]*"),
            Bracket => (r"\[", r"\]", r"[^\]]*"),
        };
        let name = regex::escape(&self.name);
        let start = match self.form {
            Paired | Marker => format!("{open}{name}{close}"),
            Valued | ValuedMarker => format!("{open}{name}={value}{close}"),
        };
        match self.form {
            Paired | Valued => format!("{start}|{open}/{name}{close}"),
            Marker | ValuedMarker => start,
        }
    }
}

/// The built-in rules followed by the custom bracket tags from `settings`.
pub fn rules_from_settings(settings: &MarkupSettings) -> Vec<TagRule> {
    let mut rules: Vec<TagRule> = BUILTIN_TAGS
        .iter()
        .map(|&(name, form, delimiter)| TagRule::new(name, form, delimiter))
        .collect();
    let custom = [
        (&settings.custom_paired, Paired),
        (&settings.custom_valued, Valued),
        (&settings.custom_markers, ValuedMarker),
    ];
    for (names, form) in custom {
        rules.extend(names.iter().map(|n| TagRule::new(n.as_str(), form, Bracket)));
    }
    rules
}

/// Compiled allow-list of tag patterns, applied in order.
#[derive(Debug, Clone)]
pub struct MarkupStripper {
    patterns: Vec<Regex>,
}

impl MarkupStripper {
    pub fn new(rules: &[TagRule]) -> Result<Self, regex::Error> {
        let patterns = rules
            .iter()
            .map(|r| Regex::new(&r.pattern()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Stripper for the built-in tags plus the custom tags in `settings`.
    pub fn from_settings(settings: &MarkupSettings) -> Result<Self, regex::Error> {
        Self::new(&rules_from_settings(settings))
    }

    pub fn rule_count(&self) -> usize {
        self.patterns.len()
    }

    /// Remove every recognized tag from `text`.
    ///
    /// The ordered pass is repeated until nothing changes, so tags that only
    /// become whole after an inner tag is removed (`<<b>b>`) go as well.
    pub fn strip(&self, text: &str) -> String {
        let _span = debug_span!("strip_markup", len = text.len()).entered();
        let mut current = text.to_string();
        let mut passes = 0usize;
        loop {
            passes += 1;
            let mut changed = false;
            for re in &self.patterns {
                if let Cow::Owned(replaced) = re.replace_all(&current, "") {
                    current = replaced;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        debug!(passes, removed = text.len() - current.len());
        current
    }
}

/// Strip markup using the stripper built from the global settings.
pub fn strip_markup(text: &str) -> String {
    static INSTANCE: OnceLock<MarkupStripper> = OnceLock::new();
    INSTANCE
        .get_or_init(|| {
            MarkupStripper::from_settings(&settings().markup)
                .expect("validated tag names must compile")
        })
        .strip(text)
}
