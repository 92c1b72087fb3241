//! Text → hiragana reading backends.
//!
//! The encoder only needs the `HiraganaBackend` capability. Concrete backends
//! are chosen once through `BackendKind` and held for the whole session, since
//! building one may load a lexicon from disk.

mod kana;
mod lexicon;

use std::path::PathBuf;

pub use kana::KanaBackend;
pub use lexicon::{parse_lexicon_toml, LexiconBackend, LexiconError};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{backend} backend unavailable: {reason}")]
    Unavailable {
        backend: &'static str,
        reason: String,
    },
    #[error("no reading for {ch:?} in {text:?}")]
    Unreadable { text: String, ch: char },
}

/// Converts Japanese text to its hiragana reading.
///
/// Implementations must be deterministic and accept multi-character input.
pub trait HiraganaBackend {
    fn to_hiragana(&self, text: &str) -> Result<String, BackendError>;
}

impl<B: HiraganaBackend + ?Sized> HiraganaBackend for &B {
    fn to_hiragana(&self, text: &str) -> Result<String, BackendError> {
        (**self).to_hiragana(text)
    }
}

/// Backend selection, resolved once by `Backend::open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    Kana,
    Lexicon { path: PathBuf, strict: bool },
}

/// A constructed backend.
#[derive(Debug)]
pub enum Backend {
    Kana(KanaBackend),
    Lexicon(LexiconBackend),
}

impl Backend {
    pub fn open(kind: &BackendKind) -> Result<Self, BackendError> {
        match kind {
            BackendKind::Kana => Ok(Backend::Kana(KanaBackend)),
            BackendKind::Lexicon { path, strict } => {
                let lexicon = LexiconBackend::open(path).map_err(|e| {
                    BackendError::Unavailable {
                        backend: "lexicon",
                        reason: format!("{}: {e}", path.display()),
                    }
                })?;
                Ok(Backend::Lexicon(lexicon.strict(*strict)))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Kana(_) => "kana",
            Backend::Lexicon(_) => "lexicon",
        }
    }
}

impl HiraganaBackend for Backend {
    fn to_hiragana(&self, text: &str) -> Result<String, BackendError> {
        match self {
            Backend::Kana(b) => b.to_hiragana(text),
            Backend::Lexicon(b) => b.to_hiragana(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn open_kana() {
        let b = Backend::open(&BackendKind::Kana).unwrap();
        assert_eq!(b.name(), "kana");
        assert_eq!(b.to_hiragana("ネコ").unwrap(), "ねこ");
    }

    #[test]
    fn open_lexicon() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[readings]\n\"猫\" = \"ねこ\"").unwrap();
        let kind = BackendKind::Lexicon {
            path: f.path().to_path_buf(),
            strict: false,
        };
        let b = Backend::open(&kind).unwrap();
        assert_eq!(b.name(), "lexicon");
        assert_eq!(b.to_hiragana("猫").unwrap(), "ねこ");
    }

    #[test]
    fn missing_lexicon_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let kind = BackendKind::Lexicon {
            path: dir.path().join("missing.toml"),
            strict: false,
        };
        let err = Backend::open(&kind).unwrap_err();
        assert!(matches!(
            err,
            BackendError::Unavailable {
                backend: "lexicon",
                ..
            }
        ));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn malformed_lexicon_is_unavailable() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[readings]\n\"猫\" = \"neko\"").unwrap();
        let kind = BackendKind::Lexicon {
            path: f.path().to_path_buf(),
            strict: true,
        };
        assert!(matches!(
            Backend::open(&kind),
            Err(BackendError::Unavailable { .. })
        ));
    }

    #[test]
    fn reference_forwards() {
        fn read<B: HiraganaBackend>(backend: B) -> String {
            backend.to_hiragana("カ").unwrap()
        }
        let backend = Backend::open(&BackendKind::Kana).unwrap();
        assert_eq!(read(&backend), "か");
        assert_eq!(read(backend), "か");
    }
}
