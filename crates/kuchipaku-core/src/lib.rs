//! Japanese script text → lip-sync phoneme counts and streams.
//!
//! ```
//! use kuchipaku_core::backend::KanaBackend;
//! use kuchipaku_core::encoder::PhonemeEncoder;
//!
//! let encoder = PhonemeEncoder::new(KanaBackend).unwrap();
//! let result = encoder.encode("<b>まま</b>。").unwrap();
//! assert_eq!(result.counts, "111");
//! assert_eq!(result.phonemes, "n,a,n,a,-");
//! ```

pub mod backend;
pub mod encoder;
pub mod markup;
pub mod mora;
pub mod phoneme;
pub mod romaji;
pub mod settings;
pub mod unicode;
