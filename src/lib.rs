#![warn(clippy::all, rust_2018_idioms)]

//! English lexical-stress assignment and phonemic syllabification, the
//! text-to-phoneme preprocessing stage of a speech-synthesis front end.

mod phoneme;
mod stress;
mod syllabify;

pub use phoneme::{PHONE_BOUNDARY, SYLLABLE_BOUNDARY};
pub use stress::{
    apply_stress, has_stress_repellent_prefix, is_light_syllable, suffix_stress_lookup,
    StressClass, SuffixRule,
};
pub use syllabify::{locate_break, syllabify, syllable_count};

use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStressError {
    /// Syllable text with no vowel phoneme where one is required.
    MalformedSyllable(String),
    EmptyWord,
    TooManySyllables(usize),
}

pub type LexStressResult<T> = Result<T, LexStressError>;

impl std::fmt::Display for LexStressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LexStressError::MalformedSyllable(s) => {
                write!(f, "Syllable without a vowel ({})", s)
            }
            LexStressError::EmptyWord => write!(f, "Empty phoneme string"),
            LexStressError::TooManySyllables(n) => {
                write!(f, "Too many syllables ({})", n)
            }
        }
    }
}

impl std::error::Error for LexStressError {}
