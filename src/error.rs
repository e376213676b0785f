//! Errors raised by the music-theory core.

use thiserror::Error;

/// Every failure the core can report. Parsing and addressing never
/// recover partially: a failed call yields no value at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("invalid note name '{0}' (expected A-G with optional # or b)")]
    InvalidNoteName(String),
    #[error("invalid note '{0}' (expected pitch class followed by an octave, e.g. C#4)")]
    InvalidNoteFormat(String),
    #[error("invalid character '{ch}' at position {position} in tuning")]
    InvalidNoteCharacter { ch: char, position: usize },
    #[error("tuning contains no notes")]
    EmptyTuning,
    #[error("{what} {value} out of range ({min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("invalid capo position {0} (must be 0 or greater)")]
    InvalidCapoPosition(i32),
    #[error("unknown instrument '{0}'")]
    UnknownInstrument(String),
    #[error("unknown tuning '{0}'")]
    UnknownTuning(String),
    #[error("instrument '{0}' has no strings")]
    NoStrings(String),
    #[error("tuning '{tuning}' has {notes} notes but instrument has {strings} strings")]
    StringCountMismatch {
        tuning: String,
        notes: usize,
        strings: usize,
    },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
