//! Named tunings and re-stringing.

use std::fmt;

use crate::error::{Result, TheoryError};
use crate::instrument::Instrument;
use crate::note::Note;
use crate::parser;

/// An ordered list of open notes, one per string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    name: String,
    notes: Vec<Note>,
}

impl Tuning {
    pub fn new(name: impl Into<String>, notes: Vec<Note>) -> Result<Self> {
        if notes.is_empty() {
            return Err(TheoryError::EmptyTuning);
        }
        Ok(Self {
            name: name.into(),
            notes,
        })
    }

    /// Parse tuning shorthand such as `"DADGBE"` or `"D2 A2 D3 G3 B3 E4"`.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        Self::new(name, parser::parse_notes(text)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Re-string `instrument` with these notes. The result keeps the
    /// instrument's fret counts and capo; its name records the tuning.
    pub fn apply_to(&self, instrument: &Instrument) -> Result<Instrument> {
        if self.notes.len() != instrument.string_count() {
            return Err(TheoryError::StringCountMismatch {
                tuning: self.name.clone(),
                notes: self.notes.len(),
                strings: instrument.string_count(),
            });
        }
        let name = format!("{} ({})", instrument.name(), self.name);
        Ok(instrument.restrung(name, &self.notes))
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "{}: {}", self.name, notes.join(" "))
    }
}
