//! Stringed instruments: open notes, fret counts and capo.
//!
//! An [`Instrument`] never changes once built. Re-stringing and capo moves
//! produce new values; the capo is stored as an offset and applied whenever
//! open notes or frets are queried.

use std::fmt;

use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use crate::note::Note;

/// One physical string: its open note and how many frets it has.
/// Fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringConfig {
    open: Note,
    fret_count: u32,
}

impl StringConfig {
    pub fn new(open: Note, fret_count: u32) -> Self {
        Self { open, fret_count }
    }

    /// Build a string from a note token such as `"E2"`.
    pub fn parse(token: &str, fret_count: u32) -> Result<Self> {
        Ok(Self::new(Note::parse(token)?, fret_count))
    }

    pub fn open(&self) -> Note {
        self.open
    }

    pub fn fret_count(&self) -> u32 {
        self.fret_count
    }

    pub(crate) fn restrung(&self, open: Note) -> Self {
        Self { open, ..*self }
    }
}

/// A named, ordered set of strings plus a capo offset.
///
/// String order is significant and no operation reorders it: index 0 is the
/// first string as listed (by convention the lowest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    name: String,
    strings: Vec<StringConfig>,
    capo: u32,
}

impl Instrument {
    pub fn new(name: impl Into<String>, strings: Vec<StringConfig>) -> Result<Self> {
        let name = name.into();
        if strings.is_empty() {
            return Err(TheoryError::NoStrings(name));
        }
        Ok(Self {
            name,
            strings,
            capo: 0,
        })
    }

    /// Build from note text in any form [`crate::parser::normalize`] accepts,
    /// giving every string the same fret count.
    pub fn from_notes(name: impl Into<String>, notes: &str, fret_count: u32) -> Result<Self> {
        let strings = crate::parser::parse_notes(notes)?
            .into_iter()
            .map(|open| StringConfig::new(open, fret_count))
            .collect();
        Self::new(name, strings)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strings(&self) -> &[StringConfig] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn capo(&self) -> u32 {
        self.capo
    }

    /// Highest fret on any string.
    pub fn max_fret(&self) -> u32 {
        self.strings
            .iter()
            .map(StringConfig::fret_count)
            .max()
            .unwrap_or(0)
    }

    /// A copy with the capo placed at fret `position`, replacing any
    /// existing capo. A capo past a string's last fret is accepted here;
    /// that string simply has no playable frets left.
    pub fn with_capo(&self, position: i32) -> Result<Self> {
        let capo = u32::try_from(position)
            .map_err(|_| TheoryError::InvalidCapoPosition(position))?;
        Ok(Self {
            capo,
            ..self.clone()
        })
    }

    /// A copy where every string has `fret_count` frets.
    pub fn with_frets(&self, fret_count: u32) -> Self {
        Self {
            strings: self
                .strings
                .iter()
                .map(|s| StringConfig::new(s.open, fret_count))
                .collect(),
            ..self.clone()
        }
    }

    /// A copy with open notes replaced positionally. Fret counts, name and
    /// capo are kept.
    pub(crate) fn restrung(&self, name: String, notes: &[Note]) -> Self {
        Self {
            name,
            strings: self
                .strings
                .iter()
                .zip(notes)
                .map(|(s, &open)| s.restrung(open))
                .collect(),
            capo: self.capo,
        }
    }

    fn string(&self, index: usize) -> Result<&StringConfig> {
        self.strings.get(index).ok_or(TheoryError::OutOfRange {
            what: "string",
            value: index as i64,
            min: 0,
            max: self.strings.len() as i64 - 1,
        })
    }

    /// Sounding open note of a string with the capo applied.
    pub fn open_note(&self, string: usize) -> Result<Note> {
        self.string(string)?
            .open
            .transpose(Interval::new(self.capo as i32))
    }

    /// Frets left to play on a string above the capo.
    pub fn playable_frets(&self, string: usize) -> Result<u32> {
        Ok(self.string(string)?.fret_count.saturating_sub(self.capo))
    }

    /// Whether `fret` on `string` can be addressed: on the fretboard and not
    /// behind the capo.
    pub fn is_playable(&self, string: usize, fret: i32) -> bool {
        self.string(string)
            .is_ok_and(|s| (self.capo as i64..=s.fret_count as i64).contains(&(fret as i64)))
    }

    /// Note sounded by pressing `fret` on `string`.
    ///
    /// Frets are physical positions, so with a capo at fret 2 the capo
    /// itself is fret 2 and frets 0 and 1 cannot be addressed.
    pub fn note_at_fret(&self, string: usize, fret: i32) -> Result<Note> {
        let s = self.string(string)?;
        let fret_count = s.fret_count as i64;
        let lowest = self.capo as i64;
        if (fret as i64) < lowest || fret as i64 > fret_count {
            return Err(TheoryError::OutOfRange {
                what: "fret",
                value: fret as i64,
                min: lowest,
                max: fret_count,
            });
        }
        s.open.transpose(Interval::new(fret))
    }

    /// Open notes as written, ignoring the capo.
    pub fn tuning_label(&self) -> String {
        self.strings
            .iter()
            .map(|s| s.open.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tuning_label())?;
        if self.capo > 0 {
            write!(f, " capo {}", self.capo)?;
        }
        Ok(())
    }
}
