//! Built-in instruments and tunings.
//!
//! The tables are plain constants; lookups build fresh values on demand so
//! nothing here can be mutated after startup. Names are matched
//! case-insensitively.

use crate::error::{Result, TheoryError};
use crate::instrument::Instrument;
use crate::tuning::Tuning;

/// (name, open notes low to high, frets)
const INSTRUMENTS: &[(&str, &str, u32)] = &[
    ("guitar", "E2 A2 D3 G3 B3 E4", 22),
    ("guitar-7", "B1 E2 A2 D3 G3 B3 E4", 24),
    ("bass", "E1 A1 D2 G2", 20),
    ("bass-5", "B0 E1 A1 D2 G2", 24),
    ("ukulele", "G4 C4 E4 A4", 15),
    ("baritone-ukulele", "D3 G3 B3 E4", 18),
    ("mandolin", "G3 D4 A4 E5", 17),
    ("banjo", "G4 D3 G3 B3 D4", 22),
];

/// (name, open notes low to high)
const TUNINGS: &[(&str, &str)] = &[
    ("standard", "E2 A2 D3 G3 B3 E4"),
    ("drop-d", "D2 A2 D3 G3 B3 E4"),
    ("half-step-down", "Eb2 Ab2 Db3 Gb3 Bb3 Eb4"),
    ("dadgad", "D2 A2 D3 G3 A3 D4"),
    ("open-g", "D2 G2 D3 G3 B3 D4"),
    ("open-d", "D2 A2 D3 F#3 A3 D4"),
    ("open-e", "E2 B2 E3 G#3 B3 E4"),
    ("drop-c", "C2 G2 C3 F3 A3 D4"),
    ("bass-drop-d", "D1 A1 D2 G2"),
];

pub fn instrument_names() -> impl Iterator<Item = &'static str> {
    INSTRUMENTS.iter().map(|(name, _, _)| *name)
}

pub fn tuning_names() -> impl Iterator<Item = &'static str> {
    TUNINGS.iter().map(|(name, _)| *name)
}

/// Look up a preset instrument by name.
pub fn instrument(name: &str) -> Result<Instrument> {
    let key = name.trim().to_ascii_lowercase();
    let (preset, notes, frets) = INSTRUMENTS
        .iter()
        .find(|(preset, _, _)| *preset == key)
        .ok_or_else(|| TheoryError::UnknownInstrument(name.to_string()))?;
    Instrument::from_notes(*preset, notes, *frets)
}

/// Look up a preset tuning by name.
pub fn tuning(name: &str) -> Result<Tuning> {
    let key = name.trim().to_ascii_lowercase();
    let (preset, notes) = TUNINGS
        .iter()
        .find(|(preset, _)| *preset == key)
        .ok_or_else(|| TheoryError::UnknownTuning(name.to_string()))?;
    Tuning::parse(*preset, notes)
}
