//! Pitch classes: the twelve chromatic slots, independent of octave.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, TheoryError};

/// Chromatic scale slots, C = 0 through B = 11
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Semitone offset above C (C=0, B=11)
    pub fn semitone(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::CSharp => 1,
            NoteName::D => 2,
            NoteName::DSharp => 3,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::FSharp => 6,
            NoteName::G => 7,
            NoteName::GSharp => 8,
            NoteName::A => 9,
            NoteName::ASharp => 10,
            NoteName::B => 11,
        }
    }

    /// Slot for any integer semitone, wrapping with a non-negative modulo.
    pub fn from_semitone(semitone: i32) -> NoteName {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }
}

/// Which accidental a black-key pitch class is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// Semitone offset of a natural letter, case-insensitive.
pub(crate) fn letter_semitone(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Accidental marker to its semitone shift and spelling.
pub(crate) fn accidental(marker: char) -> Option<(i32, Spelling)> {
    match marker {
        '#' => Some((1, Spelling::Sharp)),
        'b' => Some((-1, Spelling::Flat)),
        _ => None,
    }
}

/// Semitone offset of a pitch-class token before wrapping, so `Cb` is -1
/// and `B#` is 12.
pub(crate) fn parse_offset(text: &str) -> Result<(i32, Spelling)> {
    let invalid = || TheoryError::InvalidNoteName(text.to_string());
    let mut chars = text.chars();
    let base = chars.next().and_then(letter_semitone).ok_or_else(invalid)?;
    let (shift, spelling) = match chars.next() {
        None => (0, Spelling::Sharp),
        Some(marker) => accidental(marker).ok_or_else(invalid)?,
    };
    if chars.next().is_some() {
        return Err(invalid());
    }
    Ok((base + shift, spelling))
}

/// One of the twelve pitch classes.
///
/// Identity, equality, hashing and ordering use only the chromatic slot;
/// the spelling is a display preference, so `C#` and `Db` are equal.
#[derive(Debug, Clone, Copy)]
pub struct PitchClass {
    name: NoteName,
    spelling: Spelling,
}

impl PitchClass {
    pub const fn new(name: NoteName) -> Self {
        Self {
            name,
            spelling: Spelling::Sharp,
        }
    }

    pub const fn with_spelling(self, spelling: Spelling) -> Self {
        Self {
            name: self.name,
            spelling,
        }
    }

    pub fn from_index(index: i32) -> Self {
        Self::new(NoteName::from_semitone(index))
    }

    pub fn name(self) -> NoteName {
        self.name
    }

    pub fn spelling(self) -> Spelling {
        self.spelling
    }

    /// Semitone offset above C, 0..=11.
    pub fn index(self) -> u8 {
        self.name.semitone()
    }

    /// Parse a letter A-G (any case) with at most one `#` or `b`.
    ///
    /// Spellings that cross a natural boundary such as `E#` or `Cb` are
    /// accepted and land on the neighbouring slot.
    pub fn parse(text: &str) -> Result<Self> {
        let (offset, spelling) = parse_offset(text)?;
        Ok(Self::from_index(offset).with_spelling(spelling))
    }

    /// The pitch class `semitones` steps away, wrapping in both directions.
    /// The spelling preference is kept.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones).with_spelling(self.spelling)
    }
}

impl From<NoteName> for PitchClass {
    fn from(name: NoteName) -> Self {
        Self::new(name)
    }
}

impl PartialEq for PitchClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PitchClass {}

impl Hash for PitchClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for PitchClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PitchClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = match self.spelling {
            Spelling::Sharp => &SHARP_NAMES,
            Spelling::Flat => &FLAT_NAMES,
        };
        f.write_str(names[self.index() as usize])
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitones() {
        assert_eq!(NoteName::C.semitone(), 0);
        assert_eq!(NoteName::B.semitone(), 11);
        for (i, name) in NoteName::ALL.iter().enumerate() {
            assert_eq!(name.semitone() as usize, i);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(PitchClass::parse("c").unwrap().name(), NoteName::C);
        assert_eq!(PitchClass::parse("f#").unwrap().name(), NoteName::FSharp);
        assert_eq!(PitchClass::parse("bb").unwrap().name(), NoteName::ASharp);
    }

    #[test]
    fn test_enharmonic_spellings_are_equal() {
        let sharp = PitchClass::parse("C#").unwrap();
        let flat = PitchClass::parse("Db").unwrap();
        assert_eq!(sharp, flat);
        assert_eq!(sharp.to_string(), "C#");
        assert_eq!(flat.to_string(), "Db");
    }

    #[test]
    fn test_boundary_spellings_wrap() {
        assert_eq!(PitchClass::parse("E#").unwrap().name(), NoteName::F);
        assert_eq!(PitchClass::parse("Cb").unwrap().name(), NoteName::B);
        assert_eq!(PitchClass::parse("B#").unwrap().name(), NoteName::C);
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        for bad in ["H", "", "C##", "Cbb", "C#b", "CB", "1", "C4"] {
            assert_eq!(
                PitchClass::parse(bad),
                Err(TheoryError::InvalidNoteName(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_display_round_trip_canonical() {
        for name in NoteName::ALL {
            for spelling in [Spelling::Sharp, Spelling::Flat] {
                let pc = PitchClass::new(name).with_spelling(spelling);
                let parsed = PitchClass::parse(&pc.to_string()).unwrap();
                assert_eq!(parsed, pc);
                assert_eq!(parsed.to_string(), pc.to_string());
            }
        }
    }

    #[test]
    fn test_transpose_wraps_negative() {
        let c = PitchClass::new(NoteName::C);
        assert_eq!(c.transpose(-1).name(), NoteName::B);
        assert_eq!(c.transpose(-13).name(), NoteName::B);
        assert_eq!(c.transpose(14).name(), NoteName::D);
    }

    #[test]
    fn test_transpose_is_invertible() {
        for name in NoteName::ALL {
            let pc = PitchClass::new(name);
            for k in -40..=40 {
                assert_eq!(pc.transpose(k).transpose(-k), pc);
            }
        }
    }

    #[test]
    fn test_transpose_keeps_spelling() {
        let eb = PitchClass::parse("Eb").unwrap();
        assert_eq!(eb.transpose(5).to_string(), "Ab");
    }
}
