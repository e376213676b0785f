//! Notes: a pitch class anchored to an octave.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use crate::pitch::{NoteName, PitchClass, Spelling, accidental, parse_offset};

/// Lowest octave a note may occupy (C-1 is MIDI 0).
pub const MIN_OCTAVE: i32 = -1;
/// Highest octave a note may occupy.
pub const MAX_OCTAVE: i32 = 9;

/// A pitch class in a specific octave.
///
/// The absolute semitone value is `octave * 12 + pitch.index()`, so C0 is 0
/// and middle C (C4) is 48. Equality and ordering follow that value, which
/// makes enharmonic notes such as `C#4` and `Db4` equal.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pitch: PitchClass,
    octave: i32,
}

impl Note {
    pub fn new(pitch: impl Into<PitchClass>, octave: i32) -> Result<Self> {
        check_octave(octave)?;
        Ok(Self {
            pitch: pitch.into(),
            octave,
        })
    }

    /// Rebuild a note from its absolute semitone value using floor division,
    /// so negative values land in negative octaves.
    pub fn from_absolute(semitones: i32, spelling: Spelling) -> Result<Self> {
        let octave = semitones.div_euclid(12);
        check_octave(octave)?;
        Ok(Self {
            pitch: PitchClass::from_index(semitones).with_spelling(spelling),
            octave,
        })
    }

    /// Parse `<pitch class><octave>`, e.g. `C#4`, `bb2` or `C-1`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut split = text.char_indices().skip(1);
        let octave_start = match split.next() {
            Some((i, c)) if accidental(c).is_some() => i + c.len_utf8(),
            Some((i, _)) => i,
            None if text.is_empty() => {
                return Err(TheoryError::InvalidNoteFormat(text.to_string()));
            }
            None => text.len(),
        };
        let (token, octave) = text.split_at(octave_start);
        let (offset, spelling) = parse_offset(token)?;
        if octave.is_empty() {
            return Err(TheoryError::InvalidNoteFormat(text.to_string()));
        }
        let octave: i32 = octave
            .parse()
            .map_err(|_| TheoryError::InvalidNoteFormat(text.to_string()))?;
        check_octave(octave)?;
        // B#3 sounds as C4 and Cb4 as B3.
        Self::from_absolute(octave * 12 + offset, spelling)
    }

    pub fn pitch(self) -> PitchClass {
        self.pitch
    }

    pub fn name(self) -> NoteName {
        self.pitch.name()
    }

    pub fn octave(self) -> i32 {
        self.octave
    }

    pub fn absolute_semitone(self) -> i32 {
        self.octave * 12 + self.pitch.index() as i32
    }

    /// MIDI note number; middle C (C4) = 60
    pub fn midi(self) -> i32 {
        self.absolute_semitone() + 12
    }

    /// Equal-tempered frequency in Hz (A4 = 440 Hz)
    pub fn frequency(self) -> f64 {
        let midi = self.midi() as f64;
        440.0 * 2.0_f64.powf((midi - 69.0) / 12.0)
    }

    /// Move by `interval`, keeping this note's spelling preference.
    pub fn transpose(self, interval: Interval) -> Result<Self> {
        let target = self
            .absolute_semitone()
            .checked_add(interval.semitones())
            .ok_or_else(|| {
                let target = self.absolute_semitone() as i64 + interval.semitones() as i64;
                TheoryError::OutOfRange {
                    what: "octave",
                    value: target.div_euclid(12),
                    min: MIN_OCTAVE as i64,
                    max: MAX_OCTAVE as i64,
                }
            })?;
        Self::from_absolute(target, self.pitch.spelling())
    }
}

fn check_octave(octave: i32) -> Result<()> {
    if (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
        Ok(())
    } else {
        Err(TheoryError::OutOfRange {
            what: "octave",
            value: octave as i64,
            min: MIN_OCTAVE as i64,
            max: MAX_OCTAVE as i64,
        })
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.absolute_semitone() == other.absolute_semitone()
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute_semitone().hash(state);
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_semitone().cmp(&other.absolute_semitone())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
