//! Signed semitone distances between notes.

use std::fmt;
use std::ops::Neg;

use crate::note::Note;

/// Simple-interval names, indexed by semitones within one octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    PerfectUnison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    PerfectOctave,
}

impl Quality {
    pub fn semitones(self) -> i32 {
        match self {
            Quality::PerfectUnison => 0,
            Quality::MinorSecond => 1,
            Quality::MajorSecond => 2,
            Quality::MinorThird => 3,
            Quality::MajorThird => 4,
            Quality::PerfectFourth => 5,
            Quality::Tritone => 6,
            Quality::PerfectFifth => 7,
            Quality::MinorSixth => 8,
            Quality::MajorSixth => 9,
            Quality::MinorSeventh => 10,
            Quality::MajorSeventh => 11,
            Quality::PerfectOctave => 12,
        }
    }

    /// Name for the distance `semitones` folds to. Whole octaves other than
    /// the unison read as an octave; compound intervals keep the simple name.
    pub fn for_semitones(semitones: i32) -> Quality {
        let distance = semitones.unsigned_abs();
        if distance != 0 && distance % 12 == 0 {
            return Quality::PerfectOctave;
        }
        match distance % 12 {
            0 => Quality::PerfectUnison,
            1 => Quality::MinorSecond,
            2 => Quality::MajorSecond,
            3 => Quality::MinorThird,
            4 => Quality::MajorThird,
            5 => Quality::PerfectFourth,
            6 => Quality::Tritone,
            7 => Quality::PerfectFifth,
            8 => Quality::MinorSixth,
            9 => Quality::MajorSixth,
            10 => Quality::MinorSeventh,
            _ => Quality::MajorSeventh,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quality::PerfectUnison => "perfect unison",
            Quality::MinorSecond => "minor second",
            Quality::MajorSecond => "major second",
            Quality::MinorThird => "minor third",
            Quality::MajorThird => "major third",
            Quality::PerfectFourth => "perfect fourth",
            Quality::Tritone => "tritone",
            Quality::PerfectFifth => "perfect fifth",
            Quality::MinorSixth => "minor sixth",
            Quality::MajorSixth => "major sixth",
            Quality::MinorSeventh => "minor seventh",
            Quality::MajorSeventh => "major seventh",
            Quality::PerfectOctave => "perfect octave",
        }
    }
}

/// A signed number of semitones, optionally tagged with a quality for
/// display. The tag never affects arithmetic or equality.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    semitones: i32,
    quality: Option<Quality>,
}

impl Interval {
    pub const fn new(semitones: i32) -> Self {
        Self {
            semitones,
            quality: None,
        }
    }

    /// An ascending interval of the given quality.
    pub fn named(quality: Quality) -> Self {
        Self {
            semitones: quality.semitones(),
            quality: Some(quality),
        }
    }

    /// Distance from `from` up (or down) to `to`.
    pub fn between(from: Note, to: Note) -> Self {
        Self::new(to.absolute_semitone() - from.absolute_semitone())
    }

    pub fn semitones(self) -> i32 {
        self.semitones
    }

    /// The explicit tag if one was given, otherwise the simple-interval name
    /// derived from the distance.
    pub fn quality(self) -> Quality {
        self.quality
            .unwrap_or_else(|| Quality::for_semitones(self.semitones))
    }

    pub fn is_descending(self) -> bool {
        self.semitones < 0
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.semitones == other.semitones
    }
}

impl Eq for Interval {}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval {
            semitones: self.semitones.saturating_neg(),
            quality: self.quality,
        }
    }
}

impl From<i32> for Interval {
    fn from(semitones: i32) -> Self {
        Self::new(semitones)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.is_descending() { " down" } else { "" };
        write!(
            f,
            "{}{} ({:+} semitones)",
            self.quality().name(),
            direction,
            self.semitones
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_names() {
        assert_eq!(Interval::new(4).quality(), Quality::MajorThird);
        assert_eq!(Interval::new(7).quality(), Quality::PerfectFifth);
        assert_eq!(Interval::new(12).quality(), Quality::PerfectOctave);
        assert_eq!(Interval::new(24).quality(), Quality::PerfectOctave);
        assert_eq!(Interval::new(0).quality(), Quality::PerfectUnison);
        assert_eq!(Interval::new(-3).quality(), Quality::MinorThird);
        assert_eq!(Interval::new(16).quality(), Quality::MajorThird);
    }

    #[test]
    fn test_named_interval() {
        let fifth = Interval::named(Quality::PerfectFifth);
        assert_eq!(fifth.semitones(), 7);
        assert_eq!(fifth, Interval::new(7));
    }

    #[test]
    fn test_between_notes() {
        let e2 = Note::parse("E2").unwrap();
        let a2 = Note::parse("A2").unwrap();
        assert_eq!(Interval::between(e2, a2).quality(), Quality::PerfectFourth);
        assert_eq!(Interval::between(a2, e2).semitones(), -5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(4).to_string(), "major third (+4 semitones)");
        assert_eq!(Interval::new(-2).to_string(), "major second down (-2 semitones)");
    }

    #[test]
    fn test_transpose_round_trip() {
        let c4 = Note::parse("C4").unwrap();
        let up = Interval::named(Quality::MajorSixth);
        let there = c4.transpose(up).unwrap();
        assert_eq!(there.to_string(), "A4");
        assert_eq!(there.transpose(-up).unwrap(), c4);
    }
}
