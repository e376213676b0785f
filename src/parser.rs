//! Tuning shorthand parser.
//!
//! Users write tunings loosely: `"D2 A2 D3 G3 B3 E4"`, `"B1E2A2D3G3B3E4"` or
//! just `"DADGBE"`. [`normalize`] turns any of these into the canonical
//! space-separated `<pitch class><octave>` form. Three interpretations are
//! tried in order and each one only runs when the previous one structurally
//! rejects the input:
//!
//! 1. already normalized (contains a space) - returned as-is
//! 2. concatenated notes with octaves - split into tokens
//! 3. bare letters - octaves inferred by [`infer_octaves`]
//!
//! Octave inference assumes strings are listed low to high and that pitch
//! keeps climbing, wrapping into the next octave whenever a letter does not
//! rise above the previous one. Reentrant tunings break that assumption:
//! open-G banjo written `"GDGBD"` comes out as `G2 D3 G3 B3 D4` rather than
//! starting on the high G4 drone. Pass explicit octaves for those.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TheoryError};
use crate::note::Note;
use crate::pitch::{PitchClass, accidental, letter_semitone};

static OCTAVE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Ga-g][#b]?[0-9]").expect("octave token pattern is valid"));

/// Convert tuning shorthand into space-separated `<pitch class><octave>`
/// tokens. String order is preserved exactly as written.
pub fn normalize(input: &str) -> Result<String> {
    let trimmed = input.trim();

    // Downstream note parsing validates each token individually.
    if trimmed.contains(' ') {
        return Ok(trimmed.to_string());
    }

    if let Some(tokens) = split_with_octaves(trimmed) {
        return Ok(tokens.join(" "));
    }

    let letters = split_bare_letters(trimmed)?;
    Ok(infer_octaves(&letters)?.join(" "))
}

/// Normalize and parse every token into a [`Note`].
pub fn parse_notes(input: &str) -> Result<Vec<Note>> {
    normalize(input)?
        .split_whitespace()
        .map(Note::parse)
        .collect()
}

/// Accept `text` only if it is made up entirely of letter, optional
/// accidental, single digit runs with nothing left over.
fn split_with_octaves(text: &str) -> Option<Vec<String>> {
    let mut rebuilt = String::with_capacity(text.len());
    let mut tokens = Vec::new();
    for m in OCTAVE_TOKEN.find_iter(text) {
        rebuilt.push_str(m.as_str());
        tokens.push(capitalize(m.as_str()));
    }
    if tokens.is_empty() || !rebuilt.eq_ignore_ascii_case(text) {
        return None;
    }
    Some(tokens)
}

/// Split bare letters (each optionally followed by `#` or `b`) into tokens.
///
/// A lowercase `b` directly after a letter is always read as a flat, so
/// `"gb"` is one token (G flat), not G followed by B.
fn split_bare_letters(text: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().enumerate().peekable();

    while let Some((position, c)) = chars.next() {
        if letter_semitone(c).is_none() {
            return Err(TheoryError::InvalidNoteCharacter { ch: c, position });
        }
        let mut token = c.to_ascii_uppercase().to_string();
        if let Some(&(_, marker)) = chars.peek() {
            if accidental(marker).is_some() {
                token.push(marker);
                chars.next();
            }
        }
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(TheoryError::EmptyTuning);
    }
    Ok(tokens)
}

/// Octave the lowest string starts in; more strings suggests a lower,
/// bass-oriented instrument.
fn starting_octave(string_count: usize) -> i32 {
    match string_count {
        n if n >= 7 => 1,
        n if n >= 5 => 2,
        _ => 3,
    }
}

/// Attach octaves to pitch-class tokens listed low string to high string.
///
/// The first token gets the starting octave. Every later token whose
/// semitone index is not above the previous token's moves up one octave.
pub fn infer_octaves<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    let mut octave = starting_octave(tokens.len());
    let mut previous: Option<u8> = None;
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        let token = token.as_ref();
        let index = PitchClass::parse(token)?.index();
        if previous.is_some_and(|prev| index <= prev) {
            octave += 1;
        }
        previous = Some(index);
        out.push(format!("{}{}", capitalize(token), octave));
    }

    Ok(out)
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_normalized_passthrough() {
        assert_eq!(normalize("D2 A2 D3 G3 B3 E4").unwrap(), "D2 A2 D3 G3 B3 E4");
        assert_eq!(normalize("  E2 A2  ").unwrap(), "E2 A2");
        // No validation on this path.
        assert_eq!(normalize("X9 Y9").unwrap(), "X9 Y9");
    }

    #[test]
    fn test_concatenated_with_octaves() {
        assert_eq!(
            normalize("B1E2A2D3G3B3E4").unwrap(),
            "B1 E2 A2 D3 G3 B3 E4"
        );
        assert_eq!(normalize("eb2ab2db3").unwrap(), "Eb2 Ab2 Db3");
        assert_eq!(normalize("F#3C#4").unwrap(), "F#3 C#4");
    }

    #[test]
    fn test_concatenated_requires_full_coverage() {
        assert_eq!(split_with_octaves("E2A"), None);
        assert_eq!(split_with_octaves("E2xA2"), None);
        assert_eq!(split_with_octaves(""), None);
        assert_eq!(
            split_with_octaves("g3c4").unwrap(),
            vec!["G3".to_string(), "C4".to_string()]
        );
    }

    #[test]
    fn test_bare_letters_six_strings() {
        assert_eq!(normalize("DADGBE").unwrap(), "D2 A2 D3 G3 B3 E4");
        assert_eq!(normalize("EADGBE").unwrap(), "E2 A2 D3 G3 B3 E4");
    }

    #[test]
    fn test_bare_letters_starting_octave_by_count() {
        assert_eq!(normalize("BEADGBE").unwrap(), "B1 E2 A2 D3 G3 B3 E4");
        assert_eq!(normalize("EADG").unwrap(), "E3 A3 D4 G4");
        assert_eq!(normalize("BEADG").unwrap(), "B2 E3 A3 D4 G4");
    }

    #[test]
    fn test_bare_letters_with_accidentals() {
        assert_eq!(
            normalize("EbAbDbGbBbEb").unwrap(),
            "Eb2 Ab2 Db3 Gb3 Bb3 Eb4"
        );
        assert_eq!(normalize("C#F#").unwrap(), "C#3 F#3");
    }

    #[test]
    fn test_lowercase_b_after_letter_is_flat() {
        assert_eq!(split_bare_letters("gb").unwrap(), vec!["Gb".to_string()]);
        assert_eq!(
            split_bare_letters("GB").unwrap(),
            vec!["G".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_repeated_letter_wraps_octave() {
        // Equal index counts as "not ascending".
        assert_eq!(normalize("GG").unwrap(), "G3 G4");
    }

    #[test]
    fn test_reentrant_tuning_is_approximate() {
        // Known limitation: the high fifth string of a banjo is placed low.
        assert_eq!(normalize("GDGBD").unwrap(), "G2 D3 G3 B3 D4");
    }

    #[test]
    fn test_bare_letter_errors() {
        assert_eq!(
            normalize("EADGBX"),
            Err(TheoryError::InvalidNoteCharacter { ch: 'X', position: 5 })
        );
        assert_eq!(normalize(""), Err(TheoryError::EmptyTuning));
        assert_eq!(normalize("   "), Err(TheoryError::EmptyTuning));
    }

    #[test]
    fn test_octaves_must_be_ascii_digits() {
        assert_eq!(split_with_octaves("E\u{0664}A\u{0664}"), None);
        assert_eq!(
            normalize("E\u{0664}A\u{0664}"),
            Err(TheoryError::InvalidNoteCharacter { ch: '\u{0664}', position: 1 })
        );
    }

    #[test]
    fn test_infer_octaves_direct() {
        let out = infer_octaves(&["E", "A", "D", "G"]).unwrap();
        assert_eq!(out, ["E3", "A3", "D4", "G4"]);
        assert!(infer_octaves::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_notes() {
        let notes = parse_notes("DADGBE").unwrap();
        assert_eq!(notes.len(), 6);
        assert_eq!(notes[0], Note::parse("D2").unwrap());
        assert_eq!(notes[5], Note::parse("E4").unwrap());
        assert_eq!(
            parse_notes("H2 A2"),
            Err(TheoryError::InvalidNoteName("H".to_string()))
        );
    }
}
