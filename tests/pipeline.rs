//! Raw tuning text all the way through to a rendered diagram.

use clifret::{Instrument, Interval, Note, Orientation, TheoryError, Tuning, normalize, render};
use pretty_assertions::assert_eq;

#[test]
fn test_normalize_all_three_forms() {
    assert_eq!(normalize("D2 A2 D3 G3 B3 E4").unwrap(), "D2 A2 D3 G3 B3 E4");
    assert_eq!(normalize("B1E2A2D3G3B3E4").unwrap(), "B1 E2 A2 D3 G3 B3 E4");
    assert_eq!(normalize("DADGBE").unwrap(), "D2 A2 D3 G3 B3 E4");
}

#[test]
fn test_text_to_vertical_diagram() {
    let base = Instrument::from_notes("guitar", "EADGBE", 3).unwrap();
    let tuned = Tuning::parse("drop-d", "DADGBE").unwrap().apply_to(&base).unwrap();
    let diagram = render(&tuned, Orientation::Vertical).to_string();
    let expected = "\
guitar (drop-d)
  D2  A2  D3  G3  B3  E4
0 D2  A2  D3  G3  B3  E4
  =======================
1 D#2 A#2 D#3 G#3 C4  F4
  -----------------------
2 E2  B2  E3  A3  C#4 F#4
  -----------------------
3 F2  C3  F3  A#3 D4  G4
  -----------------------
";
    assert_eq!(diagram, expected);
}

#[test]
fn test_text_to_horizontal_diagram_with_capo() {
    let uke = Instrument::from_notes("ukulele", "G4 C4 E4 A4", 3)
        .unwrap()
        .with_capo(2)
        .unwrap();
    let diagram = render(&uke, Orientation::Horizontal).to_string();
    let expected = "\
ukulele (capo 2)
    0      1     2     3
A4  -   || -   | A4  # A#4 |
D4  -   || -   | D4  # D#4 |
F#4 -   || -   | F#4 # G4  |
B4  -   || -   | B4  # C5  |
";
    assert_eq!(diagram, expected);
}

#[test]
fn test_capo_equals_fret_offset() {
    let g = Instrument::from_notes("guitar", "EADGBE", 12).unwrap();
    let capo = g.with_capo(2).unwrap();
    for string in 0..g.string_count() {
        for fret in 2..=12 {
            assert_eq!(
                capo.note_at_fret(string, fret).unwrap(),
                g.note_at_fret(string, 0)
                    .unwrap()
                    .transpose(Interval::new(fret))
                    .unwrap()
            );
        }
    }
}

/// Every whitespace-separated word that looks like a note label.
fn note_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|w| w.len() > 1 && w.starts_with(|c: char| c.is_ascii_uppercase()))
        .collect()
}

#[test]
fn test_orientations_share_the_same_notes() {
    let g = Instrument::from_notes("bass", "EADG", 4).unwrap();
    let vertical = render(&g, Orientation::Vertical).to_string();
    let horizontal = render(&g, Orientation::Horizontal).to_string();
    let mut v = note_words(&vertical);
    let mut h = note_words(&horizontal);
    v.sort();
    h.sort();
    assert_eq!(v, h);
}

#[test]
fn test_malformed_input_errors() {
    assert_eq!(
        Note::parse("H4"),
        Err(TheoryError::InvalidNoteName("H".to_string()))
    );
    assert_eq!(
        Note::parse("C"),
        Err(TheoryError::InvalidNoteFormat("C".to_string()))
    );
    let g = Instrument::from_notes("guitar", "EADGBE", 12).unwrap();
    assert!(matches!(
        g.note_at_fret(0, -1),
        Err(TheoryError::OutOfRange { .. })
    ));
    assert!(matches!(
        g.note_at_fret(0, 13),
        Err(TheoryError::OutOfRange { .. })
    ));
}
