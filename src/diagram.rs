//! Text fretboard diagrams.
//!
//! Both orientations draw the same logical grid of `note_at_fret` answers.
//! Vertical puts strings in columns (listed order, left to right) and frets
//! in rows, with a rule line under every fret: `=` for the nut, `#` for the
//! capo and `-` otherwise. Horizontal puts strings in rows (listed order,
//! top to bottom) and frets in columns, using `||`, `#` and `|` as column
//! separators. Cells behind the capo show `-`; cells past a short string's
//! last fret are blank. Output is plain ASCII with trailing spaces trimmed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::instrument::Instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        })
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Orientation::Vertical),
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            other => Err(format!(
                "unknown orientation '{}' (expected vertical or horizontal)",
                other
            )),
        }
    }
}

/// What sits just past a fret position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Nut,
    Fret,
    Capo,
}

impl RuleKind {
    fn vertical(self) -> char {
        match self {
            RuleKind::Nut => '=',
            RuleKind::Fret => '-',
            RuleKind::Capo => '#',
        }
    }

    fn horizontal(self) -> &'static str {
        match self {
            RuleKind::Nut => "||",
            RuleKind::Fret => "|",
            RuleKind::Capo => "#",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Header,
    Row,
    Rule(RuleKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

/// A rendered diagram. `Display` yields the plain text, one line per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    lines: Vec<Line>,
}

impl Diagram {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    fn push(&mut self, kind: LineKind, text: String) {
        self.lines.push(Line {
            kind,
            text: text.trim_end().to_string(),
        });
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Cell contents and separators, independent of orientation.
struct Grid {
    title: String,
    labels: Vec<String>,
    cells: Vec<Vec<String>>,
    rules: Vec<RuleKind>,
    width: usize,
}

impl Grid {
    fn build(instrument: &Instrument) -> Self {
        let capo = instrument.capo();
        let max_fret = instrument.max_fret();

        let labels: Vec<String> = (0..instrument.string_count())
            .map(|s| {
                instrument
                    .open_note(s)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|_| "?".to_string())
            })
            .collect();

        let cells: Vec<Vec<String>> = (0..instrument.string_count())
            .map(|s| {
                (0..=max_fret)
                    .map(|fret| {
                        if instrument.is_playable(s, fret as i32) {
                            instrument
                                .note_at_fret(s, fret as i32)
                                .map(|n| n.to_string())
                                .unwrap_or_else(|_| "?".to_string())
                        } else if fret < capo {
                            "-".to_string()
                        } else {
                            String::new()
                        }
                    })
                    .collect()
            })
            .collect();

        let rules = (0..=max_fret)
            .map(|fret| match fret {
                0 => RuleKind::Nut,
                f if f == capo => RuleKind::Capo,
                _ => RuleKind::Fret,
            })
            .collect();

        let width = labels
            .iter()
            .chain(cells.iter().flatten())
            .map(String::len)
            .chain(std::iter::once(max_fret.to_string().len()))
            .max()
            .unwrap_or(1);

        let title = if capo > 0 {
            format!("{} (capo {})", instrument.name(), capo)
        } else {
            instrument.name().to_string()
        };

        Self {
            title,
            labels,
            cells,
            rules,
            width,
        }
    }

    fn fret_count(&self) -> usize {
        self.rules.len()
    }

    fn vertical(&self) -> Diagram {
        let w = self.width;
        let gutter = (self.fret_count() - 1).to_string().len();
        let mut diagram = Diagram { lines: Vec::new() };
        diagram.push(LineKind::Title, self.title.clone());

        let mut header = " ".repeat(gutter);
        for label in &self.labels {
            header.push_str(&format!(" {:<w$}", label));
        }
        diagram.push(LineKind::Header, header);

        let rule_len = self.labels.len() * (w + 1) - 1;
        for (fret, rule) in self.rules.iter().enumerate() {
            let mut row = format!("{:>gutter$}", fret);
            for string in &self.cells {
                row.push_str(&format!(" {:<w$}", string[fret]));
            }
            diagram.push(LineKind::Row, row);

            let line = format!(
                "{} {}",
                " ".repeat(gutter),
                rule.vertical().to_string().repeat(rule_len)
            );
            diagram.push(LineKind::Rule(*rule), line);
        }
        diagram
    }

    fn horizontal(&self) -> Diagram {
        let w = self.width;
        let label_width = self.labels.iter().map(String::len).max().unwrap_or(0);
        let mut diagram = Diagram { lines: Vec::new() };
        diagram.push(LineKind::Title, self.title.clone());

        let mut header = " ".repeat(label_width);
        for (fret, rule) in self.rules.iter().enumerate() {
            header.push_str(&format!(
                " {:<w$} {}",
                fret,
                " ".repeat(rule.horizontal().len())
            ));
        }
        diagram.push(LineKind::Header, header);

        for (label, string) in self.labels.iter().zip(&self.cells) {
            let mut row = format!("{:<label_width$}", label);
            for (cell, rule) in string.iter().zip(&self.rules) {
                row.push_str(&format!(" {:<w$} {}", cell, rule.horizontal()));
            }
            diagram.push(LineKind::Row, row);
        }
        diagram
    }
}

/// Draw `instrument` (tuning and capo already applied).
pub fn render(instrument: &Instrument, orientation: Orientation) -> Diagram {
    let grid = Grid::build(instrument);
    match orientation {
        Orientation::Vertical => grid.vertical(),
        Orientation::Horizontal => grid.horizontal(),
    }
}
