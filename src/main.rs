use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use log::{debug, info};

use clifret::config::{self, Settings};
use clifret::diagram::{Diagram, LineKind, RuleKind};
use clifret::{Interval, Note, Orientation, parser, presets, render};

#[derive(Parser)]
#[command(name = "clifret", about = "Fretboard diagrams for stringed instruments")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to <config dir>/clifret/settings.toml)
    #[arg(long = "config", global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a fretboard diagram using saved settings plus any overrides
    Diagram {
        /// Preset instrument, e.g. guitar, bass, ukulele
        #[arg(short, long)]
        instrument: Option<String>,

        /// Preset tuning name or notes, e.g. drop-d or DADGBE
        #[arg(short, long)]
        tuning: Option<String>,

        /// Capo fret
        #[arg(short, long, allow_negative_numbers = true)]
        capo: Option<i32>,

        /// Override the number of frets on every string
        #[arg(short, long)]
        frets: Option<u32>,

        /// Strings as rows, frets as columns
        #[arg(long, conflicts_with = "vertical")]
        horizontal: bool,

        /// Strings as columns, frets as rows
        #[arg(long)]
        vertical: bool,

        /// Plain output even on a terminal
        #[arg(long)]
        no_color: bool,
    },

    /// Print the canonical form of tuning shorthand
    Normalize {
        /// Tuning text, e.g. DADGBE or B1E2A2D3G3B3E4
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show pitch, MIDI number and frequency of a note
    Note {
        /// Note with octave, e.g. C#4
        note: String,
    },

    /// Move a note by a number of semitones
    Transpose {
        /// Note with octave, e.g. Bb3
        note: String,

        /// Semitones, negative to go down
        #[arg(allow_negative_numbers = true)]
        semitones: i32,
    },

    /// List preset instruments and tunings
    Presets,

    /// Inspect or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print every setting
    Show,
    /// Print the settings file location
    Path,
    /// Change one setting; an empty value clears tuning or frets
    Set { key: String, value: String },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Diagram {
            instrument,
            tuning,
            capo,
            frets,
            horizontal,
            vertical,
            no_color,
        } => {
            let mut settings = load_settings(cli.settings)?;
            if let Some(name) = instrument {
                // A different instrument makes the saved tuning meaningless.
                if tuning.is_none() && settings.tuning.is_some() {
                    debug!("dropping saved tuning for instrument override");
                    settings.tuning = None;
                }
                settings.instrument = name;
            }
            if tuning.is_some() {
                settings.tuning = tuning;
            }
            if let Some(capo) = capo {
                settings.capo = capo;
            }
            if frets.is_some() {
                settings.frets = frets;
            }
            if horizontal {
                settings.orientation = Orientation::Horizontal;
            } else if vertical {
                settings.orientation = Orientation::Vertical;
            }
            debug!("effective settings: {:?}", settings);

            let instrument = settings.resolve()?;
            let diagram = render(&instrument, settings.orientation);
            let color = !no_color && io::stdout().is_tty();
            print_diagram(&diagram, color).context("writing diagram")?;
        }
        Command::Normalize { text } => {
            println!("{}", parser::normalize(&text.join(" "))?);
        }
        Command::Note { note } => {
            let note = Note::parse(&note)?;
            print_note(&note);
        }
        Command::Transpose { note, semitones } => {
            let note = Note::parse(&note)?;
            let interval = Interval::new(semitones);
            let moved = note
                .transpose(interval)
                .with_context(|| format!("transposing {} by {}", note, semitones))?;
            println!("{} -> {}  [{}]", note, moved, interval);
        }
        Command::Presets => print_presets()?,
        Command::Config { action } => {
            let path = settings_path(cli.settings)?;
            match action {
                ConfigAction::Show => {
                    let settings = Settings::load(&path)?;
                    println!("# {}", path.display());
                    for (key, value) in settings.entries() {
                        println!("{} = {}", key, value);
                    }
                }
                ConfigAction::Path => println!("{}", path.display()),
                ConfigAction::Set { key, value } => {
                    let mut settings = Settings::load(&path)?;
                    settings.set(&key, &value)?;
                    settings.save(&path)?;
                    info!("set {} = {:?} in {}", key, value, path.display());
                }
            }
        }
    }
    Ok(())
}

fn settings_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(config::default_path()?),
    }
}

fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let path = settings_path(explicit)?;
    Settings::load(&path).with_context(|| format!("loading settings from {}", path.display()))
}

fn print_diagram(diagram: &Diagram, color: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in diagram.lines() {
        let text = line.text.as_str();
        if !color {
            writeln!(stdout, "{}", text)?;
            continue;
        }
        match line.kind {
            LineKind::Title => writeln!(stdout, "{}", text.bold())?,
            LineKind::Header => writeln!(stdout, "{}", text.cyan())?,
            LineKind::Rule(RuleKind::Nut) => writeln!(stdout, "{}", text.bold())?,
            LineKind::Rule(RuleKind::Capo) => writeln!(stdout, "{}", text.yellow())?,
            LineKind::Rule(RuleKind::Fret) => writeln!(stdout, "{}", text.dark_grey())?,
            LineKind::Row => writeln!(stdout, "{}", text)?,
        }
    }
    stdout.flush()
}

fn print_note(note: &Note) {
    println!("Note:      {}", note);
    println!("Pitch:     {} (semitone {})", note.pitch(), note.pitch().index());
    println!("Octave:    {}", note.octave());
    println!("MIDI:      {}", note.midi());
    println!("Frequency: {:.2} Hz", note.frequency());
}

fn print_presets() -> Result<()> {
    println!("Instruments:");
    for name in presets::instrument_names() {
        let inst = presets::instrument(name)?;
        println!(
            "  {:<18} {}  ({} frets)",
            name,
            inst.tuning_label(),
            inst.max_fret()
        );
    }
    println!();
    println!("Tunings:");
    for name in presets::tuning_names() {
        let tuning = presets::tuning(name)?;
        let notes: Vec<String> = tuning.notes().iter().map(|n| n.to_string()).collect();
        println!("  {:<18} {}", name, notes.join(" "));
    }
    Ok(())
}
