//! Pitch classes, notes, stringed-instrument tunings and text fretboard
//! diagrams.
//!
//! ```
//! use clifret::{Instrument, Orientation, Tuning, render};
//!
//! let guitar = Instrument::from_notes("guitar", "EADGBE", 5)?;
//! let drop_d = Tuning::parse("drop-d", "DADGBE")?.apply_to(&guitar)?;
//! let diagram = render(&drop_d.with_capo(2)?, Orientation::Vertical);
//! assert!(diagram.to_string().starts_with("guitar (drop-d) (capo 2)"));
//! # Ok::<(), clifret::TheoryError>(())
//! ```

pub mod config;
pub mod diagram;
pub mod error;
pub mod instrument;
pub mod interval;
pub mod note;
pub mod parser;
pub mod pitch;
pub mod presets;
pub mod tuning;

pub use diagram::{Diagram, Orientation, render};
pub use error::TheoryError;
pub use instrument::{Instrument, StringConfig};
pub use interval::{Interval, Quality};
pub use note::Note;
pub use parser::normalize;
pub use pitch::{NoteName, PitchClass, Spelling};
pub use tuning::Tuning;
