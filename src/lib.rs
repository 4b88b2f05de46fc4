// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Finger positions on fretted instruments.
//!
//! - [`music`]: note-name/number conversion and fret numerals
//! - [`position`]: generic positions and neck positions packed as
//!   `string * 100 + fret`
//! - [`config`]: instrument tunings loaded from YAML or TOML

pub mod config;
pub mod error;
pub mod music;
pub mod position;

pub use config::InstrumentConfig;
pub use error::{NoteError, PositionError};
pub use music::{note_name_to_number, number_to_note_name, MidiNote, NoteName};
pub use position::{Fingering, NeckPosition, Placement, Position};
