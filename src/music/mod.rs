// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities.
//!
//! This module provides note-name/number conversion and the Roman
//! numerals used to label frets.

pub mod note_name;
pub mod roman;

pub use note_name::{
    note_name_to_number, number_to_note_name, Accidental, MidiNote, NoteName, PitchLetter,
};
pub use roman::to_roman;
