// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names and MIDI note numbers.
//!
//! A note name is a letter, an optional sharp (`#`) or flat (`b`) and an
//! octave, e.g. `"C4"`, `"F#2"`, `"Bb10"`. Numbering starts at C0 = 0 so
//! the valid range runs from `"C0"` to `"G10"` (127).

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Highest valid MIDI note number
pub const MAX_MIDI_NOTE: i32 = 127;

/// Sharp-preferring spelling of each pitch class
const SHARP_NAMES: [(PitchLetter, Accidental); 12] = [
    (PitchLetter::C, Accidental::Natural),
    (PitchLetter::C, Accidental::Sharp),
    (PitchLetter::D, Accidental::Natural),
    (PitchLetter::D, Accidental::Sharp),
    (PitchLetter::E, Accidental::Natural),
    (PitchLetter::F, Accidental::Natural),
    (PitchLetter::F, Accidental::Sharp),
    (PitchLetter::G, Accidental::Natural),
    (PitchLetter::G, Accidental::Sharp),
    (PitchLetter::A, Accidental::Natural),
    (PitchLetter::A, Accidental::Sharp),
    (PitchLetter::B, Accidental::Natural),
];

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchLetter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl PitchLetter {
    /// All letters in ascending order from C
    pub const ALL: [PitchLetter; 7] = [
        PitchLetter::C,
        PitchLetter::D,
        PitchLetter::E,
        PitchLetter::F,
        PitchLetter::G,
        PitchLetter::A,
        PitchLetter::B,
    ];

    /// Semitones above C within the octave
    pub fn offset(self) -> i32 {
        match self {
            PitchLetter::C => 0,
            PitchLetter::D => 2,
            PitchLetter::E => 4,
            PitchLetter::F => 5,
            PitchLetter::G => 7,
            PitchLetter::A => 9,
            PitchLetter::B => 11,
        }
    }

    /// Parse an upper-case letter
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(PitchLetter::C),
            'D' => Some(PitchLetter::D),
            'E' => Some(PitchLetter::E),
            'F' => Some(PitchLetter::F),
            'G' => Some(PitchLetter::G),
            'A' => Some(PitchLetter::A),
            'B' => Some(PitchLetter::B),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            PitchLetter::C => 'C',
            PitchLetter::D => 'D',
            PitchLetter::E => 'E',
            PitchLetter::F => 'F',
            PitchLetter::G => 'G',
            PitchLetter::A => 'A',
            PitchLetter::B => 'B',
        }
    }
}

/// Optional alteration following the letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone adjustment (+1, 0 or -1)
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A spelled note with octave, e.g. `Bb3`
///
/// Parsing only checks the syntax; the number may still fall outside the
/// MIDI range, which [`NoteName::number`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pub letter: PitchLetter,
    pub accidental: Accidental,
    pub octave: i32,
}

impl NoteName {
    /// Create a note name
    pub fn new(letter: PitchLetter, accidental: Accidental, octave: i32) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    /// Unchecked numeric value, may lie outside 0-127
    pub fn raw_number(&self) -> i64 {
        self.letter.offset() as i64 + 12 * self.octave as i64 + self.accidental.semitones() as i64
    }

    /// MIDI note number, failing when outside 0-127
    pub fn number(&self) -> Result<MidiNote, NoteError> {
        let number = self.raw_number();
        if !(0..=MAX_MIDI_NOTE as i64).contains(&number) {
            return Err(NoteError::OutOfRange {
                name: self.to_string(),
                number,
            });
        }
        Ok(number as MidiNote)
    }

    /// Sharp-spelled name for a MIDI note number
    pub fn from_number(num: i32) -> Result<Self, NoteError> {
        if !(0..=MAX_MIDI_NOTE).contains(&num) {
            return Err(NoteError::NumberOutOfRange(num));
        }
        let (letter, accidental) = SHARP_NAMES[(num % 12) as usize];
        Ok(Self::new(letter, accidental, num / 12))
    }

    /// Pitch class (0-11)
    pub fn pitch_class(&self) -> u8 {
        self.raw_number().rem_euclid(12) as u8
    }
}

impl FromStr for NoteName {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || NoteError::Malformed(s.to_string());

        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(PitchLetter::from_char)
            .ok_or_else(malformed)?;

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next().and_then(Accidental::from_char) {
            Some(acc) => (acc, &rest[1..]),
            None => (Accidental::Natural, rest),
        };

        let octave: i32 = octave_str.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow => NoteError::OutOfRange {
                    name: s.to_string(),
                    number: i64::MAX,
                },
                IntErrorKind::NegOverflow => NoteError::OutOfRange {
                    name: s.to_string(),
                    number: i64::MIN,
                },
                _ => malformed(),
            }
        })?;
        Ok(Self::new(letter, accidental, octave))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.letter.as_char(),
            self.accidental.symbol(),
            self.octave
        )
    }
}

/// Convert a note name to its MIDI note number (C0 = 0, G10 = 127)
pub fn note_name_to_number(name: &str) -> Result<MidiNote, NoteError> {
    let parsed: NoteName = name.parse()?;
    parsed.number().map_err(|err| match err {
        NoteError::OutOfRange { number, .. } => NoteError::OutOfRange {
            name: name.to_string(),
            number,
        },
        other => other,
    })
}

/// Convert a MIDI note number to its sharp-spelled name (C0 = 0, G10 = 127)
pub fn number_to_note_name(num: i32) -> Result<String, NoteError> {
    NoteName::from_number(num).map(|name| name.to_string())
}
