// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Positions on a fretted neck.
//!
//! A [`NeckPosition`] reads each placement as a (string, fret) pair and adds
//! sorting, shifting, barre detection and full-position expansion.
//!
//! Mutation is deliberately uneven: [`NeckPosition::add_note`] and
//! [`NeckPosition::shift`] change the position in place, while the sorts
//! and [`NeckPosition::get_full_position`] build a new position.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::base::{Fingering, NO_FINGER};
use super::placement::Placement;
use crate::error::PositionError;
use crate::music::to_roman;

/// Strings expanded by a full position on a standard guitar
pub const DEFAULT_NUM_STRINGS: usize = 6;

/// Highest finger number on a fretting hand (index = 1 .. pinky = 4)
pub const DEFAULT_MAX_FINGER: i32 = 4;

/// A position on a neck instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "NeckPositionJson", try_from = "NeckPositionJson")]
pub struct NeckPosition {
    notes: Vec<Placement>,
    fingers: Vec<i32>,
    id: Option<u32>,
}

/// Flat JSON form: `{"strings", "frets", "fingers", "id"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeckPositionJson {
    pub strings: Vec<i32>,
    pub frets: Vec<i32>,
    pub fingers: Vec<i32>,
    pub id: Option<u32>,
}

impl NeckPosition {
    /// Create a position from packed placement codes, copying both sequences
    pub fn new(placements: &[i32], fingers: &[i32], id: Option<u32>) -> Result<Self, PositionError> {
        PositionError::check_lengths("placements", placements.len(), "fingers", fingers.len())?;
        Ok(Self {
            notes: placements.iter().map(|&code| Placement::from_code(code)).collect(),
            fingers: fingers.to_vec(),
            id,
        })
    }

    /// Create a position from parallel string and fret lists
    pub fn from_strings_frets(
        fingers: &[i32],
        strings: &[i32],
        frets: &[i32],
        id: Option<u32>,
    ) -> Result<Self, PositionError> {
        PositionError::check_lengths("strings", strings.len(), "frets", frets.len())?;
        PositionError::check_lengths("strings", strings.len(), "fingers", fingers.len())?;
        Ok(Self {
            notes: strings
                .iter()
                .zip(frets)
                .map(|(&string, &fret)| Placement::new(string, fret))
                .collect(),
            fingers: fingers.to_vec(),
            id,
        })
    }

    /// Reinterpret any position whose codes already use `string * 100 + fret`
    pub fn from_position<P: Fingering + ?Sized>(position: &P) -> Result<Self, PositionError> {
        Self::new(&position.placements(), position.fingers(), position.id())
    }

    fn from_pairs(pairs: Vec<(Placement, i32)>, id: Option<u32>) -> Self {
        let (notes, fingers) = pairs.into_iter().unzip();
        Self { notes, fingers, id }
    }

    fn pairs(&self, operation: &'static str) -> Result<Vec<(Placement, i32)>, PositionError> {
        if self.notes.is_empty() {
            return Err(PositionError::EmptyCollection(operation));
        }
        Ok(self
            .notes
            .iter()
            .copied()
            .zip(self.fingers.iter().copied())
            .collect())
    }

    /// Decoded (string, fret) pairs
    pub fn notes(&self) -> &[Placement] {
        &self.notes
    }

    /// String of each note
    pub fn strings(&self) -> Vec<i32> {
        self.notes.iter().map(|p| p.string).collect()
    }

    /// Fret of each note
    pub fn frets(&self) -> Vec<i32> {
        self.notes.iter().map(|p| p.fret).collect()
    }

    /// True when one positive finger holds more than one string
    pub fn is_barre(&self) -> bool {
        let mut seen = HashSet::new();
        self.fingers
            .iter()
            .filter(|&&finger| finger > NO_FINGER)
            .any(|&finger| !seen.insert(finger))
    }

    /// Stable sort by placement code, highest string first when `reverse`
    pub fn sort_by_string(&self, reverse: bool) -> Result<Self, PositionError> {
        let mut pairs = self.pairs("sort by string")?;
        if reverse {
            pairs.sort_by(|a, b| b.0.code().cmp(&a.0.code()));
        } else {
            pairs.sort_by_key(|(placement, _)| placement.code());
        }
        Ok(Self::from_pairs(pairs, self.id))
    }

    /// Stable sort by fret, lowest first
    pub fn sort_by_fret(&self) -> Result<Self, PositionError> {
        let mut pairs = self.pairs("sort by fret")?;
        pairs.sort_by_key(|(placement, _)| placement.fret);
        Ok(Self::from_pairs(pairs, self.id))
    }

    /// Stable sort by finger value, lowest first (unfingered notes lead)
    pub fn sort_by_finger(&self) -> Result<Self, PositionError> {
        let mut pairs = self.pairs("sort by finger")?;
        pairs.sort_by_key(|&(_, finger)| finger);
        Ok(Self::from_pairs(pairs, self.id))
    }

    /// Expand to one placement per string `0..num_strings`.
    ///
    /// Strings that are not played get the muted code `-1`; a string that
    /// appears twice keeps its first placement. The fingers are carried over
    /// unchanged, so the result may hold a different number of fingers than
    /// placements. The id is not carried over.
    pub fn get_full_position(&self, num_strings: usize) -> Self {
        let notes: Vec<Placement> = (0..num_strings as i32)
            .map(|string| {
                self.notes
                    .iter()
                    .find(|p| p.string == string)
                    .copied()
                    .unwrap_or_else(Placement::muted)
            })
            .collect();
        trace!(
            played = self.notes.len(),
            num_strings,
            "expanded to full position"
        );
        Self {
            notes,
            fingers: self.fingers.clone(),
            id: None,
        }
    }

    /// Append a note in place
    pub fn add_note(&mut self, string: i32, fret: i32, finger: i32) {
        self.notes.push(Placement::new(string, fret));
        self.fingers.push(finger);
    }

    /// Move every fingered note up by `amount` fingers, in place.
    ///
    /// Nothing changes when `max_finger` is already used or the highest
    /// finger would pass it. Returns whether the fingers were shifted.
    pub fn shift(&mut self, amount: i32, max_finger: i32) -> Result<bool, PositionError> {
        let highest = self
            .fingers
            .iter()
            .copied()
            .max()
            .ok_or(PositionError::EmptyCollection("shift"))?;

        let passes_max = highest
            .checked_add(amount)
            .map_or(true, |shifted| shifted > max_finger);
        if self.fingers.contains(&max_finger) || passes_max {
            debug!(amount, max_finger, highest, "shift skipped");
            return Ok(false);
        }

        for finger in self.fingers.iter_mut().filter(|f| **f > NO_FINGER) {
            *finger += amount;
        }
        Ok(true)
    }

    /// Flat JSON export
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "strings": self.strings(),
            "frets": self.frets(),
            "fingers": self.fingers,
            "id": self.id,
        })
    }

    /// Rebuild a position from its JSON export
    pub fn from_json(value: serde_json::Value) -> Result<Self, PositionError> {
        let json: NeckPositionJson = serde_json::from_value(value)?;
        Self::try_from(json)
    }
}

impl Fingering for NeckPosition {
    fn placements(&self) -> Vec<i32> {
        self.notes.iter().map(|p| p.code()).collect()
    }

    fn fingers(&self) -> &[i32] {
        &self.fingers
    }

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}

impl From<NeckPosition> for NeckPositionJson {
    fn from(position: NeckPosition) -> Self {
        Self {
            strings: position.strings(),
            frets: position.frets(),
            fingers: position.fingers,
            id: position.id,
        }
    }
}

impl TryFrom<NeckPositionJson> for NeckPosition {
    type Error = PositionError;

    /// Fingers are taken as-is so an expanded full position reads back.
    fn try_from(json: NeckPositionJson) -> Result<Self, Self::Error> {
        PositionError::check_lengths("strings", json.strings.len(), "frets", json.frets.len())?;
        Ok(Self {
            notes: json
                .strings
                .iter()
                .zip(&json.frets)
                .map(|(&string, &fret)| Placement::new(string, fret))
                .collect(),
            fingers: json.fingers,
            id: json.id,
        })
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for NeckPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roman_frets: Vec<String> = self
            .notes
            .iter()
            .map(|p| if p.is_muted() { to_roman(-1) } else { to_roman(p.fret) })
            .collect();
        write!(f, "Strings: ")?;
        write_list(f, &self.strings())?;
        write!(f, ", Frets: ")?;
        write_list(f, &roman_frets)?;
        write!(f, ", Fingers: ")?;
        write_list(f, &self.fingers)?;
        match self.id {
            Some(id) => write!(f, ", ID: {}", id),
            None => write!(f, ", ID: None"),
        }
    }
}
