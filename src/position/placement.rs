// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A single (string, fret) location on a neck.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Multiplier separating the string from the fret in a packed code
pub const STRING_STRIDE: i32 = 100;

/// A played note's location on a neck.
///
/// The packed code is `string * 100 + fret`. Decoding uses floor division
/// and a non-negative remainder, so the muted code `-1` decodes to string
/// -1, fret 99 and encodes back to `-1`. Frets must stay below 100 for a
/// pair to survive encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub string: i32,
    pub fret: i32,
}

impl Placement {
    /// Code of a string that is not played
    pub const MUTED_CODE: i32 = -1;

    /// Create a placement from a string and fret, packed then decoded
    /// so an out-of-range fret carries into the string
    pub fn new(string: i32, fret: i32) -> Self {
        Self::from_code(string * STRING_STRIDE + fret)
    }

    /// Decode a packed placement code
    pub fn from_code(code: i32) -> Self {
        Self {
            string: code.div_euclid(STRING_STRIDE),
            fret: code.rem_euclid(STRING_STRIDE),
        }
    }

    /// The muted placement
    pub fn muted() -> Self {
        Self::from_code(Self::MUTED_CODE)
    }

    /// Packed code (`string * 100 + fret`)
    pub fn code(self) -> i32 {
        self.string * STRING_STRIDE + self.fret
    }

    /// True for the `-1` placement of a full position
    pub fn is_muted(self) -> bool {
        self.code() == Self::MUTED_CODE
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
