// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Finger positions.
//!
//! A position lists the notes of a chord shape as placement codes with a
//! finger for each. [`NeckPosition`] reads the codes as (string, fret)
//! pairs packed as `string * 100 + fret`.

pub mod base;
pub mod neck;
pub mod placement;

pub use base::{Fingering, Position, NO_FINGER};
pub use neck::{NeckPosition, NeckPositionJson, DEFAULT_MAX_FINGER, DEFAULT_NUM_STRINGS};
pub use placement::{Placement, STRING_STRIDE};
