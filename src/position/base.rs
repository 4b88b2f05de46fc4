// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generic positions: parallel placement codes and finger assignments.

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// Finger value meaning no finger (open or muted string)
pub const NO_FINGER: i32 = 0;

/// Read access shared by every kind of position
pub trait Fingering {
    /// Placement codes, one per played note
    fn placements(&self) -> Vec<i32>;

    /// Finger assignments aligned with `placements`
    fn fingers(&self) -> &[i32];

    /// Optional catalog identifier
    fn id(&self) -> Option<u32>;

    /// Number of notes
    fn len(&self) -> usize {
        self.fingers().len()
    }

    /// Check if there are no notes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A position whose placement codes are opaque integers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    placements: Vec<i32>,
    fingers: Vec<i32>,
    id: Option<u32>,
}

impl Position {
    /// Create a position, copying both sequences
    pub fn new(placements: &[i32], fingers: &[i32], id: Option<u32>) -> Result<Self, PositionError> {
        PositionError::check_lengths("placements", placements.len(), "fingers", fingers.len())?;
        Ok(Self {
            placements: placements.to_vec(),
            fingers: fingers.to_vec(),
            id,
        })
    }
}

impl Fingering for Position {
    fn placements(&self) -> Vec<i32> {
        self.placements.clone()
    }

    fn fingers(&self) -> &[i32] {
        &self.fingers
    }

    fn id(&self) -> Option<u32> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_copies_sequences() {
        let mut placements = vec![100, 202];
        let fingers = vec![0, 2];
        let position = Position::new(&placements, &fingers, Some(7)).unwrap();
        placements[0] = 999;

        assert_eq!(position.placements(), vec![100, 202]);
        assert_eq!(position.fingers(), &[0, 2]);
        assert_eq!(position.id(), Some(7));
        assert_eq!(position.len(), 2);
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = Position::new(&[100, 202], &[1], None).unwrap_err();
        assert!(matches!(
            err,
            PositionError::LengthMismatch { left: 2, right: 1, .. }
        ));
    }

    #[test]
    fn test_empty() {
        let position = Position::new(&[], &[], None).unwrap();
        assert!(position.is_empty());
        assert_eq!(position, Position::default());
    }
}
