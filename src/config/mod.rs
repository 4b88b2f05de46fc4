// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Instrument configuration.
//!
//! An instrument file names the tuning of each string and the highest
//! finger available for shifting. Files are YAML unless they end in
//! `.toml`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NoteError, PositionError};
use crate::music::{note_name_to_number, MidiNote};
use crate::position::{NeckPosition, DEFAULT_MAX_FINGER};

/// A fretted instrument
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentConfig {
    /// Instrument name
    #[serde(default = "default_name")]
    pub name: String,
    /// Open-string note names, indexed by string number
    #[serde(default = "default_tuning")]
    pub tuning: Vec<String>,
    /// Highest finger number used when shifting
    #[serde(default = "default_max_finger")]
    pub max_finger: i32,
}

fn default_name() -> String {
    "guitar".to_string()
}
fn default_tuning() -> Vec<String> {
    ["E2", "A2", "D3", "G3", "B3", "E4"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_max_finger() -> i32 {
    DEFAULT_MAX_FINGER
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tuning: default_tuning(),
            max_finger: default_max_finger(),
        }
    }
}

impl InstrumentConfig {
    /// Load and validate an instrument file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read instrument file: {:?}", path))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            _ => Self::from_yaml(&contents)?,
        };
        config
            .validate()
            .with_context(|| format!("Invalid instrument file: {:?}", path))?;

        debug!(name = %config.name, strings = config.num_strings(), "loaded instrument");
        Ok(config)
    }

    /// Parse an instrument from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML instrument")
    }

    /// Parse an instrument from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML instrument")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize instrument to YAML")
    }

    /// Save the instrument as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write instrument file: {:?}", path.as_ref()))
    }

    /// Check the tuning parses and fingers are positive
    pub fn validate(&self) -> Result<()> {
        if self.tuning.is_empty() {
            bail!("Instrument {:?} has no strings", self.name);
        }
        if self.max_finger < 1 {
            bail!("max_finger must be at least 1, got {}", self.max_finger);
        }
        self.open_notes()?;
        Ok(())
    }

    /// Number of strings
    pub fn num_strings(&self) -> usize {
        self.tuning.len()
    }

    /// MIDI note of each open string
    pub fn open_notes(&self) -> Result<Vec<MidiNote>, NoteError> {
        self.tuning
            .iter()
            .map(|name| note_name_to_number(name))
            .collect()
    }

    /// MIDI note sounded by each placement.
    ///
    /// Muted placements and strings the tuning does not cover give `None`.
    pub fn sounding_notes(&self, position: &NeckPosition) -> Result<Vec<Option<MidiNote>>, NoteError> {
        let open = self.open_notes()?;
        position
            .notes()
            .iter()
            .map(|placement| {
                if placement.is_muted() || placement.string < 0 {
                    return Ok(None);
                }
                let Some(&base) = open.get(placement.string as usize) else {
                    return Ok(None);
                };
                let number = base as i32 + placement.fret;
                if !(0..=127).contains(&number) {
                    return Err(NoteError::NumberOutOfRange(number));
                }
                Ok(Some(number as MidiNote))
            })
            .collect()
    }

    /// Expand a position to every string of this instrument
    pub fn full_position(&self, position: &NeckPosition) -> NeckPosition {
        position.get_full_position(self.num_strings())
    }

    /// Shift a position's fingers in place, bounded by this instrument's `max_finger`
    pub fn shift(&self, position: &mut NeckPosition, amount: i32) -> Result<bool, PositionError> {
        position.shift(amount, self.max_finger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Fingering;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = InstrumentConfig::from_yaml("name: \"Minimal\"\n").unwrap();
        assert_eq!(config.name, "Minimal");
        assert_eq!(config.num_strings(), 6);
        assert_eq!(config.max_finger, 4);
        assert_eq!(config, InstrumentConfig {
            name: "Minimal".to_string(),
            ..InstrumentConfig::default()
        });
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
name: "Ukulele"
tuning: ["G4", "C4", "E4", "A4"]
max_finger: 4
"#;
        let config = InstrumentConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, "Ukulele");
        assert_eq!(config.open_notes().unwrap(), vec![55, 48, 52, 57]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
name = "Bass"
tuning = ["E1", "A1", "D2", "G2"]
"#;
        let config = InstrumentConfig::from_toml(text).unwrap();
        assert_eq!(config.num_strings(), 4);
        assert_eq!(config.open_notes().unwrap(), vec![16, 21, 26, 31]);
    }

    #[test]
    fn test_validate_rejects_bad_tuning() {
        let mut config = InstrumentConfig::default();
        config.tuning[2] = "H3".to_string();
        assert!(config.validate().is_err());

        config.tuning.clear();
        assert!(config.validate().is_err());

        let config = InstrumentConfig {
            max_finger: 0,
            ..InstrumentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sounding_notes() {
        let config = InstrumentConfig::default();
        // open E2 string, A2 string fret 2, muted string
        let position = NeckPosition::new(&[0, 102, -1, 903], &[0, 2, 0, 1], None).unwrap();
        let notes = config.sounding_notes(&position).unwrap();
        assert_eq!(notes, vec![Some(28), Some(35), None, None]);
    }

    #[test]
    fn test_sounding_notes_out_of_range() {
        let config = InstrumentConfig {
            tuning: vec!["G10".to_string()],
            ..InstrumentConfig::default()
        };
        let position = NeckPosition::new(&[1], &[1], None).unwrap();
        assert_eq!(
            config.sounding_notes(&position),
            Err(NoteError::NumberOutOfRange(128))
        );
    }

    #[test]
    fn test_sounding_notes_negative_fret() {
        let config = InstrumentConfig::default();
        // -30 packs to string -1, fret 70: off the neck, not a wrapped note
        let mut position = NeckPosition::new(&[], &[], None).unwrap();
        position.add_note(0, -30, 1);
        assert_eq!(config.sounding_notes(&position), Ok(vec![None]));
    }

    #[test]
    fn test_full_position_and_shift() {
        let config = InstrumentConfig::from_yaml("tuning: [\"E2\", \"A2\", \"D3\", \"G3\"]\nmax_finger: 3\n")
            .unwrap();
        let mut position = NeckPosition::new(&[102, 302], &[1, 2], None).unwrap();

        let full = config.full_position(&position);
        assert_eq!(full.placements(), vec![-1, 102, -1, 302]);

        assert!(config.shift(&mut position, 1).unwrap());
        assert_eq!(position.fingers(), &[2, 3]);
        assert!(!config.shift(&mut position, 1).unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("mandolin.yaml");

        let original = InstrumentConfig {
            name: "Mandolin".to_string(),
            tuning: vec!["G3".into(), "D4".into(), "A4".into(), "E5".into()],
            max_finger: 4,
        };
        original.save(&file_path).unwrap();

        let loaded = InstrumentConfig::load(&file_path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bass.toml");
        std::fs::write(&file_path, "name = \"Bass\"\ntuning = [\"E1\", \"A1\", \"D2\", \"G2\"]\n").unwrap();

        let loaded = InstrumentConfig::load(&file_path).unwrap();
        assert_eq!(loaded.name, "Bass");
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.yaml");
        std::fs::write(&file_path, "this is not valid yaml: [").unwrap();
        assert!(InstrumentConfig::load(&file_path).is_err());

        assert!(InstrumentConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
