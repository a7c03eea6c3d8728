//! Boundary adapter for the two accepted option input shapes.
//!
//! Hosts supply options either as an ordered list or as an ordered map from
//! key to option (or image-URI shorthand). Both normalize into one canonical
//! `Vec<WheelOption>` before any layout logic runs; the list form's order is
//! authoritative, the map form preserves entry order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Option counts outside `[MIN_OPTIONS, MAX_OPTIONS]` still render, but
/// wedges may overlap.
pub const MIN_OPTIONS: usize = 3;
pub const MAX_OPTIONS: usize = 8;

/// One selectable option on the wheel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelOption {
    /// Unique, stable identity; selection is communicated by key.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Image URI shown inside the wedge, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl WheelOption {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            image: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A map-form entry: a full option, or an image-URI shorthand that expands
/// to `{ key, label: key, image: uri }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapEntry {
    Image(String),
    Full(WheelOption),
}

/// The option input shapes hosts may supply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionsInput {
    List(Vec<WheelOption>),
    Map(Vec<(String, MapEntry)>),
}

impl From<Vec<WheelOption>> for OptionsInput {
    fn from(list: Vec<WheelOption>) -> Self {
        OptionsInput::List(list)
    }
}

impl From<Vec<(String, MapEntry)>> for OptionsInput {
    fn from(entries: Vec<(String, MapEntry)>) -> Self {
        OptionsInput::Map(entries)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("options input is empty")]
    Empty,
    #[error("duplicate option key: {0}")]
    DuplicateKey(String),
}

impl OptionsInput {
    /// Normalize either shape into one ordered option sequence.
    ///
    /// Map entries take their key from the map key; entries without a label
    /// get the key as label. Empty input and duplicate keys are errors the
    /// component reports on its logging channel instead of panicking.
    pub fn normalize(&self) -> Result<Vec<WheelOption>, OptionsError> {
        let options: Vec<WheelOption> = match self {
            OptionsInput::List(list) => list.clone(),
            OptionsInput::Map(entries) => entries
                .iter()
                .map(|(key, entry)| match entry {
                    MapEntry::Image(uri) => WheelOption {
                        key: key.clone(),
                        label: Some(key.clone()),
                        image: Some(uri.clone()),
                    },
                    MapEntry::Full(opt) => WheelOption {
                        key: key.clone(),
                        label: opt.label.clone().or_else(|| Some(key.clone())),
                        image: opt.image.clone(),
                    },
                })
                .collect(),
        };

        if options.is_empty() {
            return Err(OptionsError::Empty);
        }

        let mut seen = HashSet::new();
        for opt in &options {
            if !seen.insert(opt.key.as_str()) {
                return Err(OptionsError::DuplicateKey(opt.key.clone()));
            }
        }

        Ok(options)
    }
}

/// Advisory count check. Layout proceeds best-effort regardless.
pub fn validate_count(count: usize) {
    if count < MIN_OPTIONS {
        log::warn!(
            "wagon wheel picker: minimum {MIN_OPTIONS} options recommended, got {count}; \
             the wheel may not render correctly"
        );
    } else if count > MAX_OPTIONS {
        log::warn!(
            "wagon wheel picker: maximum {MAX_OPTIONS} options recommended, got {count}; \
             wedges may overlap"
        );
    }
}
