//! Mood catalog
//!
//! The ordered set of moods a check-in may report. A mood's position in the
//! catalog is its rank, and `len - rank` is the intensity score plotted in
//! the weekly trend, so joy (rank 0) always scores highest.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Mood {
    pub(crate) label: String,
    /// Display color as `#RRGGBB`
    pub(crate) color: String,
    pub(crate) rank: usize,
}

/// Mood definition as written in the config file
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MoodSpec {
    pub(crate) label: String,
    pub(crate) color: String,
}

/// Built-in catalogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CatalogPreset {
    /// Six moods charted on the insight screen (default)
    #[default]
    Standard,
    /// Nine moods offered on the check-in screen
    Extended,
}

const STANDARD: &[(&str, &str)] = &[
    ("joy", "#FFE38E"),
    ("sad", "#90C3E6"),
    ("angry", "#E94F4F"),
    ("anxiety", "#C9B8FF"),
    ("calm", "#B8E2DC"),
    ("neutral", "#B7A282"),
];

const EXTENDED: &[(&str, &str)] = &[
    ("joy", "#FFE38E"),
    ("sad", "#90C3E6"),
    ("angry", "#E94F4F"),
    ("fear", "#C9B8FF"),
    ("calm", "#B8E2DC"),
    ("neutral", "#B7A282"),
    ("surprise", "#F7C59F"),
    ("disgust", "#BFD8A5"),
    ("contempt", "#D8A7B1"),
];

/// Immutable, ordered mood catalog. Passed explicitly into every
/// aggregation; never stored in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MoodCatalog {
    moods: Vec<Mood>,
}

impl MoodCatalog {
    pub(crate) fn preset(preset: CatalogPreset) -> Self {
        let table = match preset {
            CatalogPreset::Standard => STANDARD,
            CatalogPreset::Extended => EXTENDED,
        };
        let moods = table
            .iter()
            .enumerate()
            .map(|(rank, (label, color))| Mood {
                label: (*label).to_string(),
                color: (*color).to_string(),
                rank,
            })
            .collect();
        Self { moods }
    }

    /// Build a catalog from an ordered list; rank follows list order
    pub(crate) fn from_specs(specs: &[MoodSpec]) -> Result<Self, AppError> {
        if specs.is_empty() {
            return Err(AppError::InvalidCatalog {
                reason: "no moods defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut moods = Vec::with_capacity(specs.len());
        for (rank, spec) in specs.iter().enumerate() {
            let label = spec.label.trim();
            if label.is_empty() {
                return Err(AppError::InvalidCatalog {
                    reason: format!("mood #{} has an empty label", rank + 1),
                });
            }
            if !seen.insert(label.to_string()) {
                return Err(AppError::InvalidCatalog {
                    reason: format!("duplicate mood \"{label}\""),
                });
            }
            let color = spec.color.trim();
            if parse_hex_color(color).is_none() {
                return Err(AppError::InvalidCatalog {
                    reason: format!("mood \"{label}\" has invalid color \"{color}\""),
                });
            }
            moods.push(Mood {
                label: label.to_string(),
                color: color.to_string(),
                rank,
            });
        }
        Ok(Self { moods })
    }

    pub(crate) fn len(&self) -> usize {
        self.moods.len()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Mood> {
        self.moods.iter()
    }

    pub(crate) fn get(&self, label: &str) -> Option<&Mood> {
        self.moods.iter().find(|m| m.label == label)
    }

    /// Intensity score for a mood, `None` for labels outside the catalog
    pub(crate) fn score(&self, label: &str) -> Option<u32> {
        self.get(label)
            .map(|mood| (self.len() - mood.rank) as u32)
    }
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self::preset(CatalogPreset::Standard)
    }
}

/// Parse `#RRGGBB` into its components
pub(crate) fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
