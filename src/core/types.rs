//! Core data types shared by the aggregation stages
//!
//! Everything here is ephemeral: rebuilt from the full check-in list every
//! time the snapshot or the week offset changes.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::consts::DAYS_IN_WEEK;
use crate::core::catalog::MoodCatalog;

/// Raw document as delivered by the store; the normalizer decides what is
/// usable.
pub(crate) type RawCheckIn = serde_json::Value;

/// A normalized mood check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckIn {
    pub(crate) mood: String,
    /// Instant of the check-in, expressed in the bucketing timezone
    pub(crate) created_at: DateTime<FixedOffset>,
}

/// One mood's seven day slots, index 0 = Monday
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TrendRow {
    pub(crate) mood: String,
    pub(crate) color: String,
    pub(crate) slots: [Option<u32>; DAYS_IN_WEEK],
}

impl TrendRow {
    pub(crate) fn logged_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Mood label -> per-day intensity, rows in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct TrendMatrix {
    rows: Vec<TrendRow>,
}

impl TrendMatrix {
    /// All-null matrix with one row per catalog mood
    pub(crate) fn empty(catalog: &MoodCatalog) -> Self {
        let rows = catalog
            .iter()
            .map(|mood| TrendRow {
                mood: mood.label.clone(),
                color: mood.color.clone(),
                slots: [None; DAYS_IN_WEEK],
            })
            .collect();
        Self { rows }
    }

    pub(crate) fn rows(&self) -> &[TrendRow] {
        &self.rows
    }

    pub(crate) fn row(&self, mood: &str) -> Option<&TrendRow> {
        self.rows.iter().find(|r| r.mood == mood)
    }

    pub(crate) fn set(&mut self, mood: &str, day: usize, score: u32) -> bool {
        match self.rows.iter_mut().find(|r| r.mood == mood) {
            Some(row) if day < DAYS_IN_WEEK => {
                row.slots[day] = Some(score);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.slots.iter().all(Option::is_none))
    }

    /// Mood shown for each day on the home screen bar: the highest ranked
    /// mood logged that day.
    pub(crate) fn day_moods(&self) -> [Option<&TrendRow>; DAYS_IN_WEEK] {
        let mut days = [None; DAYS_IN_WEEK];
        for (day, slot) in days.iter_mut().enumerate() {
            *slot = self.rows.iter().find(|r| r.slots[day].is_some());
        }
        days
    }
}

/// How often a mood appears in the week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MoodFrequency {
    pub(crate) mood: String,
    pub(crate) count: usize,
}

/// Weekly overview derived from a trend matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Summary {
    pub(crate) logged_days: usize,
    pub(crate) top_mood: Option<String>,
    /// 0..=100, high when check-ins concentrate on few moods
    pub(crate) consistency: u32,
    /// Catalog order, zero counts included
    pub(crate) frequencies: Vec<MoodFrequency>,
}
