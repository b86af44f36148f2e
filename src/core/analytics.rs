//! Aggregation pipeline: raw records -> normalize -> {trend, streak} -> summary
//!
//! Holds the latest complete snapshot only. A new snapshot replaces the old
//! one wholesale and every query recomputes from it.

use chrono::NaiveDate;

use crate::core::catalog::MoodCatalog;
use crate::core::normalize::normalize;
use crate::core::streak::compute_streak;
use crate::core::summary::summarize;
use crate::core::trend::{WeeklyTrend, build_weekly_trend};
use crate::core::types::{CheckIn, RawCheckIn, Summary};
use crate::utils::Timezone;

/// Everything the insight view shows for one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub(crate) today: NaiveDate,
    pub(crate) trend: WeeklyTrend,
    pub(crate) streak: u32,
    pub(crate) summary: Summary,
}

#[derive(Debug, Default)]
struct Snapshot {
    revision: Option<u64>,
    events: Vec<CheckIn>,
    dropped: usize,
}

#[derive(Debug)]
pub(crate) struct MoodAnalytics {
    catalog: MoodCatalog,
    timezone: Timezone,
    today: NaiveDate,
    streak_cap: Option<u32>,
    snapshot: Snapshot,
}

impl MoodAnalytics {
    pub(crate) fn new(
        catalog: MoodCatalog,
        timezone: Timezone,
        today: NaiveDate,
        streak_cap: Option<u32>,
    ) -> Self {
        Self {
            catalog,
            timezone,
            today,
            streak_cap,
            snapshot: Snapshot::default(),
        }
    }

    /// Replace the snapshot if `revision` is newer than the one held.
    /// Returns `false` for a stale delivery, which is ignored.
    pub(crate) fn apply_snapshot(&mut self, revision: u64, records: &[RawCheckIn]) -> bool {
        if self.snapshot.revision.is_some_and(|current| revision <= current) {
            tracing::debug!(
                revision,
                current = ?self.snapshot.revision,
                "ignoring stale snapshot"
            );
            return false;
        }
        let normalized = normalize(records, self.timezone);
        tracing::debug!(
            revision,
            events = normalized.events.len(),
            dropped = normalized.dropped,
            "applied snapshot"
        );
        self.snapshot = Snapshot {
            revision: Some(revision),
            events: normalized.events,
            dropped: normalized.dropped,
        };
        true
    }

    pub(crate) fn events(&self) -> &[CheckIn] {
        &self.snapshot.events
    }

    pub(crate) fn dropped(&self) -> usize {
        self.snapshot.dropped
    }

    pub(crate) fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.today
    }

    pub(crate) fn streak_cap(&self) -> Option<u32> {
        self.streak_cap
    }

    pub(crate) fn weekly_trend(&self, week_offset: i64) -> WeeklyTrend {
        build_weekly_trend(&self.snapshot.events, self.today, week_offset, &self.catalog)
    }

    pub(crate) fn streak(&self) -> u32 {
        compute_streak(&self.snapshot.events, self.today, self.streak_cap)
    }

    pub(crate) fn summary(&self, week_offset: i64) -> Summary {
        summarize(&self.weekly_trend(week_offset).matrix)
    }

    pub(crate) fn report(&self, week_offset: i64) -> Report {
        let trend = self.weekly_trend(week_offset);
        let summary = summarize(&trend.matrix);
        Report {
            today: self.today,
            trend,
            streak: self.streak(),
            summary,
        }
    }
}
