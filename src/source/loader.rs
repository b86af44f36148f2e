//! Load documents from a store and normalize them for the core

use std::time::Instant;

use super::{Collection, RecordStore};
use crate::core::{MoodAnalytics, Task, normalize_tasks};
use crate::error::AppError;

/// Load statistics for the footer line
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LoadResult {
    /// Documents read from the store
    pub(crate) records: usize,
    /// Check-ins that survived normalization
    pub(crate) events: usize,
    /// Documents the normalizer rejected
    pub(crate) dropped: usize,
    /// Processing time in milliseconds
    pub(crate) elapsed_ms: f64,
}

/// Pick the user to read: an explicit choice wins, otherwise the only user
/// present in the store.
pub(crate) fn resolve_user(
    store: &dyn RecordStore,
    explicit: Option<&str>,
) -> Result<Option<String>, AppError> {
    if let Some(user) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return Ok(Some(user.to_string()));
    }
    let mut users = store.users();
    match users.len() {
        0 => Ok(None),
        1 => Ok(users.pop()),
        _ => Err(AppError::AmbiguousUser {
            users: users.join(", "),
        }),
    }
}

/// Read the user's check-ins and hand them to `analytics` as snapshot
/// `revision`.
pub(crate) fn load_check_ins(
    store: &dyn RecordStore,
    user: Option<&str>,
    analytics: &mut MoodAnalytics,
    revision: u64,
) -> Result<LoadResult, AppError> {
    let start = Instant::now();
    let records = store.list(user, Collection::MoodCheckins)?;
    if !analytics.apply_snapshot(revision, &records) {
        tracing::warn!(revision, "snapshot was not newer than the loaded one");
    }
    let result = LoadResult {
        records: records.len(),
        events: analytics.events().len(),
        dropped: analytics.dropped(),
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    };

    if result.dropped > 0 {
        tracing::warn!(
            dropped = result.dropped,
            "skipped {} malformed {} records",
            result.dropped,
            Collection::MoodCheckins.display_name()
        );
    }
    tracing::info!(
        store = store.name(),
        records = result.records,
        events = result.events,
        "loaded check-ins ({:.2}ms)",
        result.elapsed_ms
    );

    Ok(result)
}

pub(crate) fn load_tasks(
    store: &dyn RecordStore,
    user: Option<&str>,
) -> Result<(Vec<Task>, usize), AppError> {
    let records = store.list(user, Collection::Tasks)?;
    let (tasks, dropped) = normalize_tasks(&records);
    if dropped > 0 {
        tracing::warn!(
            dropped,
            "skipped {} malformed {} records",
            dropped,
            Collection::Tasks.display_name()
        );
    }
    tracing::info!(store = store.name(), tasks = tasks.len(), "loaded tasks");
    Ok((tasks, dropped))
}
