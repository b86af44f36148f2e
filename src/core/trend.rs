//! Weekly trend builder
//!
//! Buckets check-ins of one week into a mood x weekday matrix of intensity
//! scores. Every matching check-in sets its own mood's slot, so several
//! moods may be set on the same day.

use chrono::NaiveDate;

use crate::core::catalog::MoodCatalog;
use crate::core::types::{CheckIn, TrendMatrix};
use crate::core::week::WeekWindow;

/// Matrix for one week together with the window it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeeklyTrend {
    /// `None` only when the offset leaves the representable calendar
    pub(crate) window: Option<WeekWindow>,
    pub(crate) matrix: TrendMatrix,
}

pub(crate) fn build_weekly_trend(
    events: &[CheckIn],
    today: NaiveDate,
    week_offset: i64,
    catalog: &MoodCatalog,
) -> WeeklyTrend {
    let mut matrix = TrendMatrix::empty(catalog);
    let Some(window) = WeekWindow::for_offset(today, week_offset) else {
        tracing::warn!(week_offset, "week offset out of range, returning empty trend");
        return WeeklyTrend {
            window: None,
            matrix,
        };
    };

    let mut unknown = 0usize;
    for event in events {
        let local = event.created_at.naive_local();
        if !window.contains(local) {
            continue;
        }
        let Some(score) = catalog.score(&event.mood) else {
            unknown += 1;
            continue;
        };
        matrix.set(&event.mood, WeekWindow::day_index(local), score);
    }

    if unknown > 0 {
        tracing::debug!(unknown, "ignored check-ins with moods outside the catalog");
    }

    WeeklyTrend {
        window: Some(window),
        matrix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MoodSpec;
    use chrono::{DateTime, FixedOffset};

    fn catalog3() -> MoodCatalog {
        let specs: Vec<MoodSpec> = [("joy", "#FFE38E"), ("sad", "#90C3E6"), ("angry", "#E94F4F")]
            .iter()
            .map(|(label, color)| MoodSpec {
                label: label.to_string(),
                color: color.to_string(),
            })
            .collect();
        MoodCatalog::from_specs(&specs).unwrap()
    }

    fn ev(mood: &str, ts: &str) -> CheckIn {
        CheckIn {
            mood: mood.to_string(),
            created_at: DateTime::<FixedOffset>::parse_from_rfc3339(ts).unwrap(),
        }
    }

    // Wednesday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
    }

    #[test]
    fn empty_input_gives_all_null_matrix() {
        let trend = build_weekly_trend(&[], today(), 0, &catalog3());
        assert!(trend.matrix.is_empty());
        assert_eq!(trend.matrix.rows().len(), 3);
        assert!(trend.window.is_some());
    }

    #[test]
    fn scenario_monday_and_wednesday() {
        let events = vec![
            ev("joy", "2026-02-09T08:00:00Z"),
            ev("sad", "2026-02-09T20:00:00Z"),
            ev("joy", "2026-02-11T12:00:00Z"),
        ];
        let trend = build_weekly_trend(&events, today(), 0, &catalog3());
        let m = &trend.matrix;
        assert_eq!(
            m.row("joy").unwrap().slots,
            [Some(3), None, Some(3), None, None, None, None]
        );
        assert_eq!(
            m.row("sad").unwrap().slots,
            [Some(2), None, None, None, None, None, None]
        );
        assert_eq!(m.row("angry").unwrap().slots, [None; 7]);
    }

    #[test]
    fn wednesday_lands_on_index_two_for_any_offset() {
        for offset in [-3_i64, -1, 0, 2] {
            let wednesday = today() + chrono::Duration::days(7 * offset);
            let ts = format!("{}T15:00:00Z", wednesday.format("%Y-%m-%d"));
            let trend = build_weekly_trend(&[ev("angry", &ts)], today(), offset, &catalog3());
            assert_eq!(trend.matrix.row("angry").unwrap().slots[2], Some(1));
            assert_eq!(trend.matrix.row("angry").unwrap().logged_count(), 1);
        }
    }

    #[test]
    fn events_outside_the_window_are_ignored() {
        let events = vec![
            ev("joy", "2026-02-08T23:59:59Z"),
            ev("joy", "2026-02-16T00:00:00Z"),
        ];
        let trend = build_weekly_trend(&events, today(), 0, &catalog3());
        assert!(trend.matrix.is_empty());
    }

    #[test]
    fn previous_week_offset_selects_that_week() {
        let events = vec![ev("sad", "2026-02-08T10:00:00Z")];
        let trend = build_weekly_trend(&events, today(), -1, &catalog3());
        assert_eq!(trend.matrix.row("sad").unwrap().slots[6], Some(2));
    }

    #[test]
    fn unknown_mood_does_not_touch_other_rows() {
        let events = vec![
            ev("ecstatic", "2026-02-10T10:00:00Z"),
            ev("sad", "2026-02-10T11:00:00Z"),
        ];
        let trend = build_weekly_trend(&events, today(), 0, &catalog3());
        assert_eq!(trend.matrix.row("sad").unwrap().slots[1], Some(2));
        assert_eq!(trend.matrix.row("joy").unwrap().logged_count(), 0);
        assert_eq!(trend.matrix.row("angry").unwrap().logged_count(), 0);
        assert!(trend.matrix.row("ecstatic").is_none());
    }

    #[test]
    fn bucketing_uses_the_event_local_calendar() {
        // 23:30 on Tuesday at UTC-05:00 is Wednesday in UTC, but the local
        // day decides the slot.
        let events = vec![ev("joy", "2026-02-10T23:30:00-05:00")];
        let trend = build_weekly_trend(&events, today(), 0, &catalog3());
        assert_eq!(trend.matrix.row("joy").unwrap().slots[1], Some(3));
    }

    #[test]
    fn out_of_range_offset_is_empty_not_an_error() {
        let events = vec![ev("joy", "2026-02-11T10:00:00Z")];
        let trend = build_weekly_trend(&events, today(), i64::MIN, &catalog3());
        assert!(trend.window.is_none());
        assert!(trend.matrix.is_empty());
    }

    #[test]
    fn building_twice_is_identical() {
        let events = vec![
            ev("joy", "2026-02-09T08:00:00Z"),
            ev("angry", "2026-02-12T08:00:00Z"),
        ];
        let a = build_weekly_trend(&events, today(), 0, &catalog3());
        let b = build_weekly_trend(&events, today(), 0, &catalog3());
        assert_eq!(a, b);
    }
}
