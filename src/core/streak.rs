//! Streak counter
//!
//! Counts consecutive calendar days, walking back from today, that hold at
//! least one check-in. Works over the full history and ignores week windows.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::core::types::CheckIn;

/// `cap` bounds the lookback; `None` walks until the first gap.
pub(crate) fn compute_streak(events: &[CheckIn], today: NaiveDate, cap: Option<u32>) -> u32 {
    let days: HashSet<NaiveDate> = events.iter().map(|e| e.created_at.date_naive()).collect();

    let mut streak = 0u32;
    let mut day = today;
    while cap.is_none_or(|limit| streak < limit) && days.contains(&day) {
        streak += 1;
        match day.checked_sub_signed(Duration::days(1)) {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
    }

    fn on_day(days_ago: i64) -> CheckIn {
        let date = today() - Duration::days(days_ago);
        let offset = FixedOffset::east_opt(0).unwrap();
        CheckIn {
            mood: "calm".to_string(),
            created_at: offset
                .from_local_datetime(&date.and_hms_opt(9, 0, 0).unwrap())
                .unwrap(),
        }
    }

    #[test]
    fn empty_history_is_zero() {
        assert_eq!(compute_streak(&[], today(), Some(30)), 0);
        assert_eq!(compute_streak(&[], today(), None), 0);
    }

    #[test]
    fn no_check_in_today_is_zero() {
        let events = vec![on_day(1), on_day(2), on_day(3)];
        assert_eq!(compute_streak(&events, today(), Some(30)), 0);
    }

    #[test]
    fn stops_at_first_gap() {
        let events = vec![on_day(0), on_day(1), on_day(2), on_day(4)];
        assert_eq!(compute_streak(&events, today(), Some(30)), 3);
    }

    #[test]
    fn multiple_check_ins_per_day_count_once() {
        let events = vec![on_day(0), on_day(0), on_day(1), on_day(1)];
        assert_eq!(compute_streak(&events, today(), Some(30)), 2);
    }

    #[test]
    fn cap_bounds_a_long_run() {
        let events: Vec<_> = (0..35).map(on_day).collect();
        assert_eq!(compute_streak(&events, today(), Some(30)), 30);
        assert_eq!(compute_streak(&events, today(), Some(7)), 7);
    }

    #[test]
    fn uncapped_walks_until_the_gap() {
        let events: Vec<_> = (0..35).map(on_day).collect();
        assert_eq!(compute_streak(&events, today(), None), 35);
    }

    #[test]
    fn order_of_events_does_not_matter() {
        let events = vec![on_day(2), on_day(0), on_day(1)];
        assert_eq!(compute_streak(&events, today(), Some(30)), 3);
    }

    #[test]
    fn future_check_ins_do_not_extend_the_streak() {
        let events = vec![on_day(-1), on_day(0)];
        assert_eq!(compute_streak(&events, today(), Some(30)), 1);
    }
}
