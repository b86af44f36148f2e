//! Monday-to-Sunday week windows relative to a reference day

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Inclusive window from Monday 00:00:00.000 to Sunday 23:59:59.999
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WeekWindow {
    pub(crate) offset: i64,
    pub(crate) start: NaiveDateTime,
    pub(crate) end: NaiveDateTime,
}

/// Monday of the week containing `date`
pub(crate) fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(back))
}

impl WeekWindow {
    /// Window `offset` weeks away from the week containing `today`.
    /// `None` if the shifted week falls outside the representable calendar.
    pub(crate) fn for_offset(today: NaiveDate, offset: i64) -> Option<Self> {
        let shift = Duration::try_days(offset.checked_mul(7)?)?;
        let monday = monday_of(today).checked_add_signed(shift)?;
        let sunday = monday.checked_add_signed(Duration::days(6))?;
        Some(Self {
            offset,
            start: monday.and_time(NaiveTime::MIN),
            end: sunday.and_hms_milli_opt(23, 59, 59, 999)?,
        })
    }

    pub(crate) fn monday(&self) -> NaiveDate {
        self.start.date()
    }

    pub(crate) fn sunday(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whole-day membership: anything on Monday..=Sunday counts, including
    /// sub-millisecond instants after 23:59:59.999 on Sunday.
    pub(crate) fn contains(&self, local: NaiveDateTime) -> bool {
        let day = local.date();
        day >= self.monday() && day <= self.sunday()
    }

    /// Day index within the week, 0 = Monday
    pub(crate) fn day_index(local: NaiveDateTime) -> usize {
        local.weekday().num_days_from_monday() as usize
    }

    /// Header label such as "Mon 9 Feb - Sun 15 Feb"
    pub(crate) fn label(&self) -> String {
        format!(
            "{} - {}",
            self.monday().format("%a %-d %b"),
            self.sunday().format("%a %-d %b")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monday_of_every_weekday() {
        // 2026-02-09 is a Monday
        for offset in 0..7 {
            let date = d(2026, 2, 9) + Duration::days(offset);
            assert_eq!(monday_of(date), d(2026, 2, 9));
        }
    }

    #[test]
    fn sunday_belongs_to_the_preceding_monday() {
        assert_eq!(monday_of(d(2026, 2, 15)), d(2026, 2, 9));
        assert_eq!(monday_of(d(2026, 2, 16)), d(2026, 2, 16));
    }

    #[test]
    fn current_week_bounds() {
        let w = WeekWindow::for_offset(d(2026, 2, 11), 0).unwrap();
        assert_eq!(w.start.to_string(), "2026-02-09 00:00:00");
        assert_eq!(w.end.to_string(), "2026-02-15 23:59:59.999");
    }

    #[test]
    fn offsets_shift_whole_weeks() {
        let prev = WeekWindow::for_offset(d(2026, 2, 11), -1).unwrap();
        assert_eq!(prev.monday(), d(2026, 2, 2));
        assert_eq!(prev.sunday(), d(2026, 2, 8));

        let next = WeekWindow::for_offset(d(2026, 2, 11), 1).unwrap();
        assert_eq!(next.monday(), d(2026, 2, 16));
    }

    #[test]
    fn crosses_year_boundary() {
        // 2026-01-01 is a Thursday
        let w = WeekWindow::for_offset(d(2026, 1, 1), 0).unwrap();
        assert_eq!(w.monday(), d(2025, 12, 29));
        assert_eq!(w.sunday(), d(2026, 1, 4));
    }

    #[test]
    fn absurd_offset_is_none() {
        assert!(WeekWindow::for_offset(d(2026, 2, 11), i64::MAX).is_none());
        assert!(WeekWindow::for_offset(d(2026, 2, 11), 100_000_000).is_none());
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let w = WeekWindow::for_offset(d(2026, 2, 11), 0).unwrap();
        let first = d(2026, 2, 9).and_hms_opt(0, 0, 0).unwrap();
        let last = d(2026, 2, 15).and_hms_milli_opt(23, 59, 59, 999).unwrap();
        assert!(w.contains(first));
        assert!(w.contains(last));
        assert!(!w.contains(first - Duration::milliseconds(1)));
        assert!(!w.contains(last + Duration::milliseconds(1)));
    }

    #[test]
    fn day_index_maps_sunday_last() {
        let wed = d(2026, 2, 11).and_hms_opt(12, 0, 0).unwrap();
        let sun = d(2026, 2, 15).and_hms_opt(12, 0, 0).unwrap();
        let mon = d(2026, 2, 9).and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(WeekWindow::day_index(mon), 0);
        assert_eq!(WeekWindow::day_index(wed), 2);
        assert_eq!(WeekWindow::day_index(sun), 6);
    }

    #[test]
    fn label_matches_screen_header() {
        let w = WeekWindow::for_offset(d(2026, 2, 11), 0).unwrap();
        assert_eq!(w.label(), "Mon 9 Feb - Sun 15 Feb");
    }
}
