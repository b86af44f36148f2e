use chrono::offset::Offset;
use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Calendar used for day bucketing. `Local` follows the machine, like the
/// device calendar the check-ins were recorded on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Resolve a wall-clock time in this zone. Ambiguous times (DST fold)
    /// take the earlier instant; nonexistent ones (DST gap) are read with the
    /// offset in force before the gap, which lands them just past it.
    pub(crate) fn from_local(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Timezone::Local => resolve_local(&Local, naive),
            Timezone::Named(tz) => resolve_local(&tz, naive),
        }
    }

    pub(crate) fn today(self) -> NaiveDate {
        self.to_fixed_offset(Utc::now()).date_naive()
    }
}

fn resolve_local<Z: TimeZone>(zone: &Z, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => {
            let before = naive.checked_sub_signed(Duration::days(1))?;
            let offset = zone.offset_from_local_datetime(&before).earliest()?.fix();
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_any_case() {
        for raw in ["local", "LOCAL", "  Local  ", ""] {
            assert!(matches!(
                Timezone::parse(Some(raw)).unwrap(),
                Timezone::Local
            ));
        }
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Africa/Nairobi")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Africa::Nairobi)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn late_evening_utc_lands_on_next_local_day_east_of_greenwich() {
        let utc = "2026-02-11T22:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("Africa/Nairobi")).unwrap();
        let local = tz.to_fixed_offset(utc);
        assert_eq!(local.offset().local_minus_utc(), 3 * 3600);
        assert_eq!(
            local.date_naive(),
            NaiveDate::from_ymd_opt(2026, 2, 12).unwrap()
        );
    }

    #[test]
    fn from_local_round_trips_through_named_zone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let naive = NaiveDate::from_ymd_opt(2026, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let utc = tz.from_local(naive).unwrap();
        assert_eq!(utc.format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn from_local_in_dst_gap_moves_past_the_gap() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let naive = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let utc = tz.from_local(naive).unwrap();
        assert_eq!(utc.format("%Y-%m-%d %H:%M").to_string(), "2026-03-08 07:30");
        let local = tz.to_fixed_offset(utc);
        assert_eq!(local.format("%H:%M %:z").to_string(), "03:30 -04:00");
    }

    #[test]
    fn from_local_in_dst_fold_takes_earlier_instant() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        let naive = NaiveDate::from_ymd_opt(2026, 11, 1)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let utc = tz.from_local(naive).unwrap();
        assert_eq!(utc.format("%H:%M").to_string(), "05:30");
    }
}
