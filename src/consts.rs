/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of day slots in a trend row (Monday..Sunday)
pub(crate) const DAYS_IN_WEEK: usize = 7;

/// Default bound on how many days the streak counter looks back
pub(crate) const DEFAULT_STREAK_CAP: u32 = 30;

/// Short weekday labels, index 0 = Monday
pub(crate) const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] =
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Environment variable overriding the default data directory
pub(crate) const DATA_DIR_ENV: &str = "MOODSTATS_DATA_DIR";
