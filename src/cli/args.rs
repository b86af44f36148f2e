//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_STREAK_CAP;
use crate::core::CatalogPreset;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "moodstats")]
#[command(about = "Mood check-in analytics: weekly trends, streaks and consistency", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Root of the exported document tree (contains users/<uid>/...)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// User id to read (defaults to the only user in the data dir)
    #[arg(long, global = true, value_name = "UID")]
    pub(crate) user: Option<String>,

    /// Read a single JSON snapshot array instead of the data dir ("-" for stdin)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Week offset from the current week (-1 = last week)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "OFFSET"
    )]
    pub(crate) week: i64,

    /// Reference date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    pub(crate) today: Option<String>,

    /// Timezone for day bucketing (e.g., "Africa/Nairobi", "UTC", "local")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Built-in mood catalog (overrides moods from the config file)
    #[arg(long, global = true, value_enum)]
    pub(crate) catalog: Option<CatalogPreset>,

    /// Days the streak counter looks back (0 = no limit)
    #[arg(long, global = true, value_name = "DAYS")]
    pub(crate) streak_cap: Option<u32>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Output as CSV (weekly and tasks)
    #[arg(long, global = true, conflicts_with = "json")]
    pub(crate) csv: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.user.is_none() {
            self.user = config.user.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.streak_cap.is_none() {
            self.streak_cap = config.streak_cap;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Streak lookback bound; `None` walks back until the first gap
    pub(crate) fn streak_cap(&self) -> Option<u32> {
        match self.streak_cap.unwrap_or(DEFAULT_STREAK_CAP) {
            0 => None,
            days => Some(days),
        }
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}
