//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Show the mood x weekday trend for a week (default)
    #[default]
    Weekly,
    /// Show logged days, top mood and consistency for a week
    Summary,
    /// Show the current check-in streak
    Streak,
    /// Show trend, summary and streak together
    Report,
    /// Show habit and goal progress
    Tasks,
    /// Output single line for statusline/tmux integration
    Statusline,
}

impl Commands {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Commands::Weekly => "weekly",
            Commands::Summary => "summary",
            Commands::Streak => "streak",
            Commands::Report => "report",
            Commands::Tasks => "tasks",
            Commands::Statusline => "statusline",
        }
    }

    pub(crate) fn supports_csv(self) -> bool {
        matches!(self, Commands::Weekly | Commands::Tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_only_for_tabular_commands() {
        assert!(Commands::Weekly.supports_csv());
        assert!(Commands::Tasks.supports_csv());
        assert!(!Commands::Streak.supports_csv());
        assert!(!Commands::Statusline.supports_csv());
    }
}
