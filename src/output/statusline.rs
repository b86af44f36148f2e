use crate::consts::DAYS_IN_WEEK;
use crate::core::Report;
use crate::output::format::to_json_string;

/// Single line for statusline/tmux integration
/// Format: "Streak: 3d | Top: joy | Consistency: 67% | Logged: 2/7"
pub(crate) fn format_statusline(report: &Report) -> String {
    let summary = &report.summary;
    let parts = [
        format!("Streak: {}d", report.streak),
        format!("Top: {}", summary.top_mood.as_deref().unwrap_or("-")),
        format!("Consistency: {}%", summary.consistency),
        format!("Logged: {}/{}", summary.logged_days, DAYS_IN_WEEK),
    ];
    parts.join(" | ")
}

/// Statusline as JSON for programmatic consumption
pub(crate) fn statusline_json(report: &Report) -> String {
    to_json_string(&serde_json::json!({
        "streak": report.streak,
        "top_mood": report.summary.top_mood,
        "consistency": report.summary.consistency,
        "logged_days": report.summary.logged_days,
        "formatted": format_statusline(report),
    }))
}
