use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::consts::{DATE_FORMAT, WEEKDAY_LABELS};
use crate::core::{Report, Summary, Task, TaskProgress, WeeklyTrend};
use crate::output::format::to_json_string;

/// Window description; dates are `null` when the offset is out of range
fn week_json(trend: &WeeklyTrend, offset: i64) -> Value {
    match &trend.window {
        Some(window) => json!({
            "offset": window.offset,
            "start": window.monday().format(DATE_FORMAT).to_string(),
            "end": window.sunday().format(DATE_FORMAT).to_string(),
            "label": window.label(),
        }),
        None => json!({
            "offset": offset,
            "start": null,
            "end": null,
            "label": null,
        }),
    }
}

fn summary_json(summary: &Summary) -> Value {
    json!({
        "logged_days": summary.logged_days,
        "top_mood": summary.top_mood,
        "consistency": summary.consistency,
        "frequencies": summary.frequencies,
    })
}

pub(crate) fn output_trend_json(trend: &WeeklyTrend, offset: i64) -> String {
    to_json_string(&json!({
        "week": week_json(trend, offset),
        "days": WEEKDAY_LABELS,
        "rows": trend.matrix,
    }))
}

pub(crate) fn output_summary_json(trend: &WeeklyTrend, summary: &Summary, offset: i64) -> String {
    let mut value = summary_json(summary);
    value["week"] = week_json(trend, offset);
    to_json_string(&value)
}

pub(crate) fn output_streak_json(streak: u32, today: NaiveDate, cap: Option<u32>) -> String {
    to_json_string(&json!({
        "today": today.format(DATE_FORMAT).to_string(),
        "streak": streak,
        "cap": cap,
    }))
}

pub(crate) fn output_report_json(report: &Report, offset: i64) -> String {
    to_json_string(&json!({
        "today": report.today.format(DATE_FORMAT).to_string(),
        "week": week_json(&report.trend, offset),
        "days": WEEKDAY_LABELS,
        "rows": report.trend.matrix,
        "summary": summary_json(&report.summary),
        "streak": report.streak,
    }))
}

pub(crate) fn output_tasks_json(tasks: &[Task], progress: &TaskProgress) -> String {
    to_json_string(&json!({
        "tasks": tasks,
        "progress": progress,
    }))
}
