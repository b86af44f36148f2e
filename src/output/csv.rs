use std::fmt::Write;

use crate::consts::WEEKDAY_LABELS;
use crate::core::{Task, WeeklyTrend};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// One row per catalog mood; empty slots are empty fields
pub(crate) fn output_trend_csv(trend: &WeeklyTrend) -> String {
    let mut out = String::from("mood");
    for label in WEEKDAY_LABELS {
        let _ = write!(out, ",{}", label.to_ascii_lowercase());
    }
    out.push_str(",days\n");

    for row in trend.matrix.rows() {
        out.push_str(&csv_escape(&row.mood));
        for slot in &row.slots {
            out.push(',');
            if let Some(score) = slot {
                let _ = write!(out, "{score}");
            }
        }
        let _ = writeln!(out, ",{}", row.logged_count());
    }
    out
}

pub(crate) fn output_tasks_csv(tasks: &[Task]) -> String {
    let mut out = String::from("title,category,completed_count,target,complete\n");
    for task in tasks {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            csv_escape(&task.title),
            task.category.as_str(),
            task.completed_count,
            task.target,
            task.is_complete(),
        );
    }
    out
}
