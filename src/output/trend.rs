use chrono::Duration;
use comfy_table::{Color, Table};

use crate::consts::{DAYS_IN_WEEK, WEEKDAY_LABELS};
use crate::core::{TrendRow, WeeklyTrend};
use crate::output::format::{
    EMPTY_SLOT, SummaryOptions, center_cell, create_styled_table, header_cell, hex_color,
    print_summary_line, right_cell, styled_cell,
};

/// Column headers: weekday plus day of month when the window is known
fn day_headers(trend: &WeeklyTrend) -> [String; DAYS_IN_WEEK] {
    std::array::from_fn(|i| match &trend.window {
        Some(window) => {
            let day = window.monday() + Duration::days(i as i64);
            format!("{} {}", WEEKDAY_LABELS[i], day.format("%-d"))
        }
        None => WEEKDAY_LABELS[i].to_string(),
    })
}

pub(super) fn window_title(trend: &WeeklyTrend) -> String {
    match &trend.window {
        Some(window) => window.label(),
        None => "week offset out of range".to_string(),
    }
}

fn add_mood_row(table: &mut Table, row: &TrendRow, use_color: bool) {
    let color = hex_color(&row.color, use_color);
    let mut cells = vec![styled_cell(&row.mood, color, true)];
    for slot in &row.slots {
        cells.push(match slot {
            Some(score) => center_cell(&score.to_string(), color, true),
            None => center_cell(EMPTY_SLOT, None, false),
        });
    }
    cells.push(right_cell(&row.logged_count().to_string(), None, false));
    table.add_row(cells);
}

/// Bottom row: the mood shown for each day on the home screen mood bar
fn add_day_mood_row(table: &mut Table, trend: &WeeklyTrend, use_color: bool) {
    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let mut cells = vec![styled_cell("DAY", cyan, true)];
    let mut logged = 0;
    for row in trend.matrix.day_moods() {
        match row {
            Some(row) => {
                logged += 1;
                cells.push(center_cell(&row.mood, hex_color(&row.color, use_color), false));
            }
            None => cells.push(center_cell(EMPTY_SLOT, None, false)),
        }
    }
    cells.push(right_cell(&logged.to_string(), cyan, true));
    table.add_row(cells);
}

pub(crate) fn print_trend_table(
    trend: &WeeklyTrend,
    summary: Option<SummaryOptions>,
    use_color: bool,
) {
    let mut table = create_styled_table();
    let mut header = vec![header_cell("Mood", use_color)];
    for label in day_headers(trend) {
        header.push(header_cell(&label, use_color));
    }
    header.push(header_cell("Days", use_color));
    table.set_header(header);

    for row in trend.matrix.rows() {
        add_mood_row(&mut table, row, use_color);
    }
    add_day_mood_row(&mut table, trend, use_color);

    println!("\n  Mood Trend  {}\n", window_title(trend));
    println!("{table}");
    if trend.matrix.is_empty() {
        println!("\n  No check-ins logged this week.");
    }
    if let Some(summary) = summary {
        print_summary_line(summary, "check-in", use_color);
    }
}
