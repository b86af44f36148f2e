use chrono::NaiveDate;
use comfy_table::{Cell, Color};

use crate::consts::{DATE_FORMAT, DAYS_IN_WEEK};
use crate::core::{MoodCatalog, Summary, WeeklyTrend};
use crate::output::format::{create_styled_table, header_cell, hex_color, right_cell, styled_cell};
use crate::output::trend::window_title;

pub(super) fn format_streak(streak: u32) -> String {
    if streak == 1 {
        "1 day".to_string()
    } else {
        format!("{streak} days")
    }
}

fn format_cap(cap: Option<u32>) -> String {
    match cap {
        Some(days) => format!("cap {days}"),
        None => "uncapped".to_string(),
    }
}

/// Week overview: logged days, top mood, consistency, and per-mood counts.
/// `streak` adds the streak row (report view).
pub(crate) fn print_summary(
    trend: &WeeklyTrend,
    summary: &Summary,
    catalog: &MoodCatalog,
    streak: Option<u32>,
    use_color: bool,
) {
    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let green = if use_color { Some(Color::Green) } else { None };

    let mut overview = create_styled_table();
    overview.set_header(vec![
        header_cell("Week", use_color),
        header_cell(&window_title(trend), use_color),
    ]);
    overview.add_row(vec![
        Cell::new("Logged days"),
        right_cell(
            &format!("{}/{}", summary.logged_days, DAYS_IN_WEEK),
            None,
            false,
        ),
    ]);
    let top = summary.top_mood.as_deref();
    let top_color = top
        .and_then(|m| catalog.get(m))
        .and_then(|m| hex_color(&m.color, use_color));
    overview.add_row(vec![
        Cell::new("Top mood"),
        right_cell(top.unwrap_or("-"), top_color, true),
    ]);
    overview.add_row(vec![
        Cell::new("Consistency"),
        right_cell(&format!("{}%", summary.consistency), green, true),
    ]);
    if let Some(streak) = streak {
        overview.add_row(vec![
            Cell::new("Streak"),
            right_cell(&format_streak(streak), cyan, true),
        ]);
    }

    let mut moods = create_styled_table();
    moods.set_header(vec![
        header_cell("Mood", use_color),
        header_cell("Count", use_color),
    ]);
    let total: usize = summary.frequencies.iter().map(|f| f.count).sum();
    for freq in &summary.frequencies {
        let color = trend
            .matrix
            .row(&freq.mood)
            .and_then(|r| hex_color(&r.color, use_color));
        moods.add_row(vec![
            styled_cell(&freq.mood, color, freq.count > 0),
            right_cell(&freq.count.to_string(), None, false),
        ]);
    }
    moods.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&total.to_string(), cyan, true),
    ]);

    println!("\n  Weekly Summary\n");
    println!("{overview}");
    println!("{moods}");
}

pub(crate) fn print_streak(streak: u32, today: NaiveDate, cap: Option<u32>, use_color: bool) {
    let value = format_streak(streak);
    let value = if use_color {
        format!("\x1b[1;36m{value}\x1b[0m")
    } else {
        value
    };
    println!(
        "\n  Streak: {} (as of {}, {})\n",
        value,
        today.format(DATE_FORMAT),
        format_cap(cap)
    );
}
