use comfy_table::{Cell, Color};

use crate::core::{Task, TaskProgress};
use crate::output::format::{
    SummaryOptions, create_styled_table, header_cell, hex_color, print_summary_line, right_cell,
    styled_cell,
};

/// Text progress bar, `width` cells wide
fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub(crate) fn print_tasks_table(
    tasks: &[Task],
    progress: &TaskProgress,
    summary: SummaryOptions,
    use_color: bool,
) {
    let cyan = if use_color { Some(Color::Cyan) } else { None };
    let green = if use_color { Some(Color::Green) } else { None };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Task", use_color),
        header_cell("Category", use_color),
        header_cell("Done", use_color),
        header_cell("Target", use_color),
        header_cell("", use_color),
    ]);
    for task in tasks {
        let color = hex_color(task.category.color(), use_color);
        table.add_row(vec![
            Cell::new(&task.title),
            styled_cell(task.category.label(), color, false),
            right_cell(&task.completed_count.to_string(), None, false),
            right_cell(&task.target.to_string(), None, false),
            styled_cell(if task.is_complete() { "✓" } else { "" }, green, true),
        ]);
    }

    let mut categories = create_styled_table();
    categories.set_header(vec![
        header_cell("Category", use_color),
        header_cell("Tasks", use_color),
        header_cell("Completed", use_color),
        header_cell("Progress", use_color),
        header_cell("%", use_color),
    ]);
    for cat in &progress.categories {
        let color = hex_color(cat.category.color(), use_color);
        categories.add_row(vec![
            styled_cell(cat.category.label(), color, true),
            right_cell(&cat.tasks.to_string(), None, false),
            right_cell(&cat.completed_tasks.to_string(), None, false),
            styled_cell(&progress_bar(cat.percent, 20), color, false),
            right_cell(&format!("{}%", cat.percent), None, false),
        ]);
    }
    categories.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&progress.total_tasks.to_string(), cyan, true),
        right_cell(&progress.completed_tasks.to_string(), cyan, true),
        styled_cell(&progress_bar(progress.overall_percent, 20), green, false),
        right_cell(&format!("{}%", progress.overall_percent), green, true),
    ]);

    println!("\n  Habits & Goals\n");
    if !tasks.is_empty() {
        println!("{table}");
    }
    println!("{categories}");
    print_summary_line(summary, "task", use_color);
}
