mod csv;
mod format;
mod json;
mod statusline;
mod summary;
mod tasks;
mod trend;

pub(crate) use csv::{output_tasks_csv, output_trend_csv};
pub(crate) use format::SummaryOptions;
pub(crate) use json::{
    output_report_json, output_streak_json, output_summary_json, output_tasks_json,
    output_trend_json,
};
pub(crate) use statusline::{format_statusline, statusline_json};
pub(crate) use summary::{print_streak, print_summary};
pub(crate) use tasks::print_tasks_table;
pub(crate) use trend::print_trend_table;
