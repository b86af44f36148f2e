//! Core module - mood analytics and habit progress, free of I/O

mod analytics;
mod catalog;
mod normalize;
mod streak;
mod summary;
mod tasks;
mod trend;
mod types;
mod week;

pub(crate) use analytics::{MoodAnalytics, Report};
pub(crate) use catalog::{CatalogPreset, MoodCatalog, MoodSpec, parse_hex_color};
pub(crate) use normalize::json_kind;
pub(crate) use tasks::{Task, TaskProgress, normalize_tasks, task_progress};
pub(crate) use trend::WeeklyTrend;
pub(crate) use types::{Summary, TrendRow};
