//! Habit and goal progress
//!
//! Tasks live next to check-ins in the user's documents. Each belongs to
//! one category and carries a completion counter against a target.

use serde::Serialize;
use serde_json::Value;

/// Task category as stored in documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TaskCategory {
    SelfCare,
    Habit,
    Goal,
}

impl TaskCategory {
    pub(crate) const ALL: [TaskCategory; 3] =
        [TaskCategory::SelfCare, TaskCategory::Habit, TaskCategory::Goal];

    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "self-care" => Some(Self::SelfCare),
            "habit" => Some(Self::Habit),
            "goal" => Some(Self::Goal),
            _ => None,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::SelfCare => "self-care",
            Self::Habit => "habit",
            Self::Goal => "goal",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::SelfCare => "Self-care",
            Self::Habit => "Habit",
            Self::Goal => "Goal",
        }
    }

    pub(crate) fn color(self) -> &'static str {
        match self {
            Self::SelfCare => "#20C997",
            Self::Habit => "#2196F3",
            Self::Goal => "#9C27B0",
        }
    }

    /// Target assigned when a task is created without one
    pub(crate) fn default_target(self) -> u32 {
        match self {
            Self::Goal => 30,
            Self::SelfCare | Self::Habit => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Task {
    pub(crate) title: String,
    pub(crate) category: TaskCategory,
    pub(crate) completed_count: u32,
    pub(crate) target: u32,
}

impl Task {
    pub(crate) fn is_complete(&self) -> bool {
        self.completed_count >= self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CategoryProgress {
    pub(crate) category: TaskCategory,
    pub(crate) tasks: usize,
    pub(crate) completed_tasks: usize,
    pub(crate) completed_units: u64,
    pub(crate) target_units: u64,
    pub(crate) percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TaskProgress {
    pub(crate) categories: Vec<CategoryProgress>,
    pub(crate) total_tasks: usize,
    pub(crate) completed_tasks: usize,
    /// Share of tasks completed, rounded
    pub(crate) overall_percent: u32,
}

/// Keep tasks that have a title and a known category
pub(crate) fn normalize_tasks(records: &[Value]) -> (Vec<Task>, usize) {
    let mut tasks = Vec::with_capacity(records.len());
    let mut dropped = 0;
    for record in records {
        match parse_task(record) {
            Some(task) => tasks.push(task),
            None => dropped += 1,
        }
    }
    (tasks, dropped)
}

fn parse_task(record: &Value) -> Option<Task> {
    let doc = record.as_object()?;
    let title = doc.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }
    let category = TaskCategory::parse(doc.get("category")?.as_str()?)?;
    let target = doc
        .get("target")
        .and_then(Value::as_u64)
        .and_then(|t| u32::try_from(t).ok())
        .filter(|t| *t > 0)
        .unwrap_or_else(|| category.default_target());
    let completed_count = doc
        .get("completedCount")
        .and_then(Value::as_u64)
        .map(|c| u32::try_from(c).unwrap_or(u32::MAX))
        .unwrap_or(0);

    Some(Task {
        title: title.to_string(),
        category,
        completed_count,
        target,
    })
}

pub(crate) fn task_progress(tasks: &[Task]) -> TaskProgress {
    let categories: Vec<CategoryProgress> = TaskCategory::ALL
        .iter()
        .map(|&category| {
            let mut progress = CategoryProgress {
                category,
                tasks: 0,
                completed_tasks: 0,
                completed_units: 0,
                target_units: 0,
                percent: 0,
            };
            for task in tasks.iter().filter(|t| t.category == category) {
                progress.tasks += 1;
                if task.is_complete() {
                    progress.completed_tasks += 1;
                }
                progress.completed_units += u64::from(task.completed_count.min(task.target));
                progress.target_units += u64::from(task.target);
            }
            progress.percent = rounded_percent(progress.completed_units, progress.target_units);
            progress
        })
        .collect();

    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.is_complete()).count();
    TaskProgress {
        categories,
        total_tasks,
        completed_tasks,
        overall_percent: rounded_percent(completed_tasks as u64, total_tasks as u64),
    }
}

fn rounded_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task(category: TaskCategory, done: u32, target: u32) -> Task {
        Task {
            title: "t".to_string(),
            category,
            completed_count: done,
            target,
        }
    }

    #[test]
    fn category_round_trip() {
        for c in TaskCategory::ALL {
            assert_eq!(TaskCategory::parse(c.as_str()), Some(c));
        }
        assert_eq!(TaskCategory::parse("chore"), None);
    }

    #[test]
    fn normalize_applies_default_targets() {
        let records = vec![
            json!({"title": "Run 5k", "category": "goal"}),
            json!({"title": "Drink water", "category": "habit", "completedCount": 1}),
            json!({"title": "Stretch", "category": "self-care", "target": 0}),
        ];
        let (tasks, dropped) = normalize_tasks(&records);
        assert_eq!(dropped, 0);
        assert_eq!(tasks[0].target, 30);
        assert_eq!(tasks[0].completed_count, 0);
        assert_eq!(tasks[1].target, 1);
        assert!(tasks[1].is_complete());
        assert_eq!(tasks[2].target, 1);
    }

    #[test]
    fn normalize_drops_untitled_or_uncategorized() {
        let records = vec![
            json!({"title": "  ", "category": "goal"}),
            json!({"title": "Read", "category": ""}),
            json!({"title": "Read"}),
            json!({"category": "habit"}),
            json!(["Read", "habit"]),
        ];
        let (tasks, dropped) = normalize_tasks(&records);
        assert!(tasks.is_empty());
        assert_eq!(dropped, 5);
    }

    #[test]
    fn progress_per_category() {
        let tasks = vec![
            task(TaskCategory::Goal, 15, 30),
            task(TaskCategory::Goal, 45, 30),
            task(TaskCategory::Habit, 0, 1),
            task(TaskCategory::Habit, 1, 1),
        ];
        let p = task_progress(&tasks);
        let goal = &p.categories[2];
        assert_eq!(goal.category, TaskCategory::Goal);
        assert_eq!(goal.tasks, 2);
        assert_eq!(goal.completed_tasks, 1);
        // overshoot is capped at the target
        assert_eq!(goal.completed_units, 45);
        assert_eq!(goal.target_units, 60);
        assert_eq!(goal.percent, 75);

        let habit = &p.categories[1];
        assert_eq!(habit.percent, 50);

        let self_care = &p.categories[0];
        assert_eq!(self_care.tasks, 0);
        assert_eq!(self_care.percent, 0);

        assert_eq!(p.total_tasks, 4);
        assert_eq!(p.completed_tasks, 2);
        assert_eq!(p.overall_percent, 50);
    }

    #[test]
    fn no_tasks_is_zero_percent() {
        let p = task_progress(&[]);
        assert_eq!(p.overall_percent, 0);
        assert_eq!(p.categories.len(), 3);
    }

    #[test]
    fn overall_percent_rounds() {
        let tasks = vec![
            task(TaskCategory::Habit, 1, 1),
            task(TaskCategory::Habit, 0, 1),
            task(TaskCategory::Habit, 0, 1),
        ];
        assert_eq!(task_progress(&tasks).overall_percent, 33);
        let tasks = vec![
            task(TaskCategory::Habit, 1, 1),
            task(TaskCategory::Habit, 1, 1),
            task(TaskCategory::Habit, 0, 1),
        ];
        assert_eq!(task_progress(&tasks).overall_percent, 67);
    }
}
