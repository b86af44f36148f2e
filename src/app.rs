use chrono::NaiveDate;

use crate::cli::{Cli, Commands};
use crate::core::{MoodAnalytics, MoodCatalog, task_progress};
use crate::error::AppError;
use crate::output::{
    SummaryOptions, format_statusline, output_report_json, output_streak_json,
    output_summary_json, output_tasks_csv, output_tasks_json, output_trend_csv,
    output_trend_json, print_streak, print_summary, print_tasks_table, print_trend_table,
    statusline_json,
};
use crate::source::{LoadResult, RecordStore, load_check_ins, load_tasks};
use crate::utils::{Timezone, filter_json};

/// Snapshot revision for a one-shot load
const INITIAL_REVISION: u64 = 1;

/// Print JSON output, optionally filtering through jq
fn print_json(json: &str, jq_filter: Option<&str>) -> Result<(), AppError> {
    match jq_filter {
        Some(filter) => print!("{}", filter_json(json, filter)?),
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: &'a dyn RecordStore,
    pub(crate) user: Option<&'a str>,
    pub(crate) timezone: Timezone,
    pub(crate) today: NaiveDate,
    pub(crate) jq_filter: Option<&'a str>,
}

impl CommandContext<'_> {
    fn wants_json(&self) -> bool {
        self.cli.json || self.jq_filter.is_some()
    }
}

fn summary_options(load: &LoadResult) -> SummaryOptions {
    SummaryOptions {
        records: load.records,
        dropped: load.dropped,
        elapsed_ms: Some(load.elapsed_ms),
    }
}

fn load_analytics(
    catalog: MoodCatalog,
    ctx: &CommandContext<'_>,
) -> Result<(MoodAnalytics, LoadResult), AppError> {
    let mut analytics = MoodAnalytics::new(catalog, ctx.timezone, ctx.today, ctx.cli.streak_cap());
    let load = load_check_ins(ctx.store, ctx.user, &mut analytics, INITIAL_REVISION)?;
    if load.records == 0 {
        tracing::warn!(
            store = ctx.store.name(),
            user = ctx.user,
            "no check-in records found"
        );
    }
    Ok((analytics, load))
}

fn handle_weekly(
    analytics: &MoodAnalytics,
    load: &LoadResult,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let week = ctx.cli.week;
    let trend = analytics.weekly_trend(week);
    if ctx.wants_json() {
        print_json(&output_trend_json(&trend, week), ctx.jq_filter)
    } else if ctx.cli.csv {
        print!("{}", output_trend_csv(&trend));
        Ok(())
    } else {
        print_trend_table(&trend, Some(summary_options(load)), ctx.cli.use_color());
        Ok(())
    }
}

fn handle_summary(analytics: &MoodAnalytics, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let week = ctx.cli.week;
    let trend = analytics.weekly_trend(week);
    let summary = analytics.summary(week);
    if ctx.wants_json() {
        print_json(&output_summary_json(&trend, &summary, week), ctx.jq_filter)
    } else {
        print_summary(&trend, &summary, analytics.catalog(), None, ctx.cli.use_color());
        Ok(())
    }
}

fn handle_streak(analytics: &MoodAnalytics, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let streak = analytics.streak();
    if ctx.wants_json() {
        let json = output_streak_json(streak, analytics.today(), analytics.streak_cap());
        print_json(&json, ctx.jq_filter)
    } else {
        print_streak(streak, analytics.today(), analytics.streak_cap(), ctx.cli.use_color());
        Ok(())
    }
}

fn handle_report(
    analytics: &MoodAnalytics,
    load: &LoadResult,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let week = ctx.cli.week;
    let report = analytics.report(week);
    if ctx.wants_json() {
        return print_json(&output_report_json(&report, week), ctx.jq_filter);
    }
    let use_color = ctx.cli.use_color();
    print_trend_table(&report.trend, None, use_color);
    print_summary(
        &report.trend,
        &report.summary,
        analytics.catalog(),
        Some(report.streak),
        use_color,
    );
    print_streak(report.streak, report.today, analytics.streak_cap(), use_color);
    if load.dropped > 0 {
        println!("  {} malformed check-in records skipped\n", load.dropped);
    }
    Ok(())
}

fn handle_statusline(analytics: &MoodAnalytics, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let report = analytics.report(ctx.cli.week);
    if ctx.wants_json() {
        print_json(&statusline_json(&report), ctx.jq_filter)
    } else {
        println!("{}", format_statusline(&report));
        Ok(())
    }
}

fn handle_tasks(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let start = std::time::Instant::now();
    let (tasks, dropped) = load_tasks(ctx.store, ctx.user)?;
    let progress = task_progress(&tasks);
    if ctx.wants_json() {
        print_json(&output_tasks_json(&tasks, &progress), ctx.jq_filter)
    } else if ctx.cli.csv {
        print!("{}", output_tasks_csv(&tasks));
        Ok(())
    } else {
        let summary = SummaryOptions {
            records: tasks.len() + dropped,
            dropped,
            elapsed_ms: Some(start.elapsed().as_secs_f64() * 1000.0),
        };
        print_tasks_table(&tasks, &progress, summary, ctx.cli.use_color());
        Ok(())
    }
}

/// Run one command against the store
pub(crate) fn handle_command(
    command: Commands,
    catalog: MoodCatalog,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    if ctx.cli.csv && !command.supports_csv() {
        return Err(AppError::CsvUnsupported {
            command: command.name(),
        });
    }

    if command == Commands::Tasks {
        return handle_tasks(ctx);
    }

    let (analytics, load) = load_analytics(catalog, ctx)?;
    match command {
        Commands::Weekly => handle_weekly(&analytics, &load, ctx),
        Commands::Summary => handle_summary(&analytics, ctx),
        Commands::Streak => handle_streak(&analytics, ctx),
        Commands::Report => handle_report(&analytics, &load, ctx),
        Commands::Statusline => handle_statusline(&analytics, ctx),
        Commands::Tasks => handle_tasks(ctx),
    }
}
