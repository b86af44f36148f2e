mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod output;
mod source;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use app::{CommandContext, handle_command};
use cli::Cli;
use config::Config;
use error::AppError;
use source::{DirectoryStore, RecordStore, SnapshotFile, resolve_user};
use utils::{Timezone, parse_date};

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    logging::init(cli.debug, config.log_level.as_deref());

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn open_store(cli: &Cli, config: &Config) -> Box<dyn RecordStore> {
    match &cli.file {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading snapshot file");
            Box::new(SnapshotFile::new(path))
        }
        None => {
            let root = config.resolve_data_dir(cli.data_dir.as_deref());
            tracing::info!(root = %root.display(), "reading data directory");
            Box::new(DirectoryStore::new(root))
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let today = match cli.today.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => timezone.today(),
    };
    let catalog = config.mood_catalog(cli.catalog)?;

    let store = open_store(cli, config);
    let user = resolve_user(store.as_ref(), cli.user.as_deref())?;
    tracing::debug!(user = user.as_deref(), %today, "resolved inputs");

    let ctx = CommandContext {
        cli,
        store: store.as_ref(),
        user: user.as_deref(),
        timezone,
        today,
        jq_filter: cli.jq.as_deref(),
    };
    handle_command(cli.command(), catalog, &ctx)
}
