use std::path::PathBuf;

use clap::Parser;

use cued::app::App;
use cued::config::Config;
use cued::editor::ScheduleEditor;
use cued::error::AppResult;
use cued::logging::init_logging;

/// Presenter console for service schedules.
#[derive(Debug, Parser)]
#[command(name = "cued", version)]
struct Cli {
    /// Schedule file to open; created on first save when missing.
    schedule: Option<PathBuf>,

    /// Read settings from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write diagnostics to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    init_logging(log_file, &config.log.filter)?;

    let editor = match &cli.schedule {
        Some(path) => ScheduleEditor::open_or_create(path)?,
        None => ScheduleEditor::new_document(None),
    };
    tracing::info!(schedule = ?cli.schedule, "starting");

    let mut app = App::new_with_config(editor, config);
    app.run().await
}
