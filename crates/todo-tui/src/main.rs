/*
[INPUT]:  CLI arguments, optional YAML configuration file, TODO_TUI_* environment
[OUTPUT]: Interactive to-do list screen, or a validated config in dry-run mode
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use todo_tui::TuiConfig;
use todo_tui::logging::{LogTarget, init_tracing};
use todo_tui::tui::{LogBuffer, run_tui};

#[derive(Parser, Debug)]
#[command(name = "todo-tui", version, about = "Terminal to-do list")]
struct Cli {
    /// YAML configuration file; defaults to the per-user config if present
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Also append log lines to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Validate configuration and exit without opening the screen
    #[arg(long = "dry-run")]
    dry_run: bool,
    /// Print the effective configuration as YAML and exit
    #[arg(long = "print-config")]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = TuiConfig::load(args.config_path.as_deref()).context("load config")?;

    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    if args.dry_run {
        let _guard = init_tracing(&args.log_level, LogTarget::Stderr, args.log_file.as_deref())?;
        info!(
            title = %config.title,
            tick_rate_ms = config.tick_rate_ms,
            toast_ticks = config.toast_ticks,
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer = LogBuffer::handle(config.log_buffer_capacity);
    let _guard = init_tracing(
        &args.log_level,
        LogTarget::Buffer(log_buffer.clone()),
        args.log_file.as_deref(),
    )?;
    info!(
        config_path = ?args.config_path,
        "starting todo-tui"
    );

    run_tui(config, log_buffer).await
}
