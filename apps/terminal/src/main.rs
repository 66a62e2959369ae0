use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::{bail, Context, Result};
use clap::Parser;
use summarizer_core::{spawn_summarizer, validate, SummarizerHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::{
    controller::orchestration::submit_line,
    ui::{spawn_renderer, RenderMode},
};

/// Reveals the triangular-number prefix arrays up to a value, one per step.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Overrides the per-step delay unit from config/environment.
    #[arg(long)]
    step_unit_ms: Option<u64>,
    /// Run a single value and exit once its last array is shown.
    #[arg(long)]
    value: Option<String>,
    /// Print each state as a JSON line.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(&args.config)?;
    if let Some(step_unit_ms) = args.step_unit_ms {
        settings.step_unit_ms = step_unit_ms;
    }
    tracing::info!(?settings, "loaded settings");

    let mode = if args.json {
        RenderMode::Json
    } else {
        RenderMode::Text
    };

    let handle = spawn_summarizer(settings.summarizer_config());
    let renderer = spawn_renderer(handle.subscribe_updates(), mode);

    let outcome = match args.value {
        Some(value) => run_once(&handle, &value).await,
        None => run_interactive(&handle).await,
    };

    handle.shutdown().await?;
    renderer.await.context("renderer task failed")?;
    outcome
}

async fn run_once(handle: &SummarizerHandle, value: &str) -> Result<()> {
    let mut status = String::new();
    let ui = submit_line(handle, value, &mut status).await?;
    if !ui.can_trigger() {
        bail!("invalid value '{value}': {}", ui.input_label());
    }
    if !status.is_empty() {
        bail!("{status}");
    }

    let target = validate(value).value.unwrap_or_default();
    handle
        .wait_until(|ui| ui.target == target && ui.series.len() == target as usize)
        .await?;
    Ok(())
}

async fn run_interactive(handle: &SummarizerHandle) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut status = String::new();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        status.clear();
        submit_line(handle, &line, &mut status).await?;
        if !status.is_empty() {
            eprintln!("{status}");
        }
    }

    tracing::info!("stdin closed; shutting down");
    Ok(())
}
