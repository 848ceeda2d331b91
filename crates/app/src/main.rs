//! GradeVox CLI: read recognized utterances from stdin, build a batch
//! session against a roster, and print the reviewed entries. The speech
//! recognizer itself is out of scope; any STT front end that emits one
//! utterance per line can drive this binary.

mod config;
mod roster;

use anyhow::{Context, Result};
use clap::Parser;
use config::AppConfig;
use gradevox_session::{BatchSession, UtteranceOutcome, UtteranceProcessor};
use gradevox_telemetry::SessionMetrics;
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gradevox", about = "Voice grade-entry batch processing")]
struct Args {
    /// Roster CSV with first_name and last_name columns
    #[arg(long)]
    roster: PathBuf,

    /// Optional TOML file overriding matcher/splitter settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit entries and summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct SessionReport<'a> {
    entries: &'a [gradevox_session::BatchVoiceEntry],
    summary: gradevox_session::SessionSummary,
    ready_to_save: bool,
    metrics: gradevox_telemetry::MetricsSnapshot,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let roster = roster::load_roster(&args.roster)?;

    let metrics = SessionMetrics::new();
    let processor = UtteranceProcessor::new(
        config.matcher,
        config.splitter,
        roster,
        metrics.clone(),
    );
    let mut session = BatchSession::new(metrics.clone());

    tracing::info!("reading utterances from stdin, one per line (\"done\" to stop)");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading utterance from stdin")?;
        let utterance = line.trim();
        if utterance.is_empty() {
            continue;
        }
        match processor.process(&mut session, utterance) {
            UtteranceOutcome::Terminated => break,
            UtteranceOutcome::Continue { appended } => {
                tracing::debug!(appended, "utterance processed");
            }
        }
    }

    if args.json {
        let report = SessionReport {
            entries: session.entries(),
            summary: session.summary(),
            ready_to_save: session.ready_to_save(),
            metrics: metrics.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&session);
    }

    Ok(())
}

fn print_table(session: &BatchSession) {
    println!(
        "{:<4} {:<10} {:<24} {:<8} {:<24} {:>5}",
        "id", "status", "heard", "score", "student", "conf"
    );
    for entry in session.entries() {
        println!(
            "{:<4} {:<10} {:<24} {:<8} {:<24} {:>5.2}",
            entry.id,
            entry.status.to_string(),
            entry.recognized_text,
            entry.parsed_score.as_deref().unwrap_or("-"),
            entry.matched_student.as_deref().unwrap_or("-"),
            entry.confidence,
        );
    }

    let summary = session.summary();
    println!(
        "total {} | valid {} | invalid {} | confirmed {} | ready to save: {}",
        summary.total,
        summary.valid_entries,
        summary.invalid_entries,
        summary.confirmed_entries,
        session.ready_to_save(),
    );
}
