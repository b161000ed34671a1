//! Command-line front end for ass-qc.
//!
//! Reads a JSON array of events, runs the enabled checks and prints the
//! report as text (one violation per line) or JSON.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ass_qc::{checks::BuiltinChecks, lint_events, EventList, LintConfig, Report};
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `#<index>: <message>`, one per line
    Text,
    /// JSON array of violations
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ass-qc")]
#[command(version, about = "Quality checks for subtitle event lists")]
pub struct Args {
    /// JSON file with an array of `{start, end, text, is_comment?, actor?}` events
    #[arg(required_unless_present = "list_checks")]
    pub events: Option<PathBuf>,

    /// JSON file with a lint configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run only this check (repeatable)
    #[arg(long = "only", value_name = "ID")]
    pub only: Vec<String>,

    /// Skip this check (repeatable)
    #[arg(long = "skip", value_name = "ID")]
    pub skip: Vec<String>,

    /// Stop after this many violations (0 = unlimited)
    #[arg(long)]
    pub max_violations: Option<usize>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List available checks and exit
    #[arg(long)]
    pub list_checks: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by `-v` flags.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Load the configuration file (if any) and apply command-line overrides.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or if the resulting
/// configuration is invalid.
pub fn load_config(args: &Args) -> Result<LintConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => LintConfig::default(),
    };

    config.enabled_checks.extend(args.only.iter().cloned());
    config.disabled_checks.extend(args.skip.iter().cloned());
    if let Some(max) = args.max_violations {
        config.max_violations = max;
    }

    config.validate().map_err(|err| match err.suggestion() {
        Some(hint) => anyhow::anyhow!("{err} ({hint})"),
        None => anyhow::Error::new(err),
    })?;
    Ok(config)
}

/// Read events from a JSON file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a JSON array of events.
pub fn load_events(path: &Path) -> Result<EventList> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse events {}", path.display()))
}

/// Write `report` in the requested format.
///
/// # Errors
///
/// Fails if writing to `out` fails.
pub fn write_report(report: &Report, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print the check registry.
///
/// # Errors
///
/// Fails if writing to `out` fails.
pub fn write_check_list(out: &mut impl Write) -> Result<()> {
    for check in BuiltinChecks::all_checks() {
        writeln!(out, "{:<18} {}", check.id(), check.description())?;
    }
    Ok(())
}

/// Run one invocation, writing output to `out`.
///
/// Returns `true` when the report has violations.
///
/// # Errors
///
/// Fails on unreadable input, malformed JSON or an invalid configuration.
pub fn run(args: &Args, out: &mut impl Write) -> Result<bool> {
    if args.list_checks {
        write_check_list(out)?;
        return Ok(false);
    }

    let path = args.events.as_deref().context("No events file given")?;
    let config = load_config(args)?;
    let events = load_events(path)?;
    debug!("loaded {} event(s) from {}", events.len(), path.display());

    let report = lint_events(&events, &config)?;
    info!("{} violation(s)", report.len());

    write_report(&report, args.format, out)?;
    Ok(!report.is_empty())
}
