//! `embedjudge`: contest judge for the three-dimensional embedding problem.
//!
//! Prints exactly one line, `AC` or `WA`, to stdout. Judge faults print a
//! diagnostic to stderr and abort without a verdict token.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use embedjudge_core::{validate_with_limits, Limits, Report, Verdict};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Verify a contestant's lattice embedding.
#[derive(Parser, Debug)]
#[command(name = "embedjudge", version)]
struct Cli {
    /// Problem input (graph definition)
    judge_input: PathBuf,

    /// Judge answer; opened but not interpreted
    judge_answer: PathBuf,

    /// Contestant output to verify
    contestant_output: PathBuf,

    /// YAML file overriding the problem limits
    #[arg(long)]
    limits: Option<PathBuf>,

    /// Write a JSON report of the verdict to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Also explain the verdict on stderr
    #[arg(long)]
    explain: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("judge error: {:#}", e);
        std::process::abort();
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let limits = match &cli.limits {
        Some(path) => Limits::from_yaml_file(path)
            .with_context(|| format!("failed to load limits from {}", path.display()))?,
        None => Limits::default(),
    };

    let judge_input = read(&cli.judge_input)?;
    // Only checked for readability.
    fs::File::open(&cli.judge_answer)
        .with_context(|| format!("failed to open {}", cli.judge_answer.display()))?;
    // Contestant bytes are untrusted; undecodable ones become tokens that
    // fail to parse.
    let contestant_output = fs::read(&cli.contestant_output)
        .with_context(|| format!("failed to open {}", cli.contestant_output.display()))?;
    let contestant_output = String::from_utf8_lossy(&contestant_output);

    let verdict = validate_with_limits(&judge_input, &contestant_output, &limits);
    debug!(token = ?verdict.token(), "Validation finished");

    if let Some(path) = &cli.report {
        let json = Report::new(&verdict).to_json()?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    let token = match &verdict {
        Verdict::Fatal(fault) => return Err(anyhow!(fault.clone())),
        other => other.token().unwrap_or_default(),
    };

    if cli.explain {
        match verdict.reason() {
            Some(reason) => eprintln!("Wrong answer ({})", reason),
            None => eprintln!("Accepted"),
        }
    }

    writeln!(out, "{}", token)?;
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to open {}", path.display()))
}
