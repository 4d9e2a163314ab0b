//! `lineups` - list every fair lineup for a three-set match.
//!
//! Reads a roster file (TOML), or the bundled example roster when no path is
//! given, and prints each accepted match followed by the total count.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use volley_lineup::model::RosterConfig;
use volley_lineup::report::{MatchRecord, MatchReport, SummaryRecord};
use volley_lineup::search::{SearchConfig, SearchRunner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One block per match
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Parser)]
#[command(name = "lineups")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find every fair volleyball lineup for a three-set match", long_about = None)]
struct Cli {
    /// Roster file (TOML); the bundled example roster is used when omitted
    roster: Option<PathBuf>,

    /// Stop after this many matches
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the final count
    #[arg(long)]
    count_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_roster(path: Option<&PathBuf>) -> Result<RosterConfig> {
    match path {
        Some(path) => RosterConfig::from_toml_file(path)
            .with_context(|| format!("failed to load roster {}", path.display())),
        None => RosterConfig::example().context("bundled example roster is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let model = load_roster(cli.roster.as_ref())?
        .build()
        .context("invalid roster")?;

    let mut config = SearchConfig::default().with_keep_matches(false);
    if let Some(limit) = cli.limit {
        config = config.with_max_matches(limit);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut write_error = None;

    let result = SearchRunner::run_with(&model, &config, |index, found| {
        if cli.count_only || write_error.is_some() {
            return;
        }
        let written = match cli.format {
            Format::Text => writeln!(out, "{}", MatchReport::new(&model, index, found)),
            Format::Json => serde_json::to_writer(&mut out, &MatchRecord::new(&model, index, found))
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out)),
        };
        if let Err(err) = written {
            write_error = Some(err);
        }
    });
    if let Some(err) = write_error {
        return Err(err).context("failed to write output");
    }

    match cli.format {
        Format::Text => writeln!(out, "Computed {} matches that work", result.accepted)?,
        Format::Json => {
            serde_json::to_writer(&mut out, &SummaryRecord::new(&result))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
