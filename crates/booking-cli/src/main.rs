//! `bookcal` CLI -- turn booking requests into a meeting room calendar.
//!
//! ## Usage
//!
//! ```sh
//! # Requests on stdin, calendar on stdout
//! bookcal < requests.txt
//!
//! # From file to file
//! bookcal -i requests.txt -o calendar.txt
//!
//! # Day-grouped JSON instead of text
//! bookcal --format json -i requests.txt
//!
//! # Show why requests were dropped
//! RUST_LOG=booking_engine=debug bookcal -i requests.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bookcal",
    version,
    about = "Meeting room booking calendar (first come, first served)"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Day lines followed by `HH:MM HH:MM EMPID` lines
    Text,
    /// Pretty-printed JSON grouped by day
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let input = read_requests(cli.input.as_deref())?;
    tracing::debug!(bytes = input.len(), "read booking input");
    let calendar = match cli.format {
        Format::Text => booking_engine::generate_calendar(&input)
            .context("Failed to generate booking calendar")?,
        Format::Json => {
            let schedule =
                booking_engine::schedule(&input).context("Failed to generate booking calendar")?;
            let mut json = booking_engine::render_json(&schedule)
                .context("Failed to encode booking calendar as JSON")?;
            json.push('\n');
            json
        }
    };

    write_calendar(cli.output.as_deref(), &calendar)
}

/// Log to stderr so stdout carries only the calendar. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the booking requests from `path`, or from stdin when no path is given.
fn read_requests(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read booking requests from stdin")?;
        return Ok(buf);
    };
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read booking requests: {}", path.display()))
}

/// Write the rendered calendar to `path`, or to stdout when no path is given.
fn write_calendar(path: Option<&Path>, calendar: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, calendar)
            .with_context(|| format!("Failed to write calendar: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(calendar.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write calendar to stdout")
        }
    }
}
