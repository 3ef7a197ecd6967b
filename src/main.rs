//! Markbook binary entry point.
//!
//! Runs one interactive collection session over stdin/stdout and prints
//! the extrema report. Core functionality is provided by the `markbook`
//! library crate.

use clap::Parser;
use markbook::{AppConfig, CollectSession, Console, ReportFormat, StdioConsole, summarize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Markbook - Interactive Marks Collection
#[derive(Parser, Debug)]
#[command(name = "markbook", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "MARKBOOK_CONFIG")]
    config: Option<String>,

    /// Sentinel value that stops collection (overrides config file)
    #[arg(long, env = "MARKBOOK_SENTINEL", allow_negative_numbers = true)]
    sentinel: Option<i64>,

    /// Report output format, text or json (overrides config file)
    #[arg(long, env = "MARKBOOK_FORMAT")]
    format: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,markbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration from file, or fall back to defaults
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };

    // Apply CLI/env overrides (CLI > ENV > config file)
    if let Some(sentinel) = cli.sentinel {
        config.session.sentinel = sentinel;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let format = config.report_format()?;
    let sentinel = config.session.sentinel;
    tracing::debug!(sentinel, format = %format, "Session configured");

    let mut console = StdioConsole::new();
    console.say(&format!("Enter students ({sentinel} as choice to stop)."))?;

    let roster = CollectSession::new(sentinel).collect(&mut console)?;

    let report = summarize(&roster);
    match format {
        ReportFormat::Text => println!("{report}"),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
