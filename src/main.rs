use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use loghist::config::Config;
use loghist::{ReportFormat, RunOptions, Strategy};

#[derive(Parser)]
#[command(
    name = "loghist",
    about = "Cluster log lines from stdin by stable prefix and print a frequency histogram"
)]
struct Cli {
    /// How lines are reduced to a canonical key.
    #[arg(short, long, value_enum)]
    strategy: Option<CliStrategy>,

    /// Report format.
    #[arg(short, long, value_enum)]
    format: Option<CliFormat>,

    /// Print only the N most frequent keys (0 prints all).
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,

    /// Skip keys seen fewer than N times.
    #[arg(long, value_name = "N")]
    min_count: Option<u64>,

    /// Do not echo lines starting with `*`.
    #[arg(long)]
    no_passthrough: bool,

    /// Read configuration from this file instead of ~/.config/loghist/config.toml.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
enum CliStrategy {
    Prefix,
    Strip,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Prefix => Strategy::Prefix,
            CliStrategy::Strip => Strategy::Strip,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
enum CliFormat {
    Tsv,
    Jsonl,
}

impl From<CliFormat> for ReportFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Tsv => ReportFormat::Tsv,
            CliFormat::Jsonl => ReportFormat::Jsonl,
        }
    }
}

impl Cli {
    /// Layer CLI flags over the loaded config.
    fn options(&self, cfg: &Config) -> RunOptions {
        let mut opts = RunOptions::from(cfg);
        if let Some(strategy) = self.strategy {
            opts.strategy = strategy.into();
        }
        if let Some(format) = self.format {
            opts.report.format = format.into();
        }
        if let Some(top) = self.top {
            opts.report.top = (top > 0).then_some(top);
        }
        if let Some(min_count) = self.min_count {
            opts.report.min_count = min_count;
        }
        if self.no_passthrough {
            opts.passthrough = false;
        }
        opts
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let cfg = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let opts = cli.options(&cfg);
    tracing::info!(strategy = %opts.strategy, format = %opts.report.format, "loghist started");

    let mut out = BufWriter::new(io::stdout().lock());
    let summary = loghist::run(io::stdin().lock(), &mut out, &opts).context("processing stdin")?;
    tracing::info!(?summary, "loghist finished");

    Ok(())
}
