// File: crates/progress-cli/src/main.rs
// Summary: Records a book's reading progress and prints the path of the regenerated chart.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use progress_core::log_file::format_timestamp;
use progress_core::{Config, ProgressReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "progress-report", version, about = "Track reading progress per book and chart it")]
struct Cli {
    /// TOML config file; defaults apply when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Overrides `log_dir` from the config.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Overrides `chart_dir` from the config.
    #[arg(long)]
    chart_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append a progress value (e.g. page reached) and redraw today's chart.
    Record {
        book: String,
        #[arg(allow_negative_numbers = true)]
        progress: i64,
    },
    /// Redraw today's chart from an existing log.
    Redraw { book: String },
    /// Print a book's observations.
    Show { book: String },
    /// List books with a log.
    Books,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.log_dir {
        config.log_dir = dir.clone();
    }
    if let Some(dir) = &cli.chart_dir {
        config.chart_dir = dir.clone();
    }
    for dir in [&config.log_dir, &config.chart_dir] {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let report = ProgressReport::from_config(&config)?;

    match cli.command {
        Command::Record { book, progress } => {
            let out = report
                .record(&book, progress)
                .with_context(|| format!("recording progress for '{book}'"))?;
            println!("{}", out.chart_path.display());
        }
        Command::Redraw { book } => {
            let path = report.redraw(&book).with_context(|| format!("redrawing '{book}'"))?;
            println!("{}", path.display());
        }
        Command::Show { book } => {
            let store = report.store();
            let Some(handle) = store.find(&book)? else {
                anyhow::bail!("no log for '{book}' in {}", store.dir().display());
            };
            for obs in store.load(&handle)?.observations() {
                println!("{}\t{}", format_timestamp(&obs.timestamp), obs.progress);
            }
        }
        Command::Books => {
            for book in report.store().books()? {
                println!("{book}");
            }
        }
    }
    Ok(())
}
