use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};

use coefplot::config::{PlotJob, PlotSpec};

#[derive(Parser)]
#[command(name = "coefplot")]
#[command(
    about = "Coefficient plots from tabular estimates",
    long_about = "Draws dot-and-whisker plots of point estimates with optional error bars, one row per variable or grouped by model, and writes them as SVG."
)]
struct Cli {
    /// JSON plot job: data columns, plot request and rendering options.
    #[arg(long, required = true)]
    job: String,
    /// Output SVG file.
    #[arg(long, required = true)]
    out: String,
    /// Force overwrite of an existing output file.
    #[arg(short, long)]
    force: bool,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long)]
    append_log: bool,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// Create the parent directory and refuse to clobber an existing file
fn check_output_path(out: &str, force: bool) -> Result<()> {
    let path = Path::new(out);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create output directory {:?}", parent))?;
        }

    if !force && path.exists() {
        bail!("Output file {} already exists. Use --force to overwrite.", out);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    check_output_path(&cli.out, cli.force)?;

    let job = PlotJob::load(&cli.job)
        .with_context(|| format!("Error loading plot job {}", cli.job))?;
    let kind = match job.plot {
        PlotSpec::Simple(_) => "simple",
        PlotSpec::Grouped(_) => "grouped",
    };
    info!("Drawing {} coefficient plot from {} rows", kind, job.data.len());

    let mut fig = job.run().context("Could not draw plot")?;
    fig.save(&cli.out)
        .with_context(|| format!("Could not write {}", cli.out))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        }
        .unwrap_or_else(|e| panic!("Could not open log file '{}': {}", path, e));
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
