mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::input::{SampleSource, load_samples};
use crate::model::factors::Method;
use crate::pipeline::stage7_report::{OutputFormat, build_summary, render, write_reports};
use crate::pipeline::{AnalysisError, run_analysis};

#[derive(Debug, Parser)]
#[command(
    name = "handover-stats",
    version,
    about = "Descriptive statistics, pairwise t-tests and two-way ANOVA for handover survey ratings"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the full analysis and print the report.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Overhand ratings: `@path` (optionally .gz) or inline integers. Defaults to the study data.
    #[arg(long, value_name = "SRC")]
    overhand: Option<String>,
    /// Underhand ratings, same forms as --overhand.
    #[arg(long, value_name = "SRC")]
    underhand: Option<String>,
    /// Side ratings, same forms as --overhand.
    #[arg(long, value_name = "SRC")]
    side: Option<String>,
    /// Also write report.txt and summary.json into this directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Print the JSON summary instead of the text report.
    #[arg(long)]
    json: bool,
    /// Reject non-numeric tokens and incomplete trailing groups.
    #[arg(long)]
    strict: bool,
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    sources: [SampleSource; Method::COUNT],
    out_dir: Option<PathBuf>,
    format: OutputFormat,
    strict: bool,
    verbose: u8,
    quiet: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        let source = |arg: Option<String>| {
            arg.map(|a| SampleSource::from_arg(&a))
                .unwrap_or(SampleSource::Embedded)
        };
        Self {
            sources: [source(args.overhand), source(args.underhand), source(args.side)],
            out_dir: args.out,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            strict: args.strict,
            verbose: args.verbose,
            quiet: args.quiet,
        }
    }
}

fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    match cli.command {
        Command::Run(run) => Ok(RunConfig::from(run)),
    }
}

fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };
    logging::init(config.verbose, config.quiet);

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), AnalysisError> {
    let samples = load_samples(&config.sources)?;
    let analysis = run_analysis(&samples, config.strict)?;
    let summary = build_summary(&analysis);

    let rendered = render(&summary, config.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if let Some(out_dir) = &config.out_dir {
        write_reports(&summary, out_dir)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
