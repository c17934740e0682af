use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use ps_core::StructuralRecord;
use ps_parser::{extract_file, extract_files, ExtractOptions, WalkMode};

mod failure;
mod logging;

use failure::{ErrorPayload, Failure};

const USAGE: &str = "pysurface [--legacy-walk] [-v] <PATH>...";

/// Print a JSON structural summary of Python source files.
#[derive(Debug, Parser)]
#[command(name = "pysurface", version, about)]
struct Cli {
    /// Python files to analyse. Several paths print one JSON object per line.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Walk every subtree: report methods as bare functions and export
    /// nested definitions.
    #[arg(long)]
    legacy_walk: bool,

    /// Log extraction details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            walk: if self.legacy_walk {
                WalkMode::Legacy
            } else {
                WalkMode::Scoped
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            ErrorPayload::usage(USAGE).emit();
            return Failure::Usage.into();
        }
    };

    logging::init(cli.verbose);
    let options = cli.options();

    let result = match cli.paths.as_slice() {
        [path] => run_single(path, &options),
        paths => run_batch(paths, &options),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => failure.into(),
    }
}

fn run_single(path: &Path, options: &ExtractOptions) -> Result<(), Failure> {
    let record = extract_file(path, options).map_err(|e| {
        ErrorPayload::from_error(&e).emit();
        Failure::of(&e)
    })?;
    print_record(&record)
}

/// Extract every path; the first failure decides the exit status.
fn run_batch(paths: &[PathBuf], options: &ExtractOptions) -> Result<(), Failure> {
    let mut first_failure = None;
    for result in extract_files(paths, options) {
        let outcome = match result {
            Ok(record) => print_record(&record),
            Err(e) => {
                ErrorPayload::from_error(&e).emit();
                Err(Failure::of(&e))
            }
        };
        if let Err(failure) = outcome {
            first_failure.get_or_insert(failure);
        }
    }
    first_failure.map_or(Ok(()), Err)
}

fn print_record(record: &StructuralRecord) -> Result<(), Failure> {
    let line = serde_json::to_string(record).map_err(|e| {
        tracing::error!(path = %record.path, error = %e, "failed to serialize record");
        Failure::Io
    })?;
    println!("{line}");
    Ok(())
}
