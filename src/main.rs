use std::{
    fs::File,
    io::{self, Cursor, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ctb2simplifi::{
    csv::{convert, Mode, Report},
    encoding,
    error::Result,
};

/// Convert a Canadian Tire Bank transaction export into the CSV format
/// Quicken Simplifi imports.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Ledger CSV exported by the bank, or `-` for standard input.
    input: PathBuf,

    /// Destination file (defaults to standard output).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip header validation and only flip the sign of PURCHASE rows.
    #[arg(long)]
    permissive: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            info!(
                rows = report.rows_written,
                skipped = report.rows_read - report.rows_written,
                warnings = report.warnings.len(),
                "conversion finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let mode = if cli.permissive {
        Mode::Permissive
    } else {
        Mode::Strict
    };

    // Encoding detection needs the file's bytes up front; standard input is
    // assumed to already be UTF-8.
    let input: Box<dyn Read> = if cli.input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(Cursor::new(encoding::read_file(&cli.input)?.into_bytes()))
    };
    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    convert(input, output, mode)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
