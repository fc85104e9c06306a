//! CLI entry point for ariprog.
//!
//! Usage:
//!   ariprog [FILE] [options]
//!   ariprog --stdin [options]
//!
//! Input is two whitespace-separated integers `N M`. With no arguments the
//! problem is read from stdin and results are printed to stdout.
//!
//! Options:
//!   -o, --output <FILE>  Write results to a file instead of stdout
//!   --json               Emit a JSON report with search statistics
//!   -v, --verbose        Raise log verbosity (repeatable)

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use ariprog::{solve, AriprogError, Problem};

#[derive(Parser)]
#[command(name = "ariprog")]
#[command(about = "Arithmetic progressions of sums of two squares")]
#[command(version)]
struct Cli {
    /// Path to the input file holding `N M` (stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read input from stdin even if a file is given
    #[arg(long)]
    stdin: bool,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit a JSON report instead of plain lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Solve one problem. `stdin` is read unless a FILE is given without
/// `--stdin`; `stdout` is written unless `--output` names a file.
fn run<R: Read, W: Write>(cli: &Cli, stdin: R, mut stdout: W) -> Result<(), AriprogError> {
    // Read problem
    let problem = match (&cli.file, cli.stdin) {
        (Some(path), false) => Problem::parse(&fs::read_to_string(path)?)?,
        _ => Problem::read_from(stdin)?,
    };
    log::info!("solving N={} M={}", problem.length, problem.bound);

    let report = solve(&problem)?;

    // Format output
    let rendered = if cli.json {
        let mut json = report.render_json().map_err(io::Error::from)?;
        json.push('\n');
        json
    } else {
        report.render_text()
    };

    match &cli.output {
        Some(path) => File::create(path)?.write_all(rendered.as_bytes())?,
        None => stdout.write_all(rendered.as_bytes())?,
    }

    Ok(())
}
