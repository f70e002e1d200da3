mod debug_report;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use mxl_tradepost::{CharacterItems, Error, Options, ReferenceTables, dump_with};

#[derive(Parser, Debug)]
#[command(name = "tradepost")]
#[command(about = "Aggregate Median XL armory dumps into a forum trade post")]
#[command(version)]
#[command(after_help = "Exit codes:
  0  Success (including an empty dump).
  1  Internal error.
  2  Invalid input JSON or tables file.
  3  File could not be read or written.")]
struct Cli {
    /// JSON files holding an array of {character, rows, error?} objects.
    /// Reads stdin when omitted.
    inputs: Vec<PathBuf>,

    /// TOML file extending or replacing the built-in reference tables
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Write the trade post here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print per-character counters, rule hits and row traces to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color in the verbose report
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color in the verbose report
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let tables = match &cli.tables {
        Some(path) => ReferenceTables::load(path)?,
        None => ReferenceTables::builtin(),
    };

    let batches = read_batches(&cli.inputs)?;
    let options = Options { trace: cli.verbose };
    let report = dump_with(&batches, &tables, &options);

    if cli.verbose {
        let color = if cli.no_color { false } else { cli.color || io::stderr().is_terminal() };
        debug_report::print_run(&report, color);
    }

    if report.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    let post = report.trade_post();
    match &cli.output {
        Some(path) => fs::write(path, post)?,
        None => print!("{post}"),
    }
    Ok(())
}

fn read_batches(inputs: &[PathBuf]) -> Result<Vec<CharacterItems>, Error> {
    if inputs.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return parse_batches(&buffer);
    }

    let mut batches = Vec::new();
    for path in inputs {
        batches.extend(read_file(path)?);
    }
    Ok(batches)
}

fn read_file(path: &Path) -> Result<Vec<CharacterItems>, Error> {
    log::debug!("reading {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_batches(&text)
}

fn parse_batches(text: &str) -> Result<Vec<CharacterItems>, Error> {
    Ok(serde_json::from_str(text)?)
}
