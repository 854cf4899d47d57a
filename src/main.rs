use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use shdl_normalizer::{convert, CircuitError, ConvertOptions, NamePolicy, ParseError};

const EXIT_USAGE: u8 = 1;
const EXIT_MALFORMED_LINE: u8 = 2;
const EXIT_DUPLICATE_WIRE: u8 = 3;
const EXIT_IO: u8 = 4;
const EXIT_INVALID_CIRCUIT: u8 = 5;

/// Normalize an SHDL circuit and its variable bindings into a passthru-free
/// gate list, written as JSON for an arithmetization emitter.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Circuit file (`<wire> [output ]gate arity ...` lines)
    gates: PathBuf,

    /// Variable file (`<Alice|Bob> <input|output> <type> "<name>" [ ... ]` lines)
    variables: PathBuf,

    /// Write the normalized circuit here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Let a repeated variable name replace the earlier binding
    #[arg(long)]
    allow_duplicate_names: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let gates = fs::read_to_string(&cli.gates)
        .with_context(|| format!("Failed to read circuit file {}", cli.gates.display()))?;
    let variables = fs::read_to_string(&cli.variables)
        .with_context(|| format!("Failed to read variable file {}", cli.variables.display()))?;

    let options = ConvertOptions {
        name_policy: if cli.allow_duplicate_names {
            NamePolicy::LastWriteWins
        } else {
            NamePolicy::Unique
        },
    };

    let normalized = convert(gates.lines(), variables.lines(), options)?;

    info!(
        "{} gates retained ({} computing), {} eliminated, {} inputs, {} outputs, {} variables",
        normalized.circuit.len(),
        normalized.circuit.gate_count().computing_gate_count(),
        normalized.circuit.remap().len(),
        normalized.num_inputs,
        normalized.num_outputs,
        normalized.variables.len()
    );

    let json = serde_json::to_string_pretty(&normalized)?;
    match &cli.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CircuitError>() {
        Some(CircuitError::Parse(_)) => EXIT_MALFORMED_LINE,
        Some(CircuitError::DuplicateWire { .. }) => EXIT_DUPLICATE_WIRE,
        Some(_) => EXIT_INVALID_CIRCUIT,
        None => EXIT_IO,
    }
}

/// `path:line` of the malformed line, for parse failures
fn error_location(cli: &Cli, err: &anyhow::Error) -> Option<String> {
    let Some(CircuitError::Parse(parse)) = err.downcast_ref::<CircuitError>() else {
        return None;
    };

    let path = match parse {
        ParseError::MalformedVariableLine { .. } => &cli.variables,
        _ => &cli.gates,
    };

    Some(format!("{}:{}", path.display(), parse.lineno()))
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(location) = error_location(&cli, &err) {
                eprintln!("  --> {location}");
            }
            ExitCode::from(exit_code(&err))
        }
    }
}
