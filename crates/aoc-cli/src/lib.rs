//! Shared plumbing for the puzzle CLIs
//!
//! Every binary accepts the same arguments:
//!
//! ```text
//! <binary> [INPUT] [options]
//!
//! Options:
//!   --input-dir <DIR>  Directory holding the default input file (default: inputs)
//!   --verbose, -v      Log debug output
//!   --help, -h         Show help
//! ```
//!
//! Without INPUT, piped standard input is read; otherwise the default input
//! file `<DIR>/<year>_<day>.txt` is used.

use aoc_puzzles::constants::DEFAULT_INPUT_DIR;
use aoc_puzzles::infra::input_io::InputError;
use aoc_puzzles::{Answers, InputSource, Puzzle, SolveError, solve_from_source};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: Option<PathBuf>,
    pub input_dir: PathBuf,
    pub verbose: bool,
}

/// Outcome of argument parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

pub fn print_usage(program: &str, puzzle: Puzzle) {
    eprintln!("{}", puzzle);
    eprintln!();
    eprintln!("Usage: {} [INPUT] [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [INPUT]            Puzzle input file (default: piped stdin, then the default file)");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --input-dir <DIR>  Directory of the default input file (default: {})",
        DEFAULT_INPUT_DIR
    );
    eprintln!("  --verbose, -v      Log debug output");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!(
        "Default input file: {}",
        puzzle.input_path(DEFAULT_INPUT_DIR).display()
    );
}

/// Parse arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input: Option<PathBuf> = None;
    let mut input_dir: Option<PathBuf> = None;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--verbose" | "-v" => verbose = true,
            "--input-dir" => {
                let dir = args.next().ok_or("--input-dir requires a value")?;
                input_dir = Some(PathBuf::from(dir));
            }
            value if !value.starts_with('-') || value == "-" => {
                if input.is_some() {
                    return Err(format!("Unexpected argument: {}", value));
                }
                input = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(Command::Run(Args {
        input,
        input_dir: input_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
        verbose,
    }))
}

/// Resolve the input source for a puzzle
///
/// A lone `-` forces standard input.
pub fn input_source(args: &Args, puzzle: Puzzle) -> InputSource {
    if args.input.as_deref() == Some(std::path::Path::new("-")) {
        return InputSource::Stdin;
    }
    InputSource::resolve(args.input.clone(), puzzle.input_path(&args.input_dir))
}

/// Initialize logging
///
/// Warnings only by default, debug output with `--verbose`. `RUST_LOG`
/// overrides both.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_module("aoc_puzzles", level)
        .filter_module("aoc_cli", level)
        .parse_default_env()
        .init();
}

/// Human readable message for a solve failure
pub fn format_solve_error(source: &InputSource, err: &SolveError) -> String {
    match err {
        SolveError::Input(InputError::File { path, source: io }) => {
            if io.kind() == std::io::ErrorKind::NotFound {
                format!(
                    "Input file not found: '{}'.\nPass the input file as an argument or pipe it to standard input.",
                    path.display()
                )
            } else {
                format!("Cannot read input file '{}': {}", path.display(), io)
            }
        }
        SolveError::Input(InputError::Stdin(io)) => {
            format!("Cannot read standard input: {}", io)
        }
        SolveError::Format(e) => format!("Malformed input in {}: {}", source, e),
        SolveError::Alignment(e) => format!("Could not find an alignment: {}", e),
    }
}

/// Write the two answer lines, `Part 1: ...` then `Part 2: ...`
pub fn write_answers<W: Write>(out: &mut W, answers: &Answers) -> io::Result<()> {
    writeln!(out, "{}", answers)
}

/// Run one puzzle end to end and exit on failure
pub fn run(puzzle: Puzzle) {
    let program = env::args().next().unwrap_or_default();

    let args = match parse_args(env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print_usage(&program, puzzle);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program, puzzle);
            std::process::exit(1);
        }
    };

    init_logging(args.verbose);

    let source = input_source(&args, puzzle);
    log::info!("{}", puzzle);
    log::info!("reading input from {}", source);

    let start = Instant::now();
    let answers = match solve_from_source(puzzle, &source) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", format_solve_error(&source, &e));
            std::process::exit(1);
        }
    };
    log::debug!("solved in {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);

    if let Err(e) = write_answers(&mut io::stdout().lock(), &answers) {
        eprintln!("Error: cannot write answers: {}", e);
        std::process::exit(1);
    }
}
