//! Command-line front end for the `rill-check` library.
//!
//! Reads a file (or stdin), validates it, and optionally prints the parsed
//! tree. Log output goes to stderr and is controlled by `RUST_LOG`.

use clap::Parser as ClapParser;
use rill_check::{parse_with_max_depth, DEFAULT_MAX_DEPTH};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "rill-check", version, about = "Validate JSON objects, strings and keywords")]
struct Cli {
    /// File to read. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Maximum object nesting depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed tree as compact JSON.
    #[arg(long)]
    print: bool,

    /// Print the parsed tree as indented JSON.
    #[arg(long, conflicts_with = "print")]
    pretty: bool,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let input = match read_input(cli.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: cannot read input: {}", e);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    match report(&cli, &input, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: cannot write output: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Parses `input` and writes the outcome: results to `out`, diagnostics to `err`.
/// Returns the process exit status.
fn report<O: Write, E: Write>(
    cli: &Cli,
    input: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<u8> {
    match parse_with_max_depth(input, cli.max_depth) {
        Ok(root) => {
            if cli.pretty {
                writeln!(out, "{}", root.pretty())?;
            } else if cli.print {
                writeln!(out, "{}", root)?;
            } else {
                writeln!(out, "valid")?;
            }
            Ok(0)
        }
        Err(e) => {
            match e.position().filter(|p| p.is_known()) {
                Some(position) => writeln!(err, "invalid: {} at {}", e, position)?,
                None => writeln!(err, "invalid: {}", e)?,
            }
            Ok(1)
        }
    }
}
