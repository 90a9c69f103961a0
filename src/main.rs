//! Command-line front end for the `minjson` library.
//!
//! Reads one document from a file (or stdin), parses it, and prints the
//! canonical rendering. Parse failures go to stderr with a non-zero exit.
//!
//! You can run this with: `cargo run -- path/to/doc.json`

use clap::Parser;
use minjson::{parse_document_with_limits, Limits};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "minjson")]
#[command(about = "Parse a JSON object and print its canonical form", long_about = None)]
#[command(version)]
struct Cli {
    /// Document to read; stdin when omitted.
    path: Option<PathBuf>,

    /// Maximum nesting depth of objects and arrays.
    #[arg(long, default_value_t = minjson::limits::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Only validate; print nothing on success.
    #[arg(long)]
    check: bool,

    /// Print the kind of each root member instead of the rendering.
    #[arg(long, conflicts_with = "check")]
    kind: bool,
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let input = match read_input(cli.path.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Read Error: {}", e);
            return ExitCode::from(2);
        }
    };
    // Files usually end with a newline, which is not whitespace to the parser.
    let document = input.trim_end_matches(['\n', '\r']);

    let limits = Limits::with_max_depth(cli.max_depth);
    let root = match parse_document_with_limits(document, limits) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.check {
        return ExitCode::SUCCESS;
    }
    if cli.kind {
        let mut members: Vec<_> = root.iter().collect();
        members.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in members {
            println!("{}: {}", name, value.kind());
        }
    } else {
        println!("{}", root.render());
    }
    ExitCode::SUCCESS
}
