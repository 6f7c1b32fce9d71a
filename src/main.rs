//! Hack Assembler CLI - assembles `.asm` files into sibling `.hack` files.
//!
//! Usage:
//!     hack-asm <file.asm>...
//!     hack-asm -v prog1.asm prog2.asm

use clap::Parser as ClapParser;
use env_logger::Env;
use hack_asm::{AssembleOptions, assemble_files, exit_status};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(name = "hack-asm")]
#[command(author = "nand2tetris")]
#[command(version)]
#[command(about = "Two-pass assembler for the Hack computer")]
struct Args {
    /// Assembly source files
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Show per-pass details
    #[arg(short, long)]
    verbose: bool,

    /// Extension of the generated files
    #[arg(long, value_name = "EXT", default_value = "hack")]
    extension: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if args.files.is_empty() {
        eprintln!("No files supplied.");
    }

    let options = AssembleOptions {
        extension: args.extension,
    };
    let results = assemble_files(&args.files, &options);

    for result in &results {
        match &result.outcome {
            Ok(done) => println!("{} -> {}", result.input.display(), done.output.display()),
            Err(e) => eprintln!("Error processing {}: {}", result.input.display(), e),
        }
    }

    ExitCode::from(exit_status(&results))
}
