//! Hack Assembler - two-pass assembler for the nand2tetris Hack computer.
//!
//! Translates Hack assembly (`.asm`) into `.hack` files of 16-digit binary
//! words. Each file is assembled independently:
//!
//! 1. [`preprocess`] strips comments and whitespace into a [`Program`]
//! 2. [`pass1`] binds labels to ROM addresses
//! 3. [`pass2`] allocates variables and encodes every instruction
//! 4. [`codegen`] renders the words as text
//!
//! # Usage
//!
//! ```
//! use hack_asm::assemble;
//!
//! let hack = assemble("@2\nD=A").unwrap();
//! assert_eq!(hack, "0000000000000010\n1110110000010000\n");
//! ```

pub mod codegen;
pub mod error;
pub mod parser;
pub mod pass1;
pub mod pass2;
pub mod preprocess;
pub mod symbols;
pub mod tables;

use log::{debug, info};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use codegen::HackCodeGen;
pub use error::{AsmError, Result};
pub use preprocess::Program;
pub use symbols::SymbolTable;
pub use tables::InstructionTables;

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Extension of the generated sibling file (default: `hack`).
    pub extension: String,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            extension: "hack".to_string(),
        }
    }
}

/// A successfully written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub output: PathBuf,
    pub words: usize,
}

/// Outcome of assembling one input file.
#[derive(Debug)]
pub struct FileResult {
    pub input: PathBuf,
    pub outcome: Result<Assembled>,
}

impl FileResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Assemble Hack source into machine words.
pub fn assemble_words(source: &str) -> Result<Vec<u16>> {
    let program = Program::from_source(source);
    debug!("{} logical lines", program.len());

    let symbols = pass1::resolve_labels(&program, SymbolTable::new())?;
    pass2::encode(&program, symbols, &InstructionTables::hack())
}

/// Assemble Hack source into `.hack` text, one newline-terminated word per line.
pub fn assemble(source: &str) -> Result<String> {
    let words = assemble_words(source)?;
    Ok(HackCodeGen::hack().render(&words))
}

/// Sibling path of `input` with the configured extension.
pub fn output_path(input: &Path, options: &AssembleOptions) -> PathBuf {
    input.with_extension(&options.extension)
}

/// Read and assemble one file without writing anything.
fn read_and_assemble(input: &Path) -> Result<Vec<u16>> {
    let source = fs::read_to_string(input).map_err(|e| AsmError::read(input, e))?;
    assemble_words(&source)
}

fn write_words(input: &Path, words: &[u16], options: &AssembleOptions) -> Result<Assembled> {
    let output = output_path(input, options);
    fs::write(&output, HackCodeGen::hack().render(words))
        .map_err(|e| AsmError::write(&output, e))?;

    info!(
        "{} -> {} ({} words)",
        input.display(),
        output.display(),
        words.len()
    );
    Ok(Assembled {
        output,
        words: words.len(),
    })
}

/// Read, assemble and write one file. Nothing is written if assembly fails.
pub fn assemble_file(input: &Path, options: &AssembleOptions) -> Result<Assembled> {
    let words = read_and_assemble(input)?;
    write_words(input, &words, options)
}

/// Assemble every file independently and in parallel, then write the outputs
/// sequentially in input order.
///
/// Inputs sharing an output path (`Prog.asm`, `Prog.s`) resolve like a
/// sequential run: the last one wins. One file failing never affects another.
pub fn assemble_files(inputs: &[PathBuf], options: &AssembleOptions) -> Vec<FileResult> {
    let assembled: Vec<Result<Vec<u16>>> = inputs
        .par_iter()
        .map(|input| read_and_assemble(input))
        .collect();

    inputs
        .iter()
        .zip(assembled)
        .map(|(input, words)| FileResult {
            input: input.clone(),
            outcome: words.and_then(|words| write_words(input, &words, options)),
        })
        .collect()
}

/// Process exit status for a batch: 0 when nothing was requested or at least
/// one file was written, 1 when every file failed.
pub fn exit_status(results: &[FileResult]) -> u8 {
    if results.is_empty() || results.iter().any(FileResult::is_ok) {
        0
    } else {
        1
    }
}
