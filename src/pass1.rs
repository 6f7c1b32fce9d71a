//! Pass 1: bind every label to the ROM address of the instruction after it.

use log::{debug, warn};

use crate::error::{AsmError, Result};
use crate::parser::{Instruction, classify};
use crate::preprocess::Program;
use crate::symbols::{SymbolTable, is_identifier};

/// Number of words in Hack instruction memory.
pub const ROM_SIZE: usize = 32768;

/// Walk the program once, binding labels. Emits nothing.
///
/// A label declared twice keeps its last address.
pub fn resolve_labels(program: &Program, mut symbols: SymbolTable) -> Result<SymbolTable> {
    let mut rom_address: usize = 0;

    for line in program {
        match classify(&line.text) {
            Instruction::Label(label) => {
                if !is_identifier(label) {
                    return Err(AsmError::InvalidSymbol {
                        line: line.number,
                        name: label.to_string(),
                    });
                }
                if SymbolTable::is_predefined(label) {
                    return Err(AsmError::ReservedSymbol {
                        line: line.number,
                        name: label.to_string(),
                    });
                }
                // may be ROM_SIZE itself for a label after a full program;
                // pass 2 rejects it only if an instruction references it
                let address = u16::try_from(rom_address).map_err(|_| AsmError::ProgramTooLarge {
                    line: line.number,
                    limit: ROM_SIZE,
                })?;

                if let Some(previous) = symbols.bind(label, address) {
                    warn!(
                        "line {}: label {label} redeclared, rebinding {previous} -> {address}",
                        line.number
                    );
                }
            }
            _ => {
                rom_address += 1;
                if rom_address > ROM_SIZE {
                    return Err(AsmError::ProgramTooLarge {
                        line: line.number,
                        limit: ROM_SIZE,
                    });
                }
            }
        }
    }

    debug!(
        "pass 1: {rom_address} instructions, {} labels",
        symbols.len()
    );
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(source: &str) -> Result<SymbolTable> {
        resolve_labels(&Program::from_source(source), SymbolTable::new())
    }

    #[test]
    fn test_label_at_start() {
        let table = labels("(LOOP)\n@LOOP\n0;JMP").unwrap();
        assert_eq!(table.get("LOOP"), Some(0));
    }

    #[test]
    fn test_labels_do_not_advance_counter() {
        let table = labels("@0\n(A1)\n(A2)\nD=A\n@1\n(END)\n@END\n0;JMP").unwrap();
        assert_eq!(table.get("A1"), Some(1));
        assert_eq!(table.get("A2"), Some(1));
        assert_eq!(table.get("END"), Some(3));
    }

    #[test]
    fn test_trailing_label() {
        let table = labels("@1\nD=A\n(DONE)").unwrap();
        assert_eq!(table.get("DONE"), Some(2));
    }

    #[test]
    fn test_duplicate_label_last_wins() {
        let table = labels("(LOOP)\n@i\nM=1\n(LOOP)\n@i\nM=0").unwrap();
        assert_eq!(table.get("LOOP"), Some(2));
    }

    #[test]
    fn test_variables_untouched() {
        let table = labels("@i\nM=1").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_label_name() {
        let err = labels("@0\n()").unwrap_err();
        assert!(matches!(err, AsmError::InvalidSymbol { line: 2, .. }));

        let err = labels("(1ST)").unwrap_err();
        assert!(matches!(err, AsmError::InvalidSymbol { .. }));
    }

    #[test]
    fn test_predefined_label_rejected() {
        let err = labels("(SCREEN)\n@0").unwrap_err();
        assert!(matches!(err, AsmError::ReservedSymbol { line: 1, .. }));
    }

    #[test]
    fn test_program_too_large() {
        let source = "D=0\n".repeat(ROM_SIZE + 1);
        let err = labels(&source).unwrap_err();
        assert!(matches!(
            err,
            AsmError::ProgramTooLarge {
                line,
                ..
            } if line == ROM_SIZE + 1
        ));

        assert!(labels(&"D=0\n".repeat(ROM_SIZE)).is_ok());
    }

    #[test]
    fn test_label_after_full_rom() {
        let mut source = "D=0\n".repeat(ROM_SIZE);
        source.push_str("(END)\n");
        let table = labels(&source).unwrap();
        assert_eq!(table.get("END"), Some(ROM_SIZE as u16));
    }
}
