//! Pass 2: allocate variables and encode every instruction into a 16-bit word.

use log::{debug, trace};

use crate::error::{AsmError, Result};
use crate::parser::{Instruction, Operand, classify};
use crate::preprocess::{LogicalLine, Program};
use crate::symbols::{SymbolTable, VARIABLE_BASE, is_identifier};
use crate::tables::InstructionTables;

/// Largest value an address instruction can carry (top bit is the opcode).
pub const MAX_ADDRESS: u16 = 0x7FFF;

/// Variables stop short of the memory-mapped screen.
pub const VARIABLE_LIMIT: u16 = 0x4000;

const COMPUTE_PREFIX: u16 = 0b111 << 13;

/// Encode a compute instruction from its field codes.
pub fn compute_word(comp: u8, dest: u8, jump: u8) -> u16 {
    COMPUTE_PREFIX
        | (u16::from(comp & 0x7F) << 6)
        | (u16::from(dest & 0b111) << 3)
        | u16::from(jump & 0b111)
}

struct Encoder<'t> {
    symbols: SymbolTable,
    tables: &'t InstructionTables,
    next_variable: u16,
}

impl Encoder<'_> {
    fn address(&mut self, operand: Operand<'_>, line: usize) -> Result<u16> {
        match operand {
            Operand::Literal(text) => text
                .parse::<u16>()
                .ok()
                .filter(|&v| v <= MAX_ADDRESS)
                .ok_or_else(|| AsmError::InvalidAddress {
                    line,
                    value: text.to_string(),
                }),
            Operand::Symbol(name) => {
                if let Some(address) = self.symbols.get(name) {
                    if address > MAX_ADDRESS {
                        return Err(AsmError::AddressOutOfRange {
                            line,
                            name: name.to_string(),
                            address,
                        });
                    }
                    return Ok(address);
                }
                if !is_identifier(name) {
                    return Err(AsmError::InvalidSymbol {
                        line,
                        name: name.to_string(),
                    });
                }
                self.allocate(name, line)
            }
        }
    }

    fn allocate(&mut self, name: &str, line: usize) -> Result<u16> {
        if self.next_variable >= VARIABLE_LIMIT {
            return Err(AsmError::OutOfVariableSpace {
                line,
                name: name.to_string(),
            });
        }
        let address = self.next_variable;
        self.symbols.bind(name, address);
        self.next_variable += 1;
        trace!("line {line}: variable {name} -> {address}");
        Ok(address)
    }

    fn compute(&self, dest: &str, comp: &str, jump: &str, line: usize) -> Result<u16> {
        let dest_code = self.tables.dest(dest).ok_or_else(|| AsmError::InvalidDest {
            line,
            dest: dest.to_string(),
        })?;
        let comp_code = self.tables.comp(comp).ok_or_else(|| AsmError::InvalidComp {
            line,
            comp: comp.to_string(),
        })?;
        let jump_code = self.tables.jump(jump).ok_or_else(|| AsmError::InvalidJump {
            line,
            jump: jump.to_string(),
        })?;

        Ok(compute_word(comp_code, dest_code, jump_code))
    }

    fn encode_line(&mut self, line: &LogicalLine) -> Result<Option<u16>> {
        let word = match classify(&line.text) {
            Instruction::Label(_) => return Ok(None),
            Instruction::Address(operand) => self.address(operand, line.number)?,
            Instruction::Compute { dest, comp, jump } => {
                self.compute(dest, comp, jump, line.number)?
            }
        };
        Ok(Some(word))
    }
}

/// Encode the program, allocating unseen symbols from address 16 upward in
/// first-use order. `symbols` must already hold the labels from pass 1.
pub fn encode(
    program: &Program,
    symbols: SymbolTable,
    tables: &InstructionTables,
) -> Result<Vec<u16>> {
    let mut encoder = Encoder {
        symbols,
        tables,
        next_variable: VARIABLE_BASE,
    };
    let mut words = Vec::with_capacity(program.len());

    for line in program {
        if let Some(word) = encoder.encode_line(line)? {
            words.push(word);
        }
    }

    debug!(
        "pass 2: {} words, {} variables",
        words.len(),
        encoder.next_variable - VARIABLE_BASE
    );
    Ok(words)
}
