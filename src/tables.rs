//! Mnemonic lookup tables for the compute instruction fields.
//!
//! All three tables are compile-time perfect hash maps, so they are built once
//! and shared read-only by every file being assembled.

use phf::phf_map;

/// comp mnemonic -> `a c1..c6` (7 bits, `a` selects M over A)
pub static COMP: phf::Map<&'static str, u8> = phf_map! {
    // a = 0
    "0" => 0b0101010,
    "1" => 0b0111111,
    "-1" => 0b0111010,
    "D" => 0b0001100,
    "A" => 0b0110000,
    "!D" => 0b0001101,
    "!A" => 0b0110001,
    "-D" => 0b0001111,
    "-A" => 0b0110011,
    "D+1" => 0b0011111, "1+D" => 0b0011111,
    "A+1" => 0b0110111, "1+A" => 0b0110111,
    "D-1" => 0b0001110,
    "A-1" => 0b0110010,
    "D+A" => 0b0000010, "A+D" => 0b0000010,
    "D-A" => 0b0010011,
    "A-D" => 0b0000111,
    "D&A" => 0b0000000, "A&D" => 0b0000000,
    "D|A" => 0b0010101, "A|D" => 0b0010101,

    // a = 1
    "M" => 0b1110000,
    "!M" => 0b1110001,
    "-M" => 0b1110011,
    "M+1" => 0b1110111, "1+M" => 0b1110111,
    "M-1" => 0b1110010,
    "D+M" => 0b1000010, "M+D" => 0b1000010,
    "D-M" => 0b1010011,
    "M-D" => 0b1000111,
    "D&M" => 0b1000000, "M&D" => 0b1000000,
    "D|M" => 0b1010101, "M|D" => 0b1010101,
};

/// dest mnemonic -> `d1 d2 d3` (A, D, M). Letter order is not significant.
pub static DEST: phf::Map<&'static str, u8> = phf_map! {
    "" => 0b000,
    "M" => 0b001,
    "D" => 0b010,
    "MD" => 0b011, "DM" => 0b011,
    "A" => 0b100,
    "AM" => 0b101, "MA" => 0b101,
    "AD" => 0b110, "DA" => 0b110,
    "AMD" => 0b111, "ADM" => 0b111, "MAD" => 0b111,
    "MDA" => 0b111, "DAM" => 0b111, "DMA" => 0b111,
};

/// jump mnemonic -> `j1 j2 j3`
pub static JUMP: phf::Map<&'static str, u8> = phf_map! {
    "" => 0b000,
    "JGT" => 0b001,
    "JEQ" => 0b010,
    "JGE" => 0b011,
    "JLT" => 0b100,
    "JNE" => 0b101,
    "JLE" => 0b110,
    "JMP" => 0b111,
};

/// The three field tables used by the encoder.
#[derive(Debug, Clone, Copy)]
pub struct InstructionTables {
    comp: &'static phf::Map<&'static str, u8>,
    dest: &'static phf::Map<&'static str, u8>,
    jump: &'static phf::Map<&'static str, u8>,
}

impl InstructionTables {
    pub fn hack() -> Self {
        Self {
            comp: &COMP,
            dest: &DEST,
            jump: &JUMP,
        }
    }

    pub fn comp(&self, mnemonic: &str) -> Option<u8> {
        self.comp.get(mnemonic).copied()
    }

    pub fn dest(&self, mnemonic: &str) -> Option<u8> {
        self.dest.get(mnemonic).copied()
    }

    pub fn jump(&self, mnemonic: &str) -> Option<u8> {
        self.jump.get(mnemonic).copied()
    }
}
