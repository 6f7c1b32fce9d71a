//! Error types for assembly.
//!
//! Line-level errors carry the 1-based source line so a failing file can be
//! fixed without re-running in verbose mode.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsmError {
    #[error("line {line}: invalid address literal: {value}")]
    InvalidAddress { line: usize, value: String },

    #[error("line {line}: invalid symbol name: '{name}'")]
    InvalidSymbol { line: usize, name: String },

    #[error("line {line}: cannot redefine predefined symbol: {name}")]
    ReservedSymbol { line: usize, name: String },

    #[error("line {line}: invalid dest field: {dest}")]
    InvalidDest { line: usize, dest: String },

    #[error("line {line}: invalid comp field: '{comp}'")]
    InvalidComp { line: usize, comp: String },

    #[error("line {line}: invalid jump field: {jump}")]
    InvalidJump { line: usize, jump: String },

    #[error("line {line}: {name} resolves to {address}, outside the 15-bit address range")]
    AddressOutOfRange {
        line: usize,
        name: String,
        address: u16,
    },

    #[error("line {line}: program exceeds {limit} instructions")]
    ProgramTooLarge { line: usize, limit: usize },

    #[error("line {line}: no RAM left for variable {name}")]
    OutOfVariableSpace { line: usize, name: String },

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AsmError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Source line the error points at, if it is a line-level error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidAddress { line, .. }
            | Self::InvalidSymbol { line, .. }
            | Self::ReservedSymbol { line, .. }
            | Self::InvalidDest { line, .. }
            | Self::InvalidComp { line, .. }
            | Self::InvalidJump { line, .. }
            | Self::AddressOutOfRange { line, .. }
            | Self::ProgramTooLarge { line, .. }
            | Self::OutOfVariableSpace { line, .. } => Some(*line),
            Self::FileRead { .. } | Self::FileWrite { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AsmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AsmError::InvalidComp {
            line: 7,
            comp: "D*M".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: invalid comp field: 'D*M'");
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_io_error_has_path() {
        let err = AsmError::read(
            "Missing.asm",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("Missing.asm"));
        assert_eq!(err.line(), None);
    }
}
