use phf::phf_map;
use std::collections::HashMap;

/// First RAM address handed out to variables.
pub const VARIABLE_BASE: u16 = 16;

/// Predefined symbols (compile-time perfect hash map)
pub static PREDEFINED: phf::Map<&'static str, u16> = phf_map! {
    "SP" => 0, "LCL" => 1, "ARG" => 2, "THIS" => 3, "THAT" => 4,
    "R0" => 0, "R1" => 1, "R2" => 2, "R3" => 3,
    "R4" => 4, "R5" => 5, "R6" => 6, "R7" => 7,
    "R8" => 8, "R9" => 9, "R10" => 10, "R11" => 11,
    "R12" => 12, "R13" => 13, "R14" => 14, "R15" => 15,
    "SCREEN" => 16384, "KBD" => 24576,
};

/// Whether `name` is a legal Hack identifier: letters, digits, `_ . $ :`,
/// not starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if !c.is_ascii_digit() && is_symbol_char(c) => chars.all(is_symbol_char),
        _ => false,
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

/// Identifier -> address bindings for one assembly run.
///
/// Predefined symbols are consulted before user bindings and can never be
/// rebound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, u16>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: HashMap::with_capacity(64),
        }
    }

    pub fn is_predefined(symbol: &str) -> bool {
        PREDEFINED.contains_key(symbol)
    }

    /// Bind a user symbol, returning the address it was previously bound to.
    pub fn bind(&mut self, symbol: &str, address: u16) -> Option<u16> {
        self.symbols.insert(symbol.to_string(), address)
    }

    pub fn get(&self, symbol: &str) -> Option<u16> {
        PREDEFINED
            .get(symbol)
            .copied()
            .or_else(|| self.symbols.get(symbol).copied())
    }

    /// Number of user-defined bindings (labels and variables).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_symbols() {
        let table = SymbolTable::new();
        assert_eq!(table.get("R0"), Some(0));
        assert_eq!(table.get("R15"), Some(15));
        assert_eq!(table.get("SP"), Some(0));
        assert_eq!(table.get("THAT"), Some(4));
        assert_eq!(table.get("SCREEN"), Some(16384));
        assert_eq!(table.get("KBD"), Some(24576));
        assert_eq!(table.get("R16"), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_fresh_tables_are_identical() {
        let mut used = SymbolTable::new();
        used.bind("LOOP", 4);
        assert_ne!(used, SymbolTable::new());
        assert_eq!(SymbolTable::new(), SymbolTable::new());
    }

    #[test]
    fn test_rebind_returns_previous() {
        let mut table = SymbolTable::new();
        assert_eq!(table.bind("LOOP", 10), None);
        assert_eq!(table.bind("LOOP", 20), Some(10));
        assert_eq!(table.get("LOOP"), Some(20));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("LOOP"));
        assert!(is_identifier("ball.setdestination$if_true0"));
        assert!(is_identifier("_tmp:1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("x+1"));
    }
}
