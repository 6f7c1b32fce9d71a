/// Operand of an address instruction, before symbol resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Literal(&'a str),
    Symbol(&'a str),
}

impl<'a> Operand<'a> {
    /// Operands starting with a digit are literals; everything else names a symbol.
    fn from_token(token: &'a str) -> Self {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            Operand::Literal(token)
        } else {
            Operand::Symbol(token)
        }
    }
}

/// Classified logical line. Fields borrow from the line text and are not
/// validated; mnemonics are looked up during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    Address(Operand<'a>),
    Label(&'a str),
    Compute {
        dest: &'a str,
        comp: &'a str,
        jump: &'a str,
    },
}

pub fn classify(line: &str) -> Instruction<'_> {
    if let Some(operand) = line.strip_prefix('@') {
        return Instruction::Address(Operand::from_token(operand));
    }

    if let Some(label) = line.strip_prefix('(').and_then(|l| l.strip_suffix(')')) {
        return Instruction::Label(label);
    }

    let (dest, comp, jump) = split_compute(line);
    Instruction::Compute { dest, comp, jump }
}

/// Split `dest=comp;jump` on the first `=` and the first `;` after it.
fn split_compute(line: &str) -> (&str, &str, &str) {
    let (dest, rest) = line.split_once('=').unwrap_or(("", line));
    let (comp, jump) = rest.split_once(';').unwrap_or((rest, ""));
    (dest, comp, jump)
}
