/// Extension point for output formats.
/// Buffer-based so rendering a program allocates once.
pub trait Backend {
    fn write_word(&self, word: u16, buf: &mut String);
}

/// `.hack` text: 16 binary digits, most significant bit first
pub struct HackBinary;

impl Backend for HackBinary {
    fn write_word(&self, word: u16, buf: &mut String) {
        for i in (0..16).rev() {
            buf.push(if word & (1 << i) != 0 { '1' } else { '0' });
        }
    }
}

/// Renders encoded words, one per line (generic over backend)
pub struct CodeGen<B: Backend> {
    backend: B,
}

impl<B: Backend> CodeGen<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Every word is newline-terminated; no words renders as an empty string.
    pub fn render(&self, words: &[u16]) -> String {
        let mut out = String::with_capacity(words.len() * 17);
        for &word in words {
            self.backend.write_word(word, &mut out);
            out.push('\n');
        }
        out
    }
}

pub type HackCodeGen = CodeGen<HackBinary>;

impl HackCodeGen {
    pub fn hack() -> Self {
        Self::new(HackBinary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_word() {
        let mut buf = String::new();
        HackBinary.write_word(0, &mut buf);
        assert_eq!(buf, "0000000000000000");

        buf.clear();
        HackBinary.write_word(17, &mut buf);
        assert_eq!(buf, "0000000000010001");

        buf.clear();
        HackBinary.write_word(0b1110101010000111, &mut buf);
        assert_eq!(buf, "1110101010000111");
    }

    #[test]
    fn test_render_lines() {
        let codegen = HackCodeGen::hack();
        assert_eq!(
            codegen.render(&[2, 16384]),
            "0000000000000010\n0100000000000000\n"
        );
        assert_eq!(codegen.render(&[]), "");
    }
}
