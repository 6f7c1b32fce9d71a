//! Source cleanup ahead of the two passes.

/// A comment-free, whitespace-free, non-empty source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based line number in the original source
    pub number: usize,
    pub text: String,
}

/// The cleaned program both passes iterate over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<LogicalLine>,
}

impl Program {
    pub fn from_source(source: &str) -> Self {
        let lines = source
            .lines()
            .enumerate()
            .filter_map(|(idx, raw)| {
                let text = clean_line(raw);
                (!text.is_empty()).then(|| LogicalLine {
                    number: idx + 1,
                    text,
                })
            })
            .collect();

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a LogicalLine;
    type IntoIter = std::slice::Iter<'a, LogicalLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Drop the `//` comment, then every whitespace character.
fn clean_line(line: &str) -> String {
    let code = line.split("//").next().unwrap_or("");
    code.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("  @123  "), "@123");
        assert_eq!(clean_line("D=M // comment"), "D=M");
        assert_eq!(clean_line("// only comment"), "");
        assert_eq!(clean_line("\tAM = M - 1 ; JNE"), "AM=M-1;JNE");
    }

    #[test]
    fn test_line_numbers_survive_cleanup() {
        let program = Program::from_source("// header\n\n@2\n  D=A // load\n\n(END)\r\n");
        let lines: Vec<(usize, &str)> = program
            .into_iter()
            .map(|l| (l.number, l.text.as_str()))
            .collect();
        assert_eq!(lines, vec![(3, "@2"), (4, "D=A"), (6, "(END)")]);
    }

    #[test]
    fn test_empty_source() {
        assert!(Program::from_source("").is_empty());
        assert!(Program::from_source("   \n\t\n// x").is_empty());
    }
}
