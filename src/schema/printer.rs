//! Indentation helper for human-readable output
//!
//! Rules:
//! - A negative `level` suppresses indentation of the first line
//! - Nested elements are printed at `|level| + 1`
//! - A negative `spaces_per_level` folds the whole output onto one line
//! - Indentation is capped at `MAX_INDENT` spaces

use std::fmt::{self, Write};

/// Widest indentation ever written, in spaces
pub const MAX_INDENT: usize = 4096;

/// Writes a bracketed sequence of elements honoring level and spacing rules.
pub struct Printer<'a, W: Write> {
    out: &'a mut W,
    level: i32,
    spaces_per_level: i32,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(out: &'a mut W, level: i32, spaces_per_level: i32) -> Self {
        Self {
            out,
            level,
            spaces_per_level,
        }
    }

    fn single_line(&self) -> bool {
        self.spaces_per_level < 0
    }

    fn indent(&mut self, level: i32) -> fmt::Result {
        let width = (level.unsigned_abs() as usize)
            .saturating_mul(self.spaces_per_level.unsigned_abs() as usize)
            .min(MAX_INDENT);
        write!(self.out, "{:width$}", "", width = width)
    }

    /// Opens the sequence.
    pub fn start(&mut self) -> fmt::Result {
        if self.level >= 0 {
            self.indent(self.level)?;
        }
        self.out.write_char('[')?;
        if !self.single_line() {
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    /// Writes one element of the sequence.
    pub fn element(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        if self.single_line() {
            self.out.write_char(' ')?;
            self.out.write_fmt(args)
        } else {
            self.indent(self.level.saturating_abs().saturating_add(1))?;
            self.out.write_fmt(args)?;
            self.out.write_char('\n')
        }
    }

    /// Closes the sequence.
    pub fn end(&mut self) -> fmt::Result {
        if self.single_line() {
            self.out.write_str(" ]")
        } else {
            self.indent(self.level)?;
            self.out.write_str("]\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(level: i32, spaces: i32, items: &[&str]) -> String {
        let mut out = String::new();
        let mut printer = Printer::new(&mut out, level, spaces);
        printer.start().unwrap();
        for item in items {
            printer.element(format_args!("{}", item)).unwrap();
        }
        printer.end().unwrap();
        out
    }

    #[test]
    fn test_single_line() {
        assert_eq!(render(0, -1, &["a", "b"]), "[ a b ]");
        assert_eq!(render(0, -1, &[]), "[ ]");
    }

    #[test]
    fn test_single_line_keeps_initial_indent() {
        assert_eq!(render(2, -2, &["a"]), "    [ a ]");
    }

    #[test]
    fn test_multi_line() {
        assert_eq!(render(0, 4, &["a", "b"]), "[\n    a\n    b\n]\n");
    }

    #[test]
    fn test_nested_level() {
        assert_eq!(render(1, 2, &["a"]), "  [\n    a\n  ]\n");
    }

    #[test]
    fn test_large_indent_is_capped() {
        let out = render(70_000, 70_000, &["a"]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{}[", " ".repeat(MAX_INDENT)));
        assert_eq!(lines[1], format!("{}a", " ".repeat(MAX_INDENT)));
        assert_eq!(lines[2], format!("{}]", " ".repeat(MAX_INDENT)));
    }

    #[test]
    fn test_extreme_levels_do_not_overflow() {
        assert_eq!(render(i32::MIN, i32::MIN, &["a"]), "[ a ]");
        let out = render(i32::MAX, i32::MAX, &[]);
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn test_negative_level_suppresses_first_indent() {
        assert_eq!(render(-1, 2, &["a"]), "[\n    a\n  ]\n");
    }
}
