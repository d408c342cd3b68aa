//! Indentation-tracking writer used by the TypeScript printer.
//!
//! Indentation is held in an `Rc<Cell<usize>>`, so an [`IndentGuard`] can stay
//! alive while the writer is borrowed mutably for more output.
//!
//! ```
//! use twirp_typescript::codegen::code_writer::CodeWriter;
//!
//! let mut output = String::new();
//! let mut w = CodeWriter::with_indent_spaces(&mut output, 4);
//! w.writeln("if (ok) {").unwrap();
//! {
//!     let _indent = w.indent();
//!     w.writeln("return 1;").unwrap();
//! }
//! w.writeln("}").unwrap();
//! assert_eq!(output, "if (ok) {\n    return 1;\n}\n");
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub struct CodeWriter<W> {
    writer: W,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: bool,
}

impl<W: fmt::Write> CodeWriter<W> {
    pub fn new(writer: W, indent_string: String) -> Self {
        Self {
            writer,
            indent_level: Rc::new(Cell::new(0)),
            indent_string,
            at_line_start: true,
        }
    }

    pub fn with_indent_spaces(writer: W, spaces: usize) -> Self {
        Self::new(writer, " ".repeat(spaces))
    }

    /// Write text without a newline. Indents first if at the start of a line.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        if self.at_line_start {
            for _ in 0..self.indent_level.get() {
                self.writer.write_str(&self.indent_string)?;
            }
            self.at_line_start = false;
        }

        self.writer.write_str(text)
    }

    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.newline()
    }

    /// Terminate the current line. Never writes trailing indentation.
    pub fn newline(&mut self) -> fmt::Result {
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn blank_line(&mut self) -> fmt::Result {
        self.newline()
    }

    /// Indentation increases while the returned guard is alive.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    pub fn comment(&mut self, text: &str) -> fmt::Result {
        self.writeln(&format!("// {text}"))
    }

    pub fn write_separated<I, F>(
        &mut self,
        items: I,
        separator: &str,
        mut write_item: F,
    ) -> fmt::Result
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.write(separator)?;
            }
            write_item(self, item)?;
            first = false;
        }
        Ok(())
    }

    /// One item per line, `separator` ending every line but the last.
    pub fn write_separated_lines<I, F>(
        &mut self,
        items: I,
        separator: &str,
        mut write_item: F,
    ) -> fmt::Result
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.writeln(separator)?;
            }
            write_item(self, item)?;
            first = false;
        }
        Ok(())
    }

    #[doc(hidden)]
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.write(&args.to_string())
    }
}

pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

/// `write!` for a [`CodeWriter`].
#[macro_export]
macro_rules! cw_write {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut output = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut output, 2);

        w.writeln("level 0").unwrap();
        {
            let _indent = w.indent();
            w.writeln("level 1").unwrap();
            {
                let _indent = w.indent();
                w.writeln("level 2").unwrap();
            }
            w.writeln("level 1 again").unwrap();
        }
        w.writeln("level 0 again").unwrap();

        assert_eq!(
            output,
            "level 0\n  level 1\n    level 2\n  level 1 again\nlevel 0 again\n"
        );
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let mut output = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut output, 4);

        w.writeln("if (x) {").unwrap();
        {
            let _indent = w.indent();
            w.writeln("a();").unwrap();
            w.blank_line().unwrap();
            w.writeln("b();").unwrap();
        }
        w.writeln("}").unwrap();

        assert_eq!(output, "if (x) {\n    a();\n\n    b();\n}\n");
    }

    #[test]
    fn test_separated() {
        let mut output = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut output, 2);

        w.write("f(").unwrap();
        w.write_separated(["a", "b", "c"], ", ", |w, item| w.write(item))
            .unwrap();
        w.writeln(")").unwrap();
        {
            let _indent = w.indent();
            w.write_separated_lines(["x: 1", "y: 2"], ",", |w, item| w.write(item))
                .unwrap();
        }
        w.newline().unwrap();

        assert_eq!(output, "f(a, b, c)\n  x: 1,\n  y: 2\n");
    }

    #[test]
    fn test_write_macro() {
        let mut output = String::new();
        let mut w = CodeWriter::with_indent_spaces(&mut output, 2);

        let name = "prefix";
        cw_write!(w, "const {} = ", name).unwrap();
        cw_write!(w, "'{}';", "/twirp").unwrap();
        w.newline().unwrap();
        w.comment("done").unwrap();

        assert_eq!(output, "const prefix = '/twirp';\n// done\n");
    }
}
