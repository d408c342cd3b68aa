// TypeScript printer for `ast::Module`.

use std::fmt::{self, Write};

use super::ast::{Expr, Item, Module, Param, Stmt};
use super::code_writer::CodeWriter;

const INDENT_SPACES: usize = 4;

/// Print a module. Every top-level `const` is preceded by a blank line; the
/// header comment and imports form one leading group.
pub fn print(module: &Module) -> Result<String, fmt::Error> {
    let mut output = String::new();
    let mut w = CodeWriter::with_indent_spaces(&mut output, INDENT_SPACES);

    for item in &module.items {
        print_item(&mut w, item)?;
    }

    Ok(output)
}

fn print_item<W: Write>(w: &mut CodeWriter<W>, item: &Item) -> fmt::Result {
    match item {
        Item::Comment(text) => w.comment(text),
        Item::Import { binding, from } => {
            w.write("import ")?;
            w.write(binding)?;
            w.write(" from ")?;
            print_str(w, from)?;
            w.writeln(";")
        }
        Item::Const {
            export,
            name,
            value,
        } => {
            w.blank_line()?;
            if *export {
                w.write("export ")?;
            }
            crate::cw_write!(w, "const {name} = ")?;
            print_expr(w, value)?;
            w.writeln(";")
        }
    }
}

fn print_stmts<W: Write>(w: &mut CodeWriter<W>, stmts: &[Stmt]) -> fmt::Result {
    for stmt in stmts {
        print_stmt(w, stmt)?;
    }
    Ok(())
}

fn print_stmt<W: Write>(w: &mut CodeWriter<W>, stmt: &Stmt) -> fmt::Result {
    match stmt {
        Stmt::Const { name, value } => {
            crate::cw_write!(w, "const {name} = ")?;
            print_expr(w, value)?;
            w.writeln(";")
        }
        Stmt::If { cond, then } => {
            w.write("if (")?;
            print_expr(w, cond)?;
            w.writeln(") {")?;
            {
                let _indent = w.indent();
                print_stmts(w, then)?;
            }
            w.writeln("}")
        }
        Stmt::Return(value) => {
            w.write("return ")?;
            print_expr(w, value)?;
            w.writeln(";")
        }
        Stmt::Throw(value) => {
            w.write("throw ")?;
            print_expr(w, value)?;
            w.writeln(";")
        }
        Stmt::Blank => w.blank_line(),
    }
}

fn print_expr<W: Write>(w: &mut CodeWriter<W>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Ident(name) => w.write(name),
        Expr::Str(value) => print_str(w, value),
        Expr::Member { object, property } => {
            print_expr(w, object)?;
            w.write(".")?;
            w.write(property)
        }
        Expr::Call { callee, args } => {
            print_expr(w, callee)?;
            print_args(w, args)
        }
        Expr::New { class, args } => {
            crate::cw_write!(w, "new {class}")?;
            print_args(w, args)
        }
        Expr::Binary { lhs, op, rhs } => {
            print_expr(w, lhs)?;
            crate::cw_write!(w, " {} ", op.as_str())?;
            print_expr(w, rhs)
        }
        Expr::Object(props) if props.is_empty() => w.write("{}"),
        Expr::Object(props) => {
            w.writeln("{")?;
            {
                let _indent = w.indent();
                w.write_separated_lines(props, ",", |w, (key, value)| {
                    crate::cw_write!(w, "{key}: ")?;
                    print_expr(w, value)
                })?;
                w.newline()?;
            }
            w.write("}")
        }
        Expr::Arrow { params, ret, body } => {
            w.write("(")?;
            w.write_separated(params, ", ", |w, Param { name, ty }| {
                crate::cw_write!(w, "{name}: {ty}")
            })?;
            w.write(")")?;
            if let Some(ret) = ret {
                crate::cw_write!(w, ": {ret}")?;
            }
            w.writeln(" => {")?;
            {
                let _indent = w.indent();
                print_stmts(w, body)?;
            }
            w.write("}")
        }
    }
}

fn print_args<W: Write>(w: &mut CodeWriter<W>, args: &[Expr]) -> fmt::Result {
    w.write("(")?;
    w.write_separated(args, ", ", print_expr)?;
    w.write(")")
}

fn print_str<W: Write>(w: &mut CodeWriter<W>, value: &str) -> fmt::Result {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    w.write(&quoted)
}
