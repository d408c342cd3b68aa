//! The slice of TypeScript syntax the client template needs.
//!
//! The template builds these nodes and [`super::printer`] turns them into text.
//! Nodes carry no layout; blank lines and indentation are the printer's job,
//! except for [`Stmt::Blank`] inside function bodies.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `// text`
    Comment(String),
    /// `import <binding> from '<from>';`, binding verbatim, braces included.
    Import {
        binding: String,
        from: String,
    },
    /// `[export ]const <name> = <value>;`
    Const {
        export: bool,
        name: String,
        value: Expr,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Const { name: String, value: Expr },
    If { cond: Expr, then: Vec<Stmt> },
    Return(Expr),
    Throw(Expr),
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Identifier or dotted reference, printed as is.
    Ident(String),
    /// Single-quoted string literal.
    Str(String),
    Member {
        object: Box<Expr>,
        property: String,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    New {
        class: String,
        args: Vec<Expr>,
    },
    Binary {
        lhs: Box<Expr>,
        op: BinOp,
        rhs: Box<Expr>,
    },
    /// Multi-line object literal, properties in insertion order.
    Object(Vec<(String, Expr)>),
    Arrow {
        params: Vec<Param>,
        ret: Option<String>,
        body: Vec<Stmt>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    StrictEq,
    Add,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::StrictEq => "===",
            BinOp::Add => "+",
        }
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn member(self, property: impl Into<String>) -> Self {
        Expr::Member {
            object: Box::new(self),
            property: property.into(),
        }
    }

    pub fn call(self, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(self),
            args,
        }
    }

    pub fn binary(self, op: BinOp, rhs: Expr) -> Self {
        Expr::Binary {
            lhs: Box::new(self),
            op,
            rhs: Box::new(rhs),
        }
    }
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
