//! Statement and expression trees.
//!
//! The trees are acyclic by construction (`Box`/`Vec` ownership, no
//! back-edges) and immutable during code generation.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::types::VarType;
use crate::var::Variable;

/// Target language for `Raw` escape-hatch fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLang {
    Glsl,
}

/// A statement in a shader function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stm {
    /// Statement sequence.
    Stms(Vec<Stm>),
    /// Assignment.
    Set { target: Expr, value: Expr },
    /// Conditional with optional else branch.
    If { cond: Expr, body: Box<Stm>, else_body: Option<Box<Stm>> },
    /// Canonical counting loop: `for (T var = min; var < max; var++)`.
    ForSimple { var: Variable, min: Expr, max: Expr, body: Box<Stm> },
    /// Return, with optional value.
    Return(Option<Expr>),
    /// Fragment discard.
    Discard,
    Break,
    Continue,
    /// Verbatim target-language source fragment.
    Raw { target: TargetLang, code: String },
}

/// An expression in a shader function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Component constructor, e.g. `vec4(a, b, c, d)`.
    Vector { ty: VarType, args: Vec<Expr> },
    /// Unary operator application.
    Unop { op: UnOp, expr: Box<Expr> },
    /// Binary operator application.
    Binop { op: BinOp, left: Box<Expr>, right: Box<Expr> },
    /// Conditional expression.
    Ternary { cond: Box<Expr>, if_true: Box<Expr>, if_false: Box<Expr> },
    /// Built-in or custom function call.
    Call { name: String, args: Vec<Expr> },
    /// Component selection, e.g. `v.xyz`.
    Swizzle { base: Box<Expr>, swizzle: String },
    /// Array element access.
    ArrayAccess { base: Box<Expr>, index: Box<Expr> },
    IntLit(i32),
    FloatLit(f64),
    BoolLit(bool),
    /// Variable reference.
    Var(Variable),
    /// Verbatim target-language expression fragment.
    Raw { target: TargetLang, code: String },
}

/// Binary operators, displayed as their GLSL token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BinOp::Add => "+",
                BinOp::Sub => "-",
                BinOp::Mul => "*",
                BinOp::Div => "/",
                BinOp::Rem => "%",
                BinOp::Eq => "==",
                BinOp::Ne => "!=",
                BinOp::Lt => "<",
                BinOp::Le => "<=",
                BinOp::Gt => ">",
                BinOp::Ge => ">=",
                BinOp::And => "&&",
                BinOp::Or => "||",
            }
        )
    }
}

/// Unary operators, displayed as their GLSL token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnOp::Neg => write!(f, "-"),
            UnOp::Not => write!(f, "!"),
        }
    }
}
