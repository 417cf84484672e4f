//! Construction helpers for statement and expression trees.
//!
//! These keep authoring code and tests free of `Box`/enum payload noise:
//!
//! ```
//! use psl_ir::{set, var, vec, float_lit, Variable, VarType};
//!
//! let stm = set(
//!     var(Variable::output()),
//!     vec(VarType::Float4, [float_lit(1.0), float_lit(0.0), float_lit(0.0), float_lit(1.0)]),
//! );
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::program::{BinOp, Expr, Stm, UnOp};
use crate::types::VarType;
use crate::var::Variable;

/// Sequence of statements.
pub fn stms(body: impl IntoIterator<Item = Stm>) -> Stm {
    Stm::Stms(body.into_iter().collect())
}

/// Assignment statement.
pub fn set(target: Expr, value: Expr) -> Stm {
    Stm::Set { target, value }
}

/// Conditional without an else branch.
pub fn if_then(cond: Expr, body: Stm) -> Stm {
    Stm::If { cond, body: Box::new(body), else_body: None }
}

/// Conditional with an else branch.
pub fn if_else(cond: Expr, body: Stm, else_body: Stm) -> Stm {
    Stm::If { cond, body: Box::new(body), else_body: Some(Box::new(else_body)) }
}

/// Counting loop over `[min, max)`.
pub fn for_simple(loop_var: Variable, min: Expr, max: Expr, body: Stm) -> Stm {
    Stm::ForSimple { var: loop_var, min, max, body: Box::new(body) }
}

/// Return with a value.
pub fn ret(value: Expr) -> Stm {
    Stm::Return(Some(value))
}

/// Return without a value.
pub fn ret_void() -> Stm {
    Stm::Return(None)
}

/// Component constructor expression.
pub fn vec(ty: VarType, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Vector { ty, args: args.into_iter().collect() }
}

/// Binary operator application.
pub fn op(left: Expr, operator: BinOp, right: Expr) -> Expr {
    Expr::Binop { op: operator, left: Box::new(left), right: Box::new(right) }
}

/// Unary operator application.
pub fn unop(operator: UnOp, expr: Expr) -> Expr {
    Expr::Unop { op: operator, expr: Box::new(expr) }
}

/// Conditional expression.
pub fn ternary(cond: Expr, if_true: Expr, if_false: Expr) -> Expr {
    Expr::Ternary { cond: Box::new(cond), if_true: Box::new(if_true), if_false: Box::new(if_false) }
}

/// Function call expression.
pub fn call(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Call { name: name.into(), args: args.into_iter().collect() }
}

/// Component selection expression.
pub fn swizzle(base: Expr, components: impl Into<String>) -> Expr {
    Expr::Swizzle { base: Box::new(base), swizzle: components.into() }
}

/// Array element access expression.
pub fn arr(base: Expr, index: Expr) -> Expr {
    Expr::ArrayAccess { base: Box::new(base), index: Box::new(index) }
}

pub fn int_lit(value: i32) -> Expr {
    Expr::IntLit(value)
}

pub fn float_lit(value: f64) -> Expr {
    Expr::FloatLit(value)
}

pub fn bool_lit(value: bool) -> Expr {
    Expr::BoolLit(value)
}

/// Variable reference expression.
pub fn var(variable: Variable) -> Expr {
    Expr::Var(variable)
}

/// Convenience for a vector of float literals.
pub fn float_vec(ty: VarType, values: impl IntoIterator<Item = f64>) -> Expr {
    let args: Vec<Expr> = values.into_iter().map(Expr::FloatLit).collect();
    Expr::Vector { ty, args }
}
