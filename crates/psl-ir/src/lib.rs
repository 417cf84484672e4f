//! Portable shader language intermediate representation.
//!
//! This crate defines the typed node model for platform-independent
//! vertex/fragment shaders: variable types and kinds, statement and
//! expression trees, custom function declarations, and the `Shader`
//! value handed to a code-generation backend. Nodes are constructed
//! once by a shader-authoring layer and are immutable during code
//! generation.

#![no_std]

extern crate alloc;

mod builder;
mod func;
mod program;
mod types;
mod var;

pub use builder::{
    arr, bool_lit, call, float_lit, float_vec, for_simple, if_else, if_then, int_lit, op, ret,
    ret_void, set, stms, swizzle, ternary, unop, var, vec,
};
pub use func::{FuncDecl, FuncParam, Shader, ShaderStage};
pub use program::{BinOp, Expr, Stm, TargetLang, UnOp};
pub use types::{Precision, VarKind, VarType};
pub use var::{UniformBlock, Variable, VariableKind};
