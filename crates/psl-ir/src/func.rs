//! Function declarations and the shader value.

use alloc::string::String;
use alloc::vec::Vec;

use crate::program::Stm;
use crate::types::VarType;

/// A parameter of a custom function.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncParam {
    pub name: String,
    pub ty: VarType,
}

impl FuncParam {
    pub fn new(name: impl Into<String>, ty: VarType) -> Self {
        FuncParam { name: name.into(), ty }
    }
}

/// A function declaration: name, return type, parameters and body.
///
/// The synthesized `main` is itself a `FuncDecl` with no parameters and a
/// void return whose body is the shader's root statement tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub ret: VarType,
    pub params: Vec<FuncParam>,
    pub body: Stm,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>, ret: VarType, params: Vec<FuncParam>, body: Stm) -> Self {
        FuncDecl { name: name.into(), ret, params, body }
    }
}

/// Shader pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// A complete shader for one stage: the root statement tree plus an
/// ordered table of custom functions it may call.
#[derive(Debug, Clone, PartialEq)]
pub struct Shader {
    pub stage: ShaderStage,
    pub body: Stm,
    pub functions: Vec<FuncDecl>,
}

impl Shader {
    pub fn new(stage: ShaderStage, body: Stm) -> Self {
        Shader { stage, body, functions: Vec::new() }
    }

    pub fn with_functions(stage: ShaderStage, body: Stm, functions: Vec<FuncDecl>) -> Self {
        Shader { stage, body, functions }
    }

    /// Find a custom function by name. Later declarations shadow earlier
    /// ones, matching declaration-table lookup order.
    pub fn find_function(&self, name: &str) -> Option<&FuncDecl> {
        self.functions.iter().rev().find(|f| f.name == name)
    }
}
