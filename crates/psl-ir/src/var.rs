//! Variables and uniform blocks.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Precision, VarType};

/// What role a variable plays in the shader pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableKind {
    /// Per-vertex input with a fixed binding slot.
    Attribute { location: u32 },
    /// Inter-stage value, written by the vertex stage and interpolated.
    Varying,
    /// The special position/color sink (`gl_Position` / `gl_FragColor`).
    Output,
    /// Draw-call constant, optionally owned by a uniform block.
    Uniform { block: Option<String> },
    /// Texture binding.
    Sampler { unit: u32 },
    /// Function-local scratch value introduced during lowering.
    Temp { id: u32 },
    /// Reference to a custom-function parameter.
    Param,
}

/// A variable in the shader IR.
///
/// Variables are deduplicated by name wherever reference collections are
/// built; two variables with the same name are the same declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub ty: VarType,
    pub precision: Precision,
    /// Array element count, 1 for scalars.
    pub array_count: u32,
    pub kind: VariableKind,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: VarType, kind: VariableKind) -> Self {
        Variable { name: name.into(), ty, precision: Precision::Default, array_count: 1, kind }
    }

    /// Create an attribute variable bound to the given slot.
    pub fn attribute(name: impl Into<String>, ty: VarType, location: u32) -> Self {
        Variable::new(name, ty, VariableKind::Attribute { location })
    }

    /// Create a varying variable.
    pub fn varying(name: impl Into<String>, ty: VarType) -> Self {
        Variable::new(name, ty, VariableKind::Varying)
    }

    /// Create the special output variable (position or fragment color).
    pub fn output() -> Self {
        Variable::new("out", VarType::Float4, VariableKind::Output)
    }

    /// Create a free-standing uniform variable.
    pub fn uniform(name: impl Into<String>, ty: VarType) -> Self {
        Variable::new(name, ty, VariableKind::Uniform { block: None })
    }

    /// Create a uniform variable owned by a named block.
    pub fn block_uniform(name: impl Into<String>, ty: VarType, block: impl Into<String>) -> Self {
        Variable::new(name, ty, VariableKind::Uniform { block: Some(block.into()) })
    }

    /// Create a sampler uniform bound to a texture unit.
    pub fn sampler(name: impl Into<String>, ty: VarType, unit: u32) -> Self {
        Variable::new(name, ty, VariableKind::Sampler { unit })
    }

    /// Create a reference to a custom-function parameter.
    pub fn param(name: impl Into<String>, ty: VarType) -> Self {
        Variable::new(name, ty, VariableKind::Param)
    }

    /// Create a function-local temporary.
    pub fn temp(id: u32, ty: VarType) -> Self {
        Variable::new(alloc::format!("temp{}", id), ty, VariableKind::Temp { id })
    }

    /// Set the precision qualifier.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the array element count.
    pub fn with_array_count(mut self, count: u32) -> Self {
        self.array_count = count;
        self
    }

    /// Check whether this variable is an array (count > 1).
    pub fn is_array(&self) -> bool {
        self.array_count > 1
    }

    /// The owning uniform-block name, if any.
    pub fn block_name(&self) -> Option<&str> {
        match &self.kind {
            VariableKind::Uniform { block: Some(name) } => Some(name),
            _ => None,
        }
    }
}

/// A named group of uniforms, emitted as a single `layout(std140)` block
/// on dialects with uniform-buffer support and as flat uniforms elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformBlock {
    pub name: String,
    pub uniforms: Vec<Variable>,
    pub binding: u32,
}

impl UniformBlock {
    pub fn new(name: impl Into<String>, binding: u32) -> Self {
        UniformBlock { name: name.into(), uniforms: Vec::new(), binding }
    }

    /// Add a uniform member, tagging it with this block's name.
    pub fn uniform(mut self, name: impl Into<String>, ty: VarType) -> Self {
        let member = Variable::block_uniform(name, ty, self.name.clone());
        self.uniforms.push(member);
        self
    }
}
