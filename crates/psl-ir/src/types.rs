//! Variable type system for the shader IR.

use core::fmt;

/// A variable type in the shader IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    /// No value (function return type only)
    Void,
    /// Single float scalar
    Float1,
    /// 2-component float vector
    Float2,
    /// 3-component float vector
    Float3,
    /// 4-component float vector
    Float4,
    /// Single signed integer scalar
    Int1,
    /// 2-component integer vector
    Int2,
    /// 3-component integer vector
    Int3,
    /// 4-component integer vector
    Int4,
    /// Single boolean scalar
    Bool1,
    /// 2-component boolean vector
    Bool2,
    /// 3-component boolean vector
    Bool3,
    /// 4-component boolean vector
    Bool4,
    /// Packed 4-byte color, rendered as a float vector
    Byte4,
    /// 2x2 float matrix
    Mat2,
    /// 3x3 float matrix
    Mat3,
    /// 4x4 float matrix
    Mat4,
    /// 1D texture sampler
    Sampler1D,
    /// 2D texture sampler
    Sampler2D,
    /// 3D texture sampler
    Sampler3D,
    /// Cube map sampler
    SamplerCube,
}

/// The base kind of a [`VarType`], used to select textual type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    Void,
    Bool,
    Int,
    Float,
    Byte,
    Matrix,
    Sampler,
}

impl VarType {
    /// Get the element count of this type (1 for scalars and samplers).
    pub fn elements(&self) -> usize {
        match self {
            VarType::Void => 0,
            VarType::Float1 | VarType::Int1 | VarType::Bool1 => 1,
            VarType::Float2 | VarType::Int2 | VarType::Bool2 => 2,
            VarType::Float3 | VarType::Int3 | VarType::Bool3 => 3,
            VarType::Float4 | VarType::Int4 | VarType::Bool4 | VarType::Byte4 => 4,
            VarType::Mat2 => 4,
            VarType::Mat3 => 9,
            VarType::Mat4 => 16,
            VarType::Sampler1D
            | VarType::Sampler2D
            | VarType::Sampler3D
            | VarType::SamplerCube => 1,
        }
    }

    /// Get the base kind of this type.
    pub fn kind(&self) -> VarKind {
        match self {
            VarType::Void => VarKind::Void,
            VarType::Float1 | VarType::Float2 | VarType::Float3 | VarType::Float4 => VarKind::Float,
            VarType::Int1 | VarType::Int2 | VarType::Int3 | VarType::Int4 => VarKind::Int,
            VarType::Bool1 | VarType::Bool2 | VarType::Bool3 | VarType::Bool4 => VarKind::Bool,
            VarType::Byte4 => VarKind::Byte,
            VarType::Mat2 | VarType::Mat3 | VarType::Mat4 => VarKind::Matrix,
            VarType::Sampler1D
            | VarType::Sampler2D
            | VarType::Sampler3D
            | VarType::SamplerCube => VarKind::Sampler,
        }
    }

    /// Check if this is a sampler type.
    pub fn is_sampler(&self) -> bool {
        matches!(self.kind(), VarKind::Sampler)
    }

    /// Check if this is a matrix type.
    pub fn is_matrix(&self) -> bool {
        matches!(self.kind(), VarKind::Matrix)
    }

    /// Get the float vector type with the given element count.
    pub fn float_vec(elements: usize) -> VarType {
        match elements {
            1 => VarType::Float1,
            2 => VarType::Float2,
            3 => VarType::Float3,
            _ => VarType::Float4,
        }
    }
}

/// Precision qualifier for a variable declaration.
///
/// Only meaningful on ES targets; desktop GLSL renders no qualifier text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Default,
    Low,
    Medium,
    High,
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
