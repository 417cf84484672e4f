//! Error types for GLSL generation.

/// Result type for GLSL generation operations.
pub type GlslGenResult<T> = Result<T, GlslGenError>;

/// Error that can occur during GLSL generation.
///
/// Feature-capability mismatches (uniform blocks requested on a target
/// without buffer support) are not errors; they fall back deterministically
/// to flat uniforms. Malformed trees are an upstream precondition and are
/// not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlslGenError {
    /// A type reached text rendering with no known mapping. Indicates an
    /// IR/generator mismatch; there is no fallback.
    UnsupportedType(String),
}

impl GlslGenError {
    /// Create a new unsupported-type error.
    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        GlslGenError::UnsupportedType(msg.into())
    }
}

impl std::fmt::Display for GlslGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlslGenError::UnsupportedType(msg) => write!(f, "Unsupported type: {}", msg),
        }
    }
}

impl std::error::Error for GlslGenError {}
