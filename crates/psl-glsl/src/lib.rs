//! GLSL code-generation backend for the PSL shader IR.
//!
//! This crate lowers a platform-independent [`psl_ir::Shader`] to a
//! syntactically valid GLSL translation unit for a requested target
//! dialect (desktop GL, OpenGL ES, WebGL; core vs. compatibility; with
//! or without uniform-buffer support). Generation runs three passes:
//! a global-reference pass that determines which declarations are live,
//! a lowering pass that renders statements and expressions to text, and
//! an assembly pass that emits the translation unit in the declaration
//! order GLSL requires.

mod body;
mod config;
mod diag;
mod error;
mod generate;
mod ordered_set;
mod refs;

pub use body::{type_name, BodyGenerator};
pub use config::{GlFeatures, GlVariant, GlslConfig};
pub use diag::{DEBUG_ENV, FORCE_GLSL_VERSION_ENV};
pub use error::{GlslGenError, GlslGenResult};
pub use generate::{GeneratedShader, GlslGenerator};
pub use refs::GlobalRefs;
