//! File-based tests for generated GLSL.
//!
//! Each check file under `filetests/glsl/` holds filecheck directives
//! (`check:`, `nextln:`, `sameln:`) that are matched against a complete
//! generated translation unit, pinning down declaration order and exact
//! statement text per dialect.

pub mod filecheck;

mod test_glsl;

pub use filecheck::{build_filechecker, match_filecheck};
