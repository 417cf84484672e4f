//! Environment toggles and diagnostic output.
//!
//! Two host-process toggles influence generation: one forces a specific
//! numeric GLSL version over the config default, one dumps each generated
//! translation unit to stderr. Dumping never alters the produced result.

use psl_ir::ShaderStage;

use crate::config::GlslConfig;

/// Environment variable forcing a numeric GLSL version.
pub const FORCE_GLSL_VERSION_ENV: &str = "PSL_FORCE_GLSL_VERSION";

/// Environment variable enabling verbose dumps of generated source.
pub const DEBUG_ENV: &str = "PSL_GLSL_DEBUG";

/// Read the forced GLSL version, if set to a valid number.
pub fn forced_glsl_version() -> Option<u32> {
    std::env::var(FORCE_GLSL_VERSION_ENV).ok()?.trim().parse().ok()
}

/// Check whether verbose source dumps are enabled.
pub fn debug_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV).ok().as_deref(), Some("1") | Some("true"))
}

/// Dump a generated translation unit with its dialect summary to stderr.
pub fn dump_source(stage: ShaderStage, config: &GlslConfig, source: &str) {
    let stage_name = match stage {
        ShaderStage::Vertex => "vertex",
        ShaderStage::Fragment => "fragment",
    };
    eprintln!(
        "psl-glsl: {} shader (glsl {}, es={}, compatibility={}, uniform blocks={})",
        stage_name,
        config.glsl_version,
        config.variant.is_es(),
        config.compatibility,
        config.use_uniform_blocks(),
    );
    for line in source.lines() {
        eprintln!("  {}", line);
    }
}
