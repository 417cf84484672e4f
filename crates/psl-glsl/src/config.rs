//! Target-dialect configuration.
//!
//! `GlslConfig` is an immutable value constructed once per target and
//! reused across many shaders; every downstream decision (keywords,
//! precision text, function-name aliasing, `#version` emission) is a pure
//! function of it.

use psl_ir::Precision;

use crate::diag;

/// The flavor of GL context being targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVariant {
    /// OpenGL ES context.
    pub es: bool,
    /// WebGL context (treated as ES for language purposes).
    pub webgl: bool,
    /// Desktop core profile.
    pub core: bool,
    /// Context version, e.g. 300 or 330.
    pub version: u32,
}

impl GlVariant {
    /// A desktop GL variant at the given GLSL version.
    pub fn desktop(version: u32) -> Self {
        GlVariant { es: false, webgl: false, core: true, version }
    }

    /// An OpenGL ES variant at the given GLSL version.
    pub fn es(version: u32) -> Self {
        GlVariant { es: true, webgl: false, core: false, version }
    }

    /// A WebGL variant at the given GLSL version.
    pub fn webgl(version: u32) -> Self {
        GlVariant { es: false, webgl: true, core: false, version }
    }

    /// Whether this variant uses the ES shading-language rules.
    pub fn is_es(&self) -> bool {
        self.es || self.webgl
    }
}

/// Capability flags reported by the feature table of the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlFeatures {
    /// Uniform buffer objects are available.
    pub uniform_buffers: bool,
}

/// Immutable per-target configuration for GLSL generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlslConfig {
    pub variant: GlVariant,
    /// Requested GLSL version; may be overridden by the environment.
    pub glsl_version: u32,
    /// Compatibility mode: legacy keywords, no `#version` pragma.
    pub compatibility: bool,
    pub features: GlFeatures,
}

impl GlslConfig {
    pub fn new(variant: GlVariant, glsl_version: u32, compatibility: bool, features: GlFeatures) -> Self {
        GlslConfig { variant, glsl_version, compatibility, features }
    }

    /// Build a config honoring the forced-version environment toggle.
    /// The override is read once, here, so the value stays a pure input
    /// for the rest of its life.
    pub fn with_env_override(
        variant: GlVariant,
        glsl_version: u32,
        compatibility: bool,
        features: GlFeatures,
    ) -> Self {
        let glsl_version = diag::forced_glsl_version().unwrap_or(glsl_version);
        GlslConfig::new(variant, glsl_version, compatibility, features)
    }

    /// A legacy (compatibility) desktop config.
    pub fn legacy() -> Self {
        GlslConfig::new(GlVariant::desktop(110), 110, true, GlFeatures::default())
    }

    /// Whether the target speaks modern GLSL: ES at version 300+, or
    /// desktop outside compatibility mode.
    pub fn new_glsl_version(&self) -> bool {
        if self.variant.is_es() {
            self.glsl_version >= 300
        } else {
            !self.compatibility
        }
    }

    /// Whether uniforms group into `layout(std140)` blocks. Requires both
    /// modern GLSL and uniform-buffer support; false otherwise, with a
    /// silent fallback to flat uniforms.
    pub fn use_uniform_blocks(&self) -> bool {
        self.new_glsl_version() && self.features.uniform_buffers
    }

    /// Keyword for vertex-stage inputs.
    pub fn in_keyword(&self) -> &'static str {
        if self.new_glsl_version() {
            "in"
        } else {
            "attribute"
        }
    }

    /// Keyword for stage outputs.
    pub fn out_keyword(&self) -> &'static str {
        if self.new_glsl_version() {
            "out"
        } else {
            "varying"
        }
    }

    /// The fragment color sink: the `gl_FragColor` builtin on legacy GLSL,
    /// a synthesized output variable on modern GLSL (which then needs an
    /// `out` declaration).
    pub fn frag_color_name(&self) -> &'static str {
        if self.new_glsl_version() {
            "fragColor"
        } else {
            "gl_FragColor"
        }
    }

    /// Resolve a called function's printed name. Identity in compatibility
    /// mode; remaps legacy texture builtins to modern equivalents otherwise.
    pub fn function_name<'a>(&self, name: &'a str) -> &'a str {
        if self.compatibility {
            return name;
        }
        match name {
            "texture2D" | "textureCube" => "texture",
            "texture2DLod" | "textureCubeLod" => "textureLod",
            _ => name,
        }
    }

    /// Precision-qualifier text for a declaration, including the trailing
    /// space. Empty unless the variant is ES.
    pub fn precision_text(&self, precision: Precision) -> &'static str {
        if !self.variant.is_es() {
            return "";
        }
        match precision {
            Precision::Default => "",
            Precision::Low => "lowp ",
            Precision::Medium => "mediump ",
            Precision::High => "highp ",
        }
    }

    /// The `#version` pragma, which must be the first output line, or
    /// `None` in compatibility mode.
    pub fn version_pragma(&self) -> Option<String> {
        if self.compatibility {
            return None;
        }
        if self.variant.is_es() {
            Some(format!("#version {} es", self.glsl_version))
        } else {
            Some(format!("#version {}", self.glsl_version))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modern_desktop() -> GlslConfig {
        GlslConfig { variant: GlVariant::desktop(330), glsl_version: 330, compatibility: false, features: GlFeatures::default() }
    }

    fn modern_es() -> GlslConfig {
        GlslConfig { variant: GlVariant::es(300), glsl_version: 300, compatibility: false, features: GlFeatures::default() }
    }

    fn legacy_es() -> GlslConfig {
        GlslConfig { variant: GlVariant::es(100), glsl_version: 100, compatibility: true, features: GlFeatures::default() }
    }

    #[test]
    fn test_new_glsl_version() {
        assert!(modern_desktop().new_glsl_version());
        assert!(modern_es().new_glsl_version());
        assert!(!legacy_es().new_glsl_version());
        assert!(!GlslConfig::legacy().new_glsl_version());
    }

    #[test]
    fn test_uniform_blocks_require_feature_and_modern() {
        let mut config = modern_desktop();
        assert!(!config.use_uniform_blocks());
        config.features.uniform_buffers = true;
        assert!(config.use_uniform_blocks());
        let mut legacy = GlslConfig::legacy();
        legacy.features.uniform_buffers = true;
        assert!(!legacy.use_uniform_blocks());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(modern_desktop().in_keyword(), "in");
        assert_eq!(modern_desktop().out_keyword(), "out");
        assert_eq!(GlslConfig::legacy().in_keyword(), "attribute");
        assert_eq!(GlslConfig::legacy().out_keyword(), "varying");
    }

    #[test]
    fn test_frag_color_name() {
        assert_eq!(GlslConfig::legacy().frag_color_name(), "gl_FragColor");
        assert_eq!(modern_desktop().frag_color_name(), "fragColor");
        assert_eq!(modern_es().frag_color_name(), "fragColor");
    }

    #[test]
    fn test_function_name_aliasing() {
        assert_eq!(GlslConfig::legacy().function_name("texture2D"), "texture2D");
        assert_eq!(modern_desktop().function_name("texture2D"), "texture");
        assert_eq!(modern_desktop().function_name("textureCube"), "texture");
        assert_eq!(modern_desktop().function_name("texture2DLod"), "textureLod");
        assert_eq!(modern_desktop().function_name("normalize"), "normalize");
    }

    #[test]
    fn test_precision_text() {
        use psl_ir::Precision;
        assert_eq!(modern_desktop().precision_text(Precision::High), "");
        assert_eq!(legacy_es().precision_text(Precision::Low), "lowp ");
        assert_eq!(legacy_es().precision_text(Precision::Medium), "mediump ");
        assert_eq!(legacy_es().precision_text(Precision::High), "highp ");
        assert_eq!(legacy_es().precision_text(Precision::Default), "");
    }

    #[test]
    fn test_version_pragma() {
        assert_eq!(GlslConfig::legacy().version_pragma(), None);
        assert_eq!(modern_desktop().version_pragma(), Some("#version 330".to_string()));
        assert_eq!(modern_es().version_pragma(), Some("#version 300 es".to_string()));
    }
}
