//! Top-level translation-unit assembly.
//!
//! Emits one complete GLSL source string for a shader stage, in the fixed
//! declaration order GLSL requires: version pragma, extension pragma and
//! ES precision guard, attributes, samplers, uniforms (flat or grouped
//! into std140 blocks), varyings, then function bodies with `main` last.

use psl_ir::{FuncDecl, Shader, ShaderStage, VarType, Variable, VariableKind};

use crate::body::{temp_declaration, type_name, BodyGenerator};
use crate::config::GlslConfig;
use crate::diag;
use crate::error::GlslGenResult;
use crate::ordered_set::OrderedSet;
use crate::refs::GlobalRefs;

/// The product of one generation call: assembled source plus the ordered
/// declaration metadata the caller binds GPU state against, so attribute
/// and uniform locations can be queried without re-parsing the text.
#[derive(Debug, Clone)]
pub struct GeneratedShader {
    pub source: String,
    pub attributes: Vec<Variable>,
    pub uniforms: Vec<Variable>,
    pub varyings: Vec<Variable>,
}

/// GLSL generator for one target dialect.
///
/// The generator itself holds only the config; all per-invocation state
/// lives inside [`GlslGenerator::generate`], so one instance may be called
/// repeatedly, each call independent of the last.
pub struct GlslGenerator<'a> {
    config: &'a GlslConfig,
}

impl<'a> GlslGenerator<'a> {
    pub fn new(config: &'a GlslConfig) -> Self {
        GlslGenerator { config }
    }

    /// Generate the translation unit for `shader`.
    pub fn generate(&self, shader: &Shader) -> GlslGenResult<GeneratedShader> {
        let config = self.config;
        let mut out = String::new();

        // The version pragma must be the very first line when present.
        if let Some(pragma) = config.version_pragma() {
            out.push_str(&pragma);
            out.push('\n');
        }

        // Always emitted, independent of dialect: the same source stays
        // compilable when later fed to an ES context.
        out.push_str("#extension GL_OES_standard_derivatives : enable\n");
        out.push_str("#ifdef GL_ES\n");
        out.push_str("precision mediump float;\n");
        out.push_str("#endif\n");

        let refs = GlobalRefs::collect(shader);

        // On modern GLSL the fragment color sink is an ordinary out
        // variable and needs a declaration of its own.
        let mut varyings = refs.varyings.to_vec();
        if shader.stage == ShaderStage::Fragment && config.new_glsl_version() {
            varyings.push(Variable::varying(config.frag_color_name(), VarType::Float4));
        }
        varyings.sort_by(|a, b| a.name.cmp(&b.name));
        varyings.retain(|v| !matches!(v.kind, VariableKind::Output));

        for attribute in &refs.attributes {
            out.push_str(&format!(
                "{} {}{} {}{};\n",
                config.in_keyword(),
                config.precision_text(attribute.precision),
                type_name(attribute.ty)?,
                attribute.name,
                array_suffix(attribute),
            ));
        }

        for sampler in &refs.samplers {
            out.push_str(&format!(
                "uniform {}{} {}{};\n",
                config.precision_text(sampler.precision),
                type_name(sampler.ty)?,
                sampler.name,
                array_suffix(sampler),
            ));
        }

        if config.use_uniform_blocks() {
            for block_name in &refs.blocks {
                out.push_str(&format!("layout(std140) uniform {} {{\n", block_name));
                for uniform in &refs.uniforms {
                    if uniform.block_name() == Some(block_name.as_str()) {
                        out.push_str(&format!(
                            "\t{}{} {}{};\n",
                            config.precision_text(uniform.precision),
                            type_name(uniform.ty)?,
                            uniform.name,
                            array_suffix(uniform),
                        ));
                    }
                }
                out.push_str("};\n");
            }
            for uniform in &refs.uniforms {
                if uniform.block_name().is_none() {
                    out.push_str(&flat_uniform(config, uniform)?);
                }
            }
        } else {
            for uniform in &refs.uniforms {
                out.push_str(&flat_uniform(config, uniform)?);
            }
        }

        for varying in &varyings {
            let direction = self.varying_keyword(shader.stage, varying);
            out.push_str(&format!(
                "{} {}{} {}{};\n",
                direction,
                config.precision_text(varying.precision),
                type_name(varying.ty)?,
                varying.name,
                array_suffix(varying),
            ));
        }

        for func in ordered_functions(shader, &refs) {
            self.emit_function(&mut out, shader.stage, func)?;
        }
        let main = FuncDecl::new("main", VarType::Void, vec![], shader.body.clone());
        self.emit_function(&mut out, shader.stage, &main)?;

        if diag::debug_enabled() {
            diag::dump_source(shader.stage, config, &out);
        }

        Ok(GeneratedShader {
            source: out,
            attributes: refs.attributes.to_vec(),
            uniforms: refs.samplers.iter().chain(refs.uniforms.iter()).cloned().collect(),
            varyings,
        })
    }

    fn varying_keyword(&self, stage: ShaderStage, varying: &Variable) -> &'static str {
        match stage {
            ShaderStage::Vertex => self.config.out_keyword(),
            ShaderStage::Fragment => {
                if !self.config.new_glsl_version() {
                    // Legacy GLSL spells both directions "varying".
                    self.config.out_keyword()
                } else if varying.name == self.config.frag_color_name() {
                    "out"
                } else {
                    "in"
                }
            }
        }
    }

    fn emit_function(&self, out: &mut String, stage: ShaderStage, func: &FuncDecl) -> GlslGenResult<()> {
        let ret = if func.ret == VarType::Void { "void" } else { type_name(func.ret)? };
        let mut params = Vec::with_capacity(func.params.len());
        for param in &func.params {
            params.push(format!("{} {}", type_name(param.ty)?, param.name));
        }
        out.push_str(&format!("{} {}({}) {{\n", ret, func.name, params.join(", ")));

        let mut body = BodyGenerator::new(stage, self.config);
        body.generate(&func.body)?;
        for temp in body.temps() {
            out.push_str(&temp_declaration(self.config, temp)?);
            out.push('\n');
        }
        out.push_str(body.body());
        out.push_str("}\n");
        Ok(())
    }
}

fn flat_uniform(config: &GlslConfig, uniform: &Variable) -> GlslGenResult<String> {
    Ok(format!(
        "uniform {}{} {}{};\n",
        config.precision_text(uniform.precision),
        type_name(uniform.ty)?,
        uniform.name,
        array_suffix(uniform),
    ))
}

fn array_suffix(variable: &Variable) -> String {
    if variable.is_array() {
        format!("[{}]", variable.array_count)
    } else {
        String::new()
    }
}

/// Emission order for custom functions: the referenced set, reversed and
/// deduplicated by name so the most recently referenced definition wins,
/// every one textually before `main`.
fn ordered_functions<'s>(shader: &'s Shader, refs: &GlobalRefs) -> Vec<&'s FuncDecl> {
    let mut picked: OrderedSet<&'s FuncDecl> = OrderedSet::new();
    for name in refs.functions.iter().rev() {
        if let Some(func) = shader.find_function(name) {
            picked.insert(name, func);
        }
    }
    picked.into_vec()
}
