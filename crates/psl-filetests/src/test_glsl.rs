//! GLSL generation subtests: whole translation units matched against
//! filecheck directive files.

#![allow(dead_code)]

use psl_glsl::{GlFeatures, GlVariant, GlslConfig, GlslGenerator};
use psl_ir::{
    call, float_lit, op, ret, set, var, vec, BinOp, FuncDecl, Shader, ShaderStage, UniformBlock,
    VarType, Variable,
};

use crate::filecheck::match_filecheck;

/// Generate `shader` under `config` and match the output against the
/// directives in `check_text`.
fn run_glsl_test(shader: &Shader, config: &GlslConfig, check_text: &str) {
    let result = GlslGenerator::new(config).generate(shader).expect("generation failed");
    if let Err(explain) = match_filecheck(&result.source, check_text) {
        panic!("{}\n\nGenerated source:\n{}", explain, result.source);
    }
}

fn textured_fragment() -> Shader {
    let tex = Variable::sampler("u_texture", VarType::Sampler2D, 0);
    let tint = Variable::uniform("u_tint", VarType::Float4);
    let uv = Variable::varying("v_uv", VarType::Float2);
    Shader::new(
        ShaderStage::Fragment,
        set(
            var(Variable::output()),
            op(var(tint), BinOp::Mul, call("texture2D", [var(tex), var(uv)])),
        ),
    )
}

fn camera_vertex() -> Shader {
    let block = UniformBlock::new("Camera", 0).uniform("viewProj", VarType::Mat4);
    let view_proj = block.uniforms[0].clone();
    let position = Variable::attribute("position", VarType::Float3, 0);
    Shader::new(
        ShaderStage::Vertex,
        set(
            var(Variable::output()),
            op(var(view_proj), BinOp::Mul, vec(VarType::Float4, [var(position), float_lit(1.0)])),
        ),
    )
}

fn nested_function_fragment() -> Shader {
    let inner = FuncDecl::new("inner", VarType::Float1, vec![], ret(float_lit(0.25)));
    let outer = FuncDecl::new(
        "outer",
        VarType::Float1,
        vec![],
        ret(op(call("inner", []), BinOp::Add, float_lit(0.5))),
    );
    Shader::with_functions(
        ShaderStage::Fragment,
        set(
            var(Variable::output()),
            vec(
                VarType::Float4,
                [call("outer", []), float_lit(0.0), float_lit(0.0), float_lit(1.0)],
            ),
        ),
        vec![inner, outer],
    )
}

fn legacy() -> GlslConfig {
    GlslConfig::new(GlVariant::desktop(110), 110, true, GlFeatures::default())
}

fn es300() -> GlslConfig {
    GlslConfig::new(GlVariant::es(300), 300, false, GlFeatures::default())
}

fn desktop_ubo() -> GlslConfig {
    GlslConfig::new(GlVariant::desktop(330), 330, false, GlFeatures { uniform_buffers: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_legacy() {
        let content = include_str!("../filetests/glsl/fragment_legacy.chk");
        run_glsl_test(&textured_fragment(), &legacy(), content);
    }

    #[test]
    fn test_fragment_es300() {
        let content = include_str!("../filetests/glsl/fragment_es300.chk");
        run_glsl_test(&textured_fragment(), &es300(), content);
    }

    #[test]
    fn test_vertex_uniform_block() {
        let content = include_str!("../filetests/glsl/vertex_ubo.chk");
        run_glsl_test(&camera_vertex(), &desktop_ubo(), content);
    }

    #[test]
    fn test_function_definition_order() {
        let content = include_str!("../filetests/glsl/function_order.chk");
        run_glsl_test(&nested_function_fragment(), &legacy(), content);
    }
}
