//! Uniform, sampler and uniform-block emission tests.

use gen_test::{legacy, legacy_es, modern_desktop, modern_desktop_ubo, GenTest};
use psl_ir::{
    arr, call, float_lit, op, set, stms, var, BinOp, Precision, Shader, ShaderStage, UniformBlock,
    VarType, Variable,
};

fn camera_block() -> UniformBlock {
    UniformBlock::new("Camera", 0).uniform("viewProj", VarType::Mat4).uniform("eye", VarType::Float3)
}

fn camera_shader() -> Shader {
    let block = camera_block();
    let view_proj = block.uniforms[0].clone();
    let position = Variable::attribute("position", VarType::Float3, 0);
    Shader::new(
        ShaderStage::Vertex,
        set(
            var(Variable::output()),
            op(
                var(view_proj),
                BinOp::Mul,
                psl_ir::vec(VarType::Float4, [var(position), float_lit(1.0)]),
            ),
        ),
    )
}

#[test]
fn test_uniform_block_emitted_on_supporting_target() {
    let test = GenTest::generate(&camera_shader(), &modern_desktop_ubo());
    test.assert_contains("layout(std140) uniform Camera {");
    test.assert_contains("mat4 viewProj;");
    test.assert_contains("};");
    test.assert_not_contains("uniform mat4 viewProj;");
    // The block member never referenced stays out of the block body.
    test.assert_not_contains("eye");
}

#[test]
fn test_uniform_block_falls_back_to_flat_uniforms() {
    // Same shader, no uniform-buffer support: silent deterministic
    // fallback, not an error.
    let test = GenTest::generate(&camera_shader(), &modern_desktop());
    test.assert_not_contains("layout(std140)");
    test.assert_contains("uniform mat4 viewProj;");
}

#[test]
fn test_legacy_never_uses_blocks_even_with_feature() {
    let config = psl_glsl::GlslConfig::new(
        psl_glsl::GlVariant::desktop(110),
        110,
        true,
        psl_glsl::GlFeatures { uniform_buffers: true },
    );
    let test = GenTest::generate(&camera_shader(), &config);
    test.assert_not_contains("layout(std140)");
    test.assert_contains("uniform mat4 viewProj;");
}

#[test]
fn test_sampler_declared_before_other_uniforms() {
    let tex = Variable::sampler("u_texture", VarType::Sampler2D, 0);
    let tint = Variable::uniform("u_tint", VarType::Float4);
    let uv = Variable::varying("v_uv", VarType::Float2);
    let shader = Shader::new(
        ShaderStage::Fragment,
        set(
            var(Variable::output()),
            op(var(tint.clone()), BinOp::Mul, call("texture2D", [var(tex), var(uv)])),
        ),
    );
    let test = GenTest::generate(&shader, &legacy());
    let sampler_at = test.source().find("uniform sampler2D u_texture;").unwrap();
    let tint_at = test.source().find("uniform vec4 u_tint;").unwrap();
    assert!(sampler_at < tint_at, "samplers precede uniforms:\n{}", test.source());
    let names: Vec<_> = test.result.uniforms.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["u_texture", "u_tint"]);
}

#[test]
fn test_uniform_array_suffix() {
    let bones = Variable::uniform("u_bones", VarType::Mat4).with_array_count(32);
    let index = Variable::attribute("boneIndex", VarType::Int1, 1);
    let position = Variable::attribute("position", VarType::Float3, 0);
    let shader = Shader::new(
        ShaderStage::Vertex,
        set(
            var(Variable::output()),
            op(
                arr(var(bones), var(index)),
                BinOp::Mul,
                psl_ir::vec(VarType::Float4, [var(position), float_lit(1.0)]),
            ),
        ),
    );
    let test = GenTest::generate(&shader, &legacy());
    test.assert_contains("uniform mat4 u_bones[32];");
    test.assert_contains("u_bones[boneIndex]");
}

#[test]
fn test_precision_qualifiers_on_es_only() {
    let tint = Variable::uniform("u_tint", VarType::Float4).with_precision(Precision::Low);
    let shader = Shader::new(
        ShaderStage::Fragment,
        set(var(Variable::output()), var(tint)),
    );
    let es = GenTest::generate(&shader, &legacy_es());
    es.assert_contains("uniform lowp vec4 u_tint;");
    let desktop = GenTest::generate(&shader, &legacy());
    desktop.assert_contains("uniform vec4 u_tint;");
    desktop.assert_not_contains("lowp");
}

#[test]
fn test_minimality_unreferenced_uniform_absent() {
    let used = Variable::uniform("u_used", VarType::Float1);
    let shader = Shader::new(
        ShaderStage::Fragment,
        stms([set(
            var(Variable::output()),
            psl_ir::vec(
                VarType::Float4,
                [var(used.clone()), float_lit(0.0), float_lit(0.0), float_lit(1.0)],
            ),
        )]),
    );
    let test = GenTest::generate(&shader, &legacy());
    test.assert_contains("uniform float u_used;");
    test.assert_not_contains("u_unused");
    assert_eq!(test.result.uniforms.len(), 1);
}
