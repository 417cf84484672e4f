//! Vertex-stage generation tests.

use gen_test::{legacy, legacy_es, modern_desktop, GenTest};
use psl_ir::{
    float_lit, for_simple, int_lit, op, set, stms, var, vec, BinOp, Precision, Shader, ShaderStage,
    VarType, Variable,
};

fn passthrough_position() -> Shader {
    let position = Variable::attribute("position", VarType::Float2, 0);
    Shader::new(
        ShaderStage::Vertex,
        set(
            var(Variable::output()),
            vec(VarType::Float4, [var(position), float_lit(0.0), float_lit(1.0)]),
        ),
    )
}

#[test]
fn test_position_attribute_modern() {
    let test = GenTest::generate(&passthrough_position(), &modern_desktop());
    test.assert_source(
        r#"
        #version 330
        #extension GL_OES_standard_derivatives : enable
        #ifdef GL_ES
        precision mediump float;
        #endif
        in vec2 position;
        void main() {
            gl_Position = vec4(position, 0.0, 1.0);
        }
    "#,
    );
}

#[test]
fn test_position_attribute_legacy() {
    let test = GenTest::generate(&passthrough_position(), &legacy());
    test.assert_contains("attribute vec2 position;");
    test.assert_not_contains("uniform");
    test.assert_not_contains("varying");
    assert_eq!(test.result.attributes.len(), 1);
    assert_eq!(test.result.attributes[0].name, "position");
}

#[test]
fn test_vertex_varying_direction_is_out() {
    let position = Variable::attribute("position", VarType::Float2, 0);
    let uv = Variable::varying("v_uv", VarType::Float2);
    let shader = Shader::new(
        ShaderStage::Vertex,
        stms([
            set(var(uv), var(position.clone())),
            set(
                var(Variable::output()),
                vec(VarType::Float4, [var(position), float_lit(0.0), float_lit(1.0)]),
            ),
        ]),
    );
    let modern = GenTest::generate(&shader, &modern_desktop());
    modern.assert_contains("out vec2 v_uv;");
    let old = GenTest::generate(&shader, &legacy());
    old.assert_contains("varying vec2 v_uv;");
}

#[test]
fn test_varyings_sorted_by_name() {
    let b = Variable::varying("v_b", VarType::Float1);
    let a = Variable::varying("v_a", VarType::Float1);
    let shader = Shader::new(
        ShaderStage::Vertex,
        stms([
            set(var(b), float_lit(0.0)),
            set(var(a), float_lit(1.0)),
            set(
                var(Variable::output()),
                vec(VarType::Float4, [float_lit(0.0), float_lit(0.0), float_lit(0.0), float_lit(1.0)]),
            ),
        ]),
    );
    let test = GenTest::generate(&shader, &modern_desktop());
    let a_at = test.source().find("out float v_a;").expect("v_a missing");
    let b_at = test.source().find("out float v_b;").expect("v_b missing");
    assert!(a_at < b_at, "varyings must be sorted by name:\n{}", test.source());
}

#[test]
fn test_temp_declared_before_statements() {
    let temp = Variable::temp(0, VarType::Float1);
    let shader = Shader::new(
        ShaderStage::Vertex,
        stms([
            set(var(temp.clone()), float_lit(2.0)),
            set(
                var(Variable::output()),
                vec(VarType::Float4, [var(temp.clone()), var(temp.clone()), var(temp), float_lit(1.0)]),
            ),
        ]),
    );
    let test = GenTest::generate(&shader, &legacy());
    test.assert_source(
        r#"
        #extension GL_OES_standard_derivatives : enable
        #ifdef GL_ES
        precision mediump float;
        #endif
        void main() {
            float temp0;
            temp0 = 2.0;
            gl_Position = vec4(temp0, temp0, temp0, 1.0);
        }
    "#,
    );
}

#[test]
fn test_temp_precision_on_es() {
    let temp = Variable::temp(0, VarType::Float2).with_precision(Precision::High);
    let shader = Shader::new(
        ShaderStage::Vertex,
        set(var(temp.clone()), vec(VarType::Float2, [float_lit(0.0), float_lit(0.0)])),
    );
    let test = GenTest::generate(&shader, &legacy_es());
    test.assert_contains("highp vec2 temp0;");
}

#[test]
fn test_for_simple_canonical_form() {
    let i = Variable::temp(0, VarType::Int1);
    let acc = Variable::temp(1, VarType::Float1);
    let shader = Shader::new(
        ShaderStage::Vertex,
        stms([
            set(var(acc.clone()), float_lit(0.0)),
            for_simple(
                i.clone(),
                int_lit(0),
                int_lit(4),
                set(var(acc.clone()), op(var(acc.clone()), BinOp::Add, float_lit(1.0))),
            ),
            set(
                var(Variable::output()),
                vec(VarType::Float4, [var(acc.clone()), var(acc.clone()), var(acc), float_lit(1.0)]),
            ),
        ]),
    );
    let test = GenTest::generate(&shader, &legacy());
    test.assert_contains("for (int temp0 = (0); temp0 < (4); temp0++) {");
    // The loop variable is declared by the loop header, not as a temp.
    test.assert_not_contains("int temp0;");
    test.assert_contains("float temp1;");
}
