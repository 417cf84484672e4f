//! Statement and expression lowering.
//!
//! Renders one function body to an indented block of GLSL statements.
//! Operators are always fully parenthesized so output is correct under any
//! target-language precedence table; do not simplify the parentheses away.

use psl_ir::{Expr, ShaderStage, Stm, TargetLang, VarType, Variable, VariableKind};

use crate::config::GlslConfig;
use crate::error::{GlslGenError, GlslGenResult};
use crate::ordered_set::OrderedSet;

/// GLSL type name for a variable or constructor type.
///
/// `Void` has no value representation; reaching it here means the IR and
/// the generator disagree, which is a hard failure with no fallback.
pub fn type_name(ty: VarType) -> GlslGenResult<&'static str> {
    match ty {
        VarType::Void => Err(GlslGenError::unsupported_type("void has no value type name")),
        VarType::Float1 => Ok("float"),
        VarType::Float2 => Ok("vec2"),
        VarType::Float3 => Ok("vec3"),
        VarType::Float4 => Ok("vec4"),
        VarType::Int1 => Ok("int"),
        VarType::Int2 => Ok("ivec2"),
        VarType::Int3 => Ok("ivec3"),
        VarType::Int4 => Ok("ivec4"),
        VarType::Bool1 => Ok("bool"),
        VarType::Bool2 => Ok("bvec2"),
        VarType::Bool3 => Ok("bvec3"),
        VarType::Bool4 => Ok("bvec4"),
        VarType::Byte4 => Ok("vec4"),
        VarType::Mat2 => Ok("mat2"),
        VarType::Mat3 => Ok("mat3"),
        VarType::Mat4 => Ok("mat4"),
        VarType::Sampler1D => Ok("sampler1D"),
        VarType::Sampler2D => Ok("sampler2D"),
        VarType::Sampler3D => Ok("sampler3D"),
        VarType::SamplerCube => Ok("samplerCube"),
    }
}

/// Render a float literal with the decimal point always present.
fn float_text(value: f64) -> String {
    let mut text = format!("{}", value);
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Renders one function body. Accumulates per-invocation state (collected
/// temporaries, output text); construct one per function.
pub struct BodyGenerator<'a> {
    config: &'a GlslConfig,
    stage: ShaderStage,
    indent: usize,
    out: String,
    temps: OrderedSet<Variable>,
    /// Names declared by enclosing loop headers; these must not also be
    /// collected as function-level temporaries.
    locals: std::collections::BTreeSet<String>,
}

impl<'a> BodyGenerator<'a> {
    pub fn new(stage: ShaderStage, config: &'a GlslConfig) -> Self {
        BodyGenerator {
            config,
            stage,
            indent: 1,
            out: String::new(),
            temps: OrderedSet::new(),
            locals: std::collections::BTreeSet::new(),
        }
    }

    /// Lower a statement tree into the accumulated body text.
    pub fn generate(&mut self, stm: &Stm) -> GlslGenResult<()> {
        self.stm(stm)
    }

    /// Temporaries encountered so far, in first-reference order. The
    /// assembler declares these at the top of the enclosing function.
    pub fn temps(&self) -> &[Variable] {
        self.temps.as_slice()
    }

    /// The rendered statement block.
    pub fn body(&self) -> &str {
        &self.out
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn stm(&mut self, stm: &Stm) -> GlslGenResult<()> {
        match stm {
            Stm::Stms(children) => {
                for child in children {
                    self.stm(child)?;
                }
                Ok(())
            }
            Stm::Set { target, value } => {
                let target = self.expr(target)?;
                let value = self.expr(value)?;
                self.line(&format!("{} = {};", target, value));
                Ok(())
            }
            Stm::If { cond, body, else_body } => {
                let cond = self.expr(cond)?;
                self.line(&format!("if ({}) {{", cond));
                self.indent += 1;
                self.stm(body)?;
                self.indent -= 1;
                match else_body {
                    Some(else_body) => {
                        self.line("} else {");
                        self.indent += 1;
                        self.stm(else_body)?;
                        self.indent -= 1;
                        self.line("}");
                    }
                    None => self.line("}"),
                }
                Ok(())
            }
            Stm::ForSimple { var, min, max, body } => {
                let ty = type_name(var.ty)?;
                let min = self.expr(min)?;
                let max = self.expr(max)?;
                self.line(&format!(
                    "for ({} {} = ({}); {} < ({}); {}++) {{",
                    ty, var.name, min, var.name, max, var.name
                ));
                let fresh_local = self.locals.insert(var.name.clone());
                self.indent += 1;
                self.stm(body)?;
                self.indent -= 1;
                if fresh_local {
                    self.locals.remove(&var.name);
                }
                self.line("}");
                Ok(())
            }
            Stm::Return(Some(value)) => {
                let value = self.expr(value)?;
                self.line(&format!("return {};", value));
                Ok(())
            }
            Stm::Return(None) => {
                self.line("return;");
                Ok(())
            }
            Stm::Discard => {
                self.line("discard;");
                Ok(())
            }
            Stm::Break => {
                self.line("break;");
                Ok(())
            }
            Stm::Continue => {
                self.line("continue;");
                Ok(())
            }
            Stm::Raw { target, code } => match target {
                TargetLang::Glsl => {
                    self.line(code);
                    Ok(())
                }
            },
        }
    }

    fn expr(&mut self, expr: &Expr) -> GlslGenResult<String> {
        match expr {
            Expr::Vector { ty, args } => {
                let args = self.expr_list(args)?;
                Ok(format!("{}({})", type_name(*ty)?, args))
            }
            Expr::Unop { op, expr } => {
                let operand = self.expr(expr)?;
                Ok(format!("({}({}))", op, operand))
            }
            Expr::Binop { op, left, right } => {
                let left = self.expr(left)?;
                let right = self.expr(right)?;
                Ok(format!("({} {} {})", left, op, right))
            }
            Expr::Ternary { cond, if_true, if_false } => {
                let cond = self.expr(cond)?;
                let if_true = self.expr(if_true)?;
                let if_false = self.expr(if_false)?;
                Ok(format!("(({}) ? ({}) : ({}))", cond, if_true, if_false))
            }
            Expr::Call { name, args } => {
                let args = self.expr_list(args)?;
                Ok(format!("{}({})", self.config.function_name(name), args))
            }
            Expr::Swizzle { base, swizzle } => {
                let base = self.expr(base)?;
                Ok(format!("{}.{}", base, swizzle))
            }
            Expr::ArrayAccess { base, index } => {
                let base = self.expr(base)?;
                let index = self.expr(index)?;
                Ok(format!("{}[{}]", base, index))
            }
            Expr::IntLit(value) => Ok(format!("{}", value)),
            Expr::FloatLit(value) => Ok(float_text(*value)),
            Expr::BoolLit(value) => Ok(format!("{}", value)),
            Expr::Var(variable) => Ok(self.var_name(variable)),
            Expr::Raw { target, code } => match target {
                TargetLang::Glsl => Ok(code.clone()),
            },
        }
    }

    fn expr_list(&mut self, exprs: &[Expr]) -> GlslGenResult<String> {
        let mut parts = Vec::with_capacity(exprs.len());
        for expr in exprs {
            parts.push(self.expr(expr)?);
        }
        Ok(parts.join(", "))
    }

    fn var_name(&mut self, variable: &Variable) -> String {
        match &variable.kind {
            VariableKind::Output => match self.stage {
                ShaderStage::Vertex => "gl_Position".to_string(),
                ShaderStage::Fragment => self.config.frag_color_name().to_string(),
            },
            VariableKind::Temp { .. } => {
                if !self.locals.contains(&variable.name) {
                    self.temps.insert(&variable.name, variable.clone());
                }
                variable.name.clone()
            }
            _ => variable.name.clone(),
        }
    }
}

/// Render a temp declaration line for the top of a function body.
pub(crate) fn temp_declaration(config: &GlslConfig, temp: &Variable) -> GlslGenResult<String> {
    Ok(format!("\t{}{} {};", config.precision_text(temp.precision), type_name(temp.ty)?, temp.name))
}
