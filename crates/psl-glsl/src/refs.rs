//! Global reference pass.
//!
//! Walks a shader's statement tree (read-only) and collects the
//! deduplicated, insertion-ordered sets of referenced attributes,
//! varyings, uniforms, uniform blocks, samplers, and custom functions.
//! Declarations never referenced under the active tree do not appear in
//! the generated output; this is what keeps generated shaders minimal.

use psl_ir::{Expr, FuncDecl, Shader, Stm, Variable, VariableKind};

use crate::ordered_set::OrderedSet;

/// Collected global references for one shader.
#[derive(Debug, Clone, Default)]
pub struct GlobalRefs {
    pub attributes: OrderedSet<Variable>,
    pub varyings: OrderedSet<Variable>,
    pub uniforms: OrderedSet<Variable>,
    /// Owning-block names, in first-reference order.
    pub blocks: OrderedSet<String>,
    pub samplers: OrderedSet<Variable>,
    /// Referenced custom-function names, in first-reference order.
    pub functions: OrderedSet<String>,
}

impl GlobalRefs {
    /// Collect references from the root tree and, transitively, from every
    /// custom function it calls. Traversal cannot fail.
    pub fn collect(shader: &Shader) -> GlobalRefs {
        let mut refs = GlobalRefs::default();
        let mut worklist: Vec<&FuncDecl> = Vec::new();
        refs.visit_stm(&shader.body, shader, &mut worklist);
        // Functions called from functions land on the worklist and are
        // visited in turn, so indirect references are also collected.
        while let Some(func) = worklist.pop() {
            refs.visit_stm(&func.body, shader, &mut worklist);
        }
        refs
    }

    fn visit_stm<'s>(&mut self, stm: &Stm, shader: &'s Shader, worklist: &mut Vec<&'s FuncDecl>) {
        match stm {
            Stm::Stms(children) => {
                for child in children {
                    self.visit_stm(child, shader, worklist);
                }
            }
            Stm::Set { target, value } => {
                self.visit_expr(target, shader, worklist);
                self.visit_expr(value, shader, worklist);
            }
            Stm::If { cond, body, else_body } => {
                self.visit_expr(cond, shader, worklist);
                self.visit_stm(body, shader, worklist);
                if let Some(else_body) = else_body {
                    self.visit_stm(else_body, shader, worklist);
                }
            }
            Stm::ForSimple { min, max, body, .. } => {
                self.visit_expr(min, shader, worklist);
                self.visit_expr(max, shader, worklist);
                self.visit_stm(body, shader, worklist);
            }
            Stm::Return(Some(value)) => self.visit_expr(value, shader, worklist),
            Stm::Return(None) | Stm::Discard | Stm::Break | Stm::Continue | Stm::Raw { .. } => {}
        }
    }

    fn visit_expr<'s>(&mut self, expr: &Expr, shader: &'s Shader, worklist: &mut Vec<&'s FuncDecl>) {
        match expr {
            Expr::Vector { args, .. } => {
                for arg in args {
                    self.visit_expr(arg, shader, worklist);
                }
            }
            Expr::Unop { expr, .. } => self.visit_expr(expr, shader, worklist),
            Expr::Binop { left, right, .. } => {
                self.visit_expr(left, shader, worklist);
                self.visit_expr(right, shader, worklist);
            }
            Expr::Ternary { cond, if_true, if_false } => {
                self.visit_expr(cond, shader, worklist);
                self.visit_expr(if_true, shader, worklist);
                self.visit_expr(if_false, shader, worklist);
            }
            Expr::Call { name, args } => {
                for arg in args {
                    self.visit_expr(arg, shader, worklist);
                }
                if let Some(func) = shader.find_function(name) {
                    if self.functions.insert(name, name.clone()) {
                        worklist.push(func);
                    }
                }
            }
            Expr::Swizzle { base, .. } => self.visit_expr(base, shader, worklist),
            Expr::ArrayAccess { base, index } => {
                self.visit_expr(base, shader, worklist);
                self.visit_expr(index, shader, worklist);
            }
            Expr::Var(variable) => self.visit_var(variable),
            Expr::IntLit(_) | Expr::FloatLit(_) | Expr::BoolLit(_) | Expr::Raw { .. } => {}
        }
    }

    fn visit_var(&mut self, variable: &Variable) {
        match &variable.kind {
            VariableKind::Attribute { .. } => {
                self.attributes.insert(&variable.name, variable.clone());
            }
            VariableKind::Varying => {
                self.varyings.insert(&variable.name, variable.clone());
            }
            VariableKind::Uniform { block } => {
                if variable.ty.is_sampler() {
                    self.samplers.insert(&variable.name, variable.clone());
                    return;
                }
                // The owning block is registered whenever one of its
                // members is referenced, even if never named directly.
                if let Some(block_name) = block {
                    self.blocks.insert(block_name, block_name.clone());
                }
                self.uniforms.insert(&variable.name, variable.clone());
            }
            VariableKind::Sampler { .. } => {
                self.samplers.insert(&variable.name, variable.clone());
            }
            // The output sink resolves contextually during lowering; temps
            // and parameter references are function-local. None of these
            // is a global declaration.
            VariableKind::Output | VariableKind::Temp { .. } | VariableKind::Param => {}
        }
    }
}
