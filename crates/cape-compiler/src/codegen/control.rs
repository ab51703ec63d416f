//! Statement Generation
//!
//! Definitions, suites, branches and loops. Every statement is emitted as
//! whole lines at the depth handed in by its parent.

use super::PythonGenerator;
use crate::error::CodegenResult;
use crate::python::ast::{For, FunctionDefine, IfElse, Node};

impl PythonGenerator<'_> {
    /// Generate a statement
    pub(super) fn gen_stmt(&mut self, node: &Node, depth: usize) -> CodegenResult<()> {
        match node {
            Node::FunctionDefine(func) => self.gen_function(func, depth),
            // Python has no bare blocks; a nested block flattens into its parent
            Node::Block(block) => {
                for stmt in &block.stmts {
                    self.gen_stmt(stmt, depth)?;
                }
                Ok(())
            }
            Node::Return(ret) => {
                let value = self.gen_expr(&ret.value)?;
                self.line(depth, &format!("return {}", value));
                Ok(())
            }
            Node::IfElse(if_else) => self.gen_if(if_else, "if", depth),
            Node::For(for_loop) => self.gen_for(for_loop, depth),
            _ => {
                let expr = self.gen_expr(node)?;
                self.line(depth, &expr);
                Ok(())
            }
        }
    }

    fn gen_function(&mut self, func: &FunctionDefine, depth: usize) -> CodegenResult<()> {
        let params: Vec<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
        let hint = match func.ty {
            Some(ty) if self.config.type_hints => format!(" -> {}", ty.annotation()),
            _ => String::new(),
        };
        self.line(
            depth,
            &format!("def {}({}){}:", func.ident.name, params.join(", "), hint),
        );
        self.gen_suite(&func.block.stmts, depth + 1)
    }

    /// Generate an indented suite, falling back to `pass` when it comes out empty
    fn gen_suite(&mut self, stmts: &[Node], depth: usize) -> CodegenResult<()> {
        let start = self.mark();
        for stmt in stmts {
            self.gen_stmt(stmt, depth)?;
        }
        if self.mark() == start {
            self.line(depth, "pass");
        }
        Ok(())
    }

    fn gen_if(&mut self, if_else: &IfElse, keyword: &str, depth: usize) -> CodegenResult<()> {
        let cond = self.gen_expr(&if_else.cond)?;
        self.line(depth, &format!("{} {}:", keyword, cond));
        self.gen_suite(&if_else.if_block.stmts, depth + 1)?;

        match &if_else.else_block {
            Some(else_block) => match else_block.stmts.as_slice() {
                [Node::IfElse(chained)] => self.gen_if(chained, "elif", depth),
                stmts => {
                    self.line(depth, "else:");
                    self.gen_suite(stmts, depth + 1)
                }
            },
            None => Ok(()),
        }
    }

    /// `for (init; cond; step)` becomes `init` then `while cond:` with `step`
    /// closing the body
    fn gen_for(&mut self, for_loop: &For, depth: usize) -> CodegenResult<()> {
        if let Some(init) = &for_loop.init {
            self.gen_stmt(init, depth)?;
        }
        let cond = self.gen_expr(&for_loop.cond)?;
        self.line(depth, &format!("while {}:", cond));

        let start = self.mark();
        for stmt in &for_loop.block.stmts {
            self.gen_stmt(stmt, depth + 1)?;
        }
        if let Some(step) = &for_loop.step {
            self.gen_stmt(step, depth + 1)?;
        }
        if self.mark() == start {
            self.line(depth + 1, "pass");
        }
        Ok(())
    }
}
