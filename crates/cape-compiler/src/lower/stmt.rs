//! Statement Lowering
//!
//! Converts IR statements and function definitions to target statements.

use super::{Lowerer, Target};
use crate::error::{ErrorKind, LowerResult};
use cape_ir::{FunctionDefine, Multiple, Node};
use tracing::trace;

impl<'t, T: Target> Lowerer<'t, T> {
    /// Lower a function definition
    pub(super) fn lower_function(&self, node: &Node, func: &FunctionDefine) -> LowerResult<T::Node> {
        trace!(lang = %T::KIND, name = %func.ident, "lowering function");

        self.check_params(node, func.params.as_ref())?;
        let ty = self.target.map_type(&func.ty);
        let body = self.lower_stmts(&func.block.stmts)?;
        Ok(self.target.function_define(ty, &func.ident, body))
    }

    /// Parameter lists are accepted only when absent or empty
    fn check_params(&self, node: &Node, params: Option<&Multiple>) -> LowerResult<()> {
        match params {
            Some(params) if !params.is_empty() => {
                Err(self.target.unsupported(ErrorKind::UnsupportedParameters, node))
            }
            _ => Ok(()),
        }
    }

    /// Lower a statement sequence, dropping statements with no counterpart
    pub fn lower_stmts(&self, stmts: &[Node]) -> LowerResult<Vec<T::Node>> {
        let mut lowered = Vec::with_capacity(stmts.len());
        for stmt in stmts {
            if let Some(stmt) = self.lower_stmt(stmt)? {
                lowered.push(stmt);
            }
        }
        Ok(lowered)
    }

    /// Lower a statement
    pub fn lower_stmt(&self, node: &Node) -> LowerResult<Option<T::Node>> {
        match node {
            Node::Block(block) => {
                let stmts = self.lower_stmts(&block.stmts)?;
                Ok(Some(self.target.block(stmts)))
            }
            Node::Return(ret) => {
                let value = self.lower_value(&ret.value)?;
                Ok(Some(self.target.ret(value)))
            }
            Node::IfElse(if_else) => {
                let cond = self.lower_value(&if_else.cond)?;
                let if_block = self.lower_suite(&if_else.if_block)?;
                let else_block = match &if_else.else_block {
                    Some(else_block) => Some(self.lower_suite(else_block)?),
                    None => None,
                };
                Ok(Some(self.target.if_else(cond, if_block, else_block)))
            }
            Node::While(while_loop) => self.target.while_loop(node, while_loop).map(Some),
            Node::For(for_loop) => {
                let init = self.lower_expr(&for_loop.init)?;
                let cond = self.lower_value(&for_loop.cond)?;
                let step = self.lower_expr(&for_loop.step)?;
                let block = self.lower_suite(&for_loop.block)?;
                Ok(Some(self.target.for_loop(init, cond, step, block)))
            }
            _ => self.lower_expr(node),
        }
    }

    /// Lower the body of a branch or loop
    ///
    /// A body that lowers to nothing becomes an empty block.
    fn lower_suite(&self, node: &Node) -> LowerResult<T::Node> {
        match self.lower_stmt(node)? {
            Some(suite) => Ok(suite),
            None => Ok(self.target.block(Vec::new())),
        }
    }
}
