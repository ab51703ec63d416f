//! Python lowering policy

use super::ast::{self, PyType};
use crate::error::{ErrorKind, LowerResult};
use crate::lower::{Target, TargetKind};
use cape_ir::{Call, Ident, Literal, Node, Operation, TType, VariableDeclare, While};

/// Lowers IR into [`ast::Node`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTarget;

impl Target for PythonTarget {
    type Node = ast::Node;
    type Type = PyType;

    const KIND: TargetKind = TargetKind::Python;

    fn map_type(&self, ty: &TType) -> Option<PyType> {
        match ty {
            TType::Integer => Some(PyType::Integer),
            TType::String => Some(PyType::String),
            TType::Bool => Some(PyType::Bool),
            TType::Null | TType::Tuple(_) => None,
        }
    }

    fn ident(&self, ident: &Ident) -> ast::Node {
        ast::Node::ident(ident.name.clone())
    }

    fn literal(&self, node: &Node, literal: &Literal) -> LowerResult<ast::Node> {
        match literal {
            Literal::Integer(value) => Ok(ast::Node::int(*value)),
            Literal::String(value) => Ok(ast::Node::string(value.clone())),
            Literal::Bool(_) => Err(self.unsupported(ErrorKind::UnsupportedBooleanLiteral, node)),
        }
    }

    fn call(&self, node: &Node, _call: &Call) -> LowerResult<ast::Node> {
        Err(self.unsupported(ErrorKind::UnsupportedCall, node))
    }

    fn tuple(&self, _node: &Node, values: Vec<ast::Node>) -> LowerResult<ast::Node> {
        Ok(ast::Node::multiple(values))
    }

    fn while_loop(&self, node: &Node, _while_loop: &While) -> LowerResult<ast::Node> {
        Err(self.unsupported(ErrorKind::UnsupportedWhile, node))
    }

    // Python names come into existence on first assignment
    fn variable_declare(&self, _node: &Node, _decl: &VariableDeclare) -> LowerResult<Option<ast::Node>> {
        Ok(None)
    }

    fn function_define(&self, ty: Option<PyType>, ident: &Ident, body: Vec<ast::Node>) -> ast::Node {
        ast::Node::function_define(ty, ident.name.clone(), body)
    }

    fn variable_define(&self, _ty: Option<PyType>, ident: &Ident, value: ast::Node) -> ast::Node {
        ast::Node::assign(ast::Node::ident(ident.name.clone()), value)
    }

    fn block(&self, stmts: Vec<ast::Node>) -> ast::Node {
        ast::Node::block(stmts)
    }

    fn ret(&self, value: ast::Node) -> ast::Node {
        ast::Node::ret(value)
    }

    fn if_else(&self, cond: ast::Node, if_block: ast::Node, else_block: Option<ast::Node>) -> ast::Node {
        ast::Node::if_else(cond, if_block, else_block)
    }

    fn for_loop(
        &self,
        init: Option<ast::Node>,
        cond: ast::Node,
        step: Option<ast::Node>,
        block: ast::Node,
    ) -> ast::Node {
        ast::Node::for_loop(init, cond, step, block)
    }

    fn assign(&self, to: ast::Node, value: ast::Node) -> ast::Node {
        ast::Node::assign(to, value)
    }

    fn binary(&self, ty: Option<PyType>, op: Operation, lhs: ast::Node, rhs: ast::Node) -> ast::Node {
        ast::Node::binary(ty, op, lhs, rhs)
    }

    fn not(&self, value: ast::Node) -> ast::Node {
        ast::Node::not(value)
    }
}
