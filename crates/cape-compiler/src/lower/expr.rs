//! Expression Lowering
//!
//! The precedence cascade, loosest level first:
//!
//! ```text
//! assign          Assign, declarations
//! and/or          and, or
//! equality        ==, !=
//! relational      <, <=, >, >=
//! additive        +, -
//! multiplicative  *, /, %
//! unary           not
//! primary         identifiers, literals, calls, grouped operands
//! ```
//!
//! A `Binary` is consumed at the level of its operator, both operands are
//! lowered at that same level. A `Binary` that only reaches primary (its
//! operator is looser than where it sits) is a grouped operand and restarts
//! the cascade, so every tree keeps its exact shape.

use super::{Lowerer, Target};
use crate::error::{ErrorKind, LowerResult};
use cape_ir::{Node, Precedence};

impl<'t, T: Target> Lowerer<'t, T> {
    /// Lower an expression at the assign level
    ///
    /// Declarations are only meaningful here, so this is also where a
    /// target gets to drop them.
    pub fn lower_expr(&self, node: &Node) -> LowerResult<Option<T::Node>> {
        match node {
            Node::VariableDeclare(decl) => self.target.variable_declare(node, decl),
            Node::VariableDefine(def) => {
                let value = self.lower_value(&def.value)?;
                let ty = self.target.map_type(&def.ty);
                Ok(Some(self.target.variable_define(ty, &def.ident, value)))
            }
            // `int x = v` parsed as an assignment to a declaration
            Node::Assign(assign) => match assign.to.as_ref() {
                Node::VariableDeclare(decl) => {
                    let value = self.lower_value(&assign.value)?;
                    let ty = self.target.map_type(&decl.ty);
                    Ok(Some(self.target.variable_define(ty, &decl.ident, value)))
                }
                _ => self.lower_value(node).map(Some),
            },
            _ => self.lower_value(node).map(Some),
        }
    }

    /// Lower an expression that must produce a value
    pub fn lower_value(&self, node: &Node) -> LowerResult<T::Node> {
        match node {
            Node::Assign(assign) => {
                let to = self.lower_value(&assign.to)?;
                let value = self.lower_value(&assign.value)?;
                Ok(self.target.assign(to, value))
            }
            _ => self.lower_level(node, Precedence::LOOSEST),
        }
    }

    /// Lower at one binary precedence level
    fn lower_level(&self, node: &Node, level: Precedence) -> LowerResult<T::Node> {
        if let Node::Binary(binary) = node {
            if binary.op.precedence() == level {
                let lhs = self.lower_level(&binary.lhs, level)?;
                let rhs = self.lower_level(&binary.rhs, level)?;
                let ty = self.target.map_type(&binary.ty);
                return Ok(self.target.binary(ty, binary.op, lhs, rhs));
            }
        }

        match level.tighter() {
            Some(next) => self.lower_level(node, next),
            None => self.lower_unary(node),
        }
    }

    fn lower_unary(&self, node: &Node) -> LowerResult<T::Node> {
        match node {
            Node::Not(not) => {
                let value = self.lower_unary(&not.value)?;
                Ok(self.target.not(value))
            }
            _ => self.lower_primary(node),
        }
    }

    fn lower_primary(&self, node: &Node) -> LowerResult<T::Node> {
        match node {
            Node::Ident(ident) => Ok(self.target.ident(ident)),
            Node::Literal(literal) => self.target.literal(node, literal),
            Node::Call(call) => self.target.call(node, call),
            Node::Binary(_) => self.lower_value(node),
            Node::Multiple(multiple) => {
                let values = multiple
                    .values
                    .iter()
                    .map(|value| self.lower_value(value))
                    .collect::<LowerResult<Vec<_>>>()?;
                self.target.tuple(node, values)
            }
            _ => Err(self.target.unsupported(ErrorKind::UnknownPrimaryNode, node)),
        }
    }
}
