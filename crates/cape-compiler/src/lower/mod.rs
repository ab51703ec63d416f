//! IR Lowering
//!
//! Converts IR forests into target trees. The walk and the precedence
//! cascade live here once; a [`Target`] decides how types map, which
//! constructs are refused, and how target nodes are built.
//!
//! Lowering results come in three shapes:
//! - `Ok(Some(node))`: the construct has a target counterpart
//! - `Ok(None)`: the construct is not representable and is dropped from its
//!   surrounding sequence without a trace
//! - `Err(LowerError)`: the construct is unsupported, lowering stops

mod expr;
mod stmt;

use crate::error::{ErrorKind, LowerError, LowerResult};
use cape_ir::{Call, Ident, Literal, Node, Operation, TType, VariableDeclare, While};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Identifies a lowering pipeline in errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetKind {
    C,
    Python,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::C => f.write_str("C"),
            TargetKind::Python => f.write_str("Python"),
        }
    }
}

/// Per-target lowering policy
///
/// Builders receive already-lowered children. Policy hooks that may refuse a
/// construct receive the IR node instead, so the refusal happens before any
/// child is visited.
pub trait Target {
    /// Node type of the target tree
    type Node;
    /// Type vocabulary of the target
    type Type;

    const KIND: TargetKind;

    /// Map an IR type; `None` means the target omits the annotation
    fn map_type(&self, ty: &TType) -> Option<Self::Type>;

    /// Build the error for a construct this target refuses
    fn unsupported(&self, kind: ErrorKind, node: &Node) -> LowerError {
        LowerError::new(Self::KIND, kind, node)
    }

    // ------------------------------------------------------------------------
    // Primary conversion
    // ------------------------------------------------------------------------

    fn ident(&self, ident: &Ident) -> Self::Node;

    fn literal(&self, node: &Node, literal: &Literal) -> LowerResult<Self::Node>;

    fn call(&self, node: &Node, call: &Call) -> LowerResult<Self::Node>;

    /// A `Multiple` met where a single operand is expected
    fn tuple(&self, node: &Node, values: Vec<Self::Node>) -> LowerResult<Self::Node>;

    // ------------------------------------------------------------------------
    // Statement policy
    // ------------------------------------------------------------------------

    fn while_loop(&self, node: &Node, while_loop: &While) -> LowerResult<Self::Node>;

    fn variable_declare(
        &self,
        node: &Node,
        decl: &VariableDeclare,
    ) -> LowerResult<Option<Self::Node>>;

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    fn function_define(
        &self,
        ty: Option<Self::Type>,
        ident: &Ident,
        body: Vec<Self::Node>,
    ) -> Self::Node;

    fn variable_define(
        &self,
        ty: Option<Self::Type>,
        ident: &Ident,
        value: Self::Node,
    ) -> Self::Node;

    fn block(&self, stmts: Vec<Self::Node>) -> Self::Node;

    fn ret(&self, value: Self::Node) -> Self::Node;

    fn if_else(
        &self,
        cond: Self::Node,
        if_block: Self::Node,
        else_block: Option<Self::Node>,
    ) -> Self::Node;

    fn for_loop(
        &self,
        init: Option<Self::Node>,
        cond: Self::Node,
        step: Option<Self::Node>,
        block: Self::Node,
    ) -> Self::Node;

    fn assign(&self, to: Self::Node, value: Self::Node) -> Self::Node;

    fn binary(
        &self,
        ty: Option<Self::Type>,
        op: Operation,
        lhs: Self::Node,
        rhs: Self::Node,
    ) -> Self::Node;

    fn not(&self, value: Self::Node) -> Self::Node;
}

/// Outcome of a lowering pass that keeps going past failed functions
#[derive(Debug, Clone, PartialEq)]
pub struct LowerReport<N> {
    /// Lowered top-level nodes, in input order
    pub nodes: Vec<N>,
    /// One error per top-level node that failed
    pub errors: Vec<LowerError>,
}

impl<N> LowerReport<N> {
    /// Check if every top-level node lowered cleanly
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// IR to target lowerer
///
/// Holds no mutable state; one lowerer can be shared across threads as long
/// as its target can.
pub struct Lowerer<'t, T: Target> {
    target: &'t T,
}

impl<'t, T: Target> Lowerer<'t, T> {
    /// Create a new lowerer
    pub fn new(target: &'t T) -> Self {
        Self { target }
    }

    /// Lower a forest, stopping at the first unsupported construct
    pub fn lower_program(&self, forest: &[Node]) -> LowerResult<Vec<T::Node>> {
        debug!(lang = %T::KIND, nodes = forest.len(), "lowering program");

        let mut lowered = Vec::with_capacity(forest.len());
        for node in forest {
            if let Some(node) = self.lower_top_level(node)? {
                lowered.push(node);
            }
        }
        Ok(lowered)
    }

    /// Lower a forest, collecting one error per failing top-level node
    pub fn lower_program_partial(&self, forest: &[Node]) -> LowerReport<T::Node> {
        debug!(lang = %T::KIND, nodes = forest.len(), "lowering program (partial)");

        let mut report = LowerReport {
            nodes: Vec::with_capacity(forest.len()),
            errors: Vec::new(),
        };
        for node in forest {
            match self.lower_top_level(node) {
                Ok(Some(node)) => report.nodes.push(node),
                Ok(None) => {}
                Err(err) => {
                    debug!(lang = %T::KIND, error = %err, "top-level node failed");
                    report.errors.push(err);
                }
            }
        }
        report
    }

    /// Lower one top-level node
    ///
    /// Only function definitions survive at the top level.
    pub fn lower_top_level(&self, node: &Node) -> LowerResult<Option<T::Node>> {
        match node {
            Node::FunctionDefine(func) => self.lower_function(node, func).map(Some),
            _ => Ok(None),
        }
    }
}

/// Lower a forest with the given target
pub fn lower_program<T: Target>(target: &T, forest: &[Node]) -> LowerResult<Vec<T::Node>> {
    Lowerer::new(target).lower_program(forest)
}

/// Lower a forest with the given target, continuing past failed functions
pub fn lower_program_partial<T: Target>(target: &T, forest: &[Node]) -> LowerReport<T::Node> {
    Lowerer::new(target).lower_program_partial(forest)
}
