//! Compilation errors

use crate::config::ConfigError;
use crate::lower::TargetKind;
use cape_ir::Node;
use std::fmt;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;
pub type LowerResult<T> = Result<T, LowerError>;
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Any failure surfaced by the [`Compiler`](crate::Compiler) facade
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lower(#[from] LowerError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Construct a target pipeline refuses to lower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Function calls
    UnsupportedCall,
    /// `true` / `false`
    UnsupportedBooleanLiteral,
    /// While loops
    UnsupportedWhile,
    /// Function definitions with a non-empty parameter list
    UnsupportedParameters,
    /// A node that has no meaning where an operand is expected
    UnknownPrimaryNode,
    /// A declaration without initializer, for targets that cannot express one
    UnsupportedDeclaration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::UnsupportedCall => "function calls are not supported",
            ErrorKind::UnsupportedBooleanLiteral => "boolean literals are not supported",
            ErrorKind::UnsupportedWhile => "while loops are not supported",
            ErrorKind::UnsupportedParameters => "function parameters are not supported",
            ErrorKind::UnknownPrimaryNode => "unknown primary node",
            ErrorKind::UnsupportedDeclaration => "declarations without initializer are not supported",
        };
        f.write_str(text)
    }
}

/// Fatal lowering failure
///
/// Carries the offending IR node so callers can point at what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{target} lowering: {kind} ({} node)", .node.kind())]
pub struct LowerError {
    pub target: TargetKind,
    pub kind: ErrorKind,
    pub node: Box<Node>,
}

impl LowerError {
    pub fn new(target: TargetKind, kind: ErrorKind, node: &Node) -> Self {
        Self {
            target,
            kind,
            node: Box::new(node.clone()),
        }
    }
}

/// Python source generation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("Malformed call to {callee}: {reason}")]
    MalformedCall { callee: String, reason: &'static str },

    #[error("{kind} node cannot be used as an expression")]
    NotAnExpression { kind: &'static str },
}
