//! Cape Intermediate Representation
//!
//! Target-agnostic, type-annotated program trees produced by a front end
//! and consumed by the lowering pipelines in `cape-compiler`.
//!
//! The IR is plain data: constructors never fail and nothing here re-derives
//! or checks types.

#![warn(missing_docs)]

pub mod node;
pub mod op;
pub mod ty;

pub use node::{
    Assign, Binary, Block, Call, For, FunctionDeclare, FunctionDefine, Ident, IfElse, Literal,
    Multiple, Node, NodeKind, Not, Return, VariableDeclare, VariableDefine, While,
};
pub use op::{Operation, Precedence};
pub use ty::TType;
