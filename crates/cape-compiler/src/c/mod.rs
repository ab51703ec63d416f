//! C target
//!
//! Lowering only: the produced tree is the output.

pub mod ast;
mod lower;

pub use ast::{CType, Node};
pub use lower::CTarget;

use crate::error::LowerResult;
use crate::lower::{self as engine, LowerReport};

/// Lower an IR forest into a C forest
pub fn lower_program(forest: &[cape_ir::Node]) -> LowerResult<Vec<Node>> {
    engine::lower_program(&CTarget, forest)
}

/// Lower an IR forest into a C forest, continuing past failed functions
pub fn lower_program_partial(forest: &[cape_ir::Node]) -> LowerReport<Node> {
    engine::lower_program_partial(&CTarget, forest)
}
