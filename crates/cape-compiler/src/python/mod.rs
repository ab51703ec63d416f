//! Python target
//!
//! Lowering produces [`Node`] trees; [`crate::codegen`] turns them into
//! source text.

pub mod ast;
mod lower;

pub use ast::{Node, PyType};
pub use lower::PythonTarget;

use crate::error::LowerResult;
use crate::lower::{self as engine, LowerReport};

/// Lower an IR forest into a Python forest
pub fn lower_program(forest: &[cape_ir::Node]) -> LowerResult<Vec<Node>> {
    engine::lower_program(&PythonTarget, forest)
}

/// Lower an IR forest into a Python forest, continuing past failed functions
pub fn lower_program_partial(forest: &[cape_ir::Node]) -> LowerReport<Node> {
    engine::lower_program_partial(&PythonTarget, forest)
}
