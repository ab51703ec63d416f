//! Python Source Generation
//!
//! Turns a lowered Python forest into source text.
//!
//! # Pipeline
//!
//! ```text
//! IR forest → PythonTarget lowering → Python forest → PythonGenerator → source
//! ```
//!
//! Every emitted line is the indentation for its depth, the text, and a
//! newline. The program ends with the script-entry trailer (subject to
//! [`MainGuard`](crate::config::MainGuard)), which has no trailing newline.

mod context;
mod control;
mod emit;

pub use context::PythonGenerator;

use crate::config::PythonConfig;
use crate::error::CodegenResult;
use crate::python::Node;

/// Generate Python source from a lowered forest
pub fn generate(nodes: &[Node], config: &PythonConfig) -> CodegenResult<String> {
    PythonGenerator::new(config).generate(nodes)
}
