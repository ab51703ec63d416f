//! Cape Compiler - IR lowering and Python code generation
//!
//! This crate lowers `cape-ir` forests into C and Python syntax trees with a
//! single target-generic lowering engine, and prints Python trees as source.

pub mod c;
pub mod codegen;
pub mod config;
pub mod error;
pub mod lower;
pub mod python;

pub use c::CTarget;
pub use codegen::{generate, PythonGenerator};
pub use config::{Config, ConfigError, MainGuard, PythonConfig};
pub use error::{
    CodegenError, CodegenResult, CompileError, CompileResult, ErrorKind, LowerError, LowerResult,
};
pub use lower::{LowerReport, Lowerer, Target, TargetKind};
pub use python::PythonTarget;

use cape_ir::Node;
use tracing::debug;

/// Main compiler entry point
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lower a forest into a C forest
    pub fn lower_c(&self, forest: &[Node]) -> CompileResult<Vec<c::Node>> {
        Ok(c::lower_program(forest)?)
    }

    /// Lower a forest into a C forest, reporting failed functions instead of stopping
    pub fn lower_c_partial(&self, forest: &[Node]) -> LowerReport<c::Node> {
        c::lower_program_partial(forest)
    }

    /// Lower a forest into a Python forest
    pub fn lower_python(&self, forest: &[Node]) -> CompileResult<Vec<python::Node>> {
        Ok(python::lower_program(forest)?)
    }

    /// Lower a forest into a Python forest, reporting failed functions instead of stopping
    pub fn lower_python_partial(&self, forest: &[Node]) -> LowerReport<python::Node> {
        python::lower_program_partial(forest)
    }

    /// Generate source from an already lowered Python forest
    pub fn generate_python(&self, nodes: &[python::Node]) -> CompileResult<String> {
        Ok(codegen::generate(nodes, &self.config.python)?)
    }

    /// Lower a forest to Python and generate its source
    pub fn translate_python(&self, forest: &[Node]) -> CompileResult<String> {
        debug!(nodes = forest.len(), "translating to python");
        let lowered = self.lower_python(forest)?;
        self.generate_python(&lowered)
    }
}
