//! Generator state and line emission

use crate::config::{MainGuard, PythonConfig};
use crate::error::CodegenResult;
use crate::python::Node;
use tracing::debug;

/// Python source generator
///
/// Indentation depth is passed down the statement recursion, never stored,
/// so a generator carries nothing between lines but the output buffer.
pub struct PythonGenerator<'c> {
    pub(super) config: &'c PythonConfig,
    indent: String,
    out: String,
}

impl<'c> PythonGenerator<'c> {
    pub fn new(config: &'c PythonConfig) -> Self {
        Self {
            config,
            indent: config.indent_unit(),
            out: String::new(),
        }
    }

    /// Generate a whole program, trailer included
    pub fn generate(mut self, nodes: &[Node]) -> CodegenResult<String> {
        debug!(nodes = nodes.len(), "generating python");

        for node in nodes {
            self.gen_stmt(node, 0)?;
        }
        if self.wants_main_guard(nodes) {
            self.main_guard();
        }
        Ok(self.out)
    }

    /// Emit one line at the given depth
    pub(super) fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str(&self.indent);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Bytes emitted so far, used to spot suites that produced nothing
    pub(super) fn mark(&self) -> usize {
        self.out.len()
    }

    fn wants_main_guard(&self, nodes: &[Node]) -> bool {
        match self.config.main_guard {
            MainGuard::Always => true,
            MainGuard::Never => false,
            MainGuard::WhenMainDefined => nodes.iter().any(|node| {
                matches!(node, Node::FunctionDefine(func) if func.ident.name == "main")
            }),
        }
    }

    // No newline after the call
    fn main_guard(&mut self) {
        self.line(0, "if __name__ == \"__main__\":");
        self.out.push_str(&self.indent);
        self.out.push_str("main()");
    }
}
