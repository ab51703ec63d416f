//! Test harness for end-to-end translation
//!
//! Builds IR forests, runs them through the compiler facade and compares the
//! generated Python (or the lowering error) against expectations.

use cape_compiler::{Compiler, CompileError, CompileResult, ErrorKind, LowerError, TargetKind};
use cape_ir::{Node, TType};
use pretty_assertions::assert_eq;

/// Trailer appended to every program under the default configuration
pub const TRAILER: &str = "if __name__ == \"__main__\":\n    main()";

/// `int main() { <stmts> }`
pub fn main_with(stmts: Vec<Node>) -> Vec<Node> {
    vec![Node::function_define(TType::Integer, "main", None, stmts)]
}

/// Translate a forest with the default configuration
pub fn translate(forest: &[Node]) -> CompileResult<String> {
    Compiler::default().translate_python(forest)
}

/// Translate a forest and compare everything before the trailer
pub fn expect_python(forest: Vec<Node>, expected: &str) {
    let source = match translate(&forest) {
        Ok(source) => source,
        Err(e) => panic!("Translation failed: {}", e),
    };
    assert_eq!(source, format!("{}{}", expected, TRAILER));
}

/// Translate `main` and compare its body, indentation included
pub fn expect_main_body(stmts: Vec<Node>, expected_body: &str) {
    expect_python(main_with(stmts), &format!("def main():\n{}", expected_body));
}

fn lower_error(result: CompileResult<impl std::fmt::Debug>) -> LowerError {
    match result {
        Err(CompileError::Lower(err)) => err,
        Err(other) => panic!("Expected a lowering error, got: {}", other),
        Ok(lowered) => panic!("Expected a lowering error, got: {:?}", lowered),
    }
}

/// Assert the C pipeline refuses the forest with `kind`
pub fn expect_c_error(forest: &[Node], kind: ErrorKind) -> LowerError {
    let err = lower_error(Compiler::default().lower_c(forest));
    assert_eq!(err.target, TargetKind::C);
    assert_eq!(err.kind, kind);
    err
}

/// Assert the Python pipeline refuses the forest with `kind`
pub fn expect_python_error(forest: &[Node], kind: ErrorKind) -> LowerError {
    let err = lower_error(Compiler::default().lower_python(forest));
    assert_eq!(err.target, TargetKind::Python);
    assert_eq!(err.kind, kind);
    err
}

/// Assert both pipelines refuse the forest with `kind`, blaming the same node
pub fn expect_error_both(forest: &[Node], kind: ErrorKind) -> Node {
    let c = expect_c_error(forest, kind);
    let python = expect_python_error(forest, kind);
    assert_eq!(c.node, python.node);
    *c.node
}
