//! Calls in hand-built Python trees
//!
//! Lowering refuses calls, so these drive the generator directly.

use cape_compiler::python::Node;
use cape_compiler::{CodegenError, CompileError, Compiler};
use pretty_assertions::assert_eq;

fn main_calling(call: Node) -> Vec<Node> {
    vec![Node::function_define(None, "main", vec![call])]
}

fn generate(nodes: &[Node]) -> Result<String, CompileError> {
    Compiler::default().generate_python(nodes)
}

#[test]
fn test_printf_with_arguments() {
    let call = Node::call("printf", vec![Node::string("%d\n"), Node::ident("x")]);
    assert_eq!(
        generate(&main_calling(call)).unwrap(),
        "def main():\n    print(\"{}\\n\".format(x))\nif __name__ == \"__main__\":\n    main()"
    );
}

#[test]
fn test_printf_without_arguments() {
    let call = Node::call("printf", vec![Node::string("hi\n")]);
    assert_eq!(
        generate(&main_calling(call)).unwrap(),
        "def main():\n    print(\"hi\\n\")\nif __name__ == \"__main__\":\n    main()"
    );
}

#[test]
fn test_printf_mixed_conversions() {
    let call = Node::call(
        "printf",
        vec![Node::string("%s: %d%%\n"), Node::ident("name"), Node::ident("pct")],
    );
    let source = generate(&main_calling(call)).unwrap();
    assert!(source.contains("    print(\"{}: {}%\\n\".format(name, pct))\n"));
}

#[test]
fn test_plain_call() {
    let call = Node::call("helper", vec![Node::int(1), Node::string("a")]);
    let source = generate(&main_calling(call)).unwrap();
    assert!(source.starts_with("def main():\n    helper(1, \"a\")\n"));
}

#[test]
fn test_printf_needs_literal_format() {
    let call = Node::call("printf", vec![Node::ident("fmt")]);
    let err = generate(&main_calling(call)).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Codegen(CodegenError::MalformedCall { .. })
    ));
}
