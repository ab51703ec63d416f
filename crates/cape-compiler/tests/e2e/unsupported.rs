//! Constructs the pipelines refuse

use super::harness::*;
use cape_compiler::{Compiler, ErrorKind};
use cape_ir::{Multiple, Node, NodeKind, TType};

#[test]
fn test_call_is_refused_by_both() {
    let call = Node::call(TType::Null, "printf", vec![Node::string("%d\n"), Node::int(1)]);
    let blamed = expect_error_both(&main_with(vec![call.clone()]), ErrorKind::UnsupportedCall);
    assert_eq!(blamed, call);
}

#[test]
fn test_nested_call_is_refused() {
    let call = Node::call(TType::Integer, "f", vec![]);
    let forest = main_with(vec![Node::ret(Node::binary(
        TType::Integer,
        cape_ir::Operation::Add,
        Node::int(1),
        call,
    ))]);
    expect_error_both(&forest, ErrorKind::UnsupportedCall);
}

#[test]
fn test_boolean_literal_is_refused_by_both() {
    let forest = main_with(vec![Node::ret(Node::bool(true))]);
    let blamed = expect_error_both(&forest, ErrorKind::UnsupportedBooleanLiteral);
    assert_eq!(blamed, Node::bool(true));
}

#[test]
fn test_while_is_refused_by_both() {
    let forest = main_with(vec![Node::while_loop(Node::ident("x"), Node::block(vec![]))]);
    let blamed = expect_error_both(&forest, ErrorKind::UnsupportedWhile);
    assert_eq!(blamed.kind(), NodeKind::While);
}

#[test]
fn test_parameters_are_refused_by_both() {
    let params = Multiple::new(vec![Node::variable_declare(TType::Integer, "a")]);
    let forest = vec![Node::function_define(TType::Integer, "f", Some(params), vec![])];
    let blamed = expect_error_both(&forest, ErrorKind::UnsupportedParameters);
    assert_eq!(blamed.kind(), NodeKind::FunctionDefine);
}

#[test]
fn test_empty_parameter_list_is_accepted() {
    let forest = vec![Node::function_define(TType::Integer, "main", Some(Multiple::new(vec![])), vec![])];
    expect_python(forest, "def main():\n    pass\n");
}

#[test]
fn test_unknown_primary_in_both() {
    let forest = main_with(vec![Node::ret(Node::block(vec![]))]);
    let blamed = expect_error_both(&forest, ErrorKind::UnknownPrimaryNode);
    assert_eq!(blamed.kind(), NodeKind::Block);
}

#[test]
fn test_c_refuses_bare_declaration() {
    let forest = main_with(vec![Node::variable_declare(TType::Integer, "x")]);
    expect_c_error(&forest, ErrorKind::UnsupportedDeclaration);
    expect_main_body(vec![Node::variable_declare(TType::Integer, "x")], "    pass\n");
}

#[test]
fn test_c_refuses_tuples() {
    let values = Node::multiple(TType::Tuple(vec![TType::Integer]), vec![Node::int(1)]);
    let forest = main_with(vec![Node::ret(values)]);
    let err = expect_c_error(&forest, ErrorKind::UnknownPrimaryNode);
    assert_eq!(err.node.kind(), NodeKind::Multiple);
}

#[test]
fn test_partial_lowering_reports_each_failure() {
    let forest = vec![
        Node::function_define(TType::Integer, "a", None, vec![Node::ret(Node::int(1))]),
        Node::function_define(TType::Integer, "b", None, vec![Node::ret(Node::bool(false))]),
        Node::function_define(TType::Integer, "c", None, vec![Node::call(TType::Null, "g", vec![])]),
        Node::function_define(TType::Integer, "d", None, vec![Node::ret(Node::int(4))]),
    ];
    let compiler = Compiler::default();

    let python = compiler.lower_python_partial(&forest);
    assert_eq!(python.nodes.len(), 2);
    let kinds: Vec<ErrorKind> = python.errors.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ErrorKind::UnsupportedBooleanLiteral, ErrorKind::UnsupportedCall]);

    let c = compiler.lower_c_partial(&forest);
    assert_eq!(c.nodes.len(), 2);
    assert_eq!(c.errors.len(), 2);
    assert!(!c.is_complete());
}

#[test]
fn test_error_message_names_target_and_node() {
    let err = expect_python_error(&main_with(vec![Node::ret(Node::bool(true))]), ErrorKind::UnsupportedBooleanLiteral);
    assert_eq!(
        err.to_string(),
        "Python lowering: boolean literals are not supported (Literal node)"
    );
}
