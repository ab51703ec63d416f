//! Literals and returns

use super::harness::*;
use cape_ir::{Node, TType};

#[test]
fn test_return_integer_program() {
    let forest = main_with(vec![Node::ret(Node::int(32))]);
    let source = translate(&forest).unwrap();
    assert_eq!(
        source,
        "def main():\n    return 32\nif __name__ == \"__main__\":\n    main()"
    );
}

#[test]
fn test_return_negative_integer() {
    expect_main_body(vec![Node::ret(Node::int(-7))], "    return -7\n");
}

#[test]
fn test_return_string() {
    expect_python(
        vec![Node::function_define(
            TType::String,
            "greeting",
            None,
            vec![Node::ret(Node::string("hello \"world\""))],
        )],
        "def greeting():\n    return \"hello \\\"world\\\"\"\n",
    );
}

#[test]
fn test_multi_value_return() {
    let values = Node::multiple(
        TType::Tuple(vec![TType::Integer, TType::String]),
        vec![Node::int(1), Node::string("one")],
    );
    expect_main_body(vec![Node::ret(values)], "    return 1, \"one\"\n");
}

#[test]
fn test_definitions_become_assignments() {
    expect_main_body(
        vec![
            Node::variable_declare(TType::Integer, "x"),
            Node::variable_define(TType::Integer, "y", Node::int(2)),
            Node::assign(Node::ident("x"), Node::ident("y")),
            Node::ret(Node::ident("x")),
        ],
        "    y = 2\n    x = y\n    return x\n",
    );
}

#[test]
fn test_several_functions_keep_order() {
    let forest = vec![
        Node::function_define(TType::Integer, "one", None, vec![Node::ret(Node::int(1))]),
        Node::variable_declare(TType::Integer, "global_counter"),
        Node::function_define(TType::Integer, "two", None, vec![Node::ret(Node::int(2))]),
        Node::function_declare(TType::Integer, "three", None),
        Node::function_define(TType::Integer, "main", None, vec![Node::ret(Node::int(0))]),
    ];
    expect_python(
        forest,
        "def one():\n    return 1\n\
         def two():\n    return 2\n\
         def main():\n    return 0\n",
    );
}
