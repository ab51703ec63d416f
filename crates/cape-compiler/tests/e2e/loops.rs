//! For loops

use super::harness::*;
use cape_ir::{Node, Operation, TType};

fn counting_loop(body: Vec<Node>) -> Node {
    Node::for_loop(
        Node::assign(Node::variable_declare(TType::Integer, "i"), Node::int(0)),
        Node::binary(TType::Bool, Operation::Lt, Node::ident("i"), Node::int(3)),
        Node::assign(
            Node::ident("i"),
            Node::binary(TType::Integer, Operation::Add, Node::ident("i"), Node::int(1)),
        ),
        Node::block(body),
    )
}

#[test]
fn test_for_becomes_while() {
    expect_main_body(
        vec![
            Node::variable_define(TType::Integer, "sum", Node::int(0)),
            counting_loop(vec![Node::assign(
                Node::ident("sum"),
                Node::binary(TType::Integer, Operation::Add, Node::ident("sum"), Node::ident("i")),
            )]),
            Node::ret(Node::ident("sum")),
        ],
        "    sum = 0\n    i = 0\n    while i < 3:\n        sum = sum + i\n        i = i + 1\n    return sum\n",
    );
}

#[test]
fn test_empty_loop_body_keeps_step() {
    expect_main_body(
        vec![counting_loop(vec![])],
        "    i = 0\n    while i < 3:\n        i = i + 1\n",
    );
}

#[test]
fn test_nested_loops_indent() {
    let inner = Node::for_loop(
        Node::variable_define(TType::Integer, "j", Node::int(0)),
        Node::binary(TType::Bool, Operation::Lt, Node::ident("j"), Node::ident("i")),
        Node::assign(
            Node::ident("j"),
            Node::binary(TType::Integer, Operation::Add, Node::ident("j"), Node::int(1)),
        ),
        Node::block(vec![]),
    );
    expect_main_body(
        vec![counting_loop(vec![inner])],
        "    i = 0\n    while i < 3:\n        j = 0\n        while j < i:\n            j = j + 1\n        i = i + 1\n",
    );
}
