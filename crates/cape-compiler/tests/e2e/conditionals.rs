//! If / else

use super::harness::*;
use cape_ir::{Node, Operation, TType};

fn eq(lhs: Node, rhs: Node) -> Node {
    Node::binary(TType::Bool, Operation::Eq, lhs, rhs)
}

#[test]
fn test_if_without_else() {
    expect_main_body(
        vec![
            Node::if_else(eq(Node::ident("x"), Node::int(1)), Node::ret(Node::int(10)), None),
            Node::ret(Node::int(0)),
        ],
        "    if x == 1:\n        return 10\n    return 0\n",
    );
}

#[test]
fn test_if_else_blocks() {
    expect_main_body(
        vec![Node::if_else(
            Node::ident("ready"),
            Node::block(vec![
                Node::assign(Node::ident("y"), Node::int(1)),
                Node::ret(Node::ident("y")),
            ]),
            Some(Node::block(vec![Node::ret(Node::int(0))])),
        )],
        "    if ready:\n        y = 1\n        return y\n    else:\n        return 0\n",
    );
}

#[test]
fn test_else_if_chain() {
    let chain = Node::if_else(
        eq(Node::ident("x"), Node::int(1)),
        Node::ret(Node::int(10)),
        Some(Node::if_else(
            eq(Node::ident("x"), Node::int(2)),
            Node::ret(Node::int(20)),
            Some(Node::ret(Node::int(0))),
        )),
    );
    expect_main_body(
        vec![chain],
        "    if x == 1:\n        return 10\n    elif x == 2:\n        return 20\n    else:\n        return 0\n",
    );
}

#[test]
fn test_branch_of_only_declarations_gets_pass() {
    expect_main_body(
        vec![Node::if_else(
            Node::ident("c"),
            Node::variable_declare(TType::Integer, "unused"),
            None,
        )],
        "    if c:\n        pass\n",
    );
}
