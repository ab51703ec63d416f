//! Operators, precedence and grouping

use super::harness::*;
use cape_ir::Operation::{self, *};
use cape_ir::{Node, TType};

fn int(op: Operation, lhs: Node, rhs: Node) -> Node {
    Node::binary(TType::Integer, op, lhs, rhs)
}

fn cmp(op: Operation, lhs: Node, rhs: Node) -> Node {
    Node::binary(TType::Bool, op, lhs, rhs)
}

fn ret(value: Node) -> String {
    translate(&main_with(vec![Node::ret(value)]))
        .unwrap()
        .lines()
        .nth(1)
        .unwrap()
        .trim_start()
        .to_string()
}

#[test]
fn test_every_operator_spelling() {
    let expected = [
        (Add, "+"),
        (Sub, "-"),
        (Mul, "*"),
        (Div, "/"),
        (Mod, "%"),
        (And, "and"),
        (Or, "or"),
        (Eq, "=="),
        (Ne, "!="),
        (Lt, "<"),
        (Le, "<="),
        (Gt, ">"),
        (Ge, ">="),
    ];
    for (op, text) in expected {
        let out = ret(int(op, Node::ident("a"), Node::ident("b")));
        assert_eq!(out, format!("return a {} b", text));
    }
}

#[test]
fn test_precedence_without_parens() {
    assert_eq!(ret(int(Add, Node::ident("a"), int(Mul, Node::ident("b"), Node::ident("c")))), "return a + b * c");
    assert_eq!(
        ret(cmp(
            Or,
            cmp(Eq, Node::ident("a"), Node::int(1)),
            cmp(Gt, int(Mod, Node::ident("b"), Node::int(2)), Node::int(0)),
        )),
        "return a == 1 or b % 2 > 0"
    );
}

#[test]
fn test_grouping_round_trips() {
    assert_eq!(ret(int(Mul, int(Add, Node::ident("a"), Node::ident("b")), Node::ident("c"))), "return (a + b) * c");
    assert_eq!(ret(int(Sub, Node::ident("a"), int(Sub, Node::ident("b"), Node::ident("c")))), "return a - (b - c)");
    assert_eq!(ret(int(Sub, int(Sub, Node::ident("a"), Node::ident("b")), Node::ident("c"))), "return a - b - c");
}

#[test]
fn test_not() {
    assert_eq!(ret(Node::not(Node::ident("done"))), "return not done");
    assert_eq!(
        ret(cmp(And, Node::not(Node::ident("a")), cmp(Ne, Node::ident("b"), Node::int(0)))),
        "return not a and b != 0"
    );
}

#[test]
fn test_translation_is_deterministic() {
    let forest = main_with(vec![Node::ret(int(
        Mul,
        int(Add, Node::ident("a"), Node::ident("b")),
        int(Sub, Node::ident("c"), Node::int(1)),
    ))]);
    let first = translate(&forest).unwrap();
    for _ in 0..16 {
        assert_eq!(translate(&forest).unwrap(), first);
    }
}
