//! Python syntax tree
//!
//! Produced by lowering and consumed by [`codegen`](crate::codegen). Suites
//! of `def`, `if` and loops are always [`Block`]s since Python has no bare
//! statement bodies.

use cape_ir::Operation;
use serde::Serialize;

/// Python type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PyType {
    Integer,
    String,
    Bool,
}

impl PyType {
    /// Name used in annotations
    pub fn annotation(self) -> &'static str {
        match self {
            PyType::Integer => "int",
            PyType::String => "str",
            PyType::Bool => "bool",
        }
    }
}

/// Python node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    FunctionDefine(FunctionDefine),
    Block(Block),
    Multiple(Multiple),
    Return(Return),
    IfElse(IfElse),
    For(For),
    Assign(Assign),
    Binary(Binary),
    Literal(Literal),
    Not(Not),
    Call(Call),
    Ident(Ident),
}

impl Node {
    /// Name of this node's kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::FunctionDefine(_) => "FunctionDefine",
            Node::Block(_) => "Block",
            Node::Multiple(_) => "Multiple",
            Node::Return(_) => "Return",
            Node::IfElse(_) => "IfElse",
            Node::For(_) => "For",
            Node::Assign(_) => "Assign",
            Node::Binary(_) => "Binary",
            Node::Literal(_) => "Literal",
            Node::Not(_) => "Not",
            Node::Call(_) => "Call",
            Node::Ident(_) => "Ident",
        }
    }

    /// Wrap a node as a suite, unless it already is one
    pub fn into_block(self) -> Block {
        match self {
            Node::Block(block) => block,
            stmt => Block { stmts: vec![stmt] },
        }
    }
}

/// `def name(params):`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDefine {
    /// Return type, rendered only when type hints are enabled
    pub ty: Option<PyType>,
    pub ident: Ident,
    pub params: Vec<Ident>,
    pub block: Block,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub stmts: Vec<Node>,
}

/// Comma-separated values: a tuple, or call arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Multiple {
    pub values: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Return {
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfElse {
    pub cond: Box<Node>,
    pub if_block: Block,
    pub else_block: Option<Block>,
}

/// C-style loop; rendered as `init` followed by a `while` whose body ends
/// with `step`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct For {
    pub init: Option<Box<Node>>,
    pub cond: Box<Node>,
    pub step: Option<Box<Node>>,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assign {
    pub to: Box<Node>,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binary {
    pub ty: Option<PyType>,
    pub op: Operation,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Literal {
    Integer(i64),
    String(String),
}

/// `not value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Not {
    pub value: Box<Node>,
}

/// `name(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    pub ident: Ident,
    pub args: Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl Node {
    pub fn function_define(ty: Option<PyType>, name: impl Into<String>, stmts: Vec<Node>) -> Self {
        Node::FunctionDefine(FunctionDefine {
            ty,
            ident: Ident::new(name),
            params: Vec::new(),
            block: Block { stmts },
        })
    }

    pub fn block(stmts: Vec<Node>) -> Self {
        Node::Block(Block { stmts })
    }

    pub fn multiple(values: Vec<Node>) -> Self {
        Node::Multiple(Multiple { values })
    }

    pub fn ret(value: Node) -> Self {
        Node::Return(Return {
            value: Box::new(value),
        })
    }

    pub fn if_else(cond: Node, if_block: Node, else_block: Option<Node>) -> Self {
        Node::IfElse(IfElse {
            cond: Box::new(cond),
            if_block: if_block.into_block(),
            else_block: else_block.map(Node::into_block),
        })
    }

    pub fn for_loop(init: Option<Node>, cond: Node, step: Option<Node>, block: Node) -> Self {
        Node::For(For {
            init: init.map(Box::new),
            cond: Box::new(cond),
            step: step.map(Box::new),
            block: block.into_block(),
        })
    }

    pub fn assign(to: Node, value: Node) -> Self {
        Node::Assign(Assign {
            to: Box::new(to),
            value: Box::new(value),
        })
    }

    pub fn binary(ty: Option<PyType>, op: Operation, lhs: Node, rhs: Node) -> Self {
        Node::Binary(Binary {
            ty,
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn int(value: i64) -> Self {
        Node::Literal(Literal::Integer(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::Literal(Literal::String(value.into()))
    }

    pub fn not(value: Node) -> Self {
        Node::Not(Not {
            value: Box::new(value),
        })
    }

    pub fn call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Call(Call {
            ident: Ident::new(name),
            args: Multiple { values: args },
        })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(Ident::new(name))
    }
}
