//! C syntax tree
//!
//! Produced by lowering and handed to downstream consumers; this crate does
//! not print C.

use cape_ir::Operation;
use serde::Serialize;

/// C type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CType {
    /// `int`
    Integer,
    /// `char *`
    String,
    /// `bool`
    Bool,
}

/// C node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    FunctionDefine(FunctionDefine),
    VariableDefine(VariableDefine),
    Block(Block),
    Return(Return),
    IfElse(IfElse),
    For(For),
    Assign(Assign),
    Binary(Binary),
    Literal(Literal),
    Not(Not),
    Ident(Ident),
}

/// `int main(void) { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDefine {
    /// Return type, `None` for `void`
    pub ty: Option<CType>,
    pub ident: Ident,
    pub params: Vec<Param>,
    pub block: Block,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub ty: Option<CType>,
    pub ident: Ident,
}

/// `int x = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDefine {
    pub ty: Option<CType>,
    pub ident: Ident,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub stmts: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Return {
    pub value: Box<Node>,
}

/// C allows a bare statement as a branch, so branches are plain nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfElse {
    pub cond: Box<Node>,
    pub if_block: Box<Node>,
    pub else_block: Option<Box<Node>>,
}

/// `for (init; cond; step) block`, where init and step may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct For {
    pub init: Option<Box<Node>>,
    pub cond: Box<Node>,
    pub step: Option<Box<Node>>,
    pub block: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assign {
    pub to: Box<Node>,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binary {
    pub ty: Option<CType>,
    pub op: Operation,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Literal {
    Integer(i64),
    String(String),
}

impl Literal {
    pub fn ty(&self) -> CType {
        match self {
            Literal::Integer(_) => CType::Integer,
            Literal::String(_) => CType::String,
        }
    }
}

/// `!value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Not {
    pub value: Box<Node>,
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
    pub fn function_define(ty: Option<CType>, name: impl Into<String>, stmts: Vec<Node>) -> Self {
        Node::FunctionDefine(FunctionDefine {
            ty,
            ident: Ident::new(name),
            params: Vec::new(),
            block: Block { stmts },
        })
    }

    pub fn variable_define(ty: Option<CType>, name: impl Into<String>, value: Node) -> Self {
        Node::VariableDefine(VariableDefine {
            ty,
            ident: Ident::new(name),
            value: Box::new(value),
        })
    }

    pub fn block(stmts: Vec<Node>) -> Self {
        Node::Block(Block { stmts })
    }

    pub fn ret(value: Node) -> Self {
        Node::Return(Return {
            value: Box::new(value),
        })
    }

    pub fn if_else(cond: Node, if_block: Node, else_block: Option<Node>) -> Self {
        Node::IfElse(IfElse {
            cond: Box::new(cond),
            if_block: Box::new(if_block),
            else_block: else_block.map(Box::new),
        })
    }

    pub fn for_loop(init: Option<Node>, cond: Node, step: Option<Node>, block: Node) -> Self {
        Node::For(For {
            init: init.map(Box::new),
            cond: Box::new(cond),
            step: step.map(Box::new),
            block: Box::new(block),
        })
    }

    pub fn assign(to: Node, value: Node) -> Self {
        Node::Assign(Assign {
            to: Box::new(to),
            value: Box::new(value),
        })
    }

    pub fn binary(ty: Option<CType>, op: Operation, lhs: Node, rhs: Node) -> Self {
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

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(Ident::new(name))
    }
}
