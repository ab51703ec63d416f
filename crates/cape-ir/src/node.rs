//! IR nodes
//!
//! Every node kind owns exactly one payload struct, so the payload reachable
//! from a node always matches its kind.

use crate::op::Operation;
use crate::ty::TType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of an IR node, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum NodeKind {
    VariableDeclare,
    FunctionDeclare,
    VariableDefine,
    FunctionDefine,
    Block,
    IfElse,
    While,
    For,
    Assign,
    Binary,
    Literal,
    Not,
    Multiple,
    Return,
    Call,
    Ident,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// IR node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Declaration without initializer: `int x`
    VariableDeclare(VariableDeclare),
    /// Function prototype: `int f(int a);`
    FunctionDeclare(FunctionDeclare),
    /// Declaration with initializer: `int x = 1`
    VariableDefine(VariableDefine),
    /// Function definition
    FunctionDefine(FunctionDefine),
    /// Statement sequence
    Block(Block),
    /// If statement with optional else
    IfElse(IfElse),
    /// While loop
    While(While),
    /// Three-part for loop
    For(For),
    /// Assignment expression
    Assign(Assign),
    /// Binary operation
    Binary(Binary),
    /// Literal value
    Literal(Literal),
    /// Logical negation
    Not(Not),
    /// Ordered sequence of values (call arguments, multi-value returns)
    Multiple(Multiple),
    /// Return statement
    Return(Return),
    /// Function call
    Call(Call),
    /// Identifier
    Ident(Ident),
}

/// `int x`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclare {
    /// Declared type
    pub ty: TType,
    /// Declared name
    pub ident: Ident,
}

/// `int f(int a);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclare {
    /// Return type
    pub ty: TType,
    /// Function name
    pub ident: Ident,
    /// Parameter list, `None` when the parser saw no parameters
    pub params: Option<Multiple>,
}

/// `int x = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDefine {
    /// Declared type
    pub ty: TType,
    /// Declared name
    pub ident: Ident,
    /// Initializer
    pub value: Box<Node>,
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefine {
    /// Return type
    pub ty: TType,
    /// Function name
    pub ident: Ident,
    /// Parameter list, `None` when the parser saw no parameters
    pub params: Option<Multiple>,
    /// Body
    pub block: Block,
}

/// Statement sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Statements in source order
    pub stmts: Vec<Node>,
}

/// If statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfElse {
    /// Condition
    pub cond: Box<Node>,
    /// Taken when the condition holds
    pub if_block: Box<Node>,
    /// Taken otherwise, if present
    pub else_block: Option<Box<Node>>,
}

/// While loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct While {
    /// Loop condition
    pub cond: Box<Node>,
    /// Loop body
    pub block: Box<Node>,
}

/// `for (init; cond; step) block`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct For {
    /// Runs once before the loop
    pub init: Box<Node>,
    /// Checked before every iteration
    pub cond: Box<Node>,
    /// Runs after every iteration
    pub step: Box<Node>,
    /// Loop body
    pub block: Box<Node>,
}

/// `to = value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assign {
    /// Assignment target
    pub to: Box<Node>,
    /// Assigned value
    pub value: Box<Node>,
}

/// `lhs op rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binary {
    /// Result type, computed by the front end
    pub ty: TType,
    /// Operator
    pub op: Operation,
    /// Left operand
    pub lhs: Box<Node>,
    /// Right operand
    pub rhs: Box<Node>,
}

/// Literal value; its type follows from the variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// Integer literal
    Integer(i64),
    /// String literal (unescaped contents, without quotes)
    String(String),
    /// Boolean literal
    Bool(bool),
}

impl Literal {
    /// Get the type of this literal
    pub fn ty(&self) -> TType {
        match self {
            Literal::Integer(_) => TType::Integer,
            Literal::String(_) => TType::String,
            Literal::Bool(_) => TType::Bool,
        }
    }
}

/// `!value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Not {
    /// Negated operand
    pub value: Box<Node>,
}

/// Ordered sequence of values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiple {
    /// Aggregate type, usually a tuple or `Null`
    pub ty: TType,
    /// Values in order
    pub values: Vec<Node>,
}

impl Multiple {
    /// Create an untyped sequence
    pub fn new(values: Vec<Node>) -> Self {
        Self {
            ty: TType::Null,
            values,
        }
    }

    /// Check if the sequence has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `return value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Return {
    /// Type of the returned value
    pub ty: TType,
    /// Returned expression
    pub value: Box<Node>,
}

/// `ident(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Result type
    pub ty: TType,
    /// Callee
    pub ident: Ident,
    /// Arguments in order
    pub args: Multiple,
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    /// Name, owned by value
    pub name: String,
}

impl Ident {
    /// Create an identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Node {
    /// Get the kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::VariableDeclare(_) => NodeKind::VariableDeclare,
            Node::FunctionDeclare(_) => NodeKind::FunctionDeclare,
            Node::VariableDefine(_) => NodeKind::VariableDefine,
            Node::FunctionDefine(_) => NodeKind::FunctionDefine,
            Node::Block(_) => NodeKind::Block,
            Node::IfElse(_) => NodeKind::IfElse,
            Node::While(_) => NodeKind::While,
            Node::For(_) => NodeKind::For,
            Node::Assign(_) => NodeKind::Assign,
            Node::Binary(_) => NodeKind::Binary,
            Node::Literal(_) => NodeKind::Literal,
            Node::Not(_) => NodeKind::Not,
            Node::Multiple(_) => NodeKind::Multiple,
            Node::Return(_) => NodeKind::Return,
            Node::Call(_) => NodeKind::Call,
            Node::Ident(_) => NodeKind::Ident,
        }
    }

    /// Get the type carried by this node, `TType::Null` for untyped kinds
    pub fn ty(&self) -> TType {
        match self {
            Node::VariableDeclare(n) => n.ty.clone(),
            Node::FunctionDeclare(n) => n.ty.clone(),
            Node::VariableDefine(n) => n.ty.clone(),
            Node::FunctionDefine(n) => n.ty.clone(),
            Node::Binary(n) => n.ty.clone(),
            Node::Literal(lit) => lit.ty(),
            Node::Not(_) => TType::Bool,
            Node::Multiple(n) => n.ty.clone(),
            Node::Return(n) => n.ty.clone(),
            Node::Call(n) => n.ty.clone(),
            Node::Block(_)
            | Node::IfElse(_)
            | Node::While(_)
            | Node::For(_)
            | Node::Assign(_)
            | Node::Ident(_) => TType::Null,
        }
    }

    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    /// `int x`
    pub fn variable_declare(ty: TType, name: impl Into<String>) -> Self {
        Node::VariableDeclare(VariableDeclare {
            ty,
            ident: Ident::new(name),
        })
    }

    /// `int f(params);`
    pub fn function_declare(
        ty: TType,
        name: impl Into<String>,
        params: Option<Multiple>,
    ) -> Self {
        Node::FunctionDeclare(FunctionDeclare {
            ty,
            ident: Ident::new(name),
            params,
        })
    }

    /// `int x = value`
    pub fn variable_define(ty: TType, name: impl Into<String>, value: Node) -> Self {
        Node::VariableDefine(VariableDefine {
            ty,
            ident: Ident::new(name),
            value: Box::new(value),
        })
    }

    /// Function definition
    pub fn function_define(
        ty: TType,
        name: impl Into<String>,
        params: Option<Multiple>,
        stmts: Vec<Node>,
    ) -> Self {
        Node::FunctionDefine(FunctionDefine {
            ty,
            ident: Ident::new(name),
            params,
            block: Block { stmts },
        })
    }

    /// Statement sequence
    pub fn block(stmts: Vec<Node>) -> Self {
        Node::Block(Block { stmts })
    }

    /// If statement
    pub fn if_else(cond: Node, if_block: Node, else_block: Option<Node>) -> Self {
        Node::IfElse(IfElse {
            cond: Box::new(cond),
            if_block: Box::new(if_block),
            else_block: else_block.map(Box::new),
        })
    }

    /// While loop
    pub fn while_loop(cond: Node, block: Node) -> Self {
        Node::While(While {
            cond: Box::new(cond),
            block: Box::new(block),
        })
    }

    /// Three-part for loop
    pub fn for_loop(init: Node, cond: Node, step: Node, block: Node) -> Self {
        Node::For(For {
            init: Box::new(init),
            cond: Box::new(cond),
            step: Box::new(step),
            block: Box::new(block),
        })
    }

    /// `to = value`
    pub fn assign(to: Node, value: Node) -> Self {
        Node::Assign(Assign {
            to: Box::new(to),
            value: Box::new(value),
        })
    }

    /// `lhs op rhs` with a precomputed result type
    pub fn binary(ty: TType, op: Operation, lhs: Node, rhs: Node) -> Self {
        Node::Binary(Binary {
            ty,
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    /// Integer literal
    pub fn int(value: i64) -> Self {
        Node::Literal(Literal::Integer(value))
    }

    /// String literal
    pub fn string(value: impl Into<String>) -> Self {
        Node::Literal(Literal::String(value.into()))
    }

    /// Boolean literal
    pub fn bool(value: bool) -> Self {
        Node::Literal(Literal::Bool(value))
    }

    /// `!value`
    pub fn not(value: Node) -> Self {
        Node::Not(Not {
            value: Box::new(value),
        })
    }

    /// Ordered sequence of values
    pub fn multiple(ty: TType, values: Vec<Node>) -> Self {
        Node::Multiple(Multiple { ty, values })
    }

    /// `return value`
    pub fn ret(value: Node) -> Self {
        let ty = value.ty();
        Node::Return(Return {
            ty,
            value: Box::new(value),
        })
    }

    /// `name(args)`
    pub fn call(ty: TType, name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Call(Call {
            ty,
            ident: Ident::new(name),
            args: Multiple::new(args),
        })
    }

    /// Identifier
    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(Ident::new(name))
    }
}
