//! Binary operators and their binding strength

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator carried by a `Binary` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// Logical and
    And,
    /// Logical or
    Or,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

/// Precedence level of a binary operator (higher = tighter binding).
///
/// Levels are visited loosest first by every cascade in the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Precedence {
    LogicalAndOr = 1,   // and, or
    Equality = 2,       // ==, !=
    Relational = 3,     // <, <=, >, >=
    Additive = 4,       // +, -
    Multiplicative = 5, // *, /, %
}

impl Precedence {
    /// The level every cascade starts from
    pub const LOOSEST: Precedence = Precedence::LogicalAndOr;

    /// Get the next tighter level, or `None` past multiplicative
    pub fn tighter(self) -> Option<Precedence> {
        match self {
            Precedence::LogicalAndOr => Some(Precedence::Equality),
            Precedence::Equality => Some(Precedence::Relational),
            Precedence::Relational => Some(Precedence::Additive),
            Precedence::Additive => Some(Precedence::Multiplicative),
            Precedence::Multiplicative => None,
        }
    }
}

impl Operation {
    /// All operators, in declaration order
    pub const ALL: [Operation; 13] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Mod,
        Operation::And,
        Operation::Or,
        Operation::Eq,
        Operation::Ne,
        Operation::Lt,
        Operation::Le,
        Operation::Gt,
        Operation::Ge,
    ];

    /// Get the precedence level this operator belongs to
    pub fn precedence(self) -> Precedence {
        match self {
            Operation::And | Operation::Or => Precedence::LogicalAndOr,
            Operation::Eq | Operation::Ne => Precedence::Equality,
            Operation::Lt | Operation::Le | Operation::Gt | Operation::Ge => Precedence::Relational,
            Operation::Add | Operation::Sub => Precedence::Additive,
            Operation::Mul | Operation::Div | Operation::Mod => Precedence::Multiplicative,
        }
    }

    /// Check if this is a comparison (equality or relational)
    pub fn is_comparison(self) -> bool {
        matches!(
            self.precedence(),
            Precedence::Equality | Precedence::Relational
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Mod => "mod",
            Operation::And => "and",
            Operation::Or => "or",
            Operation::Eq => "eq",
            Operation::Ne => "ne",
            Operation::Lt => "lt",
            Operation::Le => "le",
            Operation::Gt => "gt",
            Operation::Ge => "ge",
        };
        write!(f, "{}", name)
    }
}
