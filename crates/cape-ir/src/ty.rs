//! Semantic types attached to IR nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of an IR node
///
/// `Null` doubles as "no type in this context": kinds that carry no type
/// report it, and type mapping treats it as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TType {
    /// No type
    #[default]
    Null,
    /// Integer
    Integer,
    /// String
    String,
    /// Boolean
    Bool,
    /// Aggregate of several types, used by multi-value returns
    Tuple(Vec<TType>),
}

impl TType {
    /// Check if this is the absent type
    pub fn is_null(&self) -> bool {
        matches!(self, TType::Null)
    }

    /// Check if this is one of the primitives Integer, String or Bool
    pub fn is_primitive(&self) -> bool {
        matches!(self, TType::Integer | TType::String | TType::Bool)
    }

    /// Get the member types if this is a tuple
    pub fn as_tuple(&self) -> Option<&[TType]> {
        match self {
            TType::Tuple(members) => Some(members),
            _ => None,
        }
    }
}

impl fmt::Display for TType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TType::Null => write!(f, "null"),
            TType::Integer => write!(f, "integer"),
            TType::String => write!(f, "string"),
            TType::Bool => write!(f, "bool"),
            TType::Tuple(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, ")")
            }
        }
    }
}
