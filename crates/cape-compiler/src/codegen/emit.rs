//! Expression Generation
//!
//! Walks the same cascade as lowering, with and/or split into two levels
//! and a `not` level between them and the comparisons, as Python binds them.
//! An operand is rendered at the level its position allows; a node that
//! only fits a looser level falls through to primary and is parenthesized.
//!
//! Comparison operands are rendered at the additive level because Python
//! chains `a < b < c` instead of nesting it.

use super::PythonGenerator;
use crate::error::{CodegenError, CodegenResult};
use crate::python::ast::{Call, Literal, Node};
use cape_ir::{Operation, Precedence};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Or,
    And,
    Not,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

impl Level {
    fn tighter(self) -> Level {
        match self {
            Level::Or => Level::And,
            Level::And => Level::Not,
            Level::Not => Level::Equality,
            Level::Equality => Level::Relational,
            Level::Relational => Level::Additive,
            Level::Additive => Level::Multiplicative,
            Level::Multiplicative => Level::Unary,
            Level::Unary | Level::Primary => Level::Primary,
        }
    }

    fn of(op: Operation) -> Level {
        match op.precedence() {
            Precedence::LogicalAndOr if op == Operation::Or => Level::Or,
            Precedence::LogicalAndOr => Level::And,
            Precedence::Equality => Level::Equality,
            Precedence::Relational => Level::Relational,
            Precedence::Additive => Level::Additive,
            Precedence::Multiplicative => Level::Multiplicative,
        }
    }

    /// Levels for the left and right operand of an operator at this level
    fn operands(self) -> (Level, Level) {
        match self {
            Level::Equality | Level::Relational => (Level::Additive, Level::Additive),
            level => (level, level.tighter()),
        }
    }
}

fn operator(op: Operation) -> &'static str {
    match op {
        Operation::Add => "+",
        Operation::Sub => "-",
        Operation::Mul => "*",
        Operation::Div => "/",
        Operation::Mod => "%",
        Operation::And => "and",
        Operation::Or => "or",
        Operation::Eq => "==",
        Operation::Ne => "!=",
        Operation::Lt => "<",
        Operation::Le => "<=",
        Operation::Gt => ">",
        Operation::Ge => ">=",
    }
}

impl PythonGenerator<'_> {
    /// Generate an expression in statement position
    pub(super) fn gen_expr(&self, node: &Node) -> CodegenResult<String> {
        match node {
            Node::Assign(assign) => {
                let to = self.gen_value(&assign.to)?;
                let value = self.gen_expr(&assign.value)?;
                Ok(format!("{} = {}", to, value))
            }
            Node::Multiple(multiple) => self.gen_tuple(&multiple.values),
            _ => self.gen_value(node),
        }
    }

    /// Generate an expression that must stand as a single value
    fn gen_value(&self, node: &Node) -> CodegenResult<String> {
        self.gen_level(node, Level::Or)
    }

    fn gen_level(&self, node: &Node, level: Level) -> CodegenResult<String> {
        match (node, level) {
            (_, Level::Primary) => self.gen_primary(node),
            (Node::Not(not), Level::Not) => {
                let value = self.gen_level(&not.value, Level::Not)?;
                Ok(format!("not {}", value))
            }
            (Node::Binary(binary), _) if Level::of(binary.op) == level => {
                let (lhs_level, rhs_level) = level.operands();
                let lhs = self.gen_level(&binary.lhs, lhs_level)?;
                let rhs = self.gen_level(&binary.rhs, rhs_level)?;
                Ok(format!("{} {} {}", lhs, operator(binary.op), rhs))
            }
            _ => self.gen_level(node, level.tighter()),
        }
    }

    fn gen_primary(&self, node: &Node) -> CodegenResult<String> {
        match node {
            Node::Ident(ident) => Ok(ident.name.clone()),
            Node::Literal(Literal::Integer(value)) => Ok(value.to_string()),
            Node::Literal(Literal::String(value)) => Ok(quote(value)),
            Node::Call(call) => self.gen_call(call),
            Node::Multiple(multiple) if multiple.values.is_empty() => Ok("()".to_string()),
            Node::Multiple(multiple) => Ok(format!("({})", self.gen_tuple(&multiple.values)?)),
            Node::Binary(_) | Node::Not(_) => Ok(format!("({})", self.gen_value(node)?)),
            Node::Assign(assign) => {
                let to = self.gen_value(&assign.to)?;
                let value = self.gen_value(&assign.value)?;
                Ok(format!("({} := {})", to, value))
            }
            Node::FunctionDefine(_)
            | Node::Block(_)
            | Node::Return(_)
            | Node::IfElse(_)
            | Node::For(_) => Err(CodegenError::NotAnExpression {
                kind: node.kind_name(),
            }),
        }
    }

    fn gen_tuple(&self, values: &[Node]) -> CodegenResult<String> {
        match values {
            [] => Ok("()".to_string()),
            [single] => Ok(format!("{},", self.gen_value(single)?)),
            _ => self.gen_args(values),
        }
    }

    fn gen_args(&self, values: &[Node]) -> CodegenResult<String> {
        let args = values
            .iter()
            .map(|value| self.gen_value(value))
            .collect::<CodegenResult<Vec<_>>>()?;
        Ok(args.join(", "))
    }

    fn gen_call(&self, call: &Call) -> CodegenResult<String> {
        if call.ident.name == "printf" {
            return self.gen_printf(call);
        }
        let args = self.gen_args(&call.args.values)?;
        Ok(format!("{}({})", call.ident.name, args))
    }

    /// `printf("%d\n", x)` becomes `print("{}\n".format(x))`
    fn gen_printf(&self, call: &Call) -> CodegenResult<String> {
        let malformed = |reason| CodegenError::MalformedCall {
            callee: call.ident.name.clone(),
            reason,
        };

        let (format, rest) = call
            .args
            .values
            .split_first()
            .ok_or_else(|| malformed("missing format string"))?;
        let Node::Literal(Literal::String(format)) = format else {
            return Err(malformed("format string must be a string literal"));
        };

        if rest.is_empty() {
            return Ok(format!("print({})", quote(&rewrite_format(format, false))));
        }
        let args = self.gen_args(rest)?;
        Ok(format!(
            "print({}.format({}))",
            quote(&rewrite_format(format, true)),
            args
        ))
    }
}

/// Rewrite printf conversions to `str.format` placeholders
///
/// `%d` and `%s` become `{}` and `%%` becomes `%`. When the result feeds
/// `.format`, literal braces are doubled.
fn rewrite_format(format: &str, escape_braces: bool) -> String {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '%' => match chars.peek() {
                Some('d') | Some('s') => {
                    chars.next();
                    out.push_str("{}");
                }
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                _ => out.push('%'),
            },
            '{' if escape_braces => out.push_str("{{"),
            '}' if escape_braces => out.push_str("}}"),
            c => out.push(c),
        }
    }
    out
}

/// Render a double-quoted Python string literal
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() && (c as u32) <= 0xff => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
