//! Concrete syntax tree for the supported `OpenQASM` surface.

use serde::{Deserialize, Serialize};

/// A complete program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// QASM version (e.g., "3.0"), when the source carries a header.
    pub version: Option<String>,
    /// Statements in the program, in source order.
    pub statements: Vec<Statement>,
}

/// The register kind of an old-style declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegKind {
    /// `qreg` / `qubit` — allocates qubit indices.
    Qubit,
    /// `creg` — allocates classical-bit indices.
    Bit,
}

/// A statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Statement {
    /// Include statement: `include "qelib1.inc";` (carried, not resolved).
    Include(String),

    /// Old-style register declaration: `qreg q[n];` or `creg c[n];`.
    RegDecl {
        kind: RegKind,
        name: String,
        designator: Option<Expression>,
    },

    /// New-style qubit declaration: `qubit[n] q;` or `qubit q;`.
    QubitDecl {
        name: String,
        designator: Option<Expression>,
    },

    /// Constant declaration: `const int n = 4;`.
    ConstDecl { name: String, value: Expression },

    /// Gate application.
    Gate(GateCall),

    /// Barrier: `barrier q;` (accepted, produces no IR).
    Barrier { operands: Vec<Operand> },

    /// Reset: `reset q[0];` (accepted, produces no IR).
    Reset { operands: Vec<Operand> },
}

/// A gate call: name, optional parenthesized angle list, operand list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateCall {
    /// Gate name.
    pub name: String,
    /// Angle expressions, possibly empty.
    pub angles: Vec<Expression>,
    /// Qubit operands the gate acts on.
    pub operands: Vec<Operand>,
}

/// A gate operand: a bare register name or an indexed reference, with
/// index operators possibly chained (`q[0]`, `m[1][2]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operand {
    pub name: String,
    pub indices: Vec<Expression>,
}

/// An expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expression {
    /// Decimal integer literal.
    Int(i64),
    /// Floating-point literal.
    Float(f64),
    /// Bare identifier, resolved through the environment.
    Identifier(String),
    /// Unary minus.
    Neg(Box<Expression>),
    /// Binary operation.
    BinOp {
        left: Box<Expression>,
        op: BinOp,
        right: Box<Expression>,
    },
    /// Parenthesized expression.
    Paren(Box<Expression>),
    /// Indexed identifier: `name[i]`, chained for nested arrays.
    Index {
        name: String,
        indices: Vec<Expression>,
    },
}

/// Binary operators of the supported grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        };
        write!(f, "{symbol}")
    }
}
