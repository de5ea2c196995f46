//! Error types for the QASM3 lowering pass.

use thiserror::Error;

/// Errors that can occur while parsing or lowering a program.
///
/// The pass is fail-fast: the first error anywhere aborts the whole lowering
/// and no partial circuit is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at byte {position}: {message}")]
    LexerError { position: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at byte {position}: expected {expected}, found {found}")]
    UnexpectedToken {
        position: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Invalid version.
    #[error("Invalid OPENQASM version: {0}")]
    InvalidVersion(String),

    /// Identifier not bound in the environment.
    #[error("name '{0}' is not defined")]
    UndefinedName(String),

    /// Operator, conversion, or indexing applied to the wrong value kind.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Negative index, index past the end of a register, or a non-positive
    /// register size designator.
    #[error("Index {index} out of range for '{name}' (length {len})")]
    IndexOutOfRange {
        name: String,
        index: i64,
        len: usize,
    },

    /// Division or modulo by zero.
    #[error("Arithmetic error: {0}")]
    ArithmeticError(&'static str),

    /// Gate name absent from the dispatch table.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Wrong number of qubit operands on a gate call.
    #[error("Gate '{gate}' expects {expected} qubit operands, got {got}")]
    WrongOperandCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// Wrong number of angle parameters on a gate call.
    #[error("Gate '{gate}' expects {expected} angle parameters, got {got}")]
    WrongAngleCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// A token that cannot start an expression. Internal-consistency class:
    /// should not occur for any program the grammar accepts.
    #[error("Cannot parse expression at: {0}")]
    UnparseableExpression(String),

    /// I/O failure in the file/reader entry points.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
