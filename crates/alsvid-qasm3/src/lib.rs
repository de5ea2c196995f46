//! `OpenQASM` parser and lowering pass for Alsvid
//!
//! This crate lowers a textual quantum-circuit description in the `OpenQASM`
//! family into the flat Alsvid circuit IR: a register width plus an ordered
//! sequence of gate instructions.
//!
//! # Supported Features
//!
//! | Feature | Status | Example |
//! |---------|--------|---------|
//! | Version declaration | ✅ (optional) | `OPENQASM 3.0;` |
//! | Old-style registers | ✅ | `qreg q[3];`, `creg c[2];` |
//! | New-style qubit declarations | ✅ | `qubit[5] q;`, `qubit q;` |
//! | Constant declarations | ✅ | `const int n = 4;` |
//! | Standard gates | ✅ | `h q[0];`, `cx q[0], q[1];` |
//! | Parameterized gates | ✅ | `rx(pi/4) q[0];` |
//! | Constant folding | ✅ | `rz(5*pi/4) q[0];` |
//! | Comments | ✅ | `// comment` |
//! | Barrier / reset | accepted, no IR emitted | `barrier q;` |
//!
//! # Example
//!
//! ```rust
//! use alsvid_qasm3::parse;
//!
//! let qasm = r#"
//!     include "qelib1.inc";
//!     qreg q[2];
//!     h q[0];
//!     cx q[0], q[1];
//! "#;
//!
//! let circuit = parse(qasm).unwrap();
//! assert_eq!(circuit.width(), 2);
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! # Supported Gates
//!
//! Single-qubit: `h`, `s`, `x`, `y`, `z`
//!
//! Parameterized: `rx(θ)`, `ry(θ)`, `rz(θ)`
//!
//! Two-qubit: `cx`, `swap`, `crz(θ)`
//!
//! Three-qubit: `ccx` (Toffoli)
//!
//! Any other gate name fails with [`ParseError::UnknownGate`].
//!
//! # Failure model
//!
//! Lowering is fail-fast: the first problem (undefined name, type mismatch,
//! out-of-range index, arithmetic error, unknown gate) aborts the pass and
//! no partial circuit is returned. Each call to an entry point builds its
//! symbol environment and allocation counter from scratch, so concurrent
//! parses of independent sources never share state.

mod ast;
mod error;
mod lexer;
mod parser;
mod value;

pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_ast, parse_file, parse_reader};
pub use value::Value;

// Re-export CST types for advanced users
pub mod syntax {
    pub use crate::ast::*;
}
