//! Alsvid Circuit Intermediate Representation
//!
//! This crate provides the flat circuit IR consumed by downstream simulators
//! and compilers: a register width plus an ordered sequence of gate
//! instructions drawn from a fixed, finite instruction set.
//!
//! # Core Components
//!
//! - **Qubit addressing**: [`QubitId`] indexes into a circuit's qubit space
//! - **Instructions**: [`Instruction`], a closed enum of the twelve supported
//!   gate shapes
//! - **Circuit**: [`Circuit`], the width + instruction-sequence container
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{Circuit, Instruction, QubitId};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.push(Instruction::H { target: QubitId(0) });
//! circuit.push(Instruction::Cnot {
//!     control: QubitId(0),
//!     target: QubitId(1),
//! });
//!
//! assert_eq!(circuit.width(), 2);
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Angles | Description |
//! |------|--------|--------|-------------|
//! | `H` | 1 | 0 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | 0 | Pauli gates |
//! | `S` | 1 | 0 | Phase gate |
//! | `Rx`, `Ry`, `Rz` | 1 | 1 | Rotation gates |
//! | `Cnot` | 2 | 0 | Controlled-NOT |
//! | `ControlledRz` | 2 | 1 | Controlled-RZ rotation |
//! | `Swap` | 2 | 0 | SWAP gate |
//! | `Ccx` | 3 | 0 | Toffoli (CCNOT) gate |

pub mod circuit;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use instruction::Instruction;
pub use qubit::QubitId;
