//! The closed instruction set of the flat circuit IR.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// A single gate instruction.
///
/// This is a closed set: downstream consumers match on it exhaustively, so
/// new variants are a breaking change by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Toffoli gate.
    Ccx {
        controls: (QubitId, QubitId),
        target: QubitId,
    },
    /// Controlled-RZ rotation.
    ControlledRz {
        control: QubitId,
        target: QubitId,
        angle: f64,
    },
    /// Controlled-NOT.
    Cnot { control: QubitId, target: QubitId },
    /// SWAP gate.
    Swap { a: QubitId, b: QubitId },
    /// Hadamard gate.
    H { target: QubitId },
    /// Phase gate.
    S { target: QubitId },
    /// Pauli-X gate.
    X { target: QubitId },
    /// Pauli-Y gate.
    Y { target: QubitId },
    /// Pauli-Z gate.
    Z { target: QubitId },
    /// Rotation around the X axis.
    Rx { target: QubitId, angle: f64 },
    /// Rotation around the Y axis.
    Ry { target: QubitId, angle: f64 },
    /// Rotation around the Z axis.
    Rz { target: QubitId, angle: f64 },
}

impl Instruction {
    /// The lowercase gate name as it appears in QASM source.
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Ccx { .. } => "ccx",
            Instruction::ControlledRz { .. } => "crz",
            Instruction::Cnot { .. } => "cx",
            Instruction::Swap { .. } => "swap",
            Instruction::H { .. } => "h",
            Instruction::S { .. } => "s",
            Instruction::X { .. } => "x",
            Instruction::Y { .. } => "y",
            Instruction::Z { .. } => "z",
            Instruction::Rx { .. } => "rx",
            Instruction::Ry { .. } => "ry",
            Instruction::Rz { .. } => "rz",
        }
    }

    /// Every qubit this instruction touches, controls first.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Instruction::Ccx { controls, target } => vec![controls.0, controls.1, target],
            Instruction::ControlledRz {
                control, target, ..
            }
            | Instruction::Cnot { control, target } => vec![control, target],
            Instruction::Swap { a, b } => vec![a, b],
            Instruction::H { target }
            | Instruction::S { target }
            | Instruction::X { target }
            | Instruction::Y { target }
            | Instruction::Z { target }
            | Instruction::Rx { target, .. }
            | Instruction::Ry { target, .. }
            | Instruction::Rz { target, .. } => vec![target],
        }
    }

    /// The rotation angle, if this instruction carries one.
    pub fn angle(&self) -> Option<f64> {
        match *self {
            Instruction::ControlledRz { angle, .. }
            | Instruction::Rx { angle, .. }
            | Instruction::Ry { angle, .. }
            | Instruction::Rz { angle, .. } => Some(angle),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Some(angle) = self.angle() {
            write!(f, "({angle})")?;
        }
        for (i, q) in self.qubits().iter().enumerate() {
            if i == 0 {
                write!(f, " {q}")?;
            } else {
                write!(f, ", {q}")?;
            }
        }
        Ok(())
    }
}
