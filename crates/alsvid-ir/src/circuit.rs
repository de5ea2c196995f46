//! Circuit container: register width plus ordered instruction sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::instruction::Instruction;

/// A flat quantum circuit.
///
/// `width` is the total number of register indices allocated by the
/// declarations of the source program. Producers guarantee that every
/// operand index of every instruction lies in `[0, width)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    width: u32,
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit with the given register width.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            instructions: Vec::new(),
        }
    }

    /// Assemble a circuit from a width and a ready-made instruction sequence.
    pub fn from_parts(width: u32, instructions: Vec<Instruction>) -> Self {
        Self {
            width,
            instructions,
        }
    }

    /// The total number of allocated register indices.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The instruction sequence, in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Append an instruction.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over the instructions in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circuit (width {})", self.width)?;
        for inst in &self.instructions {
            writeln!(f, "  {inst}")?;
        }
        Ok(())
    }
}
