//! CST-to-circuit lowering: declaration processing, constant folding, and
//! gate dispatch.

use alsvid_ir::{Circuit, Instruction, QubitId};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::ast::{Expression, GateCall, Operand, Program, RegKind, Statement};
use crate::error::{ParseError, ParseResult};
use crate::value::Value;

/// Lower a CST Program to a Circuit.
pub(crate) fn lower_to_circuit(program: &Program) -> ParseResult<Circuit> {
    Lowerer::new().lower(program)
}

/// One in-flight lowering pass.
///
/// The environment and the allocation counter live exactly as long as one
/// pass; nothing is shared between calls.
struct Lowerer {
    /// Symbol environment: flat namespace, last write wins.
    env: FxHashMap<String, Value>,
    /// Running allocation counter. Qubit and classical-bit registers draw
    /// from the same counter, so `width` is the combined total and the two
    /// kinds are told apart by value kind, not index range.
    width: u32,
    /// Accumulated output instructions.
    instructions: Vec<Instruction>,
}

impl Lowerer {
    fn new() -> Self {
        let mut env = FxHashMap::default();
        env.insert("pi".to_string(), Value::Float(std::f64::consts::PI));
        env.insert("π".to_string(), Value::Float(std::f64::consts::PI));
        Self {
            env,
            width: 0,
            instructions: Vec::new(),
        }
    }

    fn lower(mut self, program: &Program) -> ParseResult<Circuit> {
        // Single pass in source order: declarations allocate indices as
        // they are encountered, so successive registers get contiguous,
        // strictly increasing index ranges.
        for stmt in &program.statements {
            self.lower_statement(stmt)?;
        }
        Ok(Circuit::from_parts(self.width, self.instructions))
    }

    fn lower_statement(&mut self, stmt: &Statement) -> ParseResult<()> {
        match stmt {
            Statement::RegDecl {
                kind,
                name,
                designator,
            } => self.declare_register(*kind, name, designator.as_ref()),

            Statement::QubitDecl { name, designator } => {
                self.declare_register(RegKind::Qubit, name, designator.as_ref())
            }

            Statement::ConstDecl { name, value } => {
                let value = self.eval(value)?;
                self.env.insert(name.clone(), value);
                Ok(())
            }

            Statement::Gate(call) => self.lower_gate_call(call),

            Statement::Include(path) => {
                debug!(%path, "skipping include statement");
                Ok(())
            }

            Statement::Barrier { .. } | Statement::Reset { .. } => {
                // No counterpart in the instruction set; dropped.
                debug!("skipping statement without an IR counterpart");
                Ok(())
            }
        }
    }

    /// Bind a register declaration, allocating indices from the running
    /// counter.
    fn declare_register(
        &mut self,
        kind: RegKind,
        name: &str,
        designator: Option<&Expression>,
    ) -> ParseResult<()> {
        let make = |index: u32| match kind {
            RegKind::Qubit => Value::Qubit(index),
            RegKind::Bit => Value::Bit(index),
        };

        let value = match designator {
            Some(expr) => {
                let size = self.eval(expr)?.as_int()?;
                // Sizes must be positive and fit the u32 index space.
                let count = match u32::try_from(size) {
                    Ok(count) if count > 0 => count,
                    _ => {
                        return Err(ParseError::IndexOutOfRange {
                            name: name.to_string(),
                            index: size,
                            len: 0,
                        });
                    }
                };
                let elements = (0..count).map(|i| make(self.width + i)).collect();
                self.width += count;
                Value::Array(elements)
            }
            None => {
                let value = make(self.width);
                self.width += 1;
                value
            }
        };

        self.env.insert(name.to_string(), value);
        Ok(())
    }

    /// Dispatch a gate call to its instruction constructor.
    fn lower_gate_call(&mut self, call: &GateCall) -> ParseResult<()> {
        let qubits: Vec<QubitId> = call
            .operands
            .iter()
            .map(|op| self.qubit_index(op))
            .collect::<ParseResult<_>>()?;
        let angles: Vec<f64> = call
            .angles
            .iter()
            .map(|expr| self.eval(expr).and_then(|v| v.as_f64()))
            .collect::<ParseResult<_>>()?;

        let name = call.name.to_lowercase();
        let instruction = match name.as_str() {
            "ccx" => {
                check_arity(&name, &qubits, 3, &angles, 0)?;
                Instruction::Ccx {
                    controls: (qubits[0], qubits[1]),
                    target: qubits[2],
                }
            }
            "crz" => {
                check_arity(&name, &qubits, 2, &angles, 1)?;
                Instruction::ControlledRz {
                    control: qubits[0],
                    target: qubits[1],
                    angle: angles[0],
                }
            }
            "cx" => {
                check_arity(&name, &qubits, 2, &angles, 0)?;
                Instruction::Cnot {
                    control: qubits[0],
                    target: qubits[1],
                }
            }
            "swap" => {
                check_arity(&name, &qubits, 2, &angles, 0)?;
                Instruction::Swap {
                    a: qubits[0],
                    b: qubits[1],
                }
            }
            "h" => {
                check_arity(&name, &qubits, 1, &angles, 0)?;
                Instruction::H { target: qubits[0] }
            }
            "s" => {
                check_arity(&name, &qubits, 1, &angles, 0)?;
                Instruction::S { target: qubits[0] }
            }
            "x" => {
                check_arity(&name, &qubits, 1, &angles, 0)?;
                Instruction::X { target: qubits[0] }
            }
            "y" => {
                check_arity(&name, &qubits, 1, &angles, 0)?;
                Instruction::Y { target: qubits[0] }
            }
            "z" => {
                check_arity(&name, &qubits, 1, &angles, 0)?;
                Instruction::Z { target: qubits[0] }
            }
            "rx" => {
                check_arity(&name, &qubits, 1, &angles, 1)?;
                Instruction::Rx {
                    target: qubits[0],
                    angle: angles[0],
                }
            }
            "ry" => {
                check_arity(&name, &qubits, 1, &angles, 1)?;
                Instruction::Ry {
                    target: qubits[0],
                    angle: angles[0],
                }
            }
            "rz" => {
                check_arity(&name, &qubits, 1, &angles, 1)?;
                Instruction::Rz {
                    target: qubits[0],
                    angle: angles[0],
                }
            }
            _ => return Err(ParseError::UnknownGate(call.name.clone())),
        };

        self.instructions.push(instruction);
        Ok(())
    }

    /// Resolve an operand to a qubit index.
    fn qubit_index(&self, operand: &Operand) -> ParseResult<QubitId> {
        match self.resolve_operand(operand)? {
            Value::Qubit(index) => Ok(QubitId(index)),
            other => Err(ParseError::TypeMismatch {
                expected: "qubit",
                found: other.kind(),
            }),
        }
    }

    /// Resolve an operand to a value: environment lookup plus any chained
    /// index operators.
    fn resolve_operand(&self, operand: &Operand) -> ParseResult<Value> {
        let mut value = self.lookup(&operand.name)?;
        for expr in &operand.indices {
            value = self.index_into(&operand.name, value, expr)?;
        }
        Ok(value)
    }

    /// Evaluate a CST expression to a single value.
    fn eval(&self, expr: &Expression) -> ParseResult<Value> {
        match expr {
            Expression::Int(v) => Ok(Value::Int(*v)),
            Expression::Float(v) => Ok(Value::Float(*v)),
            Expression::Identifier(name) => self.lookup(name),
            Expression::Neg(inner) => self.eval(inner)?.neg(),
            Expression::BinOp { left, op, right } => {
                // Left operand is fully evaluated before the right is
                // visited.
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                Value::apply(*op, &lhs, &rhs)
            }
            Expression::Paren(inner) => self.eval(inner),
            Expression::Index { name, indices } => {
                let mut value = self.lookup(name)?;
                for index_expr in indices {
                    value = self.index_into(name, value, index_expr)?;
                }
                Ok(value)
            }
        }
    }

    /// Look up a name, copying the bound value out of the environment.
    fn lookup(&self, name: &str) -> ParseResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| ParseError::UndefinedName(name.to_string()))
    }

    /// Apply one index operator: the value must be an array and the index
    /// a non-negative integer below its length.
    fn index_into(&self, name: &str, value: Value, expr: &Expression) -> ParseResult<Value> {
        let Value::Array(mut elements) = value else {
            return Err(ParseError::TypeMismatch {
                expected: "array",
                found: value.kind(),
            });
        };
        let index = self.eval(expr)?.as_int()?;
        let len = elements.len();
        if index < 0 || index >= len as i64 {
            return Err(ParseError::IndexOutOfRange {
                name: name.to_string(),
                index,
                len,
            });
        }
        // We own the array, so take the element out instead of cloning.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = index as usize;
        Ok(elements.swap_remove(index))
    }
}

fn check_arity(
    gate: &str,
    qubits: &[QubitId],
    expected_qubits: usize,
    angles: &[f64],
    expected_angles: usize,
) -> ParseResult<()> {
    if qubits.len() != expected_qubits {
        return Err(ParseError::WrongOperandCount {
            gate: gate.into(),
            expected: expected_qubits,
            got: qubits.len(),
        });
    }
    if angles.len() != expected_angles {
        return Err(ParseError::WrongAngleCount {
            gate: gate.into(),
            expected: expected_angles,
            got: angles.len(),
        });
    }
    Ok(())
}
