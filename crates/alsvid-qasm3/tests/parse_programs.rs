//! End-to-end lowering tests over complete source programs.

use alsvid_ir::{Instruction, QubitId};
use alsvid_qasm3::{ParseError, parse};
use std::f64::consts::PI;

#[test]
fn test_parse_simple_circuit() {
    let source = r#"
include "qelib1.inc";
qreg q[1];
rz(5*pi/4) q[0];
"#;
    let circuit = parse(source).unwrap();
    assert_eq!(circuit.width(), 1);
    assert_eq!(circuit.len(), 1);
    let &Instruction::Rz { target, angle } = &circuit.instructions()[0] else {
        panic!("expected rz instruction");
    };
    assert_eq!(target, QubitId(0));
    assert!((angle - 5.0 * PI / 4.0).abs() < 1e-12);
    assert!((angle - 3.926_990_816_987_241_4).abs() < 1e-12);
}

#[test]
fn test_parse_all_instructions() {
    let source = r#"
include "qelib1.inc";
qreg q[3];
ccx q[0], q[1], q[2];
crz(pi/3) q[0], q[1];
cx q[0], q[1];
swap q[0], q[1];
h q[0];
s q[0];
x q[0];
y q[0];
z q[0];
rx(pi/4) q[0];
ry(pi/4) q[0];
rz(pi/4) q[0];
"#;
    let circuit = parse(source).unwrap();
    assert_eq!(circuit.width(), 3);
    assert_eq!(circuit.len(), 12);

    let mut iter = circuit.iter();

    let Instruction::Ccx { controls, target } = iter.next().unwrap() else {
        panic!("expected ccx");
    };
    assert_eq!(*controls, (QubitId(0), QubitId(1)));
    assert_eq!(*target, QubitId(2));

    let Instruction::ControlledRz {
        control,
        target,
        angle,
    } = iter.next().unwrap()
    else {
        panic!("expected crz");
    };
    assert_eq!(*control, QubitId(0));
    assert_eq!(*target, QubitId(1));
    assert!((angle - PI / 3.0).abs() < 1e-12);

    let Instruction::Cnot { control, target } = iter.next().unwrap() else {
        panic!("expected cx");
    };
    assert_eq!(*control, QubitId(0));
    assert_eq!(*target, QubitId(1));

    let Instruction::Swap { a, b } = iter.next().unwrap() else {
        panic!("expected swap");
    };
    assert_eq!((*a, *b), (QubitId(0), QubitId(1)));

    assert_eq!(
        iter.next().unwrap(),
        &Instruction::H { target: QubitId(0) }
    );
    assert_eq!(
        iter.next().unwrap(),
        &Instruction::S { target: QubitId(0) }
    );
    assert_eq!(
        iter.next().unwrap(),
        &Instruction::X { target: QubitId(0) }
    );
    assert_eq!(
        iter.next().unwrap(),
        &Instruction::Y { target: QubitId(0) }
    );
    assert_eq!(
        iter.next().unwrap(),
        &Instruction::Z { target: QubitId(0) }
    );

    for expected in ["rx", "ry", "rz"] {
        let inst = iter.next().unwrap();
        assert_eq!(inst.name(), expected);
        assert_eq!(inst.qubits(), vec![QubitId(0)]);
        assert!((inst.angle().unwrap() - PI / 4.0).abs() < 1e-12);
    }

    assert!(iter.next().is_none());
}

#[test]
fn test_operand_indices_within_width() {
    let source = r"
qreg a[2];
creg c[2];
qreg b[3];
ccx a[0], b[1], b[2];
swap a[1], b[0];
";
    let circuit = parse(source).unwrap();
    for inst in &circuit {
        for q in inst.qubits() {
            assert!(q.0 < circuit.width());
        }
    }
}

#[test]
fn test_fresh_pass_is_idempotent() {
    let source = r"
qreg q[2];
h q[0];
crz(pi/2) q[0], q[1];
";
    let first = parse(source).unwrap();
    let second = parse(source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_index_bounds() {
    // Every in-range index works...
    for i in 0..3 {
        assert!(parse(&format!("qreg q[3]; x q[{i}];")).is_ok());
    }
    // ...the length itself and negatives do not.
    assert!(matches!(
        parse("qreg q[3]; x q[3];"),
        Err(ParseError::IndexOutOfRange { index: 3, len: 3, .. })
    ));
    assert!(matches!(
        parse("qreg q[3]; x q[-1];"),
        Err(ParseError::IndexOutOfRange { index: -1, .. })
    ));
}

#[test]
fn test_computed_index() {
    let circuit = parse("const int k = 1; qreg q[4]; x q[k + 2];").unwrap();
    assert_eq!(
        circuit.instructions()[0],
        Instruction::X { target: QubitId(3) }
    );
}

#[test]
fn test_negative_modulo_in_angle() {
    // Floored modulo: (-7) mod 4 is 1, not the truncated -3.
    let circuit = parse("qreg q[1]; rz((0-7) % 4) q[0];").unwrap();
    assert!((circuit.instructions()[0].angle().unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_float_index_rejected() {
    let err = parse("qreg q[4]; x q[1.0];").unwrap_err();
    assert!(matches!(
        err,
        ParseError::TypeMismatch {
            expected: "int",
            found: "float"
        }
    ));
}

#[test]
fn test_unknown_gate_fails() {
    for gate in ["cz", "t", "u3", "iswap", "cswap"] {
        let result = parse(&format!("qreg q[3]; {gate} q[0], q[1], q[2];"));
        assert!(
            matches!(result, Err(ParseError::UnknownGate(_))),
            "gate {gate} should be rejected"
        );
    }
}

#[test]
fn test_error_aborts_pass() {
    // The instruction before the failure is discarded along with the rest.
    let result = parse("qreg q[1]; h q[0]; boom q[0];");
    assert!(matches!(result, Err(ParseError::UnknownGate(_))));
}

#[test]
fn test_parse_file() {
    let dir = std::env::temp_dir();
    let path = dir.join("alsvid_qasm3_parse_file_test.qasm");
    std::fs::write(&path, "qreg q[2];\nh q[0];\ncx q[0], q[1];\n").unwrap();

    let circuit = alsvid_qasm3::parse_file(&path).unwrap();
    assert_eq!(circuit.width(), 2);
    assert_eq!(circuit.len(), 2);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_parse_file_missing() {
    let result = alsvid_qasm3::parse_file("/nonexistent/alsvid.qasm");
    assert!(matches!(result, Err(ParseError::Io(_))));
}
