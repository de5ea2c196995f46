//! Property-based tests for the value model's promotion rules.
//!
//! Checks that the result *kind* of every numeric operation follows the
//! promotion table, independent of the operand values.

use alsvid_qasm3::Value;
use alsvid_qasm3::syntax::BinOp;
use proptest::prelude::*;

fn arb_op() -> impl Strategy<Value = BinOp> {
    prop_oneof![
        Just(BinOp::Add),
        Just(BinOp::Sub),
        Just(BinOp::Mul),
        Just(BinOp::Div),
        Just(BinOp::Mod),
    ]
}

proptest! {
    /// Int ∘ Int stays Int for `+ - * %`.
    #[test]
    fn int_int_closed_under_add_sub_mul_mod(a in -1000_i64..1000, b in -1000_i64..1000) {
        for op in [BinOp::Add, BinOp::Sub, BinOp::Mul] {
            let result = Value::apply(op, &Value::Int(a), &Value::Int(b)).unwrap();
            prop_assert!(matches!(result, Value::Int(_)));
        }
        if b != 0 {
            let result = Value::apply(BinOp::Mod, &Value::Int(a), &Value::Int(b)).unwrap();
            let Value::Int(r) = result else {
                return Err(TestCaseError::fail(format!("unexpected kind: {}", result.kind())));
            };
            // Floored semantics: the remainder takes the divisor's sign.
            prop_assert!(r == 0 || (r < 0) == (b < 0));
            prop_assert!(r.abs() < b.abs());
        }
    }

    /// Int / Int is Int exactly when the remainder is zero, Float otherwise,
    /// and the numeric result is the true quotient either way.
    #[test]
    fn int_division_kind_follows_exactness(a in -1000_i64..1000, b in -1000_i64..1000) {
        prop_assume!(b != 0);
        let result = Value::apply(BinOp::Div, &Value::Int(a), &Value::Int(b)).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = a as f64 / b as f64;
        match result {
            Value::Int(v) => {
                prop_assert_eq!(a % b, 0);
                #[allow(clippy::cast_precision_loss)]
                let v = v as f64;
                prop_assert!((v - expected).abs() < 1e-9);
            }
            Value::Float(v) => {
                prop_assert_ne!(a % b, 0);
                prop_assert!((v - expected).abs() < 1e-9);
            }
            other => prop_assert!(false, "unexpected kind: {}", other.kind()),
        }
    }

    /// Any operation with a Float operand yields Float (except cross-kind
    /// modulo, which is rejected).
    #[test]
    fn float_operand_promotes(a in -1000_i64..1000, b in -1000.0_f64..1000.0, op in arb_op()) {
        prop_assume!(b.abs() > 1e-6);
        let int_float = Value::apply(op, &Value::Int(a), &Value::Float(b));
        let float_int = Value::apply(op, &Value::Float(b), &Value::Int(a));
        match op {
            BinOp::Mod => {
                prop_assert!(matches!(int_float, Err(_)));
                prop_assert!(matches!(float_int, Err(_)));
            }
            BinOp::Div => {
                prop_assert!(matches!(int_float.unwrap(), Value::Float(_)));
                if a != 0 {
                    prop_assert!(matches!(float_int.unwrap(), Value::Float(_)));
                }
            }
            _ => {
                prop_assert!(matches!(int_float.unwrap(), Value::Float(_)));
                prop_assert!(matches!(float_int.unwrap(), Value::Float(_)));
            }
        }
    }

    /// Unary negation preserves kind and is an involution.
    #[test]
    fn negation_preserves_kind(a in -1000_i64..1000, f in -1000.0_f64..1000.0) {
        prop_assert_eq!(Value::Int(a).neg().unwrap().neg().unwrap(), Value::Int(a));
        let float = Value::Float(f).neg().unwrap();
        prop_assert!(matches!(float, Value::Float(_)));
        prop_assert_eq!(float.neg().unwrap(), Value::Float(f));
    }

    /// References and arrays are never valid arithmetic operands.
    #[test]
    fn non_numeric_operands_rejected(a in -1000_i64..1000, op in arb_op(), index in 0_u32..16) {
        for bad in [Value::Qubit(index), Value::Bit(index), Value::Array(vec![Value::Int(a)])] {
            prop_assert!(Value::apply(op, &bad, &Value::Int(a)).is_err());
            prop_assert!(Value::apply(op, &Value::Int(a), &bad).is_err());
        }
    }
}
