//! Calculation - validated arithmetic dispatch
//!
//! Pure domain entity without transport dependencies. The validator here is
//! the only decision logic in the service: it turns a raw decoded request
//! into either an executed calculation or a structured domain error.

use serde::Serialize;

use crate::domain::{DomainError, Operation};

/// Raw calculation request as decoded from a JSON body.
///
/// Fields stay untyped (`serde_json::Value`) on purpose: the validation
/// sequence in [`Calculation::evaluate`] owns the type checks, so a request
/// with a string operand or an unknown operation reaches the validator
/// instead of being rejected by deserialization with an opaque message.
/// Absent fields decode as JSON null and fail the same checks.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub operation: serde_json::Value,
    #[serde(default)]
    pub a: serde_json::Value,
    #[serde(default)]
    pub b: serde_json::Value,
}

/// A completed calculation, echoing the request plus its result.
///
/// Ephemeral: lives for the duration of the response and is copied into a
/// [`HistoryRecord`](crate::HistoryRecord) on success.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

impl Calculation {
    /// Validate a request and execute the requested operation.
    ///
    /// The checks run in a fixed order and the first failure short-circuits
    /// everything after it:
    ///
    /// 1. both operands must be JSON numbers
    /// 2. the operation must be one of the supported enumeration
    /// 3. divide rejects any divisor `<= 0` (not only zero)
    pub fn evaluate(request: &CalculationRequest) -> Result<Calculation, DomainError> {
        let (a, b) = match (request.a.as_f64(), request.b.as_f64()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(DomainError::InvalidOperands),
        };

        let operation: Operation = request
            .operation
            .as_str()
            .and_then(|s| s.parse().ok())
            .ok_or(DomainError::UnsupportedOperation)?;

        if operation == Operation::Divide && b <= 0.0 {
            return Err(DomainError::IllegalCalculation);
        }

        Ok(Calculation {
            operation,
            a,
            b,
            result: operation.apply(a, b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(operation: serde_json::Value, a: serde_json::Value, b: serde_json::Value) -> CalculationRequest {
        CalculationRequest { operation, a, b }
    }

    #[test]
    fn evaluates_all_operations() {
        let cases = [
            ("add", 2.0, 3.0, 5.0),
            ("subtract", 10.0, 4.0, 6.0),
            ("multiply", 6.0, 7.0, 42.0),
            ("divide", 10.0, 4.0, 2.5),
        ];
        for (op, a, b, expected) in cases {
            let calc = Calculation::evaluate(&request(json!(op), json!(a), json!(b))).unwrap();
            assert_eq!(calc.result, expected, "{op}");
            assert_eq!(calc.a, a);
            assert_eq!(calc.b, b);
        }
    }

    #[test]
    fn rejects_non_numeric_operands() {
        let err = Calculation::evaluate(&request(json!("add"), json!("2"), json!(3))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperands));

        let err = Calculation::evaluate(&request(json!("add"), json!(2), json!(null))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperands));

        let err =
            Calculation::evaluate(&request(json!("add"), json!([1]), json!(true))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperands));
    }

    #[test]
    fn rejects_unknown_operation() {
        let err = Calculation::evaluate(&request(json!("mod"), json!(1), json!(1))).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedOperation));

        // a non-string operation is out of the enumeration too
        let err = Calculation::evaluate(&request(json!(7), json!(1), json!(1))).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedOperation));
    }

    #[test]
    fn operand_check_runs_before_operation_check() {
        // both checks would fail; the operand failure wins
        let err =
            Calculation::evaluate(&request(json!("mod"), json!("x"), json!(1))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperands));
    }

    #[test]
    fn rejects_non_positive_divisors() {
        for b in [0.0, -1.0, -2.5] {
            let err =
                Calculation::evaluate(&request(json!("divide"), json!(10), json!(b))).unwrap_err();
            assert!(matches!(err, DomainError::IllegalCalculation), "b = {b}");
        }
        // the guard applies to divide only
        let calc = Calculation::evaluate(&request(json!("subtract"), json!(10), json!(0))).unwrap();
        assert_eq!(calc.result, 10.0);
    }

    #[test]
    fn negative_dividends_are_fine() {
        let calc = Calculation::evaluate(&request(json!("divide"), json!(-10), json!(2))).unwrap();
        assert_eq!(calc.result, -5.0);
    }
}
