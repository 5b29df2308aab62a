use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Arithmetic operators, in difficulty table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Xor,
}

impl Operator {
    /// Every operator; difficulty rows index into this list
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Xor,
    ];

    /// Symbol used when printing a question
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Xor => "^",
        }
    }

    /// Apply the operator to two integer operands
    ///
    /// Only division can produce a fractional result.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DivisionByZero` when dividing by zero
    pub fn apply(&self, op1: i64, op2: i64) -> Result<f64, EngineError> {
        let result = match self {
            Operator::Add => (op1 + op2) as f64,
            Operator::Subtract => (op1 - op2) as f64,
            Operator::Multiply => (op1 * op2) as f64,
            Operator::Divide => {
                if op2 == 0 {
                    return Err(EngineError::DivisionByZero { op1 });
                }
                op1 as f64 / op2 as f64
            }
            Operator::Xor => (op1 ^ op2) as f64,
        };
        Ok(result)
    }
}
