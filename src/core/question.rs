use rand::Rng;
use serde::Serialize;

use super::{constants::DifficultyRow, error::EngineError, operator::Operator};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A generated arithmetic question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub op1: i64,
    pub op2: i64,
    pub operator: Operator,
    /// Printable form, e.g. "12 + 7"
    pub text: String,
    /// Solution rounded to two decimal places
    pub answer: f64,
}

impl Question {
    /// Draw a random question from a difficulty row
    ///
    /// Both operands are drawn independently and uniformly from
    /// `[min_operand, max_operand]`. The operator is drawn uniformly from
    /// the row's inclusive operator range, clamped to `Operator::ALL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand range is empty or the drawn
    /// question divides by zero
    pub fn generate<R: Rng + ?Sized>(
        row: &DifficultyRow,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        if row.min_operand > row.max_operand {
            return Err(EngineError::EmptyOperandRange {
                min: row.min_operand,
                max: row.max_operand,
            });
        }

        let op1 = rng.gen_range(row.min_operand..=row.max_operand);
        let op2 = rng.gen_range(row.min_operand..=row.max_operand);

        let last = Operator::ALL.len() - 1;
        let end = row.op_range_end.min(last);
        let start = row.op_range_start.min(end);
        let operator = Operator::ALL[rng.gen_range(start..=end)];

        Self::from_parts(op1, operator, op2)
    }

    /// Build a question from fixed operands
    pub fn from_parts(op1: i64, operator: Operator, op2: i64) -> Result<Self, EngineError> {
        let answer = round2(operator.apply(op1, op2)?);
        Ok(Self {
            op1,
            op2,
            operator,
            text: format!("{} {} {}", op1, operator.symbol(), op2),
            answer,
        })
    }
}
