use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors raised inside the trivia engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("division by zero: {op1} / 0")]
    DivisionByZero { op1: i64 },

    #[error("difficulty table is empty")]
    NoDifficultyLevels,

    #[error("invalid operand range {min}..={max}")]
    EmptyOperandRange { min: i64, max: i64 },

    #[error("'{value}' is not a valid integer for {field}: {source}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("'{value}' is not a number: {source}")]
    InvalidAnswer {
        value: String,
        source: ParseFloatError,
    },
}
