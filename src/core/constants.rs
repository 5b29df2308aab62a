// Game configuration constants

/// One row of the difficulty table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRow {
    /// Smallest operand that can be drawn
    pub min_operand: i64,
    /// Largest operand that can be drawn (inclusive)
    pub max_operand: i64,
    /// First usable index into OPERATORS
    pub op_range_start: usize,
    /// Last usable index into OPERATORS (inclusive)
    pub op_range_end: usize,
}

impl DifficultyRow {
    pub const fn new(
        min_operand: i64,
        max_operand: i64,
        op_range_start: usize,
        op_range_end: usize,
    ) -> Self {
        Self {
            min_operand,
            max_operand,
            op_range_start,
            op_range_end,
        }
    }
}

/// Difficulty levels, easiest first.
///
/// Operator indices refer to `Operator::ALL`:
/// 0 = add, 1 = subtract, 2 = multiply, 3 = divide, 4 = xor
pub const DIFFICULTY_TABLE: &[DifficultyRow] = &[
    DifficultyRow::new(1, 100, 0, 0),
    DifficultyRow::new(1, 100, 0, 1),
    DifficultyRow::new(1, 1000, 0, 1),
    DifficultyRow::new(1, 12, 2, 2),
    DifficultyRow::new(1, 25, 0, 2),
    DifficultyRow::new(1, 100, 0, 3),
    DifficultyRow::new(0, 1000, 0, 3),
    DifficultyRow::new(0, 64, 4, 4),
    DifficultyRow::new(0, 1000, 0, 4),
];

/// Seconds between a correct answer and the next question
pub const DEFAULT_DELAY_SECONDS: i64 = 15;

/// Difficulty level at startup and after reset
pub const DEFAULT_DIFFICULTY: i64 = 0;

/// Number of correct answers per difficulty step
pub const DEFAULT_DIFFICULTY_MODULUS: i64 = 5;

/// Question shown before the first generated one
pub const DEFAULT_START_QUESTION: &str = "0 + 0";

/// Answer to DEFAULT_START_QUESTION
pub const DEFAULT_START_ANSWER: f64 = 0.0;

/// How often the scheduler calls into the engine
pub const DEFAULT_TICK_SECONDS: u64 = 10;

/// Display surface size in pixels
pub const DISPLAY_WIDTH: u32 = 800;
pub const DISPLAY_HEIGHT: u32 = 600;

/// Font size used for all display text
pub const DISPLAY_FONT_SIZE: u32 = 64;

/// Emoji used to acknowledge a correct answer
pub const CORRECT_REACTION: &str = "tada";
