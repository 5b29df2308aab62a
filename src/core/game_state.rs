use time::OffsetDateTime;

use crate::config::Settings;

/// Mutable trivia game state, owned by `TriviaEngine`
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Channel questions are announced in
    pub game_channel: Option<String>,
    /// Channel allowed to run admin commands
    pub admin_channel: Option<String>,
    /// Minimum seconds between a correct answer and the next question
    pub delay_seconds: i64,
    /// Printable form of the live question
    pub current_question: String,
    /// Solution of the live question, rounded to 2 decimal places
    pub pending_answer: f64,
    /// Index into the difficulty table
    pub difficulty_level: usize,
    /// Correct answers per difficulty step
    pub correct_answer_modulus: i64,
    /// Correct answers since the last reset
    pub total_correct: u64,
    /// Live question solved; waiting out the delay
    pub answered: bool,
    /// When the most recent correct answer arrived
    pub answered_at: Option<OffsetDateTime>,
    /// A new question is being built
    pub generating: bool,
}

impl GameState {
    /// Fresh state from settings
    ///
    /// # Arguments
    ///
    /// * `settings` - Startup settings
    /// * `max_level` - Highest valid difficulty index
    pub fn from_settings(settings: &Settings, max_level: usize) -> Self {
        Self {
            game_channel: settings.game_channel.clone(),
            admin_channel: settings.admin_channel.clone(),
            delay_seconds: settings.default_delay,
            current_question: settings.start_question.clone(),
            pending_answer: settings.start_answer,
            difficulty_level: clamp_level(settings.game_difficulty, max_level),
            correct_answer_modulus: settings.difficulty_modulus,
            total_correct: 0,
            answered: false,
            answered_at: None,
            generating: false,
        }
    }

    /// Restore settings-derived fields, keeping bound channels
    pub fn reset(&mut self, settings: &Settings, max_level: usize) {
        let game_channel = self.game_channel.take();
        let admin_channel = self.admin_channel.take();

        *self = Self::from_settings(settings, max_level);
        self.game_channel = game_channel.or_else(|| settings.game_channel.clone());
        self.admin_channel = admin_channel.or_else(|| settings.admin_channel.clone());
    }

    /// Status dump for the admin channel
    pub fn to_status(&self) -> serde_json::Value {
        serde_json::json!({
            "game_channel": self.game_channel,
            "admin_channel": self.admin_channel,
            "delay_seconds": self.delay_seconds,
            "current_question": self.current_question,
            "pending_answer": self.pending_answer,
            "difficulty_level": self.difficulty_level,
            "correct_answer_modulus": self.correct_answer_modulus,
            "total_correct": self.total_correct,
            "answered": self.answered,
            "answered_at": self.answered_at.map(|t| t.unix_timestamp()),
            "generating": self.generating,
        })
    }
}

/// Clamp a requested level into `0..=max_level`
pub fn clamp_level(level: i64, max_level: usize) -> usize {
    if level <= 0 {
        0
    } else {
        usize::try_from(level).map_or(max_level, |l| l.min(max_level))
    }
}
