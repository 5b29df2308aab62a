// Settings loaded once at startup from the environment (and `.env`)

use std::str::FromStr;
use thiserror::Error;

use crate::core::constants::{
    DEFAULT_DELAY_SECONDS, DEFAULT_DIFFICULTY, DEFAULT_DIFFICULTY_MODULUS, DEFAULT_START_ANSWER,
    DEFAULT_START_QUESTION, DEFAULT_TICK_SECONDS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Game and server settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Channel questions are announced in; bound by the first guess if unset
    pub game_channel: Option<String>,
    /// Channel allowed to run admin commands; bound by the first reset if unset
    pub admin_channel: Option<String>,
    /// Seconds between a correct answer and the next question
    pub default_delay: i64,
    /// Question live before the first generated one
    pub start_question: String,
    /// Answer to `start_question`
    pub start_answer: f64,
    /// Initial difficulty level
    pub game_difficulty: i64,
    /// Correct answers per difficulty step
    pub difficulty_modulus: i64,
    /// HTTP port for the chat bridge and the display
    pub port: u16,
    /// Seconds between scheduler ticks
    pub tick_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_channel: None,
            admin_channel: None,
            default_delay: DEFAULT_DELAY_SECONDS,
            start_question: DEFAULT_START_QUESTION.to_string(),
            start_answer: DEFAULT_START_ANSWER,
            game_difficulty: DEFAULT_DIFFICULTY,
            difficulty_modulus: DEFAULT_DIFFICULTY_MODULUS,
            port: 8000,
            tick_seconds: DEFAULT_TICK_SECONDS,
        }
    }
}

impl Settings {
    /// Read settings from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    ///
    /// Unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Ok(Self {
            game_channel: get("GAME_CHANNEL"),
            admin_channel: get("ADMIN_CHANNEL"),
            default_delay: parse_or(get("DEFAULT_DELAY"), "DEFAULT_DELAY", defaults.default_delay)?,
            start_question: get("START_QUESTION").unwrap_or(defaults.start_question),
            start_answer: parse_or(get("START_ANSWER"), "START_ANSWER", defaults.start_answer)?,
            game_difficulty: parse_or(
                get("GAME_DIFFICULTY"),
                "GAME_DIFFICULTY",
                defaults.game_difficulty,
            )?,
            difficulty_modulus: parse_or(
                get("DIFFICULTY_MODULUS"),
                "DIFFICULTY_MODULUS",
                defaults.difficulty_modulus,
            )?,
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            tick_seconds: parse_or(get("TICK_SECONDS"), "TICK_SECONDS", defaults.tick_seconds)?,
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
