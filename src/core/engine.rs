use rand::{rngs::StdRng, SeedableRng};
use time::{Duration, OffsetDateTime};

use super::{
    actions::Action,
    colors::resolve_color,
    constants::{DifficultyRow, CORRECT_REACTION, DIFFICULTY_TABLE},
    error::EngineError,
    game_state::{clamp_level, GameState},
    profanity::censor,
    question::{round2, Question},
};
use crate::config::Settings;

/// An answer submitted from chat
#[derive(Debug, Clone, Copy)]
pub struct Guess<'a> {
    /// Channel the guess arrived on
    pub channel: &'a str,
    pub sender_id: &'a str,
    pub sender_name: &'a str,
    /// Unparsed numeric answer
    pub answer: &'a str,
    /// Hex literal or color name
    pub color: &'a str,
}

/// Admin-tunable settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneField {
    Delay,
    Difficulty,
    Modulus,
}

impl TuneField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuneField::Delay => "delay",
            TuneField::Difficulty => "difficulty",
            TuneField::Modulus => "modulus",
        }
    }
}

/// Arithmetic trivia state machine
///
/// Questions cycle through three phases:
/// awaiting an answer, cooling down after a correct answer, and
/// generating the next question on a scheduler tick.
///
/// Every operation returns the actions the caller should deliver; an
/// empty vector means nothing observable happened.
#[derive(Debug)]
pub struct TriviaEngine {
    state: GameState,
    settings: Settings,
    table: Vec<DifficultyRow>,
    rng: StdRng,
}

impl TriviaEngine {
    /// Create an engine seeded from OS entropy
    ///
    /// The engine ignores guesses and ticks until `start` is called.
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Create an engine with a caller-provided RNG
    pub fn with_rng(settings: Settings, rng: StdRng) -> Self {
        let table = DIFFICULTY_TABLE.to_vec();
        let mut state = GameState::from_settings(&settings, table.len().saturating_sub(1));
        state.generating = true;

        Self {
            state,
            settings,
            table,
            rng,
        }
    }

    /// Replace the difficulty table
    pub fn with_table(mut self, table: Vec<DifficultyRow>) -> Self {
        self.table = table;
        self.state.difficulty_level =
            clamp_level(self.state.difficulty_level as i64, self.max_level());
        self
    }

    /// Current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Difficulty table in use
    pub fn table(&self) -> &[DifficultyRow] {
        &self.table
    }

    fn max_level(&self) -> usize {
        self.table.len().saturating_sub(1)
    }

    fn is_admin(&self, channel: &str) -> bool {
        self.state.admin_channel.as_deref() == Some(channel)
    }

    /// Open the game for guesses
    ///
    /// Announces the start question in the game channel if one is known.
    pub fn start(&mut self) -> Vec<Action> {
        if !self.state.generating {
            return Vec::new();
        }
        self.state.generating = false;

        tracing::info!(
            "Trivia game started with question '{}'",
            self.state.current_question
        );
        self.announce_question()
    }

    /// Check a guess against the pending answer
    ///
    /// Wrong answers, answers to an already solved question, and answers
    /// that arrive mid-generation are ignored without a reply.
    pub fn on_guess(&mut self, guess: Guess<'_>, now: OffsetDateTime) -> Vec<Action> {
        if self.state.game_channel.is_none() {
            tracing::info!("Binding game channel to {}", guess.channel);
            self.state.game_channel = Some(guess.channel.to_string());
        }

        if self.state.answered || self.state.generating {
            tracing::debug!(
                "Ignoring guess from {} (answered={}, generating={})",
                guess.sender_id,
                self.state.answered,
                self.state.generating
            );
            return Vec::new();
        }

        let answer = match guess.answer.trim().parse::<f64>() {
            Ok(answer) => answer,
            Err(source) => {
                let err = EngineError::InvalidAnswer {
                    value: guess.answer.to_string(),
                    source,
                };
                tracing::debug!("Ignoring guess from {}: {}", guess.sender_id, err);
                return Vec::new();
            }
        };

        if round2(answer) != round2(self.state.pending_answer) {
            tracing::debug!("Wrong answer {} from {}", answer, guess.sender_id);
            return Vec::new();
        }

        self.state.answered = true;
        self.state.answered_at = Some(now);
        self.state.total_correct += 1;

        tracing::info!(
            "{} solved '{}' (total correct: {})",
            guess.sender_id,
            self.state.current_question,
            self.state.total_correct
        );

        let mut actions = vec![
            Action::react(CORRECT_REACTION),
            Action::reply(format!(
                "Correct! The answer was {}",
                self.state.pending_answer
            )),
        ];

        match resolve_color(guess.color) {
            Ok(Some(color)) => {
                let name = censor(guess.sender_name);
                tracing::info!("Changing display color to {} for {}", color.to_hex(), name);
                actions.push(Action::RenderWinner { color, name });
            }
            Ok(None) => {
                actions.push(Action::reply("Sorry, couldn't work out that color"));
            }
            Err(err) => {
                tracing::warn!("Color resolution failed for '{}': {}", guess.color, err);
                actions.push(Action::reply(format!(
                    ":slightly_frowning_face: Doh, something went wrong, sorry\n`{}`",
                    err
                )));
            }
        }

        actions
    }

    /// Generate the next question once the delay after a correct answer
    /// has elapsed
    pub fn on_tick(&mut self, now: OffsetDateTime) -> Vec<Action> {
        if !self.state.answered || self.state.generating {
            return Vec::new();
        }

        if let Some(answered_at) = self.state.answered_at {
            // Overflow means the delay never elapses
            let ready_at = answered_at.checked_add(Duration::seconds(self.state.delay_seconds));
            if ready_at.map_or(true, |ready_at| now < ready_at) {
                return Vec::new();
            }
        }

        self.state.generating = true;
        let result = self.generate_next();
        self.state.generating = false;

        match result {
            Ok(actions) => actions,
            Err(err) => {
                tracing::warn!("Question generation failed, retrying next tick: {}", err);
                Vec::new()
            }
        }
    }

    fn generate_next(&mut self) -> Result<Vec<Action>, EngineError> {
        if self.table.is_empty() {
            return Err(EngineError::NoDifficultyLevels);
        }

        let modulus = self.state.correct_answer_modulus;
        let total = self.state.total_correct as i64;
        let escalate = modulus != 0
            && total > 0
            && total % modulus == 0
            && self.state.difficulty_level < self.max_level();

        let level = if escalate {
            self.state.difficulty_level + 1
        } else {
            self.state.difficulty_level
        };
        let row = self.table[level.min(self.max_level())];

        let question = Question::generate(&row, &mut self.rng)?;

        let mut actions = Vec::new();
        if escalate {
            self.state.difficulty_level = level;
            tracing::info!("Difficulty increased to level {}", level);
            if let Some(channel) = &self.state.game_channel {
                actions.push(Action::say(
                    channel.clone(),
                    format!(":chart_with_upwards_trend: Difficulty increased to level {}!", level),
                ));
            }
        }

        tracing::info!("New question '{}' = {}", question.text, question.answer);
        self.state.current_question = question.text;
        self.state.pending_answer = question.answer;
        self.state.answered = false;

        actions.extend(self.announce_question());
        Ok(actions)
    }

    /// Announcement for the live question, if one is waiting for an answer
    ///
    /// Used to bring a chat bridge that connects mid-round up to date.
    pub fn pending_announcement(&self) -> Option<Action> {
        if self.state.answered || self.state.generating {
            return None;
        }
        self.announce_question().into_iter().next()
    }

    fn announce_question(&self) -> Vec<Action> {
        match &self.state.game_channel {
            Some(channel) => vec![Action::say(
                channel.clone(),
                question_announcement(&self.state.current_question),
            )],
            None => Vec::new(),
        }
    }

    /// Restore defaults and re-announce the start question
    ///
    /// Binds the admin channel to `channel` if none is set yet.
    pub fn on_admin_reset(&mut self, channel: &str) -> Vec<Action> {
        if self.state.admin_channel.is_none() {
            tracing::info!("Binding admin channel to {}", channel);
            self.state.admin_channel = Some(channel.to_string());
        }

        if !self.is_admin(channel) {
            tracing::warn!("Ignoring reset from non-admin channel {}", channel);
            return Vec::new();
        }

        let max_level = self.max_level();
        self.state.reset(&self.settings, max_level);
        tracing::info!("Game reset");

        let mut actions = vec![Action::reply("Game reset")];
        actions.extend(self.announce_question());
        actions
    }

    /// Overwrite delay, difficulty, or modulus from an admin command
    ///
    /// Unparseable values are logged and ignored without a reply.
    pub fn on_admin_tune(&mut self, channel: &str, field: TuneField, raw: &str) -> Vec<Action> {
        if !self.is_admin(channel) {
            tracing::warn!(
                "Ignoring {} change from non-admin channel {}",
                field.as_str(),
                channel
            );
            return Vec::new();
        }

        let value = match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(source) => {
                let err = EngineError::InvalidInteger {
                    field: field.as_str(),
                    value: raw.to_string(),
                    source,
                };
                tracing::warn!("{}", err);
                return Vec::new();
            }
        };

        let applied = match field {
            TuneField::Delay => {
                self.state.delay_seconds = value;
                value
            }
            TuneField::Difficulty => {
                self.state.difficulty_level = clamp_level(value, self.max_level());
                self.state.difficulty_level as i64
            }
            TuneField::Modulus => {
                self.state.correct_answer_modulus = value;
                value
            }
        };

        tracing::info!("Admin set {} to {}", field.as_str(), applied);
        vec![Action::reply(format!("{} set to {}", field.as_str(), applied))]
    }

    /// Dump the full game state to the admin channel
    pub fn on_admin_status(&self, channel: &str) -> Vec<Action> {
        if !self.is_admin(channel) {
            tracing::warn!("Ignoring status request from non-admin channel {}", channel);
            return Vec::new();
        }

        let status = serde_json::to_string_pretty(&self.state.to_status())
            .unwrap_or_else(|_| format!("{:?}", self.state));
        vec![Action::reply(format!("```\n{}\n```", status))]
    }
}

/// Chat text introducing a question
pub fn question_announcement(question: &str) -> String {
    format!(
        "New question! What is `{}`?\nAnswer with `game <answer> <color>`, \
         e.g. `game 42 blue` or `game 42 #ff8800`. Round to 2 decimal places.",
        question
    )
}
