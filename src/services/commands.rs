use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use time::OffsetDateTime;

use crate::core::{Action, Guess, TriviaEngine, TuneField};
use crate::models::IncomingMessage;

/// A chat command recognized by the router
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Guess { answer: String, color: String },
    AdminReset,
    AdminTune { field: TuneField, value: String },
    AdminStatus,
}

type Builder = fn(&Captures) -> Command;

fn capture(caps: &Captures, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn guess(caps: &Captures) -> Command {
    Command::Guess {
        answer: capture(caps, "answer"),
        color: capture(caps, "color"),
    }
}

fn reset(_: &Captures) -> Command {
    Command::AdminReset
}

fn status(_: &Captures) -> Command {
    Command::AdminStatus
}

fn tune(caps: &Captures) -> Command {
    let field = match capture(caps, "field").to_ascii_lowercase().as_str() {
        "delay" => TuneField::Delay,
        "diff" => TuneField::Difficulty,
        _ => TuneField::Modulus,
    };
    Command::AdminTune {
        field,
        value: capture(caps, "value"),
    }
}

/// Command patterns, tried in order. All are anchored and case-insensitive.
const PATTERNS: &[(&str, Builder)] = &[
    (
        concat!(
            r"^game\s+(?P<answer>[-+]?(?:\d+(?:\.\d*)?|\.\d+))",
            r"\s+(?P<color>#[0-9a-f]{6}|#[0-9a-f]{3}|\w+)$",
        ),
        guess,
    ),
    (r"^admin\s+reset$", reset),
    (r"^admin\s+(?P<field>delay|diff|mod)\s+(?P<value>\S+)$", tune),
    (r"^admin\s+status$", status),
];

static ROUTES: Lazy<Vec<(Regex, Builder)>> = Lazy::new(|| {
    PATTERNS
        .iter()
        .filter_map(|(pattern, builder)| {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(regex) => Some((regex, *builder)),
                Err(err) => {
                    tracing::error!("Invalid command pattern {}: {}", pattern, err);
                    None
                }
            }
        })
        .collect()
});

/// Match message text against the command table
///
/// # Returns
///
/// The first matching command, or None if no pattern matches
pub fn parse_command(text: &str) -> Option<Command> {
    let text = text.trim();
    ROUTES
        .iter()
        .find_map(|(regex, builder)| regex.captures(text).map(|caps| builder(&caps)))
}

/// Route an incoming chat message to the engine
///
/// # Returns
///
/// Actions produced by the engine; empty if the message is not a command
pub fn dispatch(
    engine: &mut TriviaEngine,
    message: &IncomingMessage,
    now: OffsetDateTime,
) -> Vec<Action> {
    let Some(command) = parse_command(&message.text) else {
        return Vec::new();
    };

    tracing::debug!(
        "Command from {} in {}: {:?}",
        message.sender_id,
        message.channel,
        command
    );

    match command {
        Command::Guess { answer, color } => engine.on_guess(
            Guess {
                channel: &message.channel,
                sender_id: &message.sender_id,
                sender_name: &message.sender_name,
                answer: &answer,
                color: &color,
            },
            now,
        ),
        Command::AdminReset => engine.on_admin_reset(&message.channel),
        Command::AdminTune { field, value } => {
            engine.on_admin_tune(&message.channel, field, &value)
        }
        Command::AdminStatus => engine.on_admin_status(&message.channel),
    }
}
