use serde::Serialize;

use super::colors::Rgb;

/// Outbound side effect requested by the engine
///
/// The engine never talks to chat or the display directly; callers
/// deliver these in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Reply to the message being handled
    Reply { text: String },
    /// React to the message being handled
    React { emoji: String },
    /// Post to a channel, independent of any incoming message
    Say { channel: String, text: String },
    /// Paint the display with the winner's color and name
    RenderWinner { color: Rgb, name: String },
}

impl Action {
    pub fn reply(text: impl Into<String>) -> Self {
        Action::Reply { text: text.into() }
    }

    pub fn react(emoji: impl Into<String>) -> Self {
        Action::React {
            emoji: emoji.into(),
        }
    }

    pub fn say(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Action::Say {
            channel: channel.into(),
            text: text.into(),
        }
    }

    /// True for actions tied to the incoming message (replies and reactions)
    pub fn is_direct(&self) -> bool {
        matches!(self, Action::Reply { .. } | Action::React { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serialization() {
        let action = Action::say("C123", "hello");
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "say");
        assert_eq!(json["channel"], "C123");
        assert_eq!(json["text"], "hello");
    }

    #[test]
    fn test_render_winner_serialization() {
        let action = Action::RenderWinner {
            color: Rgb::new(0, 0, 255),
            name: "Alice".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "render_winner");
        assert_eq!(json["color"]["b"], 255);
    }

    #[test]
    fn test_is_direct() {
        assert!(Action::reply("hi").is_direct());
        assert!(Action::react("tada").is_direct());
        assert!(!Action::say("C1", "hi").is_direct());
    }
}
