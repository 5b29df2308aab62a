use serde::{Deserialize, Serialize};

/// Chat message forwarded by the chat bridge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Channel the message was posted in
    pub channel: String,
    /// Stable sender identifier
    pub sender_id: String,
    /// Sender's display name, shown on the display when they win
    pub sender_name: String,
    /// Message text addressed to the bot
    pub text: String,
}

impl IncomingMessage {
    /// Check required fields and trim the text
    ///
    /// # Errors
    ///
    /// Returns an error if the channel or sender is missing, or the text
    /// is longer than 1000 characters
    pub fn validate(mut self) -> Result<Self, String> {
        if self.channel.trim().is_empty() {
            return Err("Channel cannot be empty".to_string());
        }

        if self.sender_id.trim().is_empty() {
            return Err("Sender cannot be empty".to_string());
        }

        if self.text.len() > 1000 {
            return Err("Message must be 1000 characters or less".to_string());
        }

        self.text = self.text.trim().to_string();
        if self.sender_name.trim().is_empty() {
            self.sender_name = self.sender_id.clone();
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(channel: &str, sender_id: &str, sender_name: &str, text: &str) -> IncomingMessage {
        IncomingMessage {
            channel: channel.to_string(),
            sender_id: sender_id.to_string(),
            sender_name: sender_name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_validate_trims_text() {
        let msg = message("C1", "U1", "Alice", "  game 42 blue  ")
            .validate()
            .unwrap();
        assert_eq!(msg.text, "game 42 blue");
    }

    #[test]
    fn test_validate_missing_channel() {
        assert!(message(" ", "U1", "Alice", "hi").validate().is_err());
    }

    #[test]
    fn test_validate_missing_sender() {
        assert!(message("C1", "", "Alice", "hi").validate().is_err());
    }

    #[test]
    fn test_validate_too_long() {
        let long_text = "a".repeat(1001);
        assert!(message("C1", "U1", "Alice", &long_text).validate().is_err());
    }

    #[test]
    fn test_validate_defaults_display_name() {
        let msg = message("C1", "U1", "", "hi").validate().unwrap();
        assert_eq!(msg.sender_name, "U1");
    }

    #[test]
    fn test_deserialize() {
        let msg: IncomingMessage = serde_json::from_str(
            r#"{"channel":"C1","sender_id":"U1","sender_name":"Alice","text":"admin status"}"#,
        )
        .unwrap();
        assert_eq!(msg.channel, "C1");
        assert_eq!(msg.text, "admin status");
    }
}
