use serde::Serialize;

use crate::core::Action;

/// Response to the chat bridge for one incoming message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Replies and reactions for the incoming message, in order
    pub actions: Vec<Action>,
}

/// Outbound channel message streamed to chat bridges on /ws/chat
#[derive(Debug, Clone, Serialize)]
pub struct ChannelMessage {
    pub channel: String,
    pub text: String,
}

/// Body of GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// A question is live and guesses are being checked
    pub awaiting_answer: bool,
    pub difficulty_level: usize,
    pub total_correct: u64,
}
