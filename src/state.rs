// Shared application state

use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

use crate::core::{Action, TriviaEngine};
use crate::display::{DisplaySurface, WinnerDisplay};
use crate::models::ChannelMessage;

#[derive(Clone)]
pub struct AppState {
    /// The game; every call into it is serialized through this lock
    pub engine: Arc<Mutex<TriviaEngine>>,
    /// Local winner display
    pub display: DisplaySurface,
    /// Channel announcements for connected chat bridges (JSON)
    pub chat_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(engine: TriviaEngine) -> Self {
        let (chat_tx, _) = broadcast::channel(100);
        Self {
            engine: Arc::new(Mutex::new(engine)),
            display: DisplaySurface::new(),
            chat_tx,
        }
    }

    /// Carry out engine actions
    ///
    /// Display updates are drawn and channel messages are broadcast to
    /// chat bridges.
    ///
    /// # Returns
    ///
    /// Replies and reactions, for the caller to attach to the message
    /// being handled
    pub fn deliver(&self, actions: Vec<Action>) -> Vec<Action> {
        let (direct, side_effects): (Vec<_>, Vec<_>) =
            actions.into_iter().partition(Action::is_direct);

        for action in side_effects {
            match action {
                Action::RenderWinner { color, name } => {
                    self.display.render_winner(color, &name);
                }
                Action::Say { channel, text } => {
                    let Some(msg_str) = channel_json(channel.clone(), text) else {
                        continue;
                    };
                    // No connected bridges is not an error
                    if self.chat_tx.send(msg_str).is_err() {
                        tracing::debug!("No chat bridge connected, dropped message for {channel}");
                    }
                }
                Action::Reply { .. } | Action::React { .. } => {}
            }
        }

        direct
    }

    /// Current question as a chat message, for a bridge that just connected
    ///
    /// Announcements broadcast while no bridge was listening are lost, so a
    /// new bridge is greeted with the live question instead.
    pub async fn chat_greeting(&self) -> Option<String> {
        match self.engine.lock().await.pending_announcement()? {
            Action::Say { channel, text } => channel_json(channel, text),
            _ => None,
        }
    }
}

fn channel_json(channel: String, text: String) -> Option<String> {
    serde_json::to_string(&ChannelMessage { channel, text }).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::Rgb;

    fn state() -> AppState {
        AppState::new(TriviaEngine::new(Settings::default()))
    }

    #[test]
    fn test_deliver_returns_direct_actions() {
        let state = state();

        let direct = state.deliver(vec![
            Action::react("tada"),
            Action::say("C1", "hello"),
            Action::reply("Correct!"),
        ]);

        assert_eq!(direct, vec![Action::react("tada"), Action::reply("Correct!")]);
    }

    #[test]
    fn test_deliver_renders_winner() {
        let state = state();

        let direct = state.deliver(vec![Action::RenderWinner {
            color: Rgb::new(0, 0, 255),
            name: "Alice".to_string(),
        }]);

        assert!(direct.is_empty());
        let frame = state.display.frame();
        assert_eq!(frame.background, Rgb::new(0, 0, 255));
        assert_eq!(frame.lines[0].text, "Alice");
    }

    #[tokio::test]
    async fn test_deliver_broadcasts_say() {
        let state = state();
        let mut rx = state.chat_tx.subscribe();

        state.deliver(vec![Action::say("C1", "New question!")]);

        let raw = rx.recv().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["channel"], "C1");
        assert_eq!(json["text"], "New question!");
    }

    #[tokio::test]
    async fn test_bridge_connecting_after_start_gets_question() {
        let settings = Settings {
            game_channel: Some("C-GAME".to_string()),
            ..Settings::default()
        };
        let state = AppState::new(TriviaEngine::new(settings));

        let start_actions = state.engine.lock().await.start();
        state.deliver(start_actions);
        let mut rx = state.chat_tx.subscribe();

        assert!(rx.try_recv().is_err());
        let raw = state.chat_greeting().await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["channel"], "C-GAME");
        assert!(json["text"].as_str().unwrap().contains("`0 + 0`"));
    }

    #[tokio::test]
    async fn test_no_greeting_before_start() {
        let state = state();

        assert!(state.chat_greeting().await.is_none());
    }
}
