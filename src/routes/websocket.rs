use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast, watch};

use crate::{display::Frame, state::AppState};

/// WebSocket endpoint streaming display frames
///
/// Sends the current frame on connect, then every new frame.
pub async fn display_stream(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let frames = state.display.subscribe();
    tracing::info!("Display viewer connected");
    ws.on_upgrade(move |socket| handle_display_socket(socket, frames))
}

/// WebSocket endpoint streaming channel announcements to chat bridges
///
/// Each text message is a JSON `{channel, text}` object. A bridge that
/// connects while a question is live gets that question first.
pub async fn chat_stream(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // Subscribe before reading the greeting so no announcement falls in between
    let chat_rx = state.chat_tx.subscribe();
    let greeting = state.chat_greeting().await;
    tracing::info!("Chat bridge connected");
    ws.on_upgrade(move |socket| handle_chat_socket(socket, greeting, chat_rx))
}

/// Push frames until the viewer disconnects
async fn handle_display_socket(socket: WebSocket, mut frames: watch::Receiver<Frame>) {
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        loop {
            let frame = frames.borrow_and_update().clone();
            let Ok(msg_text) = serde_json::to_string(&frame) else {
                break;
            };
            if sender.send(Message::Text(msg_text)).await.is_err() {
                tracing::debug!("Display viewer went away");
                break;
            }
            if frames.changed().await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move { drain_until_close(&mut receiver).await });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!("Display viewer disconnected");
}

/// Forward broadcast announcements until the bridge disconnects
async fn handle_chat_socket(
    socket: WebSocket,
    greeting: Option<String>,
    mut chat_rx: broadcast::Receiver<String>,
) {
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        if let Some(msg_text) = greeting {
            if sender.send(Message::Text(msg_text)).await.is_err() {
                tracing::warn!("Failed to greet chat bridge");
                return;
            }
        }

        loop {
            match chat_rx.recv().await {
                Ok(msg_text) => {
                    if sender.send(Message::Text(msg_text)).await.is_err() {
                        tracing::warn!("Failed to send announcement to chat bridge");
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Chat bridge lagged, skipped {} announcement(s)", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::debug!("Announcement channel closed");
                    break;
                }
            }
        }
    });

    let mut recv_task = tokio::spawn(async move { drain_until_close(&mut receiver).await });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!("Chat bridge disconnected");
}

/// Read and discard client messages until the socket closes
async fn drain_until_close(receiver: &mut futures::stream::SplitStream<WebSocket>) {
    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Close(_) => break,
            Message::Text(text) if text.len() > 1024 => {
                tracing::warn!("Message too large: {} bytes", text.len());
                break;
            }
            // Axum answers ping frames itself
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgb;

    #[test]
    fn test_frame_message_format() {
        let frame = Frame::winner(Rgb::new(0, 0, 255), "Alice");
        let msg = serde_json::to_value(&frame).unwrap();

        assert_eq!(msg["background"]["b"], 255);
        assert_eq!(msg["lines"][0]["text"], "Alice");
        assert_eq!(msg["width"], 800);
    }
}
