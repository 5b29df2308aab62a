use axum::{extract::State, http::StatusCode, Json};
use time::OffsetDateTime;

use crate::{
    models::{IncomingMessage, MessageResponse},
    services::dispatch,
    state::AppState,
};

/// Handle a chat message forwarded by the chat bridge
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `message` - The chat message
///
/// # Returns
///
/// Replies and reactions for the message; channel announcements go out on
/// /ws/chat and display updates are drawn immediately
pub async fn post_message(
    State(state): State<AppState>,
    Json(message): Json<IncomingMessage>,
) -> Result<Json<MessageResponse>, (StatusCode, String)> {
    let message = message
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let actions = {
        let mut engine = state.engine.lock().await;
        dispatch(&mut engine, &message, OffsetDateTime::now_utc())
    };

    let direct = state.deliver(actions);
    Ok(Json(MessageResponse { actions: direct }))
}
