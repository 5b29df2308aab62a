use axum::{extract::State, response::Redirect, Json};

use crate::{models::HealthResponse, state::AppState};

/// Root path - the display is the only page
pub async fn root() -> Redirect {
    Redirect::to("/display")
}

/// Liveness plus a glance at the round in progress
///
/// `awaiting_answer` is false while the game is in cooldown or still
/// generating its next question.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let engine = state.engine.lock().await;
    let game = engine.state();

    Json(HealthResponse {
        status: "ok",
        awaiting_answer: !game.answered && !game.generating,
        difficulty_level: game.difficulty_level,
        total_correct: game.total_correct,
    })
}
