use std::time::Duration;
use time::OffsetDateTime;
use tokio::time::MissedTickBehavior;

use crate::{core::Action, state::AppState};

/// Run one scheduler tick against the engine and deliver the result
///
/// # Returns
///
/// The actions produced by the engine
pub async fn tick_once(state: &AppState, now: OffsetDateTime) -> Vec<Action> {
    let actions = {
        let mut engine = state.engine.lock().await;
        engine.on_tick(now)
    };

    if !actions.is_empty() {
        tracing::debug!("Tick produced {} action(s)", actions.len());
    }

    let leftover = state.deliver(actions.clone());
    for action in leftover {
        tracing::warn!("Dropping reply with no message to attach to: {:?}", action);
    }

    actions
}

/// Call into the engine on a fixed interval, forever
///
/// The engine decides whether a tick does anything.
pub async fn run_ticker(state: AppState, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!("Ticker running every {:?}", period);

    loop {
        interval.tick().await;
        tick_once(&state, OffsetDateTime::now_utc()).await;
    }
}
