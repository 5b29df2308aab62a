pub mod chat;
pub mod display;
pub mod health;
pub mod websocket;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    // Display pages are embedded by streaming tools on other origins
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([axum::http::Method::GET]);

    Router::new()
        // Health and root
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Chat bridge
        .route("/api/messages", post(chat::post_message))
        .route("/ws/chat", get(websocket::chat_stream))
        // Display
        .route("/display", get(display::show_display))
        .route("/api/display", get(display::get_frame))
        .route("/ws/display", get(websocket::display_stream))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
