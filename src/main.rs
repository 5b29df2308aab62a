use std::time::Duration;

use gamebot::{
    config::Settings,
    core::TriviaEngine,
    display::WinnerDisplay,
    routes,
    services::scheduler,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading settings
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamebot=info,tower_http=warn".into()),
        )
        .init();

    tracing::info!("🎮 Gamebot starting...");

    let settings = Settings::from_env()?;
    tracing::info!(
        "Settings: game_channel={:?} admin_channel={:?} delay={}s difficulty={} modulus={}",
        settings.game_channel,
        settings.admin_channel,
        settings.default_delay,
        settings.game_difficulty,
        settings.difficulty_modulus
    );

    let port = settings.port;
    let tick_period = Duration::from_secs(settings.tick_seconds.max(1));

    let state = AppState::new(TriviaEngine::new(settings));
    state.display.render_startup_banner();

    let start_actions = state.engine.lock().await.start();
    state.deliver(start_actions);

    tokio::spawn(scheduler::run_ticker(state.clone(), tick_period));

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("✅ Listening on http://{} (display at /display)", addr);

    axum::serve(listener, app).await?;

    tracing::info!("👋 Shutting down gamebot...");
    Ok(())
}
