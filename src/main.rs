use txdash::{app, seed, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "txdash=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;

    if app_state.config.seed_on_startup {
        if let Err(e) =
            seed::services::initialize(app_state.store.as_ref(), app_state.seed.as_ref()).await
        {
            tracing::warn!(error = %format!("{e:#}"), "startup seeding failed; continuing");
        }
    }

    let addr = app_state.config.listen_addr();
    app::serve(app::build_app(app_state), &addr).await
}
