mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    if config.auth.session_url.is_none() {
        tracing::warn!("AUTH_SESSION_URL not set; every visitor is treated as signed out");
    }
    if config.auth.sign_in_url.is_none() {
        tracing::warn!("AUTH_SIGN_IN_URL not set; /sign-in will answer 503");
    }

    let port = config.port;
    let state = state::AppState::from_config(config)?;
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "mindink listening");
    axum::serve(listener, app).await?;
    Ok(())
}
