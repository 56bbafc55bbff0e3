mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::llm::TextGenerator;

#[tokio::main]
async fn main() {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::GatewayConfig::from_env().expect("invalid gateway config");

    // A missing credential is non-fatal: generation answers 500. Any other
    // LLM misconfiguration stops startup.
    let generator: Option<Arc<dyn TextGenerator>> =
        match llm::LlmClient::from_env_optional().expect("invalid LLM config") {
            Some(client) => {
                tracing::info!(provider = client.provider(), model = client.model(), "LLM client initialized");
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            None => None,
        };

    let state = state::AppState::new(generator);
    let app = routes::app(state, config.site_dir.as_deref());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, site_dir = ?config.site_dir, "gateway listening");
    axum::serve(listener, app).await.expect("server failed");
}
