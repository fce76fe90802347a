use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use dispatch_advisor::application::ports::{LlmClient, TranscriptionEngine};
use dispatch_advisor::application::services::{
    BackendTimeouts, DispatchService, RecommendationEngine,
};
use dispatch_advisor::domain::ProtocolCatalog;
use dispatch_advisor::infrastructure::audio::{MockTranscriptionEngine, TranscriptionEngineFactory};
use dispatch_advisor::infrastructure::llm::{MockLlmClient, OpenAiClient};
use dispatch_advisor::infrastructure::observability::{TracingConfig, init_tracing};
use dispatch_advisor::presentation::{
    AppState, Environment, ScaffoldConfig, Settings, SettingsError, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(SettingsError::InvalidEnvironment)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let scaffold = ScaffoldConfig::from_env();
    let (llm_client, transcription_engine) = build_backends(&settings, &scaffold)?;

    let recommendation_engine = RecommendationEngine::new(
        llm_client,
        settings.llm.chat_model.clone(),
        settings.llm.max_tokens,
    );

    let dispatch_service = Arc::new(DispatchService::new(
        recommendation_engine,
        transcription_engine,
        Arc::new(ProtocolCatalog::standard()),
        BackendTimeouts {
            completion: Duration::from_secs(settings.llm.timeout_secs),
            transcription: Duration::from_secs(settings.transcription.timeout_secs),
        },
    ));

    let state = AppState::new(dispatch_service)
        .with_max_upload_bytes(settings.server.max_upload_bytes());

    let router = create_router(state);

    let addr = settings.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, scaffold = scaffold.enabled, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_backends(
    settings: &Settings,
    scaffold: &ScaffoldConfig,
) -> anyhow::Result<(Arc<dyn LlmClient>, Arc<dyn TranscriptionEngine>)> {
    if scaffold.enabled {
        let delay = Duration::from_millis(scaffold.mock_response_delay_ms);
        tracing::warn!(
            delay_ms = scaffold.mock_response_delay_ms,
            "Scaffold mode: using mock backends"
        );
        return Ok((
            Arc::new(MockLlmClient::new(delay)),
            Arc::new(MockTranscriptionEngine::new(delay)),
        ));
    }

    if settings.llm.api_key.is_empty() {
        tracing::warn!("LLM API key is empty; completion calls will be rejected upstream");
    }

    let llm_client = OpenAiClient::from_settings(&settings.llm)
        .context("Failed to build completion client")?;
    let transcription_engine = TranscriptionEngineFactory::create(&settings.transcription)
        .context("Failed to build transcription engine")?;

    Ok((Arc::new(llm_client), transcription_engine))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
