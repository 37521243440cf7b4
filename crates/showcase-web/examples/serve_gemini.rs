use showcase_ai::GeminiProvider;
use showcase_core::{IdeaSession, IdeaWorkflow, ShowcaseConfig};
use showcase_web::{DiagnosticLog, ShowcaseServer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ShowcaseConfig::from_env();
    if !config.has_api_key() {
        tracing::warn!("API_KEY is not set; every generation will fail");
    }

    let diagnostics = DiagnosticLog::new();
    let provider = GeminiProvider::new(&config)?;
    let workflow = IdeaWorkflow::new(provider, config.model.clone())
        .with_observer(Arc::new(diagnostics.clone()));
    let session = IdeaSession::new(workflow).with_in_flight_guard(config.in_flight_guard);

    ShowcaseServer::new(Arc::new(session), diagnostics)
        .start(config.port)
        .await
}
