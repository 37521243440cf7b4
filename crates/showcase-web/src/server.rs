use crate::model::{DiagnosticEntry, DiagnosticLog};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use showcase_core::{IdeaSession, PageContent, Phase, SubmitOutcome, UiState};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(RustEmbed)]
#[folder = "ui/"]
struct Assets;

#[derive(Clone)]
struct AppState {
    session: Arc<IdeaSession>,
    diagnostics: DiagnosticLog,
    content: Arc<PageContent>,
}

#[derive(Debug, Deserialize)]
pub struct IdeaRequest {
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IdeaResponse {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateView {
    #[serde(flatten)]
    pub state: UiState,
    pub phase: Phase,
}

/// Serves the landing page and the idea API.
///
/// The diagnostic log passed in should be the same one observing the
/// session's workflow, otherwise `/api/diagnostics` stays empty.
pub struct ShowcaseServer {
    state: AppState,
}

impl ShowcaseServer {
    pub fn new(session: Arc<IdeaSession>, diagnostics: DiagnosticLog) -> Self {
        Self {
            state: AppState {
                session,
                diagnostics,
                content: Arc::new(PageContent::default()),
            },
        }
    }

    pub fn with_content(mut self, content: PageContent) -> Self {
        self.state.content = Arc::new(content);
        self
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/content", get(get_content))
            .route("/api/state", get(get_state))
            .route("/api/idea", post(generate_idea))
            .route("/api/diagnostics", get(list_diagnostics))
            .fallback(static_handler)
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    pub async fn start(self, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
        tracing::info!("Showcase available at http://localhost:{}", port);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

async fn get_content(State(state): State<AppState>) -> Json<PageContent> {
    Json(state.content.as_ref().clone())
}

async fn get_state(State(state): State<AppState>) -> Json<StateView> {
    let ui = state.session.snapshot();
    Json(StateView {
        phase: ui.phase(),
        state: ui,
    })
}

async fn generate_idea(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Response {
    match state.session.submit(&request.topic).await {
        SubmitOutcome::Settled(text) => Json(IdeaResponse { text }).into_response(),
        SubmitOutcome::Ignored => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "topic must not be empty".to_string(),
            }),
        )
            .into_response(),
        SubmitOutcome::Busy => (
            StatusCode::CONFLICT,
            Json(ErrorBody {
                error: "a generation is already in progress".to_string(),
            }),
        )
            .into_response(),
    }
}

async fn list_diagnostics(State(state): State<AppState>) -> Json<Vec<DiagnosticEntry>> {
    Json(state.diagnostics.recent())
}

async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if path.is_empty() || path == "index.html" {
        return index_html().await;
    }

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => index_html().await,
    }
}

async fn index_html() -> Response {
    match Assets::get("index.html") {
        Some(content) => Html(content.data).into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
