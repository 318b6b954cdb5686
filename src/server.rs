//! HTTP relay for the generation pipeline.
//!
//! Exposes the three generation operations as JSON POST endpoints plus a
//! liveness check, for browser or tool frontends that should not hold the
//! backend credential themselves. Handlers delegate to the same
//! [`GenerationClient`] the CLI commands use — there is no second
//! generation code path to drift.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/ai/keyword-research` | `{seed, country}` → keyword array |
//! | `POST` | `/api/ai/content-analysis` | `{text?|base64?, mimeType?, type, audience, goal}` → smart analysis |
//! | `POST` | `/api/ai/strategy` | `{domain, businessType, goals}` → `{strategy}` |
//! | `GET`  | `/health` | Liveness + whether the backend credential is set |
//!
//! # Error Contract
//!
//! ```json
//! { "error": "Seed keyword and country are required" }
//! ```
//!
//! Request validation failures return 400 and are never forwarded to the
//! backend; generation failures return 502 with the underlying message.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::error::PipelineError;
use crate::generate::GenerationClient;
use crate::models::{AnalysisContext, KeywordResult, SmartSeoAnalysis};
use crate::normalize::NormalizedInput;

/// Shared state for all route handlers.
#[derive(Clone)]
struct AppState {
    /// `None` when the backend credential is not configured; generation
    /// endpoints then answer 500 while `/health` keeps reporting.
    client: Option<Arc<GenerationClient>>,
}

impl AppState {
    fn client(&self) -> Result<Arc<GenerationClient>, ApiError> {
        self.client.clone().ok_or_else(|| ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Generation backend credential not configured".to_string(),
            message: None,
        })
    }
}

/// Starts the relay server on the configured bind address.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let client = match GenerationClient::new(&config.generation) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("generation client unavailable: {e}");
            None
        }
    };
    let state = AppState { client };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/ai/keyword-research", post(handle_keyword_research))
        .route("/api/ai/content-analysis", post(handle_content_analysis))
        .route("/api/ai/strategy", post(handle_strategy))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    let bind_addr = config.server.bind.clone();
    println!("SEO Harness API listening on http://{}", bind_addr);
    println!("  POST /api/ai/keyword-research");
    println!("  POST /api/ai/content-analysis");
    println!("  POST /api/ai/strategy");
    println!("  GET  /health");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

/// JSON error body: `{"error": "...", "message": "..."}` with `message`
/// omitted when there is no underlying detail.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        error: message.into(),
        message: None,
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        // Validation and ingestion failures are the caller's to fix.
        if err.is_client_error() {
            return bad_request(err.to_string());
        }
        match err {
            PipelineError::EmptyResponse => ApiError {
                status: StatusCode::BAD_GATEWAY,
                error: "No response from the generation backend".to_string(),
                message: None,
            },
            PipelineError::MalformedOutput(m) => ApiError {
                status: StatusCode::BAD_GATEWAY,
                error: "Generation backend returned malformed output".to_string(),
                message: Some(m),
            },
            PipelineError::Transport(m) => ApiError {
                status: StatusCode::BAD_GATEWAY,
                error: "Generation backend unavailable".to_string(),
                message: Some(m),
            },
            // Client errors were returned above.
            other => bad_request(other.to_string()),
        }
    }
}

// ============ GET /health ============

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    timestamp: String,
    api_key_configured: bool,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        api_key_configured: GenerationClient::api_key_configured(),
    })
}

// ============ POST /api/ai/keyword-research ============

#[derive(Deserialize)]
struct KeywordResearchRequest {
    seed: Option<String>,
    country: Option<String>,
}

async fn handle_keyword_research(
    State(state): State<AppState>,
    Json(req): Json<KeywordResearchRequest>,
) -> Result<Json<Vec<KeywordResult>>, ApiError> {
    let seed = req.seed.unwrap_or_default();
    let country = req.country.unwrap_or_default();
    if seed.trim().is_empty() || country.trim().is_empty() {
        return Err(bad_request("Seed keyword and country are required"));
    }

    tracing::info!(seed = %seed, country = %country, "keyword research");
    let client = state.client()?;
    let keywords = client.keyword_research(&seed, &country).await?;
    tracing::info!(count = keywords.len(), "keyword research complete");

    Ok(Json(keywords))
}

// ============ POST /api/ai/content-analysis ============

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentAnalysisRequest {
    text: Option<String>,
    base64: Option<String>,
    mime_type: Option<String>,
    #[serde(rename = "type")]
    content_type: Option<String>,
    audience: Option<String>,
    goal: Option<String>,
}

/// Picks the canonical input for a content-analysis request: binary only
/// when both `base64` and `mimeType` are present, otherwise text, otherwise
/// a 400.
fn select_analysis_input(
    text: Option<String>,
    base64: Option<String>,
    mime_type: Option<String>,
) -> Result<NormalizedInput, ApiError> {
    match (text, base64, mime_type) {
        (_, Some(data), Some(mime_type)) => Ok(NormalizedInput::Binary { data, mime_type }),
        (Some(content), _, _) => Ok(NormalizedInput::Text { content }),
        _ => Err(bad_request("Text or file data is required")),
    }
}

async fn handle_content_analysis(
    State(state): State<AppState>,
    Json(req): Json<ContentAnalysisRequest>,
) -> Result<Json<SmartSeoAnalysis>, ApiError> {
    let input = select_analysis_input(req.text, req.base64, req.mime_type)?;

    let defaults = AnalysisContext::default();
    let ctx = AnalysisContext {
        content_type: req.content_type.unwrap_or(defaults.content_type),
        audience: req.audience.unwrap_or(defaults.audience),
        goal: req.goal.unwrap_or(defaults.goal),
    };

    tracing::info!(
        content_type = %ctx.content_type,
        audience = %ctx.audience,
        goal = %ctx.goal,
        "content analysis"
    );
    let client = state.client()?;
    let analysis = client.smart_analysis(&input, &ctx).await?;
    tracing::info!(score = analysis.seo_score, "content analysis complete");

    Ok(Json(analysis))
}

// ============ POST /api/ai/strategy ============

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrategyRequest {
    domain: Option<String>,
    business_type: Option<String>,
    goals: Option<String>,
}

#[derive(Serialize)]
struct StrategyResponse {
    strategy: String,
}

async fn handle_strategy(
    State(state): State<AppState>,
    Json(req): Json<StrategyRequest>,
) -> Result<Json<StrategyResponse>, ApiError> {
    let (domain, business_type, goals) = match (req.domain, req.business_type, req.goals) {
        (Some(d), Some(b), Some(g))
            if !d.trim().is_empty() && !b.trim().is_empty() && !g.trim().is_empty() =>
        {
            (d, b, g)
        }
        _ => return Err(bad_request("Domain, business type, and goals are required")),
    };

    tracing::info!(domain = %domain, business_type = %business_type, "strategy");
    let client = state.client()?;
    let strategy = client.strategy(&domain, &business_type, &goals).await?;
    tracing::info!(chars = strategy.len(), "strategy complete");

    Ok(Json(StrategyResponse { strategy }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_client_state() -> AppState {
        AppState { client: None }
    }

    #[tokio::test]
    async fn keyword_research_rejects_missing_seed() {
        let req = KeywordResearchRequest {
            seed: None,
            country: Some("United States of America".to_string()),
        };
        let err = handle_keyword_research(State(no_client_state()), Json(req))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn content_analysis_rejects_missing_input() {
        let req = ContentAnalysisRequest {
            text: None,
            base64: None,
            mime_type: None,
            content_type: Some("blog".to_string()),
            audience: None,
            goal: None,
        };
        let err = handle_content_analysis(State(no_client_state()), Json(req))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error, "Text or file data is required");
    }

    #[tokio::test]
    async fn strategy_rejects_blank_fields() {
        let req = StrategyRequest {
            domain: Some("example.com".to_string()),
            business_type: Some("   ".to_string()),
            goals: Some("grow organic traffic".to_string()),
        };
        let err = handle_strategy(State(no_client_state()), Json(req))
            .await
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn binary_input_requires_both_base64_and_mime_type() {
        let input = select_analysis_input(
            None,
            Some("JVBERi0=".to_string()),
            Some("application/pdf".to_string()),
        )
        .unwrap();
        assert!(matches!(input, NormalizedInput::Binary { mime_type, .. }
            if mime_type == "application/pdf"));

        // base64 without a mime type falls back to the text field.
        let input =
            select_analysis_input(Some("pasted draft".to_string()), Some("JVBERi0=".to_string()), None)
                .unwrap();
        assert!(matches!(input, NormalizedInput::Text { content } if content == "pasted draft"));

        // base64 alone is not enough.
        let err = select_analysis_input(None, Some("JVBERi0=".to_string()), None)
            .err()
            .unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = select_analysis_input(None, None, None).err().unwrap();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn pipeline_errors_map_to_contract_statuses() {
        let e: ApiError = PipelineError::Validation("seed keyword is required".into()).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);

        let e: ApiError = PipelineError::Ingestion {
            file: "draft.docx".into(),
            reason: "not a zip archive".into(),
        }
        .into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);

        let e: ApiError = PipelineError::EmptyResponse.into();
        assert_eq!(e.status, StatusCode::BAD_GATEWAY);

        let e: ApiError = PipelineError::Transport("connection refused".into()).into();
        assert_eq!(e.status, StatusCode::BAD_GATEWAY);
        assert_eq!(e.message.as_deref(), Some("connection refused"));
    }

    #[test]
    fn error_body_omits_absent_message() {
        let body = ErrorBody {
            error: "nope".to_string(),
            message: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"nope"}"#);
    }
}
