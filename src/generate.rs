//! Generation Client: the single boundary to the generative backend.
//!
//! Builds one logical "prompt unit" (instructive text, optional inline
//! binary attachment, restating segment), issues a single POST against the
//! Gemini `generateContent` endpoint, and parses/validates the structured
//! response. There is exactly one code path to the provider — the CLI
//! commands and the HTTP relay both go through this client, so the output
//! contracts cannot drift between surfaces.
//!
//! No automatic retries: a failed call is surfaced once to the caller as a
//! typed [`PipelineError`], and the user decides whether to retry.

use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::error::PipelineError;
use crate::models::{AnalysisContext, KeywordResult, SmartSeoAnalysis, COUNTRIES};
use crate::normalize::NormalizedInput;
use crate::prompts;
use crate::schema::{schema_for, Operation, SchemaDescriptor};

/// Environment variable holding the backend credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Client for the generative backend. Constructed once at startup and
/// passed to the components that need it.
pub struct GenerationClient {
    http: reqwest::Client,
    api_key: String,
    config: GenerationConfig,
}

impl GenerationClient {
    /// Creates a client from configuration. Fails if the API key
    /// environment variable is not set or the HTTP client cannot be built.
    pub fn new(config: &GenerationConfig) -> Result<Self, PipelineError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            PipelineError::Validation(format!("{API_KEY_VAR} environment variable not set"))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            config: config.clone(),
        })
    }

    /// Whether the backend credential is configured. Reported by the
    /// relay's health endpoint.
    pub fn api_key_configured() -> bool {
        std::env::var(API_KEY_VAR).is_ok()
    }

    // ============ Typed operations ============

    /// Generates ranked keyword ideas for a seed term and market.
    ///
    /// Validates the request (non-empty seed, known country) before any
    /// backend call is attempted.
    pub async fn keyword_research(
        &self,
        seed: &str,
        country: &str,
    ) -> Result<Vec<KeywordResult>, PipelineError> {
        if seed.trim().is_empty() {
            return Err(PipelineError::Validation(
                "seed keyword is required".to_string(),
            ));
        }
        if !COUNTRIES.contains(&country) {
            return Err(PipelineError::Validation(format!(
                "unknown market: '{country}'"
            )));
        }

        let schema = schema_for(Operation::KeywordResearch);
        let prompt = prompts::keyword_research_prompt(seed, country);
        let value = self
            .generate_structured(&self.config.model_fast, &prompt, None, &schema)
            .await?;

        serde_json::from_value(value).map_err(|e| PipelineError::MalformedOutput(e.to_string()))
    }

    /// Deep content analysis and rewrite.
    ///
    /// Rejects empty input before any backend call.
    pub async fn smart_analysis(
        &self,
        input: &NormalizedInput,
        ctx: &AnalysisContext,
    ) -> Result<SmartSeoAnalysis, PipelineError> {
        if input.is_empty() {
            return Err(PipelineError::Validation(
                "content is required: provide text or a file".to_string(),
            ));
        }

        let schema = schema_for(Operation::SmartAnalysis);
        let prompt = prompts::smart_analysis_prompt(ctx);
        let value = self
            .generate_structured(&self.config.model_smart, &prompt, Some(input), &schema)
            .await?;

        serde_json::from_value(value).map_err(|e| PipelineError::MalformedOutput(e.to_string()))
    }

    /// Free-form strategic plan. No output schema; an empty backend
    /// response degrades to a fixed placeholder instead of failing.
    pub async fn strategy(
        &self,
        domain: &str,
        business_type: &str,
        goals: &str,
    ) -> Result<String, PipelineError> {
        for (label, value) in [
            ("domain", domain),
            ("business type", business_type),
            ("goals", goals),
        ] {
            if value.trim().is_empty() {
                return Err(PipelineError::Validation(format!("{label} is required")));
            }
        }

        let prompt = prompts::strategy_prompt(domain, business_type, goals);
        let text = self.generate_text(&self.config.model_smart, &prompt).await?;
        Ok(strategy_text_or_fallback(text))
    }

    // ============ Generic generation ============

    /// Schema-constrained generation: instructs the backend to emit
    /// nothing but JSON matching `schema`, then parses and validates it.
    pub async fn generate_structured(
        &self,
        model: &str,
        prompt: &str,
        attachment: Option<&NormalizedInput>,
        schema: &SchemaDescriptor,
    ) -> Result<Value, PipelineError> {
        let parts = build_parts(prompt, attachment);
        let text = self.call(model, parts, Some(schema)).await?;
        parse_structured(&text, schema)
    }

    /// Unconstrained generation returning the backend's text verbatim
    /// (possibly empty — the caller chooses how to degrade).
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<String, PipelineError> {
        let parts = build_parts(prompt, None);
        self.call(model, parts, None).await
    }

    async fn call(
        &self,
        model: &str,
        parts: Vec<Value>,
        schema: Option<&SchemaDescriptor>,
    ) -> Result<String, PipelineError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_base.trim_end_matches('/'),
            model,
            self.api_key
        );

        let mut body = json!({ "contents": [{ "parts": parts }] });
        if let Some(schema) = schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema.to_response_schema(),
            });
        }

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::Transport(format!(
                "backend returned {status}: {body_text}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Transport(e.to_string()))?;

        Ok(payload.text())
    }
}

/// Strategy output has no schema and degrades instead of failing: empty
/// backend text becomes the fixed placeholder, anything else is returned
/// verbatim.
fn strategy_text_or_fallback(text: String) -> String {
    if text.trim().is_empty() {
        prompts::STRATEGY_FALLBACK.to_string()
    } else {
        text
    }
}

/// Assembles the prompt unit: instructive text, then the attachment (inline
/// binary with a restating segment, or the original text content).
fn build_parts(prompt: &str, attachment: Option<&NormalizedInput>) -> Vec<Value> {
    let mut parts = vec![json!({ "text": prompt })];
    match attachment {
        Some(NormalizedInput::Binary { data, mime_type }) => {
            parts.push(json!({
                "inlineData": { "data": data, "mimeType": mime_type }
            }));
            parts.push(json!({ "text": prompts::ATTACHMENT_FOLLOWUP }));
        }
        Some(NormalizedInput::Text { content }) => {
            parts.push(json!({ "text": format!("Original Content:\n{content}") }));
        }
        None => {}
    }
    parts
}

/// Parses backend text as JSON and validates it against the schema.
///
/// Empty text → [`PipelineError::EmptyResponse`]; unparseable or
/// out-of-contract JSON → [`PipelineError::MalformedOutput`]. The response
/// is discarded wholesale on failure — no field-by-field salvage.
pub fn parse_structured(text: &str, schema: &SchemaDescriptor) -> Result<Value, PipelineError> {
    if text.trim().is_empty() {
        return Err(PipelineError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| PipelineError::MalformedOutput(format!("not valid JSON: {e}")))?;

    schema
        .validate(&value)
        .map_err(PipelineError::MalformedOutput)?;

    Ok(value)
}

// ============ Backend wire types ============

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts; empty when the
    /// backend returned no usable text.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
