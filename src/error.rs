//! Error taxonomy for the content intelligence pipeline.
//!
//! Every fallible pipeline operation returns one of these variants instead
//! of an opaque error, so call sites (CLI commands, HTTP handlers) can map
//! failures to user messages and status codes without string matching.

use thiserror::Error;

/// Failure kinds surfaced by the pipeline.
///
/// No variant is ever retried automatically; a failed call is surfaced once
/// to the caller, who decides whether to let the user retry manually.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input file could not be read or decoded.
    #[error("failed to read {file}: {reason}")]
    Ingestion { file: String, reason: String },

    /// A required request field was missing or invalid. Caught before any
    /// generation call is attempted.
    #[error("{0}")]
    Validation(String),

    /// The generation backend returned no usable text.
    #[error("no response from the generation backend")]
    EmptyResponse,

    /// The backend returned text that failed JSON parsing or schema
    /// validation. The whole response is discarded; no partial salvage.
    #[error("malformed generation output: {0}")]
    MalformedOutput(String),

    /// The backend was unreachable or answered with an error status.
    #[error("generation backend unavailable: {0}")]
    Transport(String),
}

impl PipelineError {
    /// True for errors the caller caused (bad request fields or unreadable
    /// input), as opposed to backend failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PipelineError::Validation(_) | PipelineError::Ingestion { .. }
        )
    }
}
