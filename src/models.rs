//! Core data models for the SEO content intelligence pipeline.
//!
//! These types mirror the wire contracts exactly: generation results are
//! deserialized straight into them after schema validation, and projects
//! round-trip through the store as whole-value JSON blobs, so field names
//! are pinned with `serde(rename_all = "camelCase")` where the contract
//! uses camelCase.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Search intent classification for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchIntent {
    Informational,
    Commercial,
    Transactional,
    Navigational,
}

/// Competition level estimate for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Competition {
    Low,
    Medium,
    High,
}

/// A single generated keyword opportunity.
///
/// Uniqueness within a project is by the `keyword` string, exact match
/// (see [`crate::merge`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResult {
    pub keyword: String,
    /// Estimated monthly search volume range (e.g. `"1k-10k"`), as
    /// generated — not validated numerically.
    pub volume: String,
    /// SEO difficulty, 0–100.
    pub difficulty: u8,
    pub intent: SearchIntent,
    pub competition: Competition,
}

/// A named bucket that accumulates keyword results over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordProject {
    pub id: String,
    pub name: String,
    pub domain: String,
    /// Insertion order = first-seen order; preserved across merges.
    pub keywords: Vec<KeywordResult>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl KeywordProject {
    /// Creates an empty project with a fresh id and the current timestamp.
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            domain: domain.to_string(),
            keywords: Vec::new(),
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Meta tags produced by the smart analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub slug: String,
}

/// An internal-link suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalLink {
    pub anchor: String,
    /// Where to insert this link and why.
    pub context: String,
}

/// The rich, multi-field content-optimization result.
///
/// Produced fresh per request and not persisted by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSeoAnalysis {
    /// Score 0–100 for the original content.
    pub seo_score: u8,
    /// The full rewritten content, Markdown-formatted.
    pub optimized_content: String,
    pub meta: MetaTags,
    /// JSON-LD serialized as text; not parsed or validated as JSON here.
    pub schema_markup: String,
    pub internal_links: Vec<InternalLink>,
    /// Why the changes were made.
    pub insights: Vec<String>,
    /// Major SEO errors found in the original.
    pub critical_issues: Vec<String>,
}

/// Heading-structure verdict carried by the legacy analysis shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingStructure {
    Good,
    Fair,
    Poor,
}

/// The legacy simplified analysis view, derived from [`SmartSeoAnalysis`]
/// by [`crate::adapter::to_legacy_analysis`]; never independently generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub score: u8,
    pub readability: String,
    pub word_count: usize,
    pub suggestions: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub heading_structure: HeadingStructure,
}

/// Local user record, persisted as a whole-value blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Contextual metadata accompanying a content-analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// Content type (e.g. `"blog"`, `"product"`, `"landing"`).
    pub content_type: String,
    pub audience: String,
    pub goal: String,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self {
            content_type: "general".to_string(),
            audience: "general".to_string(),
            goal: "optimize".to_string(),
        }
    }
}

/// Markets accepted by keyword research. Requests naming any other country
/// are rejected before a generation call is made.
pub const COUNTRIES: &[&str] = &[
    "United States of America",
    "United Kingdom",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Netherlands",
    "Sweden",
    "Brazil",
    "Mexico",
    "India",
    "Japan",
    "Singapore",
    "United Arab Emirates",
    "South Africa",
    "New Zealand",
];
