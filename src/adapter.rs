//! Result Adapter: maps the rich smart-analysis shape onto the legacy
//! quick-analysis view.
//!
//! The legacy shape is never independently generated. Some of its fields
//! have no equivalent in the rich shape and are synthesized as constants —
//! that information loss is part of the contract, not something to repair
//! with invented data.

use crate::models::{ContentAnalysis, HeadingStructure, SmartSeoAnalysis};

/// Readability placeholder carried over from the legacy analyzer.
const DEFAULT_READABILITY: &str = "Grade 8";

/// Derives a legacy [`ContentAnalysis`] from a rich analysis plus the
/// original (pre-rewrite) content. Pure and total.
///
/// - `word_count` counts whitespace-delimited tokens of the original
///   content; the empty string counts as zero words.
/// - `suggestions` are the rich shape's critical issues, verbatim.
/// - `missing_keywords` is always empty and `heading_structure` is always
///   `Good`: the rich shape carries no equivalent signals.
pub fn to_legacy_analysis(rich: &SmartSeoAnalysis, original_content: &str) -> ContentAnalysis {
    ContentAnalysis {
        score: rich.seo_score,
        readability: DEFAULT_READABILITY.to_string(),
        word_count: original_content.split_whitespace().count(),
        suggestions: rich.critical_issues.clone(),
        missing_keywords: Vec::new(),
        heading_structure: HeadingStructure::Good,
    }
}
