//! Prompt text for the three generation operations.
//!
//! Centralizing the prompt builders keeps the CLI and the HTTP relay on
//! the same wording; the operations in [`crate::generate`] are the only
//! consumers.

use crate::models::AnalysisContext;

/// Placeholder returned when the strategy backend produces no text.
/// Strategy degrades gracefully instead of failing the caller.
pub const STRATEGY_FALLBACK: &str = "<p>Could not generate strategy.</p>";

/// Segment appended after an inline binary attachment, restating the task.
pub const ATTACHMENT_FOLLOWUP: &str = "Here is the document to analyze and optimize.";

pub fn keyword_research_prompt(seed: &str, country: &str) -> String {
    format!(
        r#"You are a Senior SEO Strategist acting for a high-end agency.
Analyze the seed keyword: "{seed}" for the market: {country}.

Your Goal: Identify high-ROI opportunities, not just generic volume.

Instructions:
1. Generate 12-15 keyword opportunities.
2. MIX: 30% Head terms (High Vol), 50% Long-tail (High Intent), 20% "Hidden Gem" (Low difficulty, decent volume).
3. Classify intent accurately. "Commercial" and "Transactional" are priority for ROI.
4. Estimate difficulty based on current SERP competitiveness for this niche (0-100).

Output strict JSON."#
    )
}

pub fn smart_analysis_prompt(ctx: &AnalysisContext) -> String {
    format!(
        r#"You are an elite SEO Content Strategist.
Your task is to analyze the user's content and fully OPTIMIZE it for search engines while improving readability for humans.

Context:
- Content Type: {content_type}
- Target Audience: {audience}
- Primary Goal: {goal}

Analysis Instructions:
1. Evaluate the content's depth, authority (E-E-A-T), and keyword integration.
2. Identify gaps in topic coverage compared to top-ranking competitors.
3. Check for Entity Salience (Google NLP) - ensure main entities are clear.

Optimization Actions:
1. Rewrite the content to match the voice but improve clarity, structure, and keyword flow.
2. Use Markdown headers (H1, H2, H3) to create a scannable hierarchy.
3. Integrate semantic keywords (LSI) naturally.
4. Ensure the first paragraph matches the User Intent (Search Intent) perfectly.

Technical Assets:
- Generate a click-worthy Meta Title (under 60 chars).
- Generate a compelling Meta Description (under 160 chars) with a call to action.
- Create valid JSON-LD Schema appropriate for the '{content_type}' (e.g., Article, Product, FAQPage).

Return result in strict JSON."#,
        content_type = ctx.content_type,
        audience = ctx.audience,
        goal = ctx.goal,
    )
}

pub fn strategy_prompt(domain: &str, business_type: &str, goals: &str) -> String {
    format!(
        r#"Act as a Senior SEO Consultant creating a bespoke 3-month strategy.

Client Profile:
- Domain: {domain}
- Business: {business_type}
- Primary Goal: {goals}

Requirements:
1. Break down strategy into Month 1 (Foundation & Technical), Month 2 (Content & Clusters), Month 3 (Authority & Outreach).
2. Provide specific, actionable tactics, not generic advice.
3. IMPORTANT: For each major tactic, explain WHY it was chosen for a {business_type} business.
4. Define specific KPIs to measure success for this business type.

Output Format:
Return ONLY raw HTML (no markdown blocks, no <html> tags).
Use semantic tags: <h2> for months, <h3> for tactics, <ul>/<li> for action lists, <p> for rationale."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_prompt_carries_seed_and_market() {
        let prompt = keyword_research_prompt("vegan protein powder", "United States of America");
        assert!(prompt.contains("\"vegan protein powder\""));
        assert!(prompt.contains("United States of America"));
        assert!(prompt.contains("12-15"));
    }

    #[test]
    fn analysis_prompt_defaults_are_general() {
        let prompt = smart_analysis_prompt(&AnalysisContext::default());
        assert!(prompt.contains("Content Type: general"));
        assert!(prompt.contains("Primary Goal: optimize"));
    }
}
