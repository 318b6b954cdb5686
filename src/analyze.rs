//! Content analysis command.
//!
//! Normalizes the input (pasted text or a PDF/DOCX/TXT/MD file), runs the
//! smart analysis, and prints either the full rich result or — with
//! `--quick` — the legacy simplified view derived from it.

use anyhow::{bail, Result};
use std::path::Path;

use crate::adapter::to_legacy_analysis;
use crate::config::Config;
use crate::generate::GenerationClient;
use crate::models::AnalysisContext;
use crate::normalize::{normalize_file, normalize_text, NormalizedInput};

/// CLI entry point for `seo analyze`.
pub async fn run_analyze(
    config: &Config,
    text: Option<&str>,
    file: Option<&Path>,
    ctx: AnalysisContext,
    quick: bool,
    keyword: Option<&str>,
) -> Result<()> {
    let input = match (text, file) {
        (Some(t), None) => normalize_text(t),
        (None, Some(path)) => normalize_file(path)?,
        _ => bail!("provide exactly one of --text or --file"),
    };

    let client = GenerationClient::new(&config.generation)?;

    if quick {
        // The legacy view needs the original text for its local word count,
        // so binary (PDF) input can't take this path.
        let original = match &input {
            NormalizedInput::Text { content } => content.clone(),
            NormalizedInput::Binary { .. } => {
                bail!("--quick requires text input; PDFs are only supported by the full analysis")
            }
        };

        let ctx = AnalysisContext {
            goal: match keyword {
                Some(kw) => format!("Optimize for keyword: {kw}"),
                None => ctx.goal,
            },
            ..AnalysisContext::default()
        };

        let rich = client.smart_analysis(&input, &ctx).await?;
        let legacy = to_legacy_analysis(&rich, &original);

        println!("--- Quick Analysis ---");
        println!("score:             {}", legacy.score);
        println!("readability:       {}", legacy.readability);
        println!("word count:        {}", legacy.word_count);
        println!("heading structure: {:?}", legacy.heading_structure);
        println!();
        println!("--- Suggestions ({}) ---", legacy.suggestions.len());
        for suggestion in &legacy.suggestions {
            println!("- {}", suggestion);
        }
        return Ok(());
    }

    let rich = client.smart_analysis(&input, &ctx).await?;

    println!("--- SEO Analysis ---");
    println!("score: {}/100", rich.seo_score);
    println!();
    println!("--- Meta ---");
    println!("title:       {}", rich.meta.title);
    println!("description: {}", rich.meta.description);
    println!("slug:        {}", rich.meta.slug);
    println!();

    println!("--- Critical Issues ({}) ---", rich.critical_issues.len());
    for issue in &rich.critical_issues {
        println!("- {}", issue);
    }
    println!();

    println!("--- Insights ({}) ---", rich.insights.len());
    for insight in &rich.insights {
        println!("- {}", insight);
    }
    println!();

    println!("--- Internal Links ({}) ---", rich.internal_links.len());
    for link in &rich.internal_links {
        println!("- [{}] {}", link.anchor, link.context);
    }
    println!();

    println!("--- Schema Markup ---");
    println!("{}", rich.schema_markup);
    println!();

    println!("--- Optimized Content ---");
    println!("{}", rich.optimized_content);

    Ok(())
}
