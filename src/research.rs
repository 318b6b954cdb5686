//! Keyword research command.
//!
//! Generates keyword ideas for a seed term and market, prints them, and
//! optionally merges them into a named project (created on first use).

use anyhow::Result;

use crate::config::Config;
use crate::generate::GenerationClient;
use crate::merge::merge_keywords;
use crate::models::KeywordProject;
use crate::store::AppStore;

/// CLI entry point for `seo keywords`.
pub async fn run_research(
    config: &Config,
    seed: &str,
    country: &str,
    project_name: Option<&str>,
    domain: Option<&str>,
) -> Result<()> {
    let client = GenerationClient::new(&config.generation)?;
    let keywords = client.keyword_research(seed, country).await?;

    println!(
        "Generated {} keyword opportunities for \"{}\" ({}):",
        keywords.len(),
        seed,
        country
    );
    println!();
    println!(
        "{:<40} {:>10} {:>6}  {:<14} {}",
        "keyword", "volume", "diff", "intent", "competition"
    );
    for kw in &keywords {
        println!(
            "{:<40} {:>10} {:>6}  {:<14} {:?}",
            kw.keyword, kw.volume, kw.difficulty, format!("{:?}", kw.intent), kw.competition
        );
    }

    if let Some(name) = project_name {
        let store = AppStore::open(&config.store.path);
        let project = match store.find_project_by_name(name)? {
            Some(existing) => existing,
            None => KeywordProject::new(name, domain.unwrap_or_default()),
        };

        let before = project.keywords.len();
        let merged = merge_keywords(&project, &keywords);
        store.save_project(&merged)?;

        println!();
        println!(
            "Project '{}': {} new keywords added ({} total).",
            name,
            merged.keywords.len() - before,
            merged.keywords.len()
        );
    }

    Ok(())
}
