//! Strategy planning command.
//!
//! Generates a free-form 3-month plan for a domain and business profile.
//! There is no output schema; an empty backend response degrades to a
//! placeholder instead of failing.

use anyhow::Result;

use crate::config::Config;
use crate::generate::GenerationClient;

/// CLI entry point for `seo strategy`.
pub async fn run_strategy(
    config: &Config,
    domain: &str,
    business_type: &str,
    goals: &str,
) -> Result<()> {
    let client = GenerationClient::new(&config.generation)?;
    let strategy = client.strategy(domain, business_type, goals).await?;

    println!("--- SEO Strategy for {} ---", domain);
    println!();
    println!("{}", strategy);

    Ok(())
}
