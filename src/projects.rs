//! Project management commands: list, show, and delete keyword projects.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::store::AppStore;

/// CLI entry point for `seo projects list`.
pub fn run_list(config: &Config) -> Result<()> {
    let store = AppStore::open(&config.store.path);
    let projects = store.get_projects()?;

    if projects.is_empty() {
        println!("No projects yet. Create one with: seo keywords <seed> --project <name>");
        return Ok(());
    }

    println!(
        "{:<38} {:<20} {:<24} {:>8}  {}",
        "id", "name", "domain", "keywords", "created"
    );
    for project in &projects {
        println!(
            "{:<38} {:<20} {:<24} {:>8}  {}",
            project.id,
            project.name,
            project.domain,
            project.keywords.len(),
            format_ts(project.created_at)
        );
    }

    Ok(())
}

/// CLI entry point for `seo projects show`.
pub fn run_show(config: &Config, id_or_name: &str) -> Result<()> {
    let store = AppStore::open(&config.store.path);
    let projects = store.get_projects()?;

    let project = projects
        .iter()
        .find(|p| p.id == id_or_name || p.name == id_or_name);
    let Some(project) = project else {
        bail!("project not found: {}", id_or_name);
    };

    println!("--- Project ---");
    println!("id:      {}", project.id);
    println!("name:    {}", project.name);
    println!("domain:  {}", project.domain);
    println!("created: {}", format_ts(project.created_at));
    println!();
    println!("--- Keywords ({}) ---", project.keywords.len());
    for kw in &project.keywords {
        println!(
            "{:<40} {:>10} {:>6}  {:<14} {:?}",
            kw.keyword,
            kw.volume,
            kw.difficulty,
            format!("{:?}", kw.intent),
            kw.competition
        );
    }

    Ok(())
}

/// CLI entry point for `seo projects delete`.
pub fn run_delete(config: &Config, id: &str) -> Result<()> {
    let store = AppStore::open(&config.store.path);
    let before = store.get_projects()?.len();
    store.delete_project(id)?;
    let after = store.get_projects()?.len();

    if after == before {
        bail!("project not found: {}", id);
    }
    println!("Deleted project {}.", id);
    Ok(())
}

fn format_ts(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| millis.to_string())
}
