//! # SEO Harness CLI (`seo`)
//!
//! The `seo` binary drives the content intelligence pipeline from the
//! command line and can also serve the HTTP relay used by browser
//! frontends.
//!
//! ## Usage
//!
//! ```bash
//! seo --config ./config/seo.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `seo keywords "<seed>"` | Generate ranked keyword ideas for a market |
//! | `seo analyze` | Analyze and rewrite content (text or PDF/DOCX/TXT/MD file) |
//! | `seo strategy` | Generate a free-form 3-month SEO plan |
//! | `seo projects list|show|delete` | Manage saved keyword projects |
//! | `seo serve api` | Start the HTTP relay |
//!
//! The generation backend credential is read from the `GEMINI_API_KEY`
//! environment variable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seo_harness::models::AnalysisContext;
use seo_harness::{analyze, config, projects, research, server, strategy};

/// SEO Harness — AI-assisted keyword research, content analysis, and
/// strategy planning.
#[derive(Parser)]
#[command(
    name = "seo",
    about = "SEO Harness — AI-assisted keyword research, content analysis, and strategy planning",
    version
)]
struct Cli {
    /// Path to configuration file (TOML). All settings have defaults, so
    /// the file is optional.
    #[arg(long, global = true, default_value = "./config/seo.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate ranked keyword ideas for a seed term and market.
    ///
    /// Prints 12-15 opportunities with volume, difficulty, intent, and
    /// competition. With --project, merges the batch into a saved project
    /// (created on first use), de-duplicating by exact keyword text.
    Keywords {
        /// Seed keyword (e.g., "vegan protein powder").
        seed: String,

        /// Target market. Must be one of the supported country names.
        #[arg(long, default_value = "United States of America")]
        country: String,

        /// Merge results into this named project.
        #[arg(long)]
        project: Option<String>,

        /// Domain recorded when the project is created.
        #[arg(long)]
        domain: Option<String>,
    },

    /// Analyze and rewrite content for SEO.
    ///
    /// Input is pasted text (--text) or a file (--file): PDF is forwarded
    /// to the backend as binary, DOCX is reduced to its text runs, and
    /// everything else is read as UTF-8 text.
    Analyze {
        /// Pasted content to analyze.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Path to a PDF/DOCX/TXT/MD file.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Content type (blog, product, landing, ...).
        #[arg(long, default_value = "general")]
        content_type: String,

        /// Target audience.
        #[arg(long, default_value = "general")]
        audience: String,

        /// Primary optimization goal.
        #[arg(long, default_value = "optimize")]
        goal: String,

        /// Print the legacy quick-analysis view instead of the full result.
        /// Requires text input.
        #[arg(long)]
        quick: bool,

        /// Target keyword for the quick view's optimization goal.
        #[arg(long, requires = "quick")]
        keyword: Option<String>,
    },

    /// Generate a free-form 3-month SEO strategy plan.
    Strategy {
        /// Client domain.
        #[arg(long)]
        domain: String,

        /// Business type (e.g., "DTC supplements").
        #[arg(long)]
        business: String,

        /// Primary goals.
        #[arg(long)]
        goals: String,
    },

    /// Manage saved keyword projects.
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Start the HTTP relay server.
    Serve {
        #[command(subcommand)]
        service: ServeService,
    },
}

/// Project management subcommands.
#[derive(Subcommand)]
enum ProjectAction {
    /// List all saved projects.
    List,
    /// Show a project's keywords, by id or name.
    Show {
        /// Project id or exact name.
        id: String,
    },
    /// Delete a project by id.
    Delete {
        /// Project id.
        id: String,
    },
}

/// Server subcommands.
#[derive(Subcommand)]
enum ServeService {
    /// Serve the JSON API (three generation endpoints plus /health).
    Api,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Every setting has a default, so a missing config file is fine.
    let cfg = config::load_config(&cli.config).unwrap_or_else(|_| config::Config::minimal());

    match cli.command {
        Commands::Keywords {
            seed,
            country,
            project,
            domain,
        } => {
            research::run_research(&cfg, &seed, &country, project.as_deref(), domain.as_deref())
                .await?;
        }
        Commands::Analyze {
            text,
            file,
            content_type,
            audience,
            goal,
            quick,
            keyword,
        } => {
            let ctx = AnalysisContext {
                content_type,
                audience,
                goal,
            };
            analyze::run_analyze(
                &cfg,
                text.as_deref(),
                file.as_deref(),
                ctx,
                quick,
                keyword.as_deref(),
            )
            .await?;
        }
        Commands::Strategy {
            domain,
            business,
            goals,
        } => {
            strategy::run_strategy(&cfg, &domain, &business, &goals).await?;
        }
        Commands::Projects { action } => match action {
            ProjectAction::List => projects::run_list(&cfg)?,
            ProjectAction::Show { id } => projects::run_show(&cfg, &id)?,
            ProjectAction::Delete { id } => projects::run_delete(&cfg, &id)?,
        },
        Commands::Serve { service } => match service {
            ServeService::Api => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        tracing_subscriber::EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| "info".into()),
                    )
                    .init();
                server::run_server(&cfg).await?;
            }
        },
    }

    Ok(())
}
