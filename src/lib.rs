//! # SEO Harness
//!
//! An AI-assisted SEO content intelligence pipeline: keyword research,
//! content analysis and rewriting, and strategy planning, driven by a
//! schema-constrained generative backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   ┌───────────────┐
//! │  Normalizer  │──▶│ GenerationClient │──▶│ Schema-checked │
//! │ text/PDF/DOCX│   │  (one code path) │   │   JSON output  │
//! └──────────────┘   └─────────────────┘   └───────┬───────┘
//!                                                  │
//!                         ┌────────────────────────┤
//!                         ▼                        ▼
//!                   ┌──────────┐            ┌──────────────┐
//!                   │   CLI    │            │  HTTP relay  │
//!                   │  (seo)   │            │   (axum)     │
//!                   └──────────┘            └──────┬───────┘
//!                                                  │
//!                                    keyword merge ▼ + JSON blob store
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! seo keywords "vegan protein powder" --country "United States of America" --project launch
//! seo analyze --file draft.docx --content-type blog --goal "rank for protein recipes"
//! seo strategy --domain example.com --business "DTC supplements" --goals "grow organic traffic"
//! seo serve api
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`error`] | Pipeline error taxonomy |
//! | [`models`] | Core data types and wire contracts |
//! | [`normalize`] | Document Normalizer (text / PDF / DOCX / TXT / MD) |
//! | [`schema`] | Output schema contracts + structural validation |
//! | [`prompts`] | Prompt builders for the generation operations |
//! | [`generate`] | Generation client (single backend boundary) |
//! | [`adapter`] | Rich → legacy analysis mapping |
//! | [`merge`] | Keyword merge engine |
//! | [`store`] | Whole-blob key-value persistence |
//! | [`server`] | HTTP relay (axum) |

pub mod adapter;
pub mod analyze;
pub mod config;
pub mod error;
pub mod generate;
pub mod merge;
pub mod models;
pub mod normalize;
pub mod projects;
pub mod prompts;
pub mod research;
pub mod schema;
pub mod server;
pub mod store;
pub mod strategy;
