//! mirabilis Core Library
//!
//! This crate provides the core functionality for mirabilis, a curated
//! archive of Albert Einstein's works, essays, letters, papers, and quotes.
//!
//! # Architecture
//!
//! Two independent halves:
//!
//! - **Content**: four JSON resources (one per category) bundled into the
//!   crate, deserialized on demand into typed records with lookup by id.
//! - **Quotes**: a SQLite store for user-collected quotes, constructed once
//!   at the composition root and shared by handle.
//!
//! # Quick Start
//!
//! ```text
//! let library = ContentLibrary::bundled();
//! let papers: Vec<Paper> = library.load_all().await?;
//! let paper: Option<Paper> = library.get_by_id("annus-mirabilis").await?;
//!
//! let store = QuoteStore::open(&config.quotes_db_path(), config.reset_policy())?;
//! store.add(&Quote::new("...", "Albert Einstein"))?;
//! ```
//!
//! # Modules
//!
//! - `content`: category definitions and the content loader
//! - `models`: data structures for the five record types
//! - `store`: SQLite-backed quote storage
//! - `config`: application configuration

pub mod config;
pub mod content;
pub mod models;
pub mod store;

pub use config::Config;
pub use content::{Category, ContentError, ContentLibrary, ContentRecord, ContentResult};
pub use models::{
    Equation, Essay, Letter, MajorWork, Paper, Prediction, Quote, Section, SubPaper, WorkItem,
};
pub use store::{QuoteStore, ResetPolicy, StoreCell, StoreError, StoreResult, SCHEMA_VERSION};
