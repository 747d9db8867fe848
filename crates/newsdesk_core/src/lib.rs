//! Core storage and query layer for newsdesk articles.
//! This crate is the single source of truth for article invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, NewsdeskConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::{
    validate_article_input, Article, ArticleId, ArticleValidationError, CONTENT_MIN_CHARS,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
pub use repo::article_store::{
    parse_article_id, ArticleRepository, ArticleStore, RepoError, RepoResult,
};
pub use repo::collection::{
    ArticleChanges, ArticleCollection, FindOptions, NewArticleDocument, Sort,
};
pub use repo::memory_collection::MemoryArticleCollection;
pub use repo::page::{ArticlePage, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
pub use repo::sqlite_collection::SqliteArticleCollection;
pub use search::filter::{build_search_filter, Field, Filter};
pub use service::article_service::ArticleService;

/// Minimal health-check API for smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
