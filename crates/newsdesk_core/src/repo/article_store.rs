//! Article repository contract and store implementation.
//!
//! # Responsibility
//! - Provide the create/get/list/update/delete/search contract over articles.
//! - Translate string ids, compute page offsets, build search filters and
//!   stamp lifecycle timestamps.
//!
//! # Invariants
//! - Malformed ids fail with `InvalidId` before any storage round-trip.
//! - `create` writes identical `created_at`/`updated_at` values.
//! - `update` never touches `id` or `created_at`, and never stores an
//!   `updated_at` earlier than `created_at`.
//! - Paged reads issue one bounded find and one unbounded count; the two are
//!   not atomic, so `total` may be stale by writes landing in between.

use crate::clock::{Clock, SystemClock};
use crate::db::DbError;
use crate::model::article::{Article, ArticleId, ArticleValidationError};
use crate::repo::collection::{
    ArticleChanges, ArticleCollection, FindOptions, NewArticleDocument, Sort,
};
use crate::repo::page::ArticlePage;
use crate::search::filter::{build_search_filter, Filter};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error taxonomy for article persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    /// Identifier string is not a well-formed article id.
    InvalidId(String),
    /// Well-formed id with no matching article.
    NotFound(ArticleId),
    /// Boundary validation failure, raised above the store.
    Validation(ArticleValidationError),
    /// Page or limit was zero.
    InvalidPage { page: u32, limit: u32 },
    /// Backend I/O, connectivity or engine failure.
    Storage(DbError),
    /// A stored document could not be decoded.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "invalid article id: `{raw}`"),
            Self::NotFound(id) => write!(f, "article not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidPage { page, limit } => write!(
                f,
                "invalid page request: page={page} limit={limit}; both must be >= 1"
            ),
            Self::Storage(err) => write!(f, "storage error: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted article data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::InvalidId(_)
            | Self::NotFound(_)
            | Self::InvalidPage { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(DbError::Sqlite(value))
    }
}

/// Parses a caller-supplied identifier string.
pub fn parse_article_id(raw: &str) -> RepoResult<ArticleId> {
    Uuid::parse_str(raw).map_err(|_| RepoError::InvalidId(raw.to_string()))
}

/// Repository interface for article operations.
pub trait ArticleRepository {
    /// Persists a new article and writes id/timestamps back into `article`.
    fn create(&self, article: &mut Article) -> RepoResult<()>;
    fn get_by_id(&self, id: &str) -> RepoResult<Article>;
    /// Lists all articles newest first, with the unfiltered total.
    fn get_all(&self, page: u32, limit: u32) -> RepoResult<ArticlePage>;
    /// Replaces title/content and refreshes `updated_at` in storage and in `article`.
    ///
    /// An absent or unknown id leaves both storage and `article` untouched.
    fn update(&self, article: &mut Article) -> RepoResult<()>;
    /// Hard-deletes by id; deleting a missing article succeeds.
    fn delete(&self, id: &str) -> RepoResult<()>;
    /// Case-insensitive substring search on title or content.
    fn search(&self, query: &str, page: u32, limit: u32) -> RepoResult<ArticlePage>;
}

/// Article store over any [`ArticleCollection`] engine.
pub struct ArticleStore<C, K = SystemClock> {
    collection: C,
    clock: K,
}

impl<C: ArticleCollection> ArticleStore<C> {
    pub fn new(collection: C) -> Self {
        Self::with_clock(collection, SystemClock)
    }
}

impl<C: ArticleCollection, K: Clock> ArticleStore<C, K> {
    /// Creates a store stamping timestamps from `clock`.
    pub fn with_clock(collection: C, clock: K) -> Self {
        Self { collection, clock }
    }

    fn find_page(&self, filter: &Filter, page: u32, limit: u32) -> RepoResult<ArticlePage> {
        let options = page_options(page, limit)?;
        let items = self.collection.find_many(filter, &options)?;
        let total = self.collection.count(filter)?;

        Ok(ArticlePage {
            items,
            total,
            page,
            limit,
        })
    }
}

impl<C: ArticleCollection, K: Clock> ArticleRepository for ArticleStore<C, K> {
    fn create(&self, article: &mut Article) -> RepoResult<()> {
        let now = self.clock.now_micros();
        let id = self.collection.insert_one(&NewArticleDocument {
            title: article.title.as_str(),
            content: article.content.as_str(),
            created_at: now,
            updated_at: now,
        })?;

        article.id = Some(id);
        article.created_at = now;
        article.updated_at = now;
        debug!("event=article_create module=repo status=ok id={id}");
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Article> {
        let id = parse_article_id(id)?;
        self.collection
            .find_by_id(id)?
            .ok_or(RepoError::NotFound(id))
    }

    fn get_all(&self, page: u32, limit: u32) -> RepoResult<ArticlePage> {
        self.find_page(&Filter::All, page, limit)
    }

    fn update(&self, article: &mut Article) -> RepoResult<()> {
        let Some(id) = article.id else {
            warn!("event=article_update module=repo status=noop reason=missing_id");
            return Ok(());
        };

        let stored_updated_at = self.collection.update_one(
            id,
            &ArticleChanges {
                title: article.title.as_str(),
                content: article.content.as_str(),
                updated_at: self.clock.now_micros(),
            },
        )?;

        match stored_updated_at {
            Some(updated_at) => {
                article.updated_at = updated_at;
                debug!("event=article_update module=repo status=ok id={id}");
            }
            None => {
                warn!("event=article_update module=repo status=noop reason=unknown_id id={id}");
            }
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let id = parse_article_id(id)?;
        let deleted = self.collection.delete_one(id)?;
        debug!("event=article_delete module=repo status=ok id={id} deleted={deleted}");
        Ok(())
    }

    fn search(&self, query: &str, page: u32, limit: u32) -> RepoResult<ArticlePage> {
        let filter = build_search_filter(query);
        self.find_page(&filter, page, limit)
    }
}

/// Converts 1-based page coordinates into skip/limit find options.
pub fn page_options(page: u32, limit: u32) -> RepoResult<FindOptions> {
    if page == 0 || limit == 0 {
        return Err(RepoError::InvalidPage { page, limit });
    }

    Ok(FindOptions {
        skip: u64::from(page - 1) * u64::from(limit),
        limit: Some(u64::from(limit)),
        sort: Sort::CreatedAtDesc,
    })
}
