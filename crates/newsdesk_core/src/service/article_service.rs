//! Article use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for request adapters.
//! - Delegate every call to the repository unchanged.
//!
//! # Invariants
//! - Arguments and results (including errors) pass through untouched.
//! - The service holds no state besides its repository.

use crate::model::article::Article;
use crate::repo::article_store::{ArticleRepository, RepoResult};
use crate::repo::page::ArticlePage;

/// Use-case service wrapper for article operations.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_article(&self, article: &mut Article) -> RepoResult<()> {
        self.repo.create(article)
    }

    pub fn get_article(&self, id: &str) -> RepoResult<Article> {
        self.repo.get_by_id(id)
    }

    pub fn list_articles(&self, page: u32, limit: u32) -> RepoResult<ArticlePage> {
        self.repo.get_all(page, limit)
    }

    /// Updates an existing article by id.
    ///
    /// An unknown id is a silent no-op, as in the repository.
    pub fn update_article(&self, article: &mut Article) -> RepoResult<()> {
        self.repo.update(article)
    }

    pub fn delete_article(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }

    pub fn search_articles(&self, query: &str, page: u32, limit: u32) -> RepoResult<ArticlePage> {
        self.repo.search(query, page, limit)
    }
}
