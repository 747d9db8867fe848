//! Storage-capability contract for article documents.
//!
//! A collection is the narrow surface a document or relational engine has to
//! offer: insert-one, find-by-id, find-many, count, update-one, delete-one.
//! It knows nothing about pages, validation or clocks.

use crate::model::article::{Article, ArticleId};
use crate::repo::article_store::RepoResult;
use crate::search::filter::Filter;
use std::sync::Arc;

/// Document written by [`ArticleCollection::insert_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewArticleDocument<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Field-level set applied by [`ArticleCollection::update_one`].
///
/// Fields not listed here (`id`, `created_at`) are never touched.
/// Engines store `max(updated_at, created_at)` so a lagging clock cannot
/// move `updated_at` before creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleChanges<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub updated_at: i64,
}

/// Result ordering for [`ArticleCollection::find_many`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sort {
    /// Newest `created_at` first; ties go to the later insertion.
    #[default]
    CreatedAtDesc,
}

/// Skip/limit/sort options for [`ArticleCollection::find_many`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub skip: u64,
    /// `None` returns every remaining document.
    pub limit: Option<u64>,
    pub sort: Sort,
}

/// Engine-side operations the article store depends on.
pub trait ArticleCollection {
    /// Inserts one document and returns the engine-generated id.
    fn insert_one(&self, document: &NewArticleDocument<'_>) -> RepoResult<ArticleId>;
    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn find_many(&self, filter: &Filter, options: &FindOptions) -> RepoResult<Vec<Article>>;
    fn count(&self, filter: &Filter) -> RepoResult<u64>;
    /// Applies `changes` to the document with `id`.
    ///
    /// Returns the stored `updated_at`, or `None` when no document matched.
    fn update_one(&self, id: ArticleId, changes: &ArticleChanges<'_>) -> RepoResult<Option<i64>>;
    /// Deletes the document with `id`; returns deleted count.
    fn delete_one(&self, id: ArticleId) -> RepoResult<u64>;
}

impl<C: ArticleCollection + ?Sized> ArticleCollection for &C {
    fn insert_one(&self, document: &NewArticleDocument<'_>) -> RepoResult<ArticleId> {
        (**self).insert_one(document)
    }

    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        (**self).find_by_id(id)
    }

    fn find_many(&self, filter: &Filter, options: &FindOptions) -> RepoResult<Vec<Article>> {
        (**self).find_many(filter, options)
    }

    fn count(&self, filter: &Filter) -> RepoResult<u64> {
        (**self).count(filter)
    }

    fn update_one(&self, id: ArticleId, changes: &ArticleChanges<'_>) -> RepoResult<Option<i64>> {
        (**self).update_one(id, changes)
    }

    fn delete_one(&self, id: ArticleId) -> RepoResult<u64> {
        (**self).delete_one(id)
    }
}

impl<C: ArticleCollection + ?Sized> ArticleCollection for Arc<C> {
    fn insert_one(&self, document: &NewArticleDocument<'_>) -> RepoResult<ArticleId> {
        (**self).insert_one(document)
    }

    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        (**self).find_by_id(id)
    }

    fn find_many(&self, filter: &Filter, options: &FindOptions) -> RepoResult<Vec<Article>> {
        (**self).find_many(filter, options)
    }

    fn count(&self, filter: &Filter) -> RepoResult<u64> {
        (**self).count(filter)
    }

    fn update_one(&self, id: ArticleId, changes: &ArticleChanges<'_>) -> RepoResult<Option<i64>> {
        (**self).update_one(id, changes)
    }

    fn delete_one(&self, id: ArticleId) -> RepoResult<u64> {
        (**self).delete_one(id)
    }
}
