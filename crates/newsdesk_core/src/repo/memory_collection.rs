//! In-process article collection.
//!
//! Documents live behind one `Mutex`, so a single instance can be shared
//! across threads (for example as `Arc<MemoryArticleCollection>`). Nothing
//! survives the process.

use crate::db::DbError;
use crate::model::article::{Article, ArticleId};
use crate::repo::article_store::RepoResult;
use crate::repo::collection::{
    ArticleChanges, ArticleCollection, FindOptions, NewArticleDocument, Sort,
};
use crate::search::filter::Filter;
use std::cmp::Reverse;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

const ENGINE_NAME: &str = "memory article collection";

#[derive(Debug)]
struct StoredArticle {
    seq: u64,
    article: Article,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_seq: u64,
    documents: Vec<StoredArticle>,
}

/// Article collection held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryArticleCollection {
    state: Mutex<MemoryState>,
}

impl MemoryArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.lock()?.documents.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| DbError::Poisoned(ENGINE_NAME).into())
    }
}

impl ArticleCollection for MemoryArticleCollection {
    fn insert_one(&self, document: &NewArticleDocument<'_>) -> RepoResult<ArticleId> {
        let mut state = self.lock()?;
        let id = Uuid::new_v4();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.documents.push(StoredArticle {
            seq,
            article: Article {
                id: Some(id),
                title: document.title.to_string(),
                content: document.content.to_string(),
                created_at: document.created_at,
                updated_at: document.updated_at,
            },
        });
        Ok(id)
    }

    fn find_by_id(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let state = self.lock()?;
        Ok(state
            .documents
            .iter()
            .find(|stored| stored.article.id == Some(id))
            .map(|stored| stored.article.clone()))
    }

    fn find_many(&self, filter: &Filter, options: &FindOptions) -> RepoResult<Vec<Article>> {
        let state = self.lock()?;
        let mut matched = state
            .documents
            .iter()
            .filter(|stored| filter.matches(&stored.article))
            .collect::<Vec<_>>();

        match options.sort {
            Sort::CreatedAtDesc => {
                matched.sort_by_key(|stored| Reverse((stored.article.created_at, stored.seq)))
            }
        }

        let skip = usize::try_from(options.skip).unwrap_or(usize::MAX);
        let limit = options
            .limit
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(matched
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|stored| stored.article.clone())
            .collect())
    }

    fn count(&self, filter: &Filter) -> RepoResult<u64> {
        let state = self.lock()?;
        let count = state
            .documents
            .iter()
            .filter(|stored| filter.matches(&stored.article))
            .count();
        Ok(count as u64)
    }

    fn update_one(&self, id: ArticleId, changes: &ArticleChanges<'_>) -> RepoResult<Option<i64>> {
        let mut state = self.lock()?;
        let Some(stored) = state
            .documents
            .iter_mut()
            .find(|stored| stored.article.id == Some(id))
        else {
            return Ok(None);
        };

        stored.article.title = changes.title.to_string();
        stored.article.content = changes.content.to_string();
        stored.article.updated_at = changes.updated_at.max(stored.article.created_at);
        Ok(Some(stored.article.updated_at))
    }

    fn delete_one(&self, id: ArticleId) -> RepoResult<u64> {
        let mut state = self.lock()?;
        let before = state.documents.len();
        state
            .documents
            .retain(|stored| stored.article.id != Some(id));
        Ok((before - state.documents.len()) as u64)
    }
}
