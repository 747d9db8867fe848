//! Article domain model.
//!
//! # Responsibility
//! - Define the persisted article shape and its lifecycle fields.
//! - Provide the boundary validator invoked before create/update.
//!
//! # Invariants
//! - `id` is assigned by the storage engine and never changes afterwards.
//! - `created_at <= updated_at` for every persisted article.
//! - Validation is a boundary concern; the store never calls it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned by the storage engine.
pub type ArticleId = Uuid;

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Minimum content length in characters.
pub const CONTENT_MIN_CHARS: usize = 10;

/// Short text article ("news item").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// `None` until the article is persisted by a create call.
    pub id: Option<ArticleId>,
    pub title: String,
    pub content: String,
    /// Unix epoch microseconds. Written once by create.
    pub created_at: i64,
    /// Unix epoch microseconds. Refreshed by every successful update.
    pub updated_at: i64,
}

impl Article {
    /// Creates an unsaved article with zeroed timestamps.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Returns whether this value has been assigned an id by a store.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Validates title/content against boundary rules.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        validate_article_input(&self.title, &self.content)
    }
}

/// Boundary validation failures for article text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyTitle,
    TitleTooShort { len: usize, min: usize },
    TitleTooLong { len: usize, max: usize },
    EmptyContent,
    ContentTooShort { len: usize, min: usize },
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::TitleTooShort { len, min } => {
                write!(f, "title has {len} characters, minimum is {min}")
            }
            Self::TitleTooLong { len, max } => {
                write!(f, "title has {len} characters, maximum is {max}")
            }
            Self::EmptyContent => write!(f, "content is required"),
            Self::ContentTooShort { len, min } => {
                write!(f, "content has {len} characters, minimum is {min}")
            }
        }
    }
}

impl Error for ArticleValidationError {}

/// Validates raw title/content input before it reaches the store.
///
/// Lengths are counted in Unicode scalar values, not bytes.
pub fn validate_article_input(title: &str, content: &str) -> Result<(), ArticleValidationError> {
    let title_len = title.chars().count();
    if title_len == 0 {
        return Err(ArticleValidationError::EmptyTitle);
    }
    if title_len < TITLE_MIN_CHARS {
        return Err(ArticleValidationError::TitleTooShort {
            len: title_len,
            min: TITLE_MIN_CHARS,
        });
    }
    if title_len > TITLE_MAX_CHARS {
        return Err(ArticleValidationError::TitleTooLong {
            len: title_len,
            max: TITLE_MAX_CHARS,
        });
    }

    let content_len = content.chars().count();
    if content_len == 0 {
        return Err(ArticleValidationError::EmptyContent);
    }
    if content_len < CONTENT_MIN_CHARS {
        return Err(ArticleValidationError::ContentTooShort {
            len: content_len,
            min: CONTENT_MIN_CHARS,
        });
    }

    Ok(())
}
