//! Document filter model shared by all article collections.
//!
//! # Invariants
//! - `Contains` compares after Unicode lowercasing; the needle is literal.
//! - An empty needle matches every document.
//! - `Or` of zero branches matches nothing.

use crate::model::article::Article;

/// Article document field addressable by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    /// Stable document field name, also used as the SQLite column name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }

    fn value(self, article: &Article) -> &str {
        match self {
            Self::Title => article.title.as_str(),
            Self::Content => article.content.as_str(),
        }
    }
}

/// Filter expression evaluated by a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Case-insensitive literal substring match on one field.
    Contains { field: Field, needle: String },
    /// Matches when any branch matches.
    Or(Vec<Filter>),
}

impl Filter {
    /// Evaluates the filter against one article in memory.
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Contains { field, needle } => {
                contains_case_insensitive(field.value(article), needle)
            }
            Self::Or(branches) => branches.iter().any(|branch| branch.matches(article)),
        }
    }
}

/// Builds the search filter: `title` OR `content` contains `query`.
///
/// The query is taken verbatim (no trimming, no pattern syntax). An empty
/// query collapses to [`Filter::All`].
pub fn build_search_filter(query: &str) -> Filter {
    if query.is_empty() {
        return Filter::All;
    }

    Filter::Or(vec![
        Filter::Contains {
            field: Field::Title,
            needle: query.to_string(),
        },
        Filter::Contains {
            field: Field::Content,
            needle: query.to_string(),
        },
    ])
}

/// Case-insensitive substring test used by every engine.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
