//! Pagination envelopes for article list and search results.

use crate::model::article::Article;

/// Page number used when a caller supplies none.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when a caller supplies none.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// One page of articles plus the total across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    /// Items ordered by `created_at` descending.
    pub items: Vec<Article>,
    /// Count of every matching article, not just this page.
    pub total: u64,
    /// 1-based page number this result was requested for.
    pub page: u32,
    pub limit: u32,
}

impl ArticlePage {
    /// Number of pages needed to show `total` items at `limit` per page.
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Page coordinates as received from a transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Parses optional raw `page`/`limit` values.
    ///
    /// Missing or unparseable values fall back to [`DEFAULT_PAGE`] and
    /// `default_limit`. Explicit zeros are kept so the store can reject them.
    pub fn from_query(page: Option<&str>, limit: Option<&str>, default_limit: u32) -> Self {
        Self {
            page: parse_or(page, DEFAULT_PAGE),
            limit: parse_or(limit, default_limit),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn parse_or(raw: Option<&str>, fallback: u32) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(fallback)
}
