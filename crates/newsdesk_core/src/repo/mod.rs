//! Repository layer: article store and storage engines.
//!
//! # Responsibility
//! - Define the storage-capability contract (`ArticleCollection`).
//! - Own id translation, pagination math, filter use and timestamp stamping
//!   (`ArticleStore`).
//! - Provide SQLite and in-memory collection engines.
//!
//! # Invariants
//! - `InvalidId` and `NotFound` are never conflated.
//! - Backend failures surface as `RepoError::Storage`, never swallowed.
//! - The store performs no retries and keeps no mutable state.

pub mod article_store;
pub mod collection;
pub mod memory_collection;
pub mod page;
pub mod sqlite_collection;
