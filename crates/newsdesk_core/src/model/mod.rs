//! Domain model for news articles.
//!
//! # Responsibility
//! - Define the canonical article record shared by store, service and callers.
//! - Own boundary validation rules for article text fields.
//!
//! # Invariants
//! - An article without `id` has never been durably stored.
//! - Deletion is a hard delete; there are no tombstones.

pub mod article;
