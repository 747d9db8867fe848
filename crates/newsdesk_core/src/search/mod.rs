//! Search filter construction.
//!
//! # Responsibility
//! - Build engine-neutral document filters from free-text queries.
//! - Define the substring matching rule every engine must honor.
//!
//! Search is case-insensitive literal substring matching, not ranked
//! full-text search.

pub mod filter;
