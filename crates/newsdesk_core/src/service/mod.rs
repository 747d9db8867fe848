//! Core use-case services.
//!
//! # Responsibility
//! - Expose article operations to request adapters.
//! - Keep adapters decoupled from storage details.

pub mod article_service;
