//! Core use-case services.
//!
//! # Responsibility
//! - Validate collaborator input (trim, non-empty) before it reaches the store.
//! - Sequence async capture work ahead of the store mutation it feeds.

pub mod journal_service;
