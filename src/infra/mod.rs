//! Infrastructure layer for cross-cutting concerns.
//!
//! Provides foundational infrastructure including:
//! - Arena allocation backing all encoded output
//! - Configuration management and validation
//! - Error handling and result types

pub mod arena;
pub mod config;
pub mod error;
