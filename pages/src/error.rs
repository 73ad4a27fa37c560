//! Error types for catalog lookups and validation.

use thiserror::Error;

/// Errors raised by the catalog and the selection controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagesError {
    /// No catalog entry matches the requested title or slug.
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),

    /// Two entries share a title (or collapse to the same slug).
    #[error("duplicate topic '{0}' in catalog")]
    DuplicateTopic(String),

    /// An entry is missing its title or its tips.
    #[error("topic '{0}' is incomplete: {1}")]
    EmptyTopic(String, &'static str),
}
