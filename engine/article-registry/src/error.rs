//! Error types for ArticleRegistry

use crate::types::ArticleId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Article not found: {id}")]
    ArticleNotFound { id: ArticleId },

    #[error("Article not found: {title}")]
    TitleNotFound { title: String },

    #[error("Duplicate article id: {id}")]
    DuplicateId { id: ArticleId },

    #[error("Duplicate article title: {title}")]
    DuplicateTitle { title: String },

    #[error("Invalid article \"{title}\": {reason}")]
    InvalidArticle { title: String, reason: String },

    #[error("Seed document error: {0}")]
    Serialization(#[from] serde_json::Error),
}
