//! Lineup service errors

use crate::formation::Role;
use article_registry::ArticleId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineupError {
    #[error("Unknown formation: {name}")]
    UnknownFormation { name: String },

    #[error("No room for another {role}: formation allows {capacity}")]
    CapacityExceeded { role: Role, capacity: usize },

    #[error("Article {id} is already in the lineup")]
    DuplicateArticle { id: ArticleId },

    #[error("Article {id} is not in the lineup")]
    ArticleNotInLineup { id: ArticleId },

    #[error("No swap source selected")]
    SwapSourceMissing,

    #[error("Cannot swap article {id} with itself")]
    SwapWithSelf { id: ArticleId },
}
