//! Service-level error types

use article_registry::ArticleId;
use thiserror::Error;

/// Errors raised by the service facade itself. Component failures keep their
/// own error types and are carried through `anyhow` by the state operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The operation requires an authenticated session and none exists.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The article already sits on the player's roster.
    #[error("article {id} is already on the roster")]
    AlreadyRostered { id: ArticleId },
}
