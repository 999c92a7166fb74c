//! ArticleRegistry - the Wikipedia article catalogue
//!
//! This crate provides the article catalogue for the FantasyWiki system:
//! typed article records with boundary validation, id/title lookup, search,
//! and the embedded seed catalogue.

pub mod error;
pub mod registry;
pub mod seed;
pub mod types;

pub use error::RegistryError;
pub use registry::ArticleRegistry;
pub use seed::seeded_at;
pub use types::{days_until, format_views, Article, ArticleId, ArticleOwner, ArticleRef, Trend};

// Result type alias
pub type Result<T> = std::result::Result<T, RegistryError>;
