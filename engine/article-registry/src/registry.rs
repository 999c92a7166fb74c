//! In-memory article catalogue with id and title lookup

use crate::error::RegistryError;
use crate::types::{Article, ArticleId};
use std::collections::HashMap;
use tracing::debug;

/// ArticleRegistry - the catalogue of purchasable Wikipedia articles
///
/// Holds every article known to the market together with its pricing
/// signals. In a production system this would be filled by an ingestion
/// pipeline; here it is filled from the embedded seed document.
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    /// Map from article id to record
    articles_by_id: HashMap<ArticleId, Article>,

    /// Map from article title to id (for quick lookup)
    ids_by_title: HashMap<String, ArticleId>,
}

impl ArticleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { articles_by_id: HashMap::new(), ids_by_title: HashMap::new() }
    }

    /// Insert an article, validating it at the boundary
    pub fn insert(&mut self, article: Article) -> Result<(), RegistryError> {
        article.validate()?;

        if self.articles_by_id.contains_key(&article.id) {
            return Err(RegistryError::DuplicateId { id: article.id });
        }
        if self.ids_by_title.contains_key(&article.title) {
            return Err(RegistryError::DuplicateTitle { title: article.title });
        }

        debug!("Registered article {} ({})", article.id, article.title);
        self.ids_by_title.insert(article.title.clone(), article.id);
        self.articles_by_id.insert(article.id, article);
        Ok(())
    }

    /// Get an article by id
    pub fn get(&self, id: ArticleId) -> Result<&Article, RegistryError> {
        self.articles_by_id.get(&id).ok_or(RegistryError::ArticleNotFound { id })
    }

    /// Get an article by exact title
    pub fn get_by_title(&self, title: &str) -> Result<&Article, RegistryError> {
        let id = self
            .ids_by_title
            .get(title)
            .ok_or_else(|| RegistryError::TitleNotFound { title: title.to_string() })?;

        self.get(*id)
    }

    /// All articles, ordered by id
    pub fn all(&self) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.articles_by_id.values().collect();
        articles.sort_by_key(|a| a.id);
        articles
    }

    /// Articles with no current owner, ordered by id
    pub fn free_agents(&self) -> Vec<&Article> {
        self.all().into_iter().filter(|a| a.is_free_agent()).collect()
    }

    /// Case-insensitive partial title search, ordered by id
    pub fn search(&self, query: &str) -> Vec<&Article> {
        let query_lower = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|article| article.title.to_lowercase().contains(&query_lower))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.articles_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles_by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trend;

    fn create_test_article(id: ArticleId, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            views_30d: 125_000,
            views_last_7d: 35_000,
            views_prev_7d: 28_000,
            base_price: 150,
            trend: Trend::Up,
            owner: None,
            expires_at: None,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = ArticleRegistry::new();
        registry.insert(create_test_article(1, "Bitcoin")).unwrap();
        registry.insert(create_test_article(2, "Ethereum")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(1).unwrap().title, "Bitcoin");
        assert_eq!(registry.get_by_title("Ethereum").unwrap().id, 2);
        assert!(registry.get(99).is_err());
        assert!(registry.get_by_title("Dogecoin").is_err());
    }

    #[test]
    fn test_duplicate_rejection() {
        let mut registry = ArticleRegistry::new();
        registry.insert(create_test_article(1, "Bitcoin")).unwrap();

        assert!(matches!(
            registry.insert(create_test_article(1, "Other")),
            Err(RegistryError::DuplicateId { id: 1 })
        ));
        assert!(matches!(
            registry.insert(create_test_article(2, "Bitcoin")),
            Err(RegistryError::DuplicateTitle { .. })
        ));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut registry = ArticleRegistry::new();
        registry.insert(create_test_article(1, "Bitcoin")).unwrap();
        registry.insert(create_test_article(2, "Smart Contract")).unwrap();

        let results = registry.search("bit");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Bitcoin");

        let results = registry.search("CONTRACT");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Smart Contract");

        assert!(registry.search("dogecoin").is_empty());
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let mut registry = ArticleRegistry::new();
        registry.insert(create_test_article(3, "Blockchain")).unwrap();
        registry.insert(create_test_article(1, "Bitcoin")).unwrap();
        registry.insert(create_test_article(2, "Ethereum")).unwrap();

        let ids: Vec<ArticleId> = registry.all().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
