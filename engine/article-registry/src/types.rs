//! Article record types and boundary validation

use crate::error::RegistryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalogue-wide article identifier
pub type ArticleId = u64;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Seven-day viewership direction shown next to an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// The user currently holding a contract on an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleOwner {
    pub name: String,
    pub team_name: String,
}

/// A catalogue article with its market signals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub views_30d: u64,
    pub views_last_7d: u64,
    pub views_prev_7d: u64,
    /// Catalogue-defined floor price in credits
    pub base_price: u64,
    pub trend: Trend,
    #[serde(default)]
    pub owner: Option<ArticleOwner>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Validate the record at the boundary where catalogue data enters
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.title.trim().is_empty() {
            return Err(RegistryError::InvalidArticle {
                title: self.title.clone(),
                reason: "title must not be empty".to_string(),
            });
        }
        if self.base_price == 0 {
            return Err(RegistryError::InvalidArticle {
                title: self.title.clone(),
                reason: "base price must be positive".to_string(),
            });
        }
        if self.owner.is_none() && self.expires_at.is_some() {
            return Err(RegistryError::InvalidArticle {
                title: self.title.clone(),
                reason: "expiry without an owner".to_string(),
            });
        }
        Ok(())
    }

    /// An article with no current owner is available for purchase
    pub fn is_free_agent(&self) -> bool {
        self.owner.is_none()
    }

    /// Whole days until the current contract expires, rounded up.
    /// `None` for free agents.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at.map(|expires| days_until(expires, now))
    }

    pub fn as_ref(&self) -> ArticleRef {
        ArticleRef { id: self.id, title: self.title.clone() }
    }
}

/// Lightweight article handle passed between services
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleRef {
    pub id: ArticleId,
    pub title: String,
}

impl ArticleRef {
    pub fn new(id: ArticleId, title: impl Into<String>) -> Self {
        Self { id, title: title.into() }
    }
}

impl From<&Article> for ArticleRef {
    fn from(article: &Article) -> Self {
        article.as_ref()
    }
}

/// Whole days from `now` until `deadline`, rounded up (ceiling).
/// Negative once the deadline is more than a full day in the past.
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (deadline - now).num_milliseconds();
    let days = ms.div_euclid(DAY_MS);
    if ms.rem_euclid(DAY_MS) > 0 {
        days + 1
    } else {
        days
    }
}

/// Compact view-count rendering: 1_500_000 -> "1.5M", 12_300 -> "12.3K"
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn free_agent() -> Article {
        Article {
            id: 1,
            title: "Bitcoin".to_string(),
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
    fn test_validation_rejects_zero_base_price() {
        let mut article = free_agent();
        article.base_price = 0;
        assert!(article.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_expiry_without_owner() {
        let mut article = free_agent();
        article.expires_at = Some(Utc::now());
        assert!(article.validate().is_err());
    }

    #[test]
    fn test_free_agent_flag() {
        let mut article = free_agent();
        assert!(article.is_free_agent());

        article.owner = Some(ArticleOwner {
            name: "CryptoKing42".to_string(),
            team_name: "Tech Titans".to_string(),
        });
        assert!(!article.is_free_agent());
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = Utc::now();
        assert_eq!(days_until(now + Duration::days(3), now), 3);
        assert_eq!(days_until(now + Duration::hours(1), now), 1);
        assert_eq!(days_until(now + Duration::hours(25), now), 2);
        assert_eq!(days_until(now, now), 0);
        assert_eq!(days_until(now - Duration::hours(12), now), 0);
        assert_eq!(days_until(now - Duration::hours(30), now), -1);
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(1_500_000), "1.5M");
        assert_eq!(format_views(125_000), "125.0K");
        assert_eq!(format_views(950), "950");
    }
}
