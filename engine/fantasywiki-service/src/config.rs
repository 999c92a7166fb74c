//! Service configuration
//!
//! Session-wide settings: the player's identity, the starting credit grant,
//! and the defaults applied before the player makes any selection. Values
//! come from `FANTASYWIKI_*` environment variables, falling back to the
//! canonical defaults.

use lineup_service::Formation;
use serde::{Deserialize, Serialize};

/// Credits granted to a fresh session.
pub const DEFAULT_STARTING_CREDITS: u64 = 550;

/// League selected before the player picks one.
pub const DEFAULT_LEAGUE: &str = "global";

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Credit balance a new session starts with.
    pub starting_credits: u64,
    /// Display name of the player.
    pub user_name: String,
    /// Name of the player's team.
    pub team_name: String,
    /// League shown until the player selects another.
    pub default_league: String,
    /// Formation applied to the seeded lineup.
    pub default_formation: Formation,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_STARTING_CREDITS,
            user_name: "You".to_string(),
            team_name: "Knowledge Kings".to_string(),
            default_league: DEFAULT_LEAGUE.to_string(),
            default_formation: Formation::default(),
        }
    }
}

impl ServiceConfig {
    /// Build a configuration from `FANTASYWIKI_*` environment variables,
    /// keeping the default for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            starting_credits: std::env::var("FANTASYWIKI_STARTING_CREDITS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.starting_credits),
            user_name: std::env::var("FANTASYWIKI_USER_NAME").unwrap_or(defaults.user_name),
            team_name: std::env::var("FANTASYWIKI_TEAM_NAME").unwrap_or(defaults.team_name),
            default_league: std::env::var("FANTASYWIKI_DEFAULT_LEAGUE")
                .unwrap_or(defaults.default_league),
            default_formation: std::env::var("FANTASYWIKI_DEFAULT_FORMATION")
                .ok()
                .and_then(|v| Formation::parse(&v).ok())
                .unwrap_or(defaults.default_formation),
        }
    }

    /// Check the configuration for values the engines cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_name.trim().is_empty() {
            return Err("user_name must not be blank".to_string());
        }
        if self.team_name.trim().is_empty() {
            return Err("team_name must not be blank".to_string());
        }
        if self.default_league.trim().is_empty() {
            return Err("default_league must not be blank".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.starting_credits, 550);
        assert_eq!(config.user_name, "You");
        assert_eq!(config.team_name, "Knowledge Kings");
        assert_eq!(config.default_league, "global");
        assert_eq!(config.default_formation, Formation::F433);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_user_name_rejected() {
        let config = ServiceConfig { user_name: "  ".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_league_rejected() {
        let config = ServiceConfig { default_league: String::new(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
