//! League and leaderboard records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub total_players: u32,
    pub end_date: NaiveDate,
    pub language: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One row of a league leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user: String,
    pub points: u32,
    /// Rank places gained (positive) or lost since the last scoring period
    pub change: i32,
    #[serde(default)]
    pub is_current_user: bool,
}

impl LeaderboardEntry {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.rank == 0 {
            return Err("rank must be positive".to_string());
        }
        if self.user.trim().is_empty() {
            return Err("user name must not be empty".to_string());
        }
        Ok(())
    }
}
