//! League directory and standings queries

use crate::error::LeagueError;
use crate::types::{LeaderboardEntry, League, LeagueInfo};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// League id every unknown-league query falls back to.
pub const GLOBAL_LEAGUE: &str = "global";

const AROUND_USER_RANGE: usize = 2;
const TOP_COUNT: u32 = 10;
const NO_USER_FALLBACK: usize = 5;

/// The three leaderboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    AroundMe,
    Top,
    Full,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::AroundMe
    }
}

pub struct LeagueDirectory {
    leagues: Vec<League>,
    info: HashMap<String, LeagueInfo>,
    standings: HashMap<String, Vec<LeaderboardEntry>>,
}

impl LeagueDirectory {
    pub fn new() -> Self {
        Self { leagues: Vec::new(), info: HashMap::new(), standings: HashMap::new() }
    }

    pub fn add_league(&mut self, league: League, info: LeagueInfo) -> Result<()> {
        if self.contains(&league.id) {
            return Err(LeagueError::DuplicateLeague { id: league.id });
        }
        self.info.insert(league.id.clone(), info);
        self.leagues.push(league);
        Ok(())
    }

    /// Install a league's leaderboard, replacing any existing table.
    ///
    /// Entries are checked at the boundary: positive unique ranks, non-empty
    /// names, at most one current-user row. Stored sorted by rank.
    pub fn set_standings(
        &mut self,
        league_id: &str,
        mut entries: Vec<LeaderboardEntry>,
    ) -> Result<()> {
        if !self.contains(league_id) {
            return Err(LeagueError::UnknownLeague { id: league_id.to_string() });
        }

        let mut ranks = HashSet::new();
        let mut current_users = 0;
        for entry in &entries {
            entry.validate().map_err(|reason| LeagueError::InvalidStandings {
                league: league_id.to_string(),
                reason,
            })?;
            if !ranks.insert(entry.rank) {
                return Err(LeagueError::InvalidStandings {
                    league: league_id.to_string(),
                    reason: format!("duplicate rank {}", entry.rank),
                });
            }
            current_users += usize::from(entry.is_current_user);
        }
        if current_users > 1 {
            return Err(LeagueError::InvalidStandings {
                league: league_id.to_string(),
                reason: format!("{} current-user entries", current_users),
            });
        }

        entries.sort_by_key(|e| e.rank);
        debug!("Standings set for {}: {} entries", league_id, entries.len());
        self.standings.insert(league_id.to_string(), entries);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.info.contains_key(id)
    }

    /// Leagues in registration order.
    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn league(&self, id: &str) -> Result<&League> {
        self.leagues
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| LeagueError::UnknownLeague { id: id.to_string() })
    }

    pub fn info(&self, id: &str) -> Result<&LeagueInfo> {
        self.info.get(id).ok_or_else(|| LeagueError::UnknownLeague { id: id.to_string() })
    }

    /// Full standings sorted by rank. Unknown leagues read the global table;
    /// a missing global table reads empty.
    pub fn standings(&self, league_id: &str) -> &[LeaderboardEntry] {
        self.standings
            .get(league_id)
            .or_else(|| self.standings.get(GLOBAL_LEAGUE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Entries ranked `count` or better.
    pub fn top(&self, league_id: &str, count: u32) -> Vec<&LeaderboardEntry> {
        self.standings(league_id).iter().filter(|e| e.rank <= count).collect()
    }

    /// The window of entries around the current user's row, `range` on each
    /// side, clamped to the table. Without a current-user row, the first
    /// five leaders stand in.
    pub fn around_user(&self, league_id: &str, range: usize) -> Vec<&LeaderboardEntry> {
        let entries = self.standings(league_id);
        match entries.iter().position(|e| e.is_current_user) {
            Some(index) => {
                let start = index.saturating_sub(range);
                let end = (index + range + 1).min(entries.len());
                entries[start..end].iter().collect()
            }
            None => entries.iter().take(NO_USER_FALLBACK).collect(),
        }
    }

    pub fn current_user_entry(&self, league_id: &str) -> Option<&LeaderboardEntry> {
        self.standings(league_id).iter().find(|e| e.is_current_user)
    }

    /// Dispatch a leaderboard view with the canonical window sizes.
    pub fn view(&self, league_id: &str, mode: ViewMode) -> Vec<&LeaderboardEntry> {
        match mode {
            ViewMode::AroundMe => self.around_user(league_id, AROUND_USER_RANGE),
            ViewMode::Top => self.top(league_id, TOP_COUNT),
            ViewMode::Full => self.standings(league_id).iter().collect(),
        }
    }
}

impl Default for LeagueDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_league(id: &str) -> League {
        League { id: id.to_string(), name: format!("{} League", id), icon: "⭐".to_string() }
    }

    fn create_test_info() -> LeagueInfo {
        LeagueInfo {
            total_players: 100,
            end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            language: "English".to_string(),
            description: None,
        }
    }

    fn create_test_entry(rank: u32, user: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            user: user.to_string(),
            points: 5000 - rank * 10,
            change: 0,
            is_current_user: user == "You",
        }
    }

    fn create_test_directory() -> LeagueDirectory {
        let mut directory = LeagueDirectory::new();
        directory.add_league(create_test_league("global"), create_test_info()).unwrap();
        directory.add_league(create_test_league("minor"), create_test_info()).unwrap();

        // Ranks run 1..=6, then a gap down to the user's neighborhood
        let mut entries: Vec<LeaderboardEntry> =
            (1..=6).map(|rank| create_test_entry(rank, &format!("Leader{}", rank))).collect();
        entries.push(create_test_entry(42, "You"));
        entries.push(create_test_entry(43, "Below1"));
        entries.push(create_test_entry(44, "Below2"));
        directory.set_standings("global", entries).unwrap();

        let no_user: Vec<LeaderboardEntry> =
            (1..=8).map(|rank| create_test_entry(rank, &format!("Minor{}", rank))).collect();
        directory.set_standings("minor", no_user).unwrap();

        directory
    }

    fn ranks(entries: &[&LeaderboardEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.rank).collect()
    }

    #[test]
    fn test_top_filters_by_rank_value() {
        let directory = create_test_directory();
        // Rank 42 is the seventh row but does not make the top ten
        assert_eq!(ranks(&directory.top("global", 10)), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ranks(&directory.top("global", 3)), vec![1, 2, 3]);
    }

    #[test]
    fn test_around_user_spans_the_rank_gap() {
        let directory = create_test_directory();
        // The window is positional: two rows either side of the user
        assert_eq!(ranks(&directory.around_user("global", 2)), vec![5, 6, 42, 43, 44]);
    }

    #[test]
    fn test_around_user_clamps_at_the_tail() {
        let directory = create_test_directory();
        // Only two rows exist below the user
        assert_eq!(ranks(&directory.around_user("global", 3)), vec![4, 5, 6, 42, 43, 44]);
    }

    #[test]
    fn test_around_user_clamps_at_the_head() {
        let mut directory = LeagueDirectory::new();
        directory.add_league(create_test_league("global"), create_test_info()).unwrap();
        let entries = vec![
            create_test_entry(1, "You"),
            create_test_entry(2, "Second"),
            create_test_entry(3, "Third"),
            create_test_entry(4, "Fourth"),
        ];
        directory.set_standings("global", entries).unwrap();

        assert_eq!(ranks(&directory.around_user("global", 2)), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_current_user_shows_leaders() {
        let directory = create_test_directory();
        assert_eq!(ranks(&directory.around_user("minor", 2)), vec![1, 2, 3, 4, 5]);
        assert!(directory.current_user_entry("minor").is_none());
    }

    #[test]
    fn test_unknown_league_reads_global() {
        let directory = create_test_directory();
        assert_eq!(directory.standings("nowhere"), directory.standings("global"));
        assert_eq!(ranks(&directory.around_user("nowhere", 2)), vec![5, 6, 42, 43, 44]);
    }

    #[test]
    fn test_view_dispatch() {
        let directory = create_test_directory();
        assert_eq!(ranks(&directory.view("global", ViewMode::AroundMe)), vec![5, 6, 42, 43, 44]);
        assert_eq!(ranks(&directory.view("global", ViewMode::Top)), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(directory.view("global", ViewMode::Full).len(), 9);
    }

    #[test]
    fn test_standings_sorted_on_insert() {
        let mut directory = LeagueDirectory::new();
        directory.add_league(create_test_league("global"), create_test_info()).unwrap();
        let entries = vec![
            create_test_entry(3, "Third"),
            create_test_entry(1, "First"),
            create_test_entry(2, "Second"),
        ];
        directory.set_standings("global", entries).unwrap();
        assert_eq!(ranks(&directory.view("global", ViewMode::Full)), vec![1, 2, 3]);
    }

    #[test]
    fn test_standings_validation() {
        let mut directory = LeagueDirectory::new();
        directory.add_league(create_test_league("global"), create_test_info()).unwrap();

        let duplicate_ranks = vec![create_test_entry(1, "A"), create_test_entry(1, "B")];
        assert!(matches!(
            directory.set_standings("global", duplicate_ranks),
            Err(LeagueError::InvalidStandings { .. })
        ));

        let two_users = vec![
            LeaderboardEntry { is_current_user: true, ..create_test_entry(1, "A") },
            LeaderboardEntry { is_current_user: true, ..create_test_entry(2, "B") },
        ];
        assert!(matches!(
            directory.set_standings("global", two_users),
            Err(LeagueError::InvalidStandings { .. })
        ));

        assert!(matches!(
            directory.set_standings("elsewhere", vec![]),
            Err(LeagueError::UnknownLeague { .. })
        ));
    }

    #[test]
    fn test_duplicate_league_rejected() {
        let mut directory = LeagueDirectory::new();
        directory.add_league(create_test_league("global"), create_test_info()).unwrap();
        assert!(matches!(
            directory.add_league(create_test_league("global"), create_test_info()),
            Err(LeagueError::DuplicateLeague { .. })
        ));
    }

    #[test]
    fn test_league_lookup() {
        let directory = create_test_directory();
        assert_eq!(directory.leagues().len(), 2);
        assert_eq!(directory.league("minor").unwrap().name, "minor League");
        assert!(directory.league("nowhere").is_err());
        assert_eq!(directory.info("global").unwrap().total_players, 100);
    }
}
