//! Embedded league catalogue

use crate::directory::LeagueDirectory;
use crate::types::{LeaderboardEntry, League, LeagueInfo};
use crate::Result;
use serde::Deserialize;
use tracing::info;

const LEAGUES_SEED: &str = include_str!("../data/leagues.json");

#[derive(Debug, Deserialize)]
struct LeaguesDoc {
    leagues: Vec<SeedLeague>,
}

#[derive(Debug, Deserialize)]
struct SeedLeague {
    id: String,
    name: String,
    icon: String,
    info: LeagueInfo,
    standings: Vec<LeaderboardEntry>,
}

/// Directory loaded from the embedded league seed.
pub fn seeded() -> Result<LeagueDirectory> {
    let doc: LeaguesDoc = serde_json::from_str(LEAGUES_SEED)?;
    let mut directory = LeagueDirectory::new();
    for seed in doc.leagues {
        let league = League { id: seed.id.clone(), name: seed.name, icon: seed.icon };
        directory.add_league(league, seed.info)?;
        directory.set_standings(&seed.id, seed.standings)?;
    }
    info!("Loaded {} leagues", directory.leagues().len());
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads_six_leagues() {
        let directory = seeded().unwrap();
        let ids: Vec<&str> = directory.leagues().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["global", "europe", "americas", "asia", "premier", "champions"]);
    }

    #[test]
    fn test_every_league_seats_the_user() {
        let directory = seeded().unwrap();
        for league in directory.leagues() {
            let entry = directory.current_user_entry(&league.id);
            assert!(entry.is_some(), "no current-user row in {}", league.id);
            assert_eq!(entry.unwrap().user, "You");
        }
    }

    #[test]
    fn test_global_window_spans_the_rank_gap() {
        let directory = seeded().unwrap();
        let window = directory.around_user("global", 2);
        let ranks: Vec<u32> = window.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![14, 15, 42, 43, 44]);
        assert!(window[2].is_current_user);
    }

    #[test]
    fn test_global_top_ten() {
        let directory = seeded().unwrap();
        let top = directory.top("global", 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].user, "CryptoGod");
        assert_eq!(top[0].points, 3850);
        assert_eq!(top[9].user, "GammaHunter");
    }

    #[test]
    fn test_champions_is_the_smallest_league() {
        let directory = seeded().unwrap();
        assert_eq!(directory.info("champions").unwrap().total_players, 64);
        assert_eq!(directory.current_user_entry("champions").unwrap().rank, 12);
    }
}
