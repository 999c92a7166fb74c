//! Positional lineup and bench
//!
//! A lineup holds ordered positional groups bounded by the active formation's
//! capacities, plus an unbounded bench. Group order matters: horizontal
//! adjacency for chemistry is index-based. All mutation goes through methods
//! that preserve the capacity and no-duplicate invariants.

use crate::error::LineupError;
use crate::formation::{Formation, Role};
use crate::Result;
use article_registry::{ArticleId, ArticleRef};
use serde::{Deserialize, Serialize};

/// Where an article currently sits in the lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Field { role: Role, index: usize },
    Bench { index: usize },
}

impl Slot {
    pub fn is_field(&self) -> bool {
        matches!(self, Slot::Field { .. })
    }
}

/// The four positional groups of a lineup.
///
/// This is the snapshot handed to the chemistry engine; it carries no bench
/// and no capacities, just who stands where.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionGroups {
    pub forwards: Vec<ArticleRef>,
    pub midfielders: Vec<ArticleRef>,
    pub defenders: Vec<ArticleRef>,
    pub goalkeeper: Option<ArticleRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    formation: Formation,
    forwards: Vec<ArticleRef>,
    midfielders: Vec<ArticleRef>,
    defenders: Vec<ArticleRef>,
    goalkeeper: Option<ArticleRef>,
    bench: Vec<ArticleRef>,
}

impl Lineup {
    pub fn new(formation: Formation) -> Self {
        Self {
            formation,
            forwards: Vec::new(),
            midfielders: Vec::new(),
            defenders: Vec::new(),
            goalkeeper: None,
            bench: Vec::new(),
        }
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }

    pub fn forwards(&self) -> &[ArticleRef] {
        &self.forwards
    }

    pub fn midfielders(&self) -> &[ArticleRef] {
        &self.midfielders
    }

    pub fn defenders(&self) -> &[ArticleRef] {
        &self.defenders
    }

    pub fn goalkeeper(&self) -> Option<&ArticleRef> {
        self.goalkeeper.as_ref()
    }

    pub fn bench(&self) -> &[ArticleRef] {
        &self.bench
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Articles on the field, goalkeeper included.
    pub fn assigned_count(&self) -> usize {
        self.forwards.len()
            + self.midfielders.len()
            + self.defenders.len()
            + usize::from(self.goalkeeper.is_some())
    }

    /// True when every field slot of the formation is filled.
    pub fn is_complete(&self) -> bool {
        self.assigned_count() == self.formation.total_slots()
    }

    pub fn slot_of(&self, id: ArticleId) -> Option<Slot> {
        let groups = [
            (Role::Forward, &self.forwards),
            (Role::Midfielder, &self.midfielders),
            (Role::Defender, &self.defenders),
        ];
        for (role, group) in groups {
            if let Some(index) = group.iter().position(|a| a.id == id) {
                return Some(Slot::Field { role, index });
            }
        }
        if self.goalkeeper.as_ref().is_some_and(|a| a.id == id) {
            return Some(Slot::Field { role: Role::Goalkeeper, index: 0 });
        }
        self.bench.iter().position(|a| a.id == id).map(|index| Slot::Bench { index })
    }

    pub fn article_at(&self, slot: Slot) -> Option<&ArticleRef> {
        match slot {
            Slot::Field { role: Role::Forward, index } => self.forwards.get(index),
            Slot::Field { role: Role::Midfielder, index } => self.midfielders.get(index),
            Slot::Field { role: Role::Defender, index } => self.defenders.get(index),
            Slot::Field { role: Role::Goalkeeper, index } => {
                if index == 0 {
                    self.goalkeeper.as_ref()
                } else {
                    None
                }
            }
            Slot::Bench { index } => self.bench.get(index),
        }
    }

    /// Put an article into the next open slot of a positional group.
    pub fn place(&mut self, role: Role, article: ArticleRef) -> Result<()> {
        if self.contains(article.id) {
            return Err(LineupError::DuplicateArticle { id: article.id });
        }
        let capacity = self.formation.capacity(role);
        match self.outfield_group_mut(role) {
            Some(group) => {
                if group.len() >= capacity {
                    return Err(LineupError::CapacityExceeded { role, capacity });
                }
                group.push(article);
            }
            None => {
                if self.goalkeeper.is_some() {
                    return Err(LineupError::CapacityExceeded { role, capacity });
                }
                self.goalkeeper = Some(article);
            }
        }
        Ok(())
    }

    pub fn add_to_bench(&mut self, article: ArticleRef) -> Result<()> {
        if self.contains(article.id) {
            return Err(LineupError::DuplicateArticle { id: article.id });
        }
        self.bench.push(article);
        Ok(())
    }

    /// Remove an article from the field or the bench.
    pub fn remove(&mut self, id: ArticleId) -> Result<ArticleRef> {
        let slot = self.slot_of(id).ok_or(LineupError::ArticleNotInLineup { id })?;
        match slot {
            Slot::Field { role: Role::Forward, index } => Ok(self.forwards.remove(index)),
            Slot::Field { role: Role::Midfielder, index } => Ok(self.midfielders.remove(index)),
            Slot::Field { role: Role::Defender, index } => Ok(self.defenders.remove(index)),
            Slot::Field { role: Role::Goalkeeper, .. } => {
                self.goalkeeper.take().ok_or(LineupError::ArticleNotInLineup { id })
            }
            Slot::Bench { index } => Ok(self.bench.remove(index)),
        }
    }

    /// Switch formation. Groups over the new capacity give up their tail to
    /// the bench; nothing is ever dropped. Returns the articles benched.
    pub fn set_formation(&mut self, formation: Formation) -> Vec<ArticleRef> {
        self.formation = formation;
        let mut benched = Vec::new();
        for role in [Role::Forward, Role::Midfielder, Role::Defender] {
            let capacity = formation.capacity(role);
            if let Some(group) = self.outfield_group_mut(role) {
                if group.len() > capacity {
                    benched.extend(group.split_off(capacity));
                }
            }
        }
        self.bench.extend(benched.iter().cloned());
        benched
    }

    /// Exchange the slots of two articles, wherever they sit.
    pub fn swap(&mut self, source: ArticleId, target: ArticleId) -> Result<()> {
        if source == target {
            return Err(LineupError::SwapWithSelf { id: source });
        }
        let source_slot = self.slot_of(source).ok_or(LineupError::ArticleNotInLineup { id: source })?;
        let target_slot = self.slot_of(target).ok_or(LineupError::ArticleNotInLineup { id: target })?;

        let source_article = self
            .article_at(source_slot)
            .cloned()
            .ok_or(LineupError::ArticleNotInLineup { id: source })?;
        let target_article = self
            .article_at(target_slot)
            .cloned()
            .ok_or(LineupError::ArticleNotInLineup { id: target })?;

        self.set_at(source_slot, target_article);
        self.set_at(target_slot, source_article);
        Ok(())
    }

    pub fn position_groups(&self) -> PositionGroups {
        PositionGroups {
            forwards: self.forwards.clone(),
            midfielders: self.midfielders.clone(),
            defenders: self.defenders.clone(),
            goalkeeper: self.goalkeeper.clone(),
        }
    }

    fn outfield_group_mut(&mut self, role: Role) -> Option<&mut Vec<ArticleRef>> {
        match role {
            Role::Forward => Some(&mut self.forwards),
            Role::Midfielder => Some(&mut self.midfielders),
            Role::Defender => Some(&mut self.defenders),
            Role::Goalkeeper => None,
        }
    }

    // Callers pass slots obtained from slot_of under the same borrow, so the
    // indices are in bounds.
    fn set_at(&mut self, slot: Slot, article: ArticleRef) {
        match slot {
            Slot::Field { role: Role::Forward, index } => self.forwards[index] = article,
            Slot::Field { role: Role::Midfielder, index } => self.midfielders[index] = article,
            Slot::Field { role: Role::Defender, index } => self.defenders[index] = article,
            Slot::Field { role: Role::Goalkeeper, .. } => self.goalkeeper = Some(article),
            Slot::Bench { index } => self.bench[index] = article,
        }
    }
}

impl Default for Lineup {
    fn default() -> Self {
        Self::new(Formation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ref(id: ArticleId) -> ArticleRef {
        ArticleRef { id, title: format!("Article {}", id) }
    }

    fn create_full_lineup() -> Lineup {
        let mut lineup = Lineup::new(Formation::F433);
        let mut next_id = 1;
        for role in [Role::Forward, Role::Midfielder, Role::Defender, Role::Goalkeeper] {
            for _ in 0..lineup.formation().capacity(role) {
                lineup.place(role, create_test_ref(next_id)).unwrap();
                next_id += 1;
            }
        }
        lineup.add_to_bench(create_test_ref(12)).unwrap();
        lineup.add_to_bench(create_test_ref(13)).unwrap();
        lineup
    }

    #[test]
    fn test_place_respects_capacity() {
        let mut lineup = Lineup::new(Formation::F433);
        for id in 1..=3 {
            lineup.place(Role::Forward, create_test_ref(id)).unwrap();
        }
        let result = lineup.place(Role::Forward, create_test_ref(4));
        assert_eq!(
            result,
            Err(LineupError::CapacityExceeded { role: Role::Forward, capacity: 3 })
        );
    }

    #[test]
    fn test_single_goalkeeper() {
        let mut lineup = Lineup::new(Formation::F433);
        lineup.place(Role::Goalkeeper, create_test_ref(1)).unwrap();
        let result = lineup.place(Role::Goalkeeper, create_test_ref(2));
        assert_eq!(
            result,
            Err(LineupError::CapacityExceeded { role: Role::Goalkeeper, capacity: 1 })
        );
    }

    #[test]
    fn test_no_duplicate_articles() {
        let mut lineup = Lineup::new(Formation::F433);
        lineup.place(Role::Forward, create_test_ref(7)).unwrap();
        assert_eq!(
            lineup.place(Role::Midfielder, create_test_ref(7)),
            Err(LineupError::DuplicateArticle { id: 7 })
        );
        assert_eq!(
            lineup.add_to_bench(create_test_ref(7)),
            Err(LineupError::DuplicateArticle { id: 7 })
        );
    }

    #[test]
    fn test_full_lineup_is_complete() {
        let lineup = create_full_lineup();
        assert!(lineup.is_complete());
        assert_eq!(lineup.assigned_count(), 11);
        assert_eq!(lineup.bench().len(), 2);
    }

    #[test]
    fn test_slot_of_finds_everyone() {
        let lineup = create_full_lineup();
        assert_eq!(lineup.slot_of(1), Some(Slot::Field { role: Role::Forward, index: 0 }));
        assert_eq!(lineup.slot_of(11), Some(Slot::Field { role: Role::Goalkeeper, index: 0 }));
        assert_eq!(lineup.slot_of(12), Some(Slot::Bench { index: 0 }));
        assert_eq!(lineup.slot_of(99), None);
    }

    mod formation_changes {
        use super::*;

        #[test]
        fn test_overflow_moves_to_bench() {
            // 4-3-3 fields three forwards; 4-2-3-1 keeps only one
            let mut lineup = create_full_lineup();
            let benched = lineup.set_formation(Formation::F4231);

            let benched_ids: Vec<ArticleId> = benched.iter().map(|a| a.id).collect();
            assert_eq!(benched_ids, vec![2, 3]);
            assert_eq!(lineup.forwards().len(), 1);
            assert_eq!(lineup.slot_of(2), Some(Slot::Bench { index: 2 }));
            assert_eq!(lineup.slot_of(3), Some(Slot::Bench { index: 3 }));
        }

        #[test]
        fn test_no_article_is_dropped() {
            let mut lineup = create_full_lineup();
            let before = lineup.assigned_count() + lineup.bench().len();
            lineup.set_formation(Formation::F352);
            let after = lineup.assigned_count() + lineup.bench().len();
            assert_eq!(before, after);
        }

        #[test]
        fn test_widening_keeps_slots_open() {
            // 4-2-3-1 to 4-4-2 frees midfield pressure, nothing moves back
            let mut lineup = create_full_lineup();
            lineup.set_formation(Formation::F4231);
            let benched = lineup.set_formation(Formation::F442);
            assert!(benched.is_empty());
            assert_eq!(lineup.forwards().len(), 1);
        }
    }

    mod swaps {
        use super::*;

        #[test]
        fn test_swap_two_field_positions() {
            let mut lineup = create_full_lineup();
            // Forward 1 and defender 7 trade places
            lineup.swap(1, 7).unwrap();
            assert_eq!(lineup.slot_of(7), Some(Slot::Field { role: Role::Forward, index: 0 }));
            assert_eq!(lineup.slot_of(1), Some(Slot::Field { role: Role::Defender, index: 0 }));
        }

        #[test]
        fn test_swap_field_and_bench() {
            let mut lineup = create_full_lineup();
            lineup.swap(1, 12).unwrap();
            assert_eq!(lineup.slot_of(12), Some(Slot::Field { role: Role::Forward, index: 0 }));
            assert_eq!(lineup.slot_of(1), Some(Slot::Bench { index: 0 }));
            assert!(lineup.is_complete());
        }

        #[test]
        fn test_swap_two_bench_positions() {
            let mut lineup = create_full_lineup();
            lineup.swap(12, 13).unwrap();
            assert_eq!(lineup.slot_of(13), Some(Slot::Bench { index: 0 }));
            assert_eq!(lineup.slot_of(12), Some(Slot::Bench { index: 1 }));
        }

        #[test]
        fn test_swap_with_self_rejected() {
            let mut lineup = create_full_lineup();
            assert_eq!(lineup.swap(5, 5), Err(LineupError::SwapWithSelf { id: 5 }));
        }

        #[test]
        fn test_swap_unknown_article_rejected() {
            let mut lineup = create_full_lineup();
            assert_eq!(lineup.swap(1, 99), Err(LineupError::ArticleNotInLineup { id: 99 }));
            // Nothing moved
            assert_eq!(lineup.slot_of(1), Some(Slot::Field { role: Role::Forward, index: 0 }));
        }
    }

    #[test]
    fn test_remove_from_field_and_bench() {
        let mut lineup = create_full_lineup();
        let removed = lineup.remove(11).unwrap();
        assert_eq!(removed.id, 11);
        assert!(lineup.goalkeeper().is_none());
        assert!(!lineup.is_complete());

        let removed = lineup.remove(12).unwrap();
        assert_eq!(removed.id, 12);
        assert_eq!(lineup.bench().len(), 1);

        assert_eq!(lineup.remove(99), Err(LineupError::ArticleNotInLineup { id: 99 }));
    }

    #[test]
    fn test_position_groups_snapshot() {
        let lineup = create_full_lineup();
        let groups = lineup.position_groups();
        assert_eq!(groups.forwards.len(), 3);
        assert_eq!(groups.midfielders.len(), 3);
        assert_eq!(groups.defenders.len(), 4);
        assert_eq!(groups.goalkeeper.as_ref().map(|a| a.id), Some(11));
    }
}
