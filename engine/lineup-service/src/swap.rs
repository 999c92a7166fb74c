//! Shared team store and the two-phase swap session
//!
//! The store owns the lineup behind a `parking_lot::RwLock`. Readers take
//! cloned snapshots; swaps and other mutations run under a single write
//! lock, so no reader can observe one half of an exchange.

use crate::error::LineupError;
use crate::formation::{Formation, Role};
use crate::lineup::{Lineup, PositionGroups};
use crate::Result;
use article_registry::{ArticleId, ArticleRef};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct TeamStore {
    lineup: Arc<RwLock<Lineup>>,
}

impl TeamStore {
    pub fn new(lineup: Lineup) -> Self {
        Self { lineup: Arc::new(RwLock::new(lineup)) }
    }

    /// Cloned snapshot of the current lineup.
    pub fn snapshot(&self) -> Lineup {
        self.lineup.read().clone()
    }

    /// Positional groups for chemistry generation.
    pub fn position_groups(&self) -> PositionGroups {
        self.lineup.read().position_groups()
    }

    /// Exchange two articles' slots under one write lock.
    pub fn commit_swap(&self, source: ArticleId, target: ArticleId) -> Result<()> {
        let mut lineup = self.lineup.write();
        lineup.swap(source, target)?;
        info!("Swapped lineup slots of articles {} and {}", source, target);
        Ok(())
    }

    /// Switch formation; overflowing articles land on the bench.
    pub fn set_formation(&self, formation: Formation) -> Vec<ArticleRef> {
        let mut lineup = self.lineup.write();
        let benched = lineup.set_formation(formation);
        info!("Formation set to {} ({} article(s) benched)", formation, benched.len());
        benched
    }

    pub fn place(&self, role: Role, article: ArticleRef) -> Result<()> {
        self.lineup.write().place(role, article)
    }

    pub fn add_to_bench(&self, article: ArticleRef) -> Result<()> {
        self.lineup.write().add_to_bench(article)
    }

    pub fn remove(&self, id: ArticleId) -> Result<ArticleRef> {
        self.lineup.write().remove(id)
    }

    pub fn begin_swap(&self) -> SwapSession<'_> {
        SwapSession { store: self, selected: None }
    }
}

/// Two-phase swap: idle until a source is selected, then a commit against a
/// target applies the exchange and returns to idle.
///
/// A failed commit keeps the selection so the caller can retry with another
/// target; `cancel` drops it without touching the lineup.
pub struct SwapSession<'a> {
    store: &'a TeamStore,
    selected: Option<ArticleId>,
}

impl SwapSession<'_> {
    /// Mark an article as the swap source. Selecting again replaces the
    /// previous source.
    pub fn select(&mut self, id: ArticleId) -> Result<()> {
        if !self.store.lineup.read().contains(id) {
            return Err(LineupError::ArticleNotInLineup { id });
        }
        debug!("Swap source selected: article {}", id);
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<ArticleId> {
        self.selected
    }

    /// Swap the selected source with `target`.
    ///
    /// The lineup may have changed since `select`; the swap re-validates both
    /// articles under the write lock.
    pub fn commit(&mut self, target: ArticleId) -> Result<()> {
        let source = self.selected.ok_or(LineupError::SwapSourceMissing)?;
        self.store.commit_swap(source, target)?;
        self.selected = None;
        Ok(())
    }

    pub fn cancel(&mut self) {
        if self.selected.take().is_some() {
            debug!("Swap selection cancelled");
        }
    }
}
