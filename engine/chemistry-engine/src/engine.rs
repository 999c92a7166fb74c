//! Link generation and neighbor queries

use crate::affinity::AffinityTable;
use crate::types::{ChemistryLink, ChemistryTier, Neighbor};
use article_registry::{ArticleId, ArticleRef};
use lineup_service::PositionGroups;
use std::collections::HashSet;
use tracing::debug;

pub struct ChemistryEngine {
    table: AffinityTable,
}

impl ChemistryEngine {
    pub fn new(table: AffinityTable) -> Self {
        Self { table }
    }

    /// Engine over the seeded association table.
    pub fn seeded() -> Self {
        Self::new(AffinityTable::seeded())
    }

    pub fn table(&self) -> &AffinityTable {
        &self.table
    }

    pub fn pair_tier(&self, a: &ArticleRef, b: &ArticleRef) -> ChemistryTier {
        self.table.lookup(&a.title, &b.title)
    }

    /// Every chemistry link for the given positional groups.
    ///
    /// Links are emitted field-top to field-bottom: horizontal pairs within
    /// each group, then forward-midfielder, midfielder-defender, and
    /// defender-goalkeeper connections. Each unordered pair appears once,
    /// normalized with the lower article id first.
    pub fn generate_links(&self, groups: &PositionGroups) -> Vec<ChemistryLink> {
        let mut links: Vec<ChemistryLink> = Vec::new();
        let mut seen: HashSet<(ArticleId, ArticleId)> = HashSet::new();

        let mut add_link = |a: &ArticleRef, b: &ArticleRef| {
            let (first, second) = if a.id <= b.id { (a, b) } else { (b, a) };
            if seen.insert((first.id, second.id)) {
                links.push(ChemistryLink {
                    a: first.clone(),
                    b: second.clone(),
                    tier: self.pair_tier(first, second),
                });
            }
        };

        for group in [&groups.forwards, &groups.midfielders, &groups.defenders] {
            for pair in group.windows(2) {
                add_link(&pair[0], &pair[1]);
            }
        }

        for forward in &groups.forwards {
            for midfielder in &groups.midfielders {
                add_link(forward, midfielder);
            }
        }

        for midfielder in &groups.midfielders {
            for defender in &groups.defenders {
                add_link(midfielder, defender);
            }
        }

        if let Some(goalkeeper) = &groups.goalkeeper {
            for defender in &groups.defenders {
                add_link(defender, goalkeeper);
            }
        }

        debug!("Generated {} chemistry links", links.len());
        links
    }

    /// Articles adjacent to `id`, each with the chemistry of the pair.
    ///
    /// Flanking group members come first, then the connected groups in field
    /// order. An id not present in any group has no neighbors.
    pub fn neighbors(&self, id: ArticleId, groups: &PositionGroups) -> Vec<Neighbor> {
        let mut adjacent: Vec<&ArticleRef> = Vec::new();
        let source: &ArticleRef;

        if let Some(index) = position_of(&groups.forwards, id) {
            source = &groups.forwards[index];
            extend_flankers(&mut adjacent, &groups.forwards, index);
            adjacent.extend(&groups.midfielders);
        } else if let Some(index) = position_of(&groups.midfielders, id) {
            source = &groups.midfielders[index];
            extend_flankers(&mut adjacent, &groups.midfielders, index);
            adjacent.extend(&groups.forwards);
            adjacent.extend(&groups.defenders);
        } else if let Some(index) = position_of(&groups.defenders, id) {
            source = &groups.defenders[index];
            extend_flankers(&mut adjacent, &groups.defenders, index);
            adjacent.extend(&groups.midfielders);
            if let Some(goalkeeper) = &groups.goalkeeper {
                adjacent.push(goalkeeper);
            }
        } else if let Some(goalkeeper) = groups.goalkeeper.as_ref().filter(|g| g.id == id) {
            source = goalkeeper;
            adjacent.extend(&groups.defenders);
        } else {
            return Vec::new();
        }

        adjacent
            .into_iter()
            .map(|article| Neighbor {
                article: article.clone(),
                tier: self.pair_tier(source, article),
            })
            .collect()
    }
}

impl Default for ChemistryEngine {
    fn default() -> Self {
        Self::seeded()
    }
}

fn position_of(group: &[ArticleRef], id: ArticleId) -> Option<usize> {
    group.iter().position(|a| a.id == id)
}

fn extend_flankers<'a>(adjacent: &mut Vec<&'a ArticleRef>, group: &'a [ArticleRef], index: usize) {
    if index > 0 {
        adjacent.push(&group[index - 1]);
    }
    if index + 1 < group.len() {
        adjacent.push(&group[index + 1]);
    }
}
