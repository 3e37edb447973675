/// Which tier the detail panel shows
///
/// Exactly one id is active at any time. It starts at the first catalog
/// entry and only moves on an explicit `select`.

use tracing::{debug, warn};
use super::catalog::Catalog;
use super::data::{Tier, TierId};

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    active: TierId,
    /// Whether the nested selector entry is currently shown
    expanded: bool,
}

impl Selection {
    /// Start on the first declared tier, with the nested entry collapsed
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active: catalog.first().id,
            expanded: false,
        }
    }

    /// Make `id` the active tier.
    /// Unknown ids select the first catalog entry instead.
    pub fn select(&mut self, id: TierId, catalog: &Catalog) {
        let next = if catalog.contains(id) {
            id
        } else {
            let fallback = catalog.first().id;
            warn!("Tier {} is not in the catalog, selecting {}", id, fallback);
            fallback
        };

        if next != self.active {
            debug!("Selected tier {} (was {})", next, self.active);
        }
        self.active = next;
    }

    pub fn active_id(&self) -> TierId {
        self.active
    }

    pub fn active<'a>(&self, catalog: &'a Catalog) -> &'a Tier {
        catalog.resolve(self.active)
    }

    pub fn is_active(&self, id: TierId) -> bool {
        self.active == id
    }

    /// Expand or collapse the nested selector entry.
    /// The active tier is left alone, even if it is the one being hidden.
    pub fn toggle_group(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_entry() {
        let catalog = Catalog::embedded().unwrap();
        let selection = Selection::new(&catalog);
        assert_eq!(selection.active_id(), TierId(2));
        assert_eq!(selection.active(&catalog), catalog.first());
        assert!(!selection.is_expanded());
    }

    #[test]
    fn test_select_every_tier() {
        let catalog = Catalog::embedded().unwrap();
        let mut selection = Selection::new(&catalog);
        for tier in catalog.iter() {
            selection.select(tier.id, &catalog);
            assert!(selection.is_active(tier.id));
            assert_eq!(selection.active(&catalog), tier);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let catalog = Catalog::embedded().unwrap();
        let mut selection = Selection::new(&catalog);
        selection.select(TierId(6), &catalog);
        selection.select(TierId(42), &catalog);
        assert_eq!(selection.active_id(), catalog.first().id);
    }

    #[test]
    fn test_collapse_keeps_selection() {
        let catalog = Catalog::embedded().unwrap();
        let mut selection = Selection::new(&catalog);
        selection.toggle_group();
        selection.select(TierId(4), &catalog);
        selection.toggle_group();
        assert!(!selection.is_expanded());
        assert_eq!(selection.active_id(), TierId(4));
    }
}
