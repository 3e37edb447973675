use std::collections::HashSet;
use thiserror::Error;
use super::data::{Tier, TierId};

/// The tier catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../assets/tiers.json");

/// Reasons a catalog document can be rejected
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no tiers")]
    Empty,
    #[error("tier id {0} appears more than once")]
    DuplicateId(TierId),
}

/// The Catalog holds the ordered, immutable set of tier records.
/// It is built once at startup and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    tiers: Vec<Tier>,
}

impl Catalog {
    /// Load the catalog shipped with the application
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// Declaration order is preserved; it drives the selector order
    /// and decides which tier is selected by default.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tiers: Vec<Tier> = serde_json::from_str(json)?;
        Self::from_tiers(tiers)
    }

    fn from_tiers(tiers: Vec<Tier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(tiers.len());
        for tier in &tiers {
            if !seen.insert(tier.id) {
                return Err(CatalogError::DuplicateId(tier.id));
            }
        }

        Ok(Catalog { tiers })
    }

    /// The first declared entry
    pub fn first(&self) -> &Tier {
        // from_tiers rejects empty catalogs
        &self.tiers[0]
    }

    /// Exact lookup by id
    pub fn get(&self, id: TierId) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.id == id)
    }

    /// Lookup by id, falling back to the first entry for unknown ids
    pub fn resolve(&self, id: TierId) -> &Tier {
        self.get(id).unwrap_or_else(|| self.first())
    }

    pub fn contains(&self, id: TierId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.first().id, TierId(2));
        assert_eq!(catalog.first().title, "非遗传播大使 (VIP)");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let catalog = Catalog::embedded().unwrap();
        let ids: Vec<u32> = catalog.iter().map(|tier| tier.id.0).collect();
        assert_eq!(ids, vec![2, 3, 5, 6, 7, 4]);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_first() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.get(TierId(99)).is_none());
        assert_eq!(catalog.resolve(TierId(99)), catalog.first());
        assert_eq!(catalog.resolve(TierId(6)).title, "总部战略合伙人");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r##"[
            {"id": 1, "title": "a", "condition": "", "color": "#000000", "icon": "User",
             "kpiDetails": [], "strategicRole": ""},
            {"id": 1, "title": "b", "condition": "", "color": "#000000", "icon": "User",
             "kpiDetails": [], "strategicRole": ""}
        ]"##;
        match Catalog::from_json(json) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, TierId(1)),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_and_malformed_rejected() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_privileges_defaults_to_empty() {
        let json = r##"[
            {"id": 1, "title": "推客", "condition": "注册即可", "color": "#2C2C2C",
             "icon": "User", "kpiDetails": ["完成实名认证"], "strategicRole": "流量触点"}
        ]"##;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(!catalog.first().has_privileges());
        assert_eq!(catalog.first().benefit, "");
    }
}
