/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::Deserialize;
use std::fmt;

/// Identifier of a tier, unique within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct TierId(pub u32);

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One rung of the franchise/affiliate ladder
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    /// Unique catalog ID
    pub id: TierId,
    /// Display name (e.g., "区域合作商")
    pub title: String,
    /// Qualification requirement, shown as-is
    pub condition: String,
    /// One-line summary shown under the title
    #[serde(default)]
    pub benefit: String,
    /// Accent color as a hex string (e.g., "#4F796C")
    pub color: String,
    /// Symbolic glyph name, resolved by `ui::glyph::Glyph::resolve`
    pub icon: String,
    /// Requirement strings, in display order
    pub kpi_details: Vec<String>,
    /// Benefit strings, in display order; empty hides the privileges panel
    #[serde(default)]
    pub privileges: Vec<String>,
    /// A single descriptive sentence
    pub strategic_role: String,
}

impl Tier {
    /// Whether the detail panel should render the privileges block
    pub fn has_privileges(&self) -> bool {
        !self.privileges.is_empty()
    }
}
