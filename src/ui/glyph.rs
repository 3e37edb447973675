/// Tier glyphs
///
/// The catalog names a glyph by string. Names resolve against this closed
/// set once, when a tier is projected for display; anything unknown is drawn
/// with `Glyph::DEFAULT`.
use iced::widget::text;
use iced::{Color, Element};
use tracing::debug;

use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    User,
    Award,
    Map,
    Store,
    Building,
    Users,
    Crown,
}

impl Glyph {
    pub const DEFAULT: Glyph = Glyph::User;

    pub const ALL: [Glyph; 7] = [
        Glyph::User,
        Glyph::Award,
        Glyph::Map,
        Glyph::Store,
        Glyph::Building,
        Glyph::Users,
        Glyph::Crown,
    ];

    /// Resolve a catalog icon name (case-sensitive)
    pub fn resolve(name: &str) -> Glyph {
        match name {
            "User" => Glyph::User,
            "Award" => Glyph::Award,
            "Map" => Glyph::Map,
            "Store" => Glyph::Store,
            "Building" => Glyph::Building,
            "Users" => Glyph::Users,
            "Crown" => Glyph::Crown,
            _ => {
                debug!("Unknown glyph {:?}, drawing {}", name, Glyph::DEFAULT.label());
                Glyph::DEFAULT
            }
        }
    }

    /// Catalog name of the glyph
    pub fn label(&self) -> &'static str {
        match self {
            Glyph::User => "User",
            Glyph::Award => "Award",
            Glyph::Map => "Map",
            Glyph::Store => "Store",
            Glyph::Building => "Building",
            Glyph::Users => "Users",
            Glyph::Crown => "Crown",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::User => "👤",
            Glyph::Award => "🏅",
            Glyph::Map => "🗺",
            Glyph::Store => "🏬",
            Glyph::Building => "🏢",
            Glyph::Users => "👥",
            Glyph::Crown => "👑",
        }
    }

    pub fn view<'a>(self, size: f32, color: Color) -> Element<'a, Message> {
        text(self.symbol()).size(size).color(color).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_catalog_names() {
        assert_eq!(Glyph::resolve("User"), Glyph::User);
        assert_eq!(Glyph::resolve("Award"), Glyph::Award);
        assert_eq!(Glyph::resolve("Map"), Glyph::Map);
        assert_eq!(Glyph::resolve("Store"), Glyph::Store);
        assert_eq!(Glyph::resolve("Building"), Glyph::Building);
        assert_eq!(Glyph::resolve("Users"), Glyph::Users);
        assert_eq!(Glyph::resolve("Crown"), Glyph::Crown);
    }

    #[test]
    fn test_label_resolves_back_to_glyph() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::resolve(glyph.label()), glyph);
        }
        assert_eq!(Glyph::DEFAULT.label(), "User");
    }

    #[test]
    fn test_unknown_name_uses_default() {
        assert_eq!(Glyph::resolve("Rocket"), Glyph::DEFAULT);
        assert_eq!(Glyph::resolve("crown"), Glyph::DEFAULT);
        assert_eq!(Glyph::resolve(""), Glyph::DEFAULT);
    }
}
