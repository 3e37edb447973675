/// Presentation layer
///
/// - glyph.rs: closed set of tier glyphs
/// - ladder.rs: tier selector and detail panel
/// - model.rs: commission and cost structure section
/// - sections.rs: nav bar, hero, ecosystem, footer and page layout
/// - palette.rs / styles.rs: colors and widget styles

pub mod glyph;
pub mod ladder;
pub mod model;
pub mod palette;
pub mod sections;
pub mod styles;

use iced::font::Weight;
use iced::Font;

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};
