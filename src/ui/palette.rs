/// Brand colors and the hex parser used for tier accents
use iced::Color;

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub const INK: Color = rgb8(0x2C, 0x2C, 0x2C);
pub const RED: Color = rgb8(0x94, 0x29, 0x2C);
pub const JADE: Color = rgb8(0x4F, 0x79, 0x6C);
pub const GOLD: Color = rgb8(0xBF, 0xA3, 0x6F);
pub const BLUE: Color = rgb8(0x60, 0xA5, 0xFA);
pub const BG: Color = rgb8(0xF9, 0xF7, 0xF2);
pub const SUB: Color = rgb8(0x6B, 0x6B, 0x6B);
pub const MUTED: Color = rgb8(0x9C, 0xA3, 0xAF);
pub const LINE: Color = rgb8(0xF3, 0xF4, 0xF6);
pub const WHITE: Color = Color::WHITE;

/// Parse `#RRGGBB` or `#RGB` into a color
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

/// Accent color for a tier, falling back to ink for unparseable values
pub fn accent(value: &str) -> Color {
    parse_hex(value).unwrap_or(INK)
}

/// Same color with a new alpha
pub fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_hex("#94292C"), Some(RED));
        assert_eq!(parse_hex("#4f796c"), Some(JADE));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_hex("#fff"), Some(Color::WHITE));
    }

    #[test]
    fn test_invalid_falls_back_to_ink() {
        assert_eq!(parse_hex("94292C"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(accent("teal"), INK);
    }
}
