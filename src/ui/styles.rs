/// Container and button styles shared by the deck sections
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::palette;

/// White rounded card with a hairline border
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::LINE,
            width: 1.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Flat fill with rounded corners
pub fn fill(color: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark band used by the hero header and the footer
pub fn band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Nav bar entry, underlined in red while active
pub fn nav_entry(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = match (active, status) {
            (true, _) => palette::RED,
            (false, button::Status::Hovered) => palette::INK,
            (false, _) => palette::MUTED,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { palette::RED } else { Color::TRANSPARENT },
                width: if active { 1.0 } else { 0.0 },
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Tier selector row
pub fn selector_row(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match (active, status) {
            (true, _) => Some(Background::Color(palette::BG)),
            (false, button::Status::Hovered) => Some(Background::Color(palette::LINE)),
            (false, _) => None,
        };
        button::Style {
            background,
            text_color: if active { palette::INK } else { palette::SUB },
            border: Border {
                color: if active { palette::RED } else { Color::TRANSPARENT },
                width: if active { 1.0 } else { 0.0 },
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Solid action button in the given color
pub fn action(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette::faded(color, 0.85),
            button::Status::Disabled => palette::faded(color, 0.4),
            button::Status::Active => color,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Borderless text button
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::INK,
            _ => palette::SUB,
        },
        ..Default::default()
    }
}
