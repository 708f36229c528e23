use iced::{
    widget::container::Style,
    Background, Border, Shadow, Vector,
};

use super::{palette::ContainerPalette, Theme};

pub fn simple(theme: &Theme) -> Style {
    card(&theme.colors.cards.simple)
}

pub fn modal(theme: &Theme) -> Style {
    card(&theme.colors.cards.modal)
}

pub fn pill(theme: &Theme) -> Style {
    let p = &theme.colors.cards.pill;
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: Border {
            radius: 25.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card pinned at the bottom of a page, raised above the scrolled content.
pub fn action(theme: &Theme) -> Style {
    Style {
        shadow: Shadow {
            color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, -2.0),
            blur_radius: 8.0,
        },
        ..card(&theme.colors.cards.simple)
    }
}

fn card(p: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                color,
                width: 1.0,
                radius: 8.0.into(),
            }
        } else {
            Border {
                radius: 8.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}
