use iced::{
    widget::progress_bar::{Catalog, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>) -> Style {
        class(self)
    }
}

pub fn primary(theme: &Theme) -> Style {
    custom(theme, theme.colors.progress_bars.bar)
}

/// Progress bar filled with the given color, on the themed rail.
pub fn custom(theme: &Theme, bar: iced::Color) -> Style {
    Style {
        background: theme.colors.progress_bars.background.into(),
        bar: bar.into(),
        border: if let Some(color) = theme.colors.progress_bars.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 25.0.into(),
                ..Default::default()
            }
        },
    }
}
