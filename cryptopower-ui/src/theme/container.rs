use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::Background;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

/// Dimmed layer drawn behind modals.
pub fn backdrop(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.backdrop)),
        ..Default::default()
    }
}

