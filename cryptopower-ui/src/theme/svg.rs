use iced::widget::svg::{Catalog, Status, Style, StyleFn};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, _status: Status) -> Style {
    Style {
        color: Some(theme.colors.text.primary),
    }
}

pub fn secondary(theme: &Theme, _status: Status) -> Style {
    Style {
        color: Some(theme.colors.text.secondary),
    }
}

pub fn custom(color: iced::Color) -> impl Fn(&Theme, Status) -> Style {
    move |_theme: &Theme, _status: Status| Style { color: Some(color) }
}
