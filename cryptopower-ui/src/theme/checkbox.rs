use iced::{
    widget::checkbox::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let c = &theme.colors.checkboxes;
    let is_checked = match status {
        Status::Active { is_checked }
        | Status::Hovered { is_checked }
        | Status::Disabled { is_checked } => is_checked,
    };
    Style {
        icon_color: c.icon,
        text_color: c.text.into(),
        background: if is_checked {
            c.checked_background.into()
        } else {
            c.background.into()
        },
        border: if let Some(color) = c.border {
            Border {
                radius: 4.0.into(),
                width: 1.0,
                color: if is_checked {
                    c.checked_background
                } else {
                    color
                },
            }
        } else {
            Border::default()
        },
    }
}
