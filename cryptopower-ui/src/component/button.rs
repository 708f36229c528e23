use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row};
use iced::Length;

pub fn primary<'a, T: 'a>(icon: Option<Svg<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content(icon, text(t).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(icon: Option<Svg<'a>>, t: &'a str) -> Button<'a, T> {
    Button::new(content(icon, text(t))).style(theme::button::secondary)
}

/// Borderless button holding a single icon, used for page and modal headers.
pub fn icon<'a, T: 'a>(icon: Svg<'a>) -> Button<'a, T> {
    Button::new(
        icon.width(Length::Fixed(24.0))
            .height(Length::Fixed(24.0))
            .style(theme::svg::primary),
    )
    .padding(6)
    .style(theme::button::transparent)
}

pub fn link<'a, T: 'a>(icon: Option<Svg<'a>>, t: &'a str) -> Button<'a, T> {
    let icon = icon.map(|i| {
        i.width(Length::Fixed(16.0))
            .height(Length::Fixed(16.0))
            .style(|theme: &theme::Theme, _| iced::widget::svg::Style {
                color: Some(theme.colors.buttons.link.active.text),
            })
    });
    Button::new(match icon {
        None => container(text(t)),
        Some(i) => container(row![text(t), i].spacing(5).align_y(Vertical::Center)),
    })
    .padding(0)
    .style(theme::button::link)
}

fn content<'a, T: 'a>(icon: Option<Svg<'a>>, text: Text<'a>) -> Container<'a, T> {
    match icon {
        None => container(text)
            .align_y(Vertical::Center)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .padding(5),
        Some(i) => container(
            row![i.width(Length::Fixed(20.0)), text]
                .spacing(10)
                .align_y(Vertical::Center)
                .width(Length::Shrink),
        )
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .padding(5),
    }
}
