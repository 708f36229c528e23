use iced::{alignment::Vertical, widget::container, Background, Border, Color, Length};

use crate::{component::text, theme, widget::*};

/// Status badge: a tinted icon next to its label, on a colored pill.
pub fn status<'a, T: 'a>(
    icon: Svg<'a>,
    label: &'a str,
    foreground: Color,
    background: Color,
) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(
                icon.width(Length::Fixed(16.0))
                    .height(Length::Fixed(16.0))
                    .style(theme::svg::custom(foreground)),
            )
            .push(text::caption(label).color(foreground))
            .spacing(5)
            .align_y(Vertical::Center),
    )
    .padding([4, 10])
    .style(move |_theme: &theme::Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: 25.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
}
