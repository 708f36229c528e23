pub mod components;
pub mod seedbackup;

use iced::{
    widget::{scrollable, Space},
    Alignment, Length,
};

use cryptopower_ui::{
    component::{button, pill, text::*},
    icon, theme,
    widget::*,
};

use super::{
    context::Context,
    message::{Message, ModalMessage},
};

const PADDING: u16 = 40;
const MOBILE_PADDING: u16 = 16;

fn padding(ctx: &Context) -> u16 {
    if ctx.is_mobile() {
        MOBILE_PADDING
    } else {
        PADDING
    }
}

/// Layout of a page opened on top of another one: a header with a back
/// button, the page title and the wallet name, the scrolled content, and an
/// optional action pinned at the bottom.
pub fn sub_page<'a>(
    ctx: &Context,
    title: &'a str,
    wallet_name: &'a str,
    content: impl Into<Element<'a, Message>>,
    action: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let padding = padding(ctx);
    Column::new()
        .push(
            Container::new(
                Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(button::icon(icon::arrow_back()).on_press(Message::Back))
                    .push(h3(title))
                    .push(pill(wallet_name)),
            )
            .padding([padding / 2, padding])
            .width(Length::Fill),
        )
        .push(
            Container::new(scrollable(
                Container::new(content)
                    .padding([0, padding])
                    .width(Length::Fill),
            ))
            .height(Length::Fill),
        )
        .push_maybe(action.map(|action| {
            Container::new(action)
                .padding([padding / 2, padding])
                .width(Length::Fill)
                .style(theme::card::action)
        }))
        .into()
}

pub fn modal<'a>(
    title: &'a str,
    body: &'a str,
    negative: &'a str,
    positive: &'a str,
) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(20)
            .push(h4_bold(title))
            .push(p1_regular(body).style(theme::text::secondary))
            .push(
                Row::new()
                    .spacing(10)
                    .push(Space::with_width(Length::Fill))
                    .push(
                        button::secondary(None, negative)
                            .width(Length::Fixed(120.0))
                            .on_press(Message::Modal(ModalMessage::Negative)),
                    )
                    .push(
                        button::primary(None, positive)
                            .width(Length::Fixed(120.0))
                            .on_press(Message::Modal(ModalMessage::Positive)),
                    ),
            ),
    )
    .padding(24)
    .max_width(420.0)
    .style(theme::card::modal)
    .into()
}
