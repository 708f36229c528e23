use iced::{
    widget::{checkbox, mouse_area, text_input},
    Alignment, Length,
};

use cryptopower_ui::{
    component::{button, text::*},
    icon, theme,
    widget::*,
};

use super::sub_page;
use crate::app::{context::Context, message::Message, prompt, state::ChecklistItem};

pub fn backup_instructions<'a>(
    ctx: &Context,
    wallet_name: &'a str,
    checklist: &'a [ChecklistItem],
    ready: bool,
) -> Element<'a, Message> {
    let items = checklist
        .iter()
        .enumerate()
        .fold(Column::new().spacing(10), |col, (i, item)| {
            col.push(
                mouse_area(
                    Container::new(
                        Row::new()
                            .spacing(10)
                            .align_y(Alignment::Center)
                            .push(
                                checkbox("", item.acknowledged)
                                    .on_toggle(move |checked| {
                                        Message::ChecklistToggled(i, checked)
                                    })
                                    .style(theme::checkbox::primary),
                            )
                            .push(p1_regular(&item.label).width(Length::Fill)),
                    )
                    .padding(if ctx.is_mobile() { 12 } else { 16 })
                    .width(Length::Fill)
                    .style(theme::card::simple),
                )
                .on_press(Message::ChecklistRowPressed(i)),
            )
        });

    sub_page(
        ctx,
        prompt::BACKUP_INSTRUCTIONS_TITLE,
        wallet_name,
        Column::new()
            .spacing(20)
            .push(items)
            .push(
                button::link(Some(icon::link_icon()), prompt::LEARN_MORE)
                    .on_press(Message::OpenUrl(prompt::SEED_BACKUP_HELP_URL.to_string())),
            ),
        Some(
            button::primary(None, prompt::VIEW_SEED_PHRASE)
                .width(Length::Fill)
                .on_press_maybe(ready.then_some(Message::ViewSeed))
                .into(),
        ),
    )
}

pub fn save_seed<'a>(
    ctx: &Context,
    wallet_name: &'a str,
    passphrase: &'a str,
    error: Option<&'a str>,
    words: Option<&'a [String]>,
    written_down: bool,
) -> Element<'a, Message> {
    let (content, action): (Column<'a, Message>, Button<'a, Message>) = match words {
        None => {
            let style: fn(&theme::Theme, text_input::Status) -> text_input::Style =
                if error.is_some() {
                    theme::text_input::invalid
                } else {
                    theme::text_input::primary
                };
            (
                Column::new()
                    .spacing(10)
                    .push(p1_regular(prompt::SAVE_SEED_PASSPHRASE_HELP))
                    .push(
                        text_input(prompt::PASSPHRASE_PLACEHOLDER, passphrase)
                            .secure(true)
                            .on_input(Message::PassphraseEdited)
                            .on_submit(Message::PassphraseSubmitted)
                            .padding(10)
                            .style(style),
                    )
                    .push_maybe(error.map(|e| p2_regular(e).style(theme::text::error))),
                button::primary(None, prompt::REVEAL_SEED)
                    .on_press_maybe((!passphrase.is_empty()).then_some(Message::RevealSeed)),
            )
        }
        Some(words) => {
            let columns = if ctx.is_mobile() { 2 } else { 3 };
            let grid = words.chunks(columns).enumerate().fold(
                Column::new().spacing(10),
                |grid, (r, chunk)| {
                    grid.push(chunk.iter().enumerate().fold(
                        Row::new().spacing(10),
                        |row, (c, word)| {
                            row.push(
                                Container::new(
                                    Row::new()
                                        .spacing(10)
                                        .align_y(Alignment::Center)
                                        .push(
                                            p2_regular(format!("{}.", r * columns + c + 1))
                                                .style(theme::text::secondary),
                                        )
                                        .push(p1_bold(word)),
                                )
                                .padding(12)
                                .width(Length::FillPortion(1))
                                .style(theme::card::simple),
                            )
                        },
                    ))
                },
            );
            (
                Column::new()
                    .spacing(20)
                    .push(p1_regular(prompt::SAVE_SEED_HELP))
                    .push(grid)
                    .push(
                        checkbox(prompt::SEED_WRITTEN_DOWN, written_down)
                            .on_toggle(Message::SeedWrittenDown)
                            .style(theme::checkbox::primary),
                    ),
                button::primary(None, prompt::DONE)
                    .on_press_maybe(written_down.then_some(Message::Done)),
            )
        }
    };

    sub_page(
        ctx,
        prompt::SAVE_SEED_TITLE,
        wallet_name,
        content,
        Some(action.width(Length::Fill).into()),
    )
}
