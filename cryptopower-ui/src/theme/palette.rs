use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
    pub progress_bars: ProgressBars,
    pub tickets: Tickets,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub backdrop: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub pill: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub checked_background: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressBars {
    pub background: iced::Color,
    pub bar: iced::Color,
    pub border: Option<iced::Color>,
}

/// Foreground and background colors of a ticket status badge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatusPalette {
    pub foreground: iced::Color,
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tickets {
    /// Unmined and immature tickets.
    pub pending: StatusPalette,
    pub live: StatusPalette,
    pub voted: StatusPalette,
    /// Missed and expired tickets.
    pub inactive: StatusPalette,
    pub revoked: StatusPalette,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_1,
                backdrop: color::MODAL_BACKDROP,
                scrollable: color::GREY_3,
            },
            text: Text {
                primary: color::DEEP_BLUE,
                secondary: color::GREY_5,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::PRIMARY,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::PRIMARY_DARK,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::PRIMARY_DARK,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_3,
                        text: color::WHITE,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::PRIMARY,
                        border: color::GREY_3.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_BLUE,
                        text: color::PRIMARY,
                        border: color::PRIMARY.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::LIGHT_BLUE,
                        text: color::PRIMARY_DARK,
                        border: color::PRIMARY_DARK.into(),
                    }),
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DEEP_BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_2,
                        text: color::DEEP_BLUE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PRIMARY,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::PRIMARY_DARK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: None,
                },
                modal: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_3.into(),
                },
                pill: ContainerPalette {
                    background: color::GREY_2,
                    text: color::GREY_5.into(),
                    border: None,
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::DEEP_BLUE,
                        selection: color::LIGHT_BLUE,
                        border: Some(color::GREY_3),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_2,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_5,
                        selection: color::LIGHT_BLUE,
                        border: Some(color::GREY_3),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::RED,
                        placeholder: color::GREY_4,
                        value: color::DEEP_BLUE,
                        selection: color::LIGHT_BLUE,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_2,
                        icon: color::RED,
                        placeholder: color::GREY_4,
                        value: color::GREY_5,
                        selection: color::LIGHT_BLUE,
                        border: Some(color::RED),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::DEEP_BLUE,
                background: color::WHITE,
                checked_background: color::PRIMARY,
                border: Some(color::GREY_4),
            },
            progress_bars: ProgressBars {
                background: color::GREY_2,
                bar: color::GREEN,
                border: None,
            },
            tickets: Tickets {
                pending: StatusPalette {
                    foreground: color::DEEP_BLUE,
                    background: color::LIGHT_BLUE,
                },
                live: StatusPalette {
                    foreground: color::PRIMARY,
                    background: color::LIGHT_BLUE,
                },
                voted: StatusPalette {
                    foreground: color::GREEN,
                    background: color::LIGHT_GREEN,
                },
                inactive: StatusPalette {
                    foreground: color::GREY_4,
                    background: color::GREY_1,
                },
                revoked: StatusPalette {
                    foreground: color::ORANGE,
                    background: color::LIGHT_ORANGE,
                },
            },
        }
    }
}
