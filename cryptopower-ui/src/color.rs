use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

pub const PRIMARY: Color = Color::from_rgb(
    0x29 as f32 / 255.0,
    0x70 as f32 / 255.0,
    0xFF as f32 / 255.0,
); // #2970FF

pub const PRIMARY_DARK: Color = Color::from_rgb(
    0x1B as f32 / 255.0,
    0x4F as f32 / 255.0,
    0xC2 as f32 / 255.0,
); // #1B4FC2

pub const DEEP_BLUE: Color = Color::from_rgb(
    0x09 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x40 as f32 / 255.0,
); // #091440

pub const LIGHT_BLUE: Color = Color::from_rgb(
    0xE4 as f32 / 255.0,
    0xF1 as f32 / 255.0,
    0xFF as f32 / 255.0,
); // #E4F1FF

pub const GREEN: Color = Color::from_rgb(
    0x41 as f32 / 255.0,
    0xBE as f32 / 255.0,
    0x53 as f32 / 255.0,
); // #41BE53

pub const LIGHT_GREEN: Color = Color::from_rgb(
    0xE1 as f32 / 255.0,
    0xF8 as f32 / 255.0,
    0xEF as f32 / 255.0,
); // #E1F8EF

pub const ORANGE: Color = Color::from_rgb(
    0xED as f32 / 255.0,
    0x6D as f32 / 255.0,
    0x47 as f32 / 255.0,
); // #ED6D47

pub const LIGHT_ORANGE: Color = Color::from_rgb(
    0xFC as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xE1 as f32 / 255.0,
); // #FCE7E1

pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

pub const GREY_1: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF5 as f32 / 255.0,
    0xF6 as f32 / 255.0,
); // #F3F5F6 - page background

pub const GREY_2: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xEA as f32 / 255.0,
    0xED as f32 / 255.0,
);

pub const GREY_3: Color = Color::from_rgb(
    0xC4 as f32 / 255.0,
    0xCB as f32 / 255.0,
    0xD2 as f32 / 255.0,
); // #C4CBD2 - borders

pub const GREY_4: Color = Color::from_rgb(
    0x89 as f32 / 255.0,
    0x97 as f32 / 255.0,
    0xA5 as f32 / 255.0,
); // #8997A5

pub const GREY_5: Color = Color::from_rgb(
    0x59 as f32 / 255.0,
    0x6D as f32 / 255.0,
    0x81 as f32 / 255.0,
); // #596D81 - secondary text

pub const MODAL_BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
