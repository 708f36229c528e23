//! Svg icons embedded in the binary.
//!
//! Icons are drawn with a single fill so that they can be tinted with
//! [`iced::widget::svg::Style::color`].

use crate::widget::Svg;
use iced::widget::svg::Handle;

const ARROW_BACK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z"/></svg>"#;

const LINK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M19 19H5V5h7V3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14c1.1 0 2-.9 2-2v-7h-2v7zM14 3v2h3.59l-9.83 9.83 1.41 1.41L19 6.41V10h2V3h-7z"/></svg>"#;

const TICKET_UNMINED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 18a8 8 0 1 1 0-16 8 8 0 0 1 0 16zm.5-13H11v6l5.25 3.15.75-1.23-4.5-2.67V7z"/></svg>"#;

const TICKET_IMMATURE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6 2v6l4 4-4 4v6h12v-6l-4-4 4-4V2H6zm10 14.5V20H8v-3.5l4-4 4 4zm-4-5-4-4V4h8v3.5l-4 4z"/></svg>"#;

const TICKET_LIVE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M22 10V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v4a2 2 0 1 1 0 4v4a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-4a2 2 0 1 1 0-4zm-9 7.5h-2v-2h2v2zm0-4.5h-2v-2h2v2zm0-4.5h-2v-2h2v2z"/></svg>"#;

const TICKET_VOTED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M9 16.17 4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41L9 16.17z"/></svg>"#;

const TICKET_MISSED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"/></svg>"#;

const TICKET_EXPIRED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM4 12a8 8 0 0 1 12.9-6.31L5.69 16.9A7.9 7.9 0 0 1 4 12zm8 8a7.9 7.9 0 0 1-4.9-1.69L18.31 7.1A8 8 0 0 1 12 20z"/></svg>"#;

const TICKET_REVOKED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12.5 8c-2.65 0-5.05.99-6.9 2.6L2 7v9h9l-3.62-3.62A7.96 7.96 0 0 1 20.08 16l2.37-.78C21.08 11.03 17.15 8 12.5 8z"/></svg>"#;

fn svg<'a>(data: &'static str) -> Svg<'a> {
    Svg::new(Handle::from_memory(data.as_bytes()))
}

pub fn arrow_back<'a>() -> Svg<'a> {
    svg(ARROW_BACK)
}

pub fn link_icon<'a>() -> Svg<'a> {
    svg(LINK)
}

/// Icons of the staking ticket lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketIcon {
    Unmined,
    Immature,
    Live,
    Voted,
    Missed,
    Expired,
    Revoked,
}

impl TicketIcon {
    pub fn svg<'a>(self) -> Svg<'a> {
        svg(match self {
            Self::Unmined => TICKET_UNMINED,
            Self::Immature => TICKET_IMMATURE,
            Self::Live => TICKET_LIVE,
            Self::Voted => TICKET_VOTED,
            Self::Missed => TICKET_MISSED,
            Self::Expired => TICKET_EXPIRED,
            Self::Revoked => TICKET_REVOKED,
        })
    }
}
