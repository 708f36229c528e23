use iced::{widget::progress_bar, Length};

use cryptopower_ui::{
    component::badge,
    theme::{self, Theme},
    widget::*,
};

use crate::app::utils::{ticket_status_icon, PasswordStrength};

pub fn password_strength<'a>(strength: PasswordStrength) -> ProgressBar<'a> {
    let color = strength.color;
    progress_bar(0.0..=100.0, strength.progress)
        .height(Length::Fixed(8.0))
        .style(move |theme: &Theme| theme::progress_bar::custom(theme, color))
}

/// Badge of a staking ticket, `None` if the status label is unknown.
pub fn ticket_status<'a, T: 'a>(theme: &Theme, label: &'a str) -> Option<Container<'a, T>> {
    ticket_status_icon(theme, label)
        .map(|style| badge::status(style.icon.svg(), label, style.color, style.background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{message::Message, utils::compute_password_strength};

    #[test]
    fn ticket_badges() {
        let theme = Theme::default();
        assert!(ticket_status::<Message>(&theme, "LIVE").is_some());
        assert!(ticket_status::<Message>(&theme, "REVOKED").is_some());
        assert!(ticket_status::<Message>(&theme, "PENDING").is_none());
    }

    #[test]
    fn ticket_badge_from_owned_label() {
        let theme = Theme::default();
        let label = String::from("VOTED");
        let badge: Element<Message> = ticket_status(&theme, &label).unwrap().into();
        drop(badge);
        let _: Element<Message> = Row::new()
            .push(ticket_status(&theme, label.as_str()).unwrap())
            .into();
    }

    #[test]
    fn password_strength_bar() {
        let theme = Theme::default();
        let bar = password_strength(compute_password_strength("hunter2", &theme));
        let _: Element<Message> = bar.into();
    }
}
