pub mod badge;
pub mod button;
pub mod text;

use crate::{theme, widget::*};

/// Rounded label, used to show the name of the wallet a page acts on.
pub fn pill<'a, T: 'a>(label: impl std::fmt::Display) -> Container<'a, T> {
    Container::new(text::p2_medium(label))
        .padding([4, 12])
        .style(theme::card::pill)
}
