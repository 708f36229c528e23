//! Modal overlay, following the `modal` example of iced: the base element
//! stays rendered below a dimmed backdrop that swallows every event.
use iced::widget::{center, mouse_area, opaque, stack};

use super::Element;
use crate::theme;

/// Centers a modal element over some base element.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    modal: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message> Modal<'a, Message> {
    /// Returns a new [`Modal`].
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        modal: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            modal: modal.into(),
            on_blur: None,
        }
    }

    /// Sets the message that will be produced when the backdrop of the
    /// [`Modal`] is pressed.
    pub fn on_blur(self, on_blur: Option<Message>) -> Self {
        Self { on_blur, ..self }
    }
}

impl<'a, Message> From<Modal<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(modal: Modal<'a, Message>) -> Self {
        let backdrop = center(opaque(modal.modal)).style(theme::container::backdrop);
        let area = if let Some(on_blur) = modal.on_blur {
            mouse_area(backdrop).on_press(on_blur)
        } else {
            mouse_area(backdrop)
        };
        stack![modal.base, opaque(area)].into()
    }
}
