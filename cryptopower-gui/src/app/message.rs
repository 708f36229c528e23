use iced::Size;

#[derive(Debug, Clone)]
pub enum Message {
    WindowResized(Size),
    OpenUrl(String),
    Modal(ModalMessage),
    /// Back button of a sub page.
    Back,
    ChecklistToggled(usize, bool),
    ChecklistRowPressed(usize),
    ViewSeed,
    PassphraseEdited(String),
    PassphraseSubmitted,
    RevealSeed,
    SeedWrittenDown(bool),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Positive,
    Negative,
}
