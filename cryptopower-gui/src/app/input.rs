//! Input state kept by pages between two frames.
//!
//! iced reports user input as messages. Pages that react to input once per
//! frame queue those messages on the widget state and consume them later,
//! so every queued event is handled exactly once.

/// State of a text input.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    text: String,
    pending_submits: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Queues a submit event, e.g. the Enter key was pressed in the input.
    pub fn submit(&mut self) {
        self.pending_submits += 1;
    }

    /// Consumes every submit event queued since the last call.
    pub fn take_submits(&mut self) -> usize {
        std::mem::take(&mut self.pending_submits)
    }
}

/// Press detector of a tappable area.
#[derive(Debug, Clone, Default)]
pub struct Click {
    pending: usize,
}

impl Click {
    pub fn press(&mut self) {
        self.pending += 1;
    }

    /// Returns true and consumes one press if the area was pressed since the
    /// last call.
    pub fn clicked(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}
