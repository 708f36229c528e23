use cryptopower_ui::theme::Theme;

/// Window width, in logical pixels, at or below which pages switch to
/// their compact layout.
pub const START_MOBILE_VIEW: f32 = 680.0;

/// Shared state handed to every page when it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    pub app_width: f32,
    pub theme: Theme,
}

impl Context {
    pub fn new(app_width: f32, theme: Theme) -> Self {
        Self { app_width, theme }
    }

    pub fn is_mobile(&self) -> bool {
        self.app_width <= START_MOBILE_VIEW
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(
            iced::window::Settings::default().size.width,
            Theme::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_view_threshold() {
        assert!(Context::new(400.0, Theme::default()).is_mobile());
        assert!(Context::new(START_MOBILE_VIEW, Theme::default()).is_mobile());
        assert!(!Context::new(1024.0, Theme::default()).is_mobile());
        assert!(!Context::default().is_mobile());
    }
}
