use std::fmt;

use iced::Task;
use tracing::{debug, warn};

use cryptopower_ui::widget::{modal::Modal, Column, Element};

use super::{
    context::Context,
    message::{Message, ModalMessage},
    view,
};

/// A screen of the application, stacked on top of the previous one.
pub trait Page {
    fn id(&self) -> &'static str;
    fn update(&mut self, _navigator: &mut dyn WindowNavigator, _message: Message) -> Task<Message> {
        Task::none()
    }
    fn view<'a>(&'a self, ctx: &'a Context) -> Element<'a, Message>;
    /// Called when the page becomes the displayed one.
    fn on_navigated_to(&mut self) {}
    /// Called when the page stops being the displayed one, either because
    /// another page is displayed on top of it or because it is closed.
    fn on_navigated_from(&mut self) {}
}

pub trait PageNavigator {
    fn display(&mut self, page: Box<dyn Page>);
    fn close_current_page(&mut self);
    /// Closes every page displayed after the page with the given id.
    fn close_pages_after(&mut self, page_id: &'static str);
}

pub trait WindowNavigator: PageNavigator {
    fn show_modal(&mut self, modal: CustomModal);
    fn dismiss_modal(&mut self);
}

pub enum Action {
    Display(Box<dyn Page>),
    CloseCurrentPage,
    ClosePagesAfter(&'static str),
    ShowModal(CustomModal),
    DismissModal,
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Display(page) => write!(f, "Display({})", page.id()),
            Self::CloseCurrentPage => write!(f, "CloseCurrentPage"),
            Self::ClosePagesAfter(id) => write!(f, "ClosePagesAfter({})", id),
            Self::ShowModal(modal) => write!(f, "ShowModal({:?})", modal),
            Self::DismissModal => write!(f, "DismissModal"),
        }
    }
}

/// Navigation requests recorded during a page update, applied by the
/// [`Navigator`] once the page is done.
#[derive(Debug, Default)]
pub struct Transitions {
    actions: Vec<Action>,
}

impl Transitions {
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}

impl PageNavigator for Transitions {
    fn display(&mut self, page: Box<dyn Page>) {
        self.actions.push(Action::Display(page));
    }
    fn close_current_page(&mut self) {
        self.actions.push(Action::CloseCurrentPage);
    }
    fn close_pages_after(&mut self, page_id: &'static str) {
        self.actions.push(Action::ClosePagesAfter(page_id));
    }
}

impl WindowNavigator for Transitions {
    fn show_modal(&mut self, modal: CustomModal) {
        self.actions.push(Action::ShowModal(modal));
    }
    fn dismiss_modal(&mut self) {
        self.actions.push(Action::DismissModal);
    }
}

type PositiveCallback = Box<dyn Fn(&mut dyn PageNavigator) -> bool>;

/// Confirmation dialog with a negative and a positive button.
///
/// The negative button and a click outside of the dialog dismiss it. The
/// positive callback decides whether the dialog is dismissed afterwards.
pub struct CustomModal {
    title: String,
    body: String,
    negative_text: String,
    positive_text: String,
    on_positive: Option<PositiveCallback>,
}

impl CustomModal {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            negative_text: String::new(),
            positive_text: String::new(),
            on_positive: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn negative_button_text(mut self, text: impl Into<String>) -> Self {
        self.negative_text = text.into();
        self
    }

    pub fn positive_button_text(mut self, text: impl Into<String>) -> Self {
        self.positive_text = text.into();
        self
    }

    pub fn positive_button_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut dyn PageNavigator) -> bool + 'static,
    {
        self.on_positive = Some(Box::new(callback));
        self
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_body(&self) -> &str {
        &self.body
    }

    /// Runs the positive callback, returns true if the modal must be
    /// dismissed.
    fn confirm(&self, navigator: &mut dyn PageNavigator) -> bool {
        match &self.on_positive {
            Some(callback) => callback(navigator),
            None => true,
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::modal(
            &self.title,
            &self.body,
            &self.negative_text,
            &self.positive_text,
        )
    }
}

impl Default for CustomModal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CustomModal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CustomModal")
            .field("title", &self.title)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Stack of displayed pages and the modal shown over them, if any.
pub struct Navigator {
    pages: Vec<Box<dyn Page>>,
    modal: Option<CustomModal>,
}

impl Navigator {
    pub fn new(mut root: Box<dyn Page>) -> Self {
        debug!("Displaying page {}", root.id());
        root.on_navigated_to();
        Self {
            pages: vec![root],
            modal: None,
        }
    }

    pub fn current_page_id(&self) -> Option<&'static str> {
        self.pages.last().map(|page| page.id())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn modal(&self) -> Option<&CustomModal> {
        self.modal.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Modal(msg) => {
                self.on_modal_message(msg);
                Task::none()
            }
            message => {
                let mut transitions = Transitions::default();
                let task = match self.pages.last_mut() {
                    Some(page) => page.update(&mut transitions, message),
                    None => Task::none(),
                };
                self.apply(transitions);
                task
            }
        }
    }

    fn on_modal_message(&mut self, message: ModalMessage) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        if message == ModalMessage::Positive {
            let mut transitions = Transitions::default();
            if !modal.confirm(&mut transitions) {
                self.modal = Some(modal);
            }
            self.apply(transitions);
        }
    }

    pub fn apply(&mut self, transitions: Transitions) {
        for action in transitions.into_actions() {
            match action {
                Action::Display(mut page) => {
                    if let Some(current) = self.pages.last_mut() {
                        current.on_navigated_from();
                    }
                    debug!("Displaying page {}", page.id());
                    page.on_navigated_to();
                    self.pages.push(page);
                }
                Action::CloseCurrentPage => {
                    self.truncate(self.pages.len().saturating_sub(1));
                }
                Action::ClosePagesAfter(id) => {
                    if let Some(i) = self.pages.iter().rposition(|page| page.id() == id) {
                        self.truncate(i + 1);
                    } else {
                        warn!("Page {} is not displayed, no page closed", id);
                    }
                }
                Action::ShowModal(modal) => self.modal = Some(modal),
                Action::DismissModal => self.modal = None,
            }
        }
    }

    fn truncate(&mut self, len: usize) {
        if len >= self.pages.len() {
            return;
        }
        for mut page in self.pages.drain(len..).rev() {
            debug!("Closing page {}", page.id());
            page.on_navigated_from();
        }
        if let Some(page) = self.pages.last_mut() {
            page.on_navigated_to();
        }
    }

    pub fn view<'a>(&'a self, ctx: &'a Context) -> Element<'a, Message> {
        let content = match self.pages.last() {
            Some(page) => page.view(ctx),
            None => Column::new().into(),
        };
        if let Some(modal) = &self.modal {
            Modal::new(content, modal.view())
                .on_blur(Some(Message::Modal(ModalMessage::Negative)))
                .into()
        } else {
            content
        }
    }
}
