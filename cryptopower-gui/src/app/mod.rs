pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod message;
pub mod navigator;
pub mod prompt;
pub mod state;
pub mod utils;
pub mod view;

use std::sync::Arc;

use iced::{Subscription, Task};
use tracing::info;

use cryptopower_ui::{theme::Theme, widget::Element};

use crate::{wallet::Wallet, VERSION};
use context::Context;
use message::Message;
use navigator::Navigator;
use state::BackupInstructions;

/// Window running the seed backup of a wallet.
pub struct App {
    navigator: Navigator,
    ctx: Context,
}

impl App {
    pub fn new(wallet: Arc<dyn Wallet>) -> (Self, Task<Message>) {
        (
            Self {
                navigator: Navigator::new(Box::new(BackupInstructions::new(wallet))),
                ctx: Context::default(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("Cryptopower v{}", VERSION)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowResized(size) => {
                self.ctx.app_width = size.width;
                Task::none()
            }
            Message::OpenUrl(url) => {
                utils::go_to_url(&url);
                Task::none()
            }
            message => {
                let task = self.navigator.update(message);
                if self.navigator.is_empty() {
                    info!("Seed backup closed, exiting");
                    return iced::exit();
                }
                task
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        self.navigator.view(&self.ctx)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_, size)| Message::WindowResized(size))
    }

    pub fn theme(&self) -> Theme {
        self.ctx.theme
    }
}
