use std::sync::Arc;

use iced::Task;
use tracing::{info, warn};

use cryptopower_ui::widget::Element;

use super::backup_instructions::{prompt_to_exit, BACKUP_INSTRUCTIONS_PAGE_ID};
use crate::{
    app::{
        context::Context,
        error::Error,
        input::Editor,
        message::Message,
        navigator::{Page, WindowNavigator},
        utils::{editors_not_empty, handle_submit_event, translate_err},
        view,
    },
    wallet::Wallet,
};

pub const SAVE_SEED_PAGE_ID: &str = "save_seed";

/// Reveals the seed words of the wallet once its passphrase is given.
pub struct SaveSeed {
    wallet: Arc<dyn Wallet>,
    passphrase: Editor,
    words: Option<Vec<String>>,
    error: Option<String>,
    written_down: bool,
}

impl SaveSeed {
    pub fn new(wallet: Arc<dyn Wallet>) -> Self {
        Self {
            wallet,
            passphrase: Editor::new(),
            words: None,
            error: None,
            written_down: false,
        }
    }

    pub fn words(&self) -> Option<&[String]> {
        self.words.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn reveal(&mut self) {
        if !editors_not_empty(&[&self.passphrase]) {
            return;
        }
        match self
            .wallet
            .seed_words(self.passphrase.text())
            .map_err(Error::from)
        {
            Ok(words) => {
                self.words = Some(words);
                self.error = None;
                self.passphrase.clear();
            }
            Err(e) => {
                warn!("Failed to get the seed words of {}: {}", self.wallet.name(), e);
                self.error = Some(translate_err(&e));
            }
        }
    }
}

impl Page for SaveSeed {
    fn id(&self) -> &'static str {
        SAVE_SEED_PAGE_ID
    }

    fn update(&mut self, navigator: &mut dyn WindowNavigator, message: Message) -> Task<Message> {
        match message {
            Message::PassphraseEdited(passphrase) => {
                self.passphrase.set_text(passphrase);
                self.error = None;
            }
            Message::PassphraseSubmitted => {
                self.passphrase.submit();
                if handle_submit_event(&mut [&mut self.passphrase]) {
                    self.reveal();
                }
            }
            Message::RevealSeed => self.reveal(),
            Message::SeedWrittenDown(done) => self.written_down = done,
            Message::Done => {
                if self.words.is_some() && self.written_down {
                    info!("Seed of wallet {} backed up", self.wallet.name());
                    navigator.close_pages_after(BACKUP_INSTRUCTIONS_PAGE_ID);
                    navigator.close_current_page();
                }
            }
            Message::Back => prompt_to_exit(navigator),
            _ => {}
        }
        Task::none()
    }

    fn view<'a>(&'a self, ctx: &'a Context) -> Element<'a, Message> {
        view::seedbackup::save_seed(
            ctx,
            self.wallet.name(),
            self.passphrase.text(),
            self.error.as_deref(),
            self.words.as_deref(),
            self.written_down,
        )
    }

    fn on_navigated_from(&mut self) {
        self.passphrase.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::navigator::{Action, Navigator, Transitions},
        app::state::BackupInstructions,
        wallet::mock::{MockWallet, PASSPHRASE},
    };

    fn page() -> SaveSeed {
        SaveSeed::new(Arc::new(MockWallet::new("main")))
    }

    fn send(page: &mut SaveSeed, message: Message) -> Transitions {
        let mut transitions = Transitions::default();
        let _ = page.update(&mut transitions, message);
        transitions
    }

    #[test]
    fn empty_passphrase_is_ignored() {
        let mut page = page();
        send(&mut page, Message::RevealSeed);
        send(&mut page, Message::PassphraseSubmitted);
        assert!(page.words().is_none());
        assert!(page.error().is_none());
    }

    #[test]
    fn wrong_passphrase() {
        let mut page = page();
        send(&mut page, Message::PassphraseEdited("wrong".to_string()));
        send(&mut page, Message::RevealSeed);
        assert!(page.words().is_none());
        assert_eq!(page.error(), Some("Invalid passphrase"));

        // Editing the passphrase clears the error.
        send(&mut page, Message::PassphraseEdited("wron".to_string()));
        assert!(page.error().is_none());
    }

    #[test]
    fn submit_reveals_words() {
        let mut page = page();
        send(&mut page, Message::PassphraseEdited(PASSPHRASE.to_string()));
        send(&mut page, Message::PassphraseSubmitted);
        assert_eq!(
            page.words(),
            Some(&["abandon".to_string(), "ability".to_string(), "able".to_string()][..])
        );
        assert!(page.error().is_none());
        assert_eq!(page.passphrase.text(), "");
        // The submit event was consumed.
        assert_eq!(page.passphrase.take_submits(), 0);
    }

    #[test]
    fn done_requires_written_down_words() {
        let mut page = page();
        assert!(send(&mut page, Message::Done).is_empty());

        send(&mut page, Message::PassphraseEdited(PASSPHRASE.to_string()));
        send(&mut page, Message::RevealSeed);
        assert!(send(&mut page, Message::Done).is_empty());

        send(&mut page, Message::SeedWrittenDown(true));
        let transitions = send(&mut page, Message::Done);
        match transitions.actions() {
            [Action::ClosePagesAfter(id), Action::CloseCurrentPage] => {
                assert_eq!(*id, BACKUP_INSTRUCTIONS_PAGE_ID)
            }
            actions => panic!("unexpected actions: {:?}", actions),
        }
    }

    #[test]
    fn done_closes_the_backup_flow() {
        let wallet: Arc<dyn Wallet> = Arc::new(MockWallet::new("main"));
        let mut navigator = Navigator::new(Box::new(BackupInstructions::with_checklist(
            wallet.clone(),
            Vec::new(),
        )));
        let _ = navigator.update(Message::ViewSeed);
        assert_eq!(navigator.current_page_id(), Some(SAVE_SEED_PAGE_ID));

        let _ = navigator.update(Message::PassphraseEdited(PASSPHRASE.to_string()));
        let _ = navigator.update(Message::RevealSeed);
        let _ = navigator.update(Message::SeedWrittenDown(true));
        let _ = navigator.update(Message::Done);
        assert!(navigator.is_empty());
    }

    #[test]
    fn leaving_clears_passphrase() {
        let mut page = page();
        send(&mut page, Message::PassphraseEdited("typing".to_string()));
        page.on_navigated_from();
        assert_eq!(page.passphrase.text(), "");
    }

    #[test]
    fn view_renders() {
        let mut page = page();
        let _ = page.view(&Context::default());
        send(&mut page, Message::PassphraseEdited(PASSPHRASE.to_string()));
        send(&mut page, Message::RevealSeed);
        let _ = page.view(&Context::new(400.0, Default::default()));
    }
}
