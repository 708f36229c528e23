use std::sync::Arc;

use iced::Task;
use tracing::debug;

use cryptopower_ui::widget::Element;

use super::save_seed::SaveSeed;
use crate::{
    app::{
        context::Context,
        input::Click,
        message::Message,
        navigator::{CustomModal, Page, WindowNavigator},
        prompt,
        utils::create_click_gestures,
        view,
    },
    wallet::Wallet,
};

pub const BACKUP_INSTRUCTIONS_PAGE_ID: &str = "backup_instructions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub acknowledged: bool,
}

/// Statements the user must acknowledge before the seed phrase of the
/// wallet can be displayed.
pub struct BackupInstructions {
    wallet: Arc<dyn Wallet>,
    checklist: Vec<ChecklistItem>,
    rows: Vec<Click>,
}

impl BackupInstructions {
    pub fn new(wallet: Arc<dyn Wallet>) -> Self {
        Self::with_checklist(
            wallet,
            prompt::BACKUP_CHECKLIST.iter().map(|s| s.to_string()),
        )
    }

    pub fn with_checklist(
        wallet: Arc<dyn Wallet>,
        labels: impl IntoIterator<Item = String>,
    ) -> Self {
        let checklist: Vec<ChecklistItem> = labels
            .into_iter()
            .map(|label| ChecklistItem {
                label,
                acknowledged: false,
            })
            .collect();
        let rows = create_click_gestures(checklist.len());
        Self {
            wallet,
            checklist,
            rows,
        }
    }

    pub fn checklist(&self) -> &[ChecklistItem] {
        &self.checklist
    }

    /// The seed phrase can be displayed once every statement is
    /// acknowledged.
    pub fn is_ready(&self) -> bool {
        self.checklist.iter().all(|item| item.acknowledged)
    }

    fn handle_row_clicks(&mut self) {
        for (item, row) in self.checklist.iter_mut().zip(self.rows.iter_mut()) {
            while row.clicked() {
                item.acknowledged = !item.acknowledged;
            }
        }
    }
}

/// Asks the user to confirm leaving the seed backup, closing the current
/// page if they do.
pub fn prompt_to_exit(navigator: &mut dyn WindowNavigator) {
    navigator.show_modal(
        CustomModal::new()
            .title(prompt::EXIT_SEED_BACKUP_TITLE)
            .body(prompt::EXIT_SEED_BACKUP_BODY)
            .negative_button_text(prompt::NO)
            .positive_button_text(prompt::YES)
            .positive_button_callback(|navigator| {
                navigator.close_current_page();
                true
            }),
    );
}

impl Page for BackupInstructions {
    fn id(&self) -> &'static str {
        BACKUP_INSTRUCTIONS_PAGE_ID
    }

    fn update(&mut self, navigator: &mut dyn WindowNavigator, message: Message) -> Task<Message> {
        match message {
            Message::ChecklistToggled(i, acknowledged) => {
                if let Some(item) = self.checklist.get_mut(i) {
                    item.acknowledged = acknowledged;
                }
            }
            Message::ChecklistRowPressed(i) => {
                if let Some(row) = self.rows.get_mut(i) {
                    row.press();
                }
                self.handle_row_clicks();
            }
            Message::ViewSeed => {
                if self.is_ready() {
                    navigator.display(Box::new(SaveSeed::new(self.wallet.clone())));
                } else {
                    debug!("Seed phrase requested before acknowledging the checklist");
                }
            }
            Message::Back => prompt_to_exit(navigator),
            _ => {}
        }
        Task::none()
    }

    fn view<'a>(&'a self, ctx: &'a Context) -> Element<'a, Message> {
        view::seedbackup::backup_instructions(
            ctx,
            self.wallet.name(),
            &self.checklist,
            self.is_ready(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::navigator::{Action, Navigator, Transitions},
        app::state::SAVE_SEED_PAGE_ID,
        app::message::ModalMessage,
        wallet::mock::MockWallet,
    };

    fn page() -> BackupInstructions {
        BackupInstructions::new(Arc::new(MockWallet::new("main")))
    }

    fn acknowledge_all(page: &mut BackupInstructions) {
        let mut transitions = Transitions::default();
        for i in 0..page.checklist().len() {
            let _ = page.update(&mut transitions, Message::ChecklistToggled(i, true));
        }
        assert!(transitions.is_empty());
    }

    #[test]
    fn default_checklist() {
        let page = page();
        assert_eq!(page.checklist().len(), 5);
        assert_eq!(
            page.checklist()[0].label,
            "The seed phrase is EXTREMELY IMPORTANT."
        );
        assert!(page.checklist().iter().all(|item| !item.acknowledged));
        assert!(!page.is_ready());
    }

    #[test]
    fn readiness() {
        let wallet: Arc<dyn Wallet> = Arc::new(MockWallet::new("main"));
        assert!(BackupInstructions::with_checklist(wallet.clone(), Vec::new()).is_ready());

        let mut page = page();
        acknowledge_all(&mut page);
        assert!(page.is_ready());

        // A single missing acknowledgement is enough to not be ready.
        for i in 0..page.checklist().len() {
            let mut transitions = Transitions::default();
            let _ = page.update(&mut transitions, Message::ChecklistToggled(i, false));
            assert!(!page.is_ready());
            let _ = page.update(&mut transitions, Message::ChecklistToggled(i, true));
            assert!(page.is_ready());
        }
    }

    #[test]
    fn row_press_toggles_item() {
        let mut page = page();
        let mut transitions = Transitions::default();
        let _ = page.update(&mut transitions, Message::ChecklistRowPressed(2));
        assert!(page.checklist()[2].acknowledged);
        assert!(!page.checklist()[1].acknowledged);
        let _ = page.update(&mut transitions, Message::ChecklistRowPressed(2));
        assert!(!page.checklist()[2].acknowledged);
        // Out of range rows are ignored.
        let _ = page.update(&mut transitions, Message::ChecklistRowPressed(42));
        let _ = page.update(&mut transitions, Message::ChecklistToggled(42, true));
        assert!(transitions.is_empty());
    }

    #[test]
    fn view_seed_requires_readiness() {
        let mut page = page();
        let mut transitions = Transitions::default();
        let _ = page.update(&mut transitions, Message::ViewSeed);
        assert!(transitions.is_empty());

        acknowledge_all(&mut page);
        let _ = page.update(&mut transitions, Message::ViewSeed);
        match transitions.actions() {
            [Action::Display(next)] => assert_eq!(next.id(), SAVE_SEED_PAGE_ID),
            actions => panic!("unexpected actions: {:?}", actions),
        }
    }

    #[test]
    fn exit_prompt() {
        let mut navigator = Navigator::new(Box::new(page()));
        let _ = navigator.update(Message::Back);
        let modal = navigator.modal().unwrap();
        assert_eq!(modal.get_title(), "Exit?");
        assert_eq!(
            modal.get_body(),
            "Are you sure you want to exit the seed backup process?"
        );

        let _ = navigator.update(Message::Modal(ModalMessage::Negative));
        assert!(navigator.modal().is_none());
        assert_eq!(
            navigator.current_page_id(),
            Some(BACKUP_INSTRUCTIONS_PAGE_ID)
        );

        let _ = navigator.update(Message::Back);
        let _ = navigator.update(Message::Modal(ModalMessage::Positive));
        assert!(navigator.modal().is_none());
        assert!(navigator.is_empty());
    }

    #[test]
    fn view_renders() {
        let page = page();
        let _ = page.view(&Context::default());
        let _ = page.view(&Context::new(400.0, Default::default()));
    }
}
