mod backup_instructions;
mod save_seed;

pub use backup_instructions::{
    prompt_to_exit, BackupInstructions, ChecklistItem, BACKUP_INSTRUCTIONS_PAGE_ID,
};
pub use save_seed::{SaveSeed, SAVE_SEED_PAGE_ID};
