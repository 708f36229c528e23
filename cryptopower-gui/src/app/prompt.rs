pub const INVALID_PASSPHRASE: &str = "Invalid passphrase";

pub const YES: &str = "Yes";
pub const NO: &str = "No";

pub const EXIT_SEED_BACKUP_TITLE: &str = "Exit?";
pub const EXIT_SEED_BACKUP_BODY: &str = "Are you sure you want to exit the seed backup process?";

pub const BACKUP_INSTRUCTIONS_TITLE: &str = "Keep in mind";
pub const VIEW_SEED_PHRASE: &str = "View seed phrase";
pub const SEED_BACKUP_HELP_URL: &str = "https://docs.decred.org";
pub const LEARN_MORE: &str = "Learn more about seed backups";

pub const BACKUP_CHECKLIST: [&str; 5] = [
    "The seed phrase is EXTREMELY IMPORTANT.",
    "The seed phrase is the only way to restore your wallet.",
    "It is recommended to store your seed phrase in a physical format (e.g. write down on a paper).",
    "It is highly discouraged to store your seed phrase in any digital format (e.g. screenshot).",
    "Anyone with your seed phrase can steal your funds. DO NOT show it to anyone.",
];

pub const SAVE_SEED_TITLE: &str = "Write down seed phrase";
pub const SAVE_SEED_PASSPHRASE_HELP: &str =
    "Enter the passphrase of the wallet to reveal its seed phrase.";
pub const SAVE_SEED_HELP: &str = "Write down all the words in the correct order and keep them in a safe place.";
pub const SEED_WRITTEN_DOWN: &str = "I have written down all the words";
pub const PASSPHRASE_PLACEHOLDER: &str = "Passphrase";
pub const REVEAL_SEED: &str = "Reveal";
pub const DONE: &str = "Done";
