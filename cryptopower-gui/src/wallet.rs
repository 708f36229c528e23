//! Wallet library seam.
//!
//! Pages only need a handful of read accessors from the wallet they act on,
//! gathered in the [`Wallet`] trait. [`HotWallet`] keeps a BIP39 mnemonic in
//! memory, guarded by an Argon2 hash of its passphrase.

use std::{collections::HashMap, fmt, str::FromStr};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Error message returned by the wallet library when a passphrase does not
/// unlock the wallet.
pub const ERR_INVALID_PASSPHRASE: &str = "invalid_passphrase";

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("invalid_passphrase")]
    InvalidPassphrase,
    #[error("Error when working with mnemonics: {0}")]
    Mnemonic(bip39::Error),
    #[error("Error related to getting randomness: {0}")]
    Randomness(String),
    #[error("Error when hashing passphrase: {0}")]
    PassphraseHash(String),
}

pub trait Wallet: Send + Sync {
    fn name(&self) -> &str;
    fn is_locked(&self) -> bool;
    fn has_discovered_accounts(&self) -> bool;
    /// Returns the recovery seed words if `passphrase` unlocks the wallet.
    fn seed_words(&self, passphrase: &str) -> Result<Vec<String>, WalletError>;
}

/// A wallet transaction, tagged with the name of the wallet owning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub hash: String,
    pub wallet_name: String,
}

impl Transaction {
    pub fn new(hash: impl Into<String>, wallet_name: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            wallet_name: wallet_name.into(),
        }
    }
}

/// Shannon entropy of `text` in bits per character.
pub fn shannon_entropy(text: &str) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_default() += 1;
    }
    counts
        .values()
        .map(|&n| {
            let p = n as f64 / len as f64;
            -p * p.log2()
        })
        .sum()
}

/// A wallet that keeps its mnemonic on the laptop.
pub struct HotWallet {
    name: String,
    mnemonic: bip39::Mnemonic,
    passphrase_hash: String,
    locked: bool,
    has_discovered_accounts: bool,
}

impl HotWallet {
    /// Create a new wallet with a random 24-words mnemonic.
    pub fn generate(name: impl Into<String>, passphrase: &str) -> Result<Self, WalletError> {
        let mut entropy = [0; 32];
        getrandom::fill(&mut entropy).map_err(|e| WalletError::Randomness(e.to_string()))?;
        let mnemonic = bip39::Mnemonic::from_entropy(&entropy).map_err(WalletError::Mnemonic)?;
        Self::new(name, mnemonic, passphrase)
    }

    /// Restore a wallet from its mnemonic.
    pub fn from_mnemonic(
        name: impl Into<String>,
        mnemonic: &str,
        passphrase: &str,
    ) -> Result<Self, WalletError> {
        let mnemonic = bip39::Mnemonic::from_str(mnemonic).map_err(WalletError::Mnemonic)?;
        Self::new(name, mnemonic, passphrase)
    }

    fn new(
        name: impl Into<String>,
        mnemonic: bip39::Mnemonic,
        passphrase: &str,
    ) -> Result<Self, WalletError> {
        let salt = SaltString::generate(&mut OsRng);
        let passphrase_hash = Argon2::default()
            .hash_password(passphrase.as_bytes(), &salt)
            .map_err(|e| WalletError::PassphraseHash(e.to_string()))?
            .to_string();
        Ok(Self {
            name: name.into(),
            mnemonic,
            passphrase_hash,
            locked: true,
            has_discovered_accounts: false,
        })
    }

    fn verify_passphrase(&self, passphrase: &str) -> Result<(), WalletError> {
        let hash = PasswordHash::new(&self.passphrase_hash)
            .map_err(|e| WalletError::PassphraseHash(e.to_string()))?;
        Argon2::default()
            .verify_password(passphrase.as_bytes(), &hash)
            .map_err(|_| WalletError::InvalidPassphrase)
    }

    pub fn unlock(&mut self, passphrase: &str) -> Result<(), WalletError> {
        self.verify_passphrase(passphrase)?;
        self.locked = false;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn set_discovered_accounts(&mut self, discovered: bool) {
        self.has_discovered_accounts = discovered;
    }
}

impl fmt::Debug for HotWallet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HotWallet")
            .field("name", &self.name)
            .field("locked", &self.locked)
            .field("has_discovered_accounts", &self.has_discovered_accounts)
            .finish_non_exhaustive()
    }
}

impl Wallet for HotWallet {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn has_discovered_accounts(&self) -> bool {
        self.has_discovered_accounts
    }

    fn seed_words(&self, passphrase: &str) -> Result<Vec<String>, WalletError> {
        self.verify_passphrase(passphrase)?;
        Ok(self.mnemonic.words().map(str::to_string).collect())
    }
}

#[cfg(test)]
pub mod mock {
    use super::{Wallet, WalletError};

    pub const PASSPHRASE: &str = "correct horse";

    #[derive(Debug, Clone)]
    pub struct MockWallet {
        pub name: String,
        pub locked: bool,
        pub has_discovered_accounts: bool,
        pub words: Vec<String>,
    }

    impl MockWallet {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                locked: true,
                has_discovered_accounts: false,
                words: ["abandon", "ability", "able"]
                    .iter()
                    .map(|w| w.to_string())
                    .collect(),
            }
        }

        pub fn with_status(name: &str, locked: bool, has_discovered_accounts: bool) -> Self {
            Self {
                locked,
                has_discovered_accounts,
                ..Self::new(name)
            }
        }
    }

    impl Wallet for MockWallet {
        fn name(&self) -> &str {
            &self.name
        }
        fn is_locked(&self) -> bool {
            self.locked
        }
        fn has_discovered_accounts(&self) -> bool {
            self.has_discovered_accounts
        }
        fn seed_words(&self, passphrase: &str) -> Result<Vec<String>, WalletError> {
            if passphrase == PASSPHRASE {
                Ok(self.words.clone())
            } else {
                Err(WalletError::InvalidPassphrase)
            }
        }
    }
}
