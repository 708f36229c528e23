use crate::wallet::WalletError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Wallet(#[from] WalletError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
