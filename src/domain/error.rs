use thiserror::Error;

/// Everything that can go wrong when talking to the ledger. None of these are fatal: the ledger
/// is unchanged and usable after any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient credits: item costs {required}, balance is {available}")]
    InsufficientCredits { required: u64, available: u64 },

    #[error("item '{0}' not found")]
    ItemNotFound(String),

    #[error("item '{0}' has already been redeemed")]
    AlreadyRedeemed(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// Stable reason code carried by error notifications and API responses.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InsufficientCredits { .. } => "insufficient_credits",
            LedgerError::ItemNotFound(_) => "item_not_found",
            LedgerError::AlreadyRedeemed(_) => "already_redeemed",
            LedgerError::InvalidInput(_) => "invalid_input",
        }
    }
}
