/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("seat index {index} out of range for a {seats}-seat table")]
    OutOfRange { index: usize, seats: usize },

    #[error("ledger lock poisoned")]
    LockPoisoned,
}
