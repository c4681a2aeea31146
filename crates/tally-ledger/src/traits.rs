use tally_types::PlayerRecord;

use crate::error::LedgerError;

/// Read side of the player-state ledger.
pub trait TableRead: Send + Sync {
    /// Number of seats at the table. Fixed for the ledger's lifetime.
    fn seat_count(&self) -> usize;

    /// Consistent point-in-time copy of all records, in seat order.
    fn snapshot(&self) -> Result<Vec<PlayerRecord>, LedgerError>;
}

/// Write side of the player-state ledger.
///
/// Every method validates its seat indices before touching any record; a
/// failed call leaves the ledger exactly as it was.
pub trait TableWrite: Send + Sync {
    /// Replace seat `id`'s name, or clear it with `None`.
    fn set_name(&self, id: usize, name: Option<String>) -> Result<(), LedgerError>;

    /// Apply a signed delta to seat `id`'s life total. No clamping.
    fn adjust_life(&self, id: usize, delta: i64) -> Result<(), LedgerError>;

    /// Apply a signed delta to seat `id`'s poison counters. No clamping.
    fn adjust_poison(&self, id: usize, delta: i64) -> Result<(), LedgerError>;

    /// Apply a signed delta to the commander damage dealt to seat `id` by
    /// seat `from`.
    fn adjust_commander_damage(
        &self,
        id: usize,
        from: usize,
        delta: i64,
    ) -> Result<(), LedgerError>;

    /// Restore every record's counters to their initial values. Names are
    /// not counters and survive the reset.
    fn reset_counters(&self) -> Result<(), LedgerError>;
}
