//! Life-only view kept from the first generation of the Tally API.
//!
//! The original interface exposed only life totals and names; poison and
//! commander damage were added later on the same underlying model. These
//! methods remain as a deprecated view over the full ledger so old clients
//! keep working, not as a second component.

use crate::error::LedgerError;
use crate::ledger::PlayerLedger;
use crate::traits::TableRead;

impl PlayerLedger {
    /// All life totals in seat order.
    #[deprecated(note = "use TableRead::snapshot; life-only view of the first API generation")]
    pub fn life_totals(&self) -> Result<Vec<i64>, LedgerError> {
        Ok(self.snapshot()?.into_iter().map(|r| r.life_total).collect())
    }

    /// All names in seat order, `None` where unset.
    #[deprecated(note = "use TableRead::snapshot; life-only view of the first API generation")]
    pub fn player_names(&self) -> Result<Vec<Option<String>>, LedgerError> {
        Ok(self.snapshot()?.into_iter().map(|r| r.name).collect())
    }

    /// Restore every life total to the starting value. Leaves poison and
    /// commander damage alone, unlike [`crate::TableWrite::reset_counters`].
    #[deprecated(note = "use TableWrite::reset_counters, which resets all counters")]
    pub fn reset_life_totals(&self) -> Result<(), LedgerError> {
        let starting_life = self.config().starting_life;
        let mut records = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        for record in records.iter_mut() {
            record.life_total = starting_life;
        }
        Ok(())
    }
}
