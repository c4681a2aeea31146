use std::sync::RwLock;

use tally_types::{PlayerRecord, TableConfig};

use crate::error::LedgerError;
use crate::traits::{TableRead, TableWrite};

/// In-memory player-state ledger.
///
/// Owns the fixed-size record table and serializes all access through one
/// `RwLock`: writers hold the lock for the whole multi-field effect, so
/// readers only ever see fully applied states. Constructed once per server
/// process and shared by handle; there is no ambient global table.
pub struct PlayerLedger {
    config: TableConfig,
    pub(crate) inner: RwLock<Vec<PlayerRecord>>,
}

impl PlayerLedger {
    pub fn new(config: TableConfig) -> Self {
        let records = (0..config.seats)
            .map(|id| PlayerRecord::new(id, config.seats, config.starting_life))
            .collect();
        Self {
            config,
            inner: RwLock::new(records),
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    fn check_seat(&self, index: usize) -> Result<(), LedgerError> {
        if index >= self.config.seats {
            return Err(LedgerError::OutOfRange {
                index,
                seats: self.config.seats,
            });
        }
        Ok(())
    }
}

impl Default for PlayerLedger {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl TableRead for PlayerLedger {
    fn seat_count(&self) -> usize {
        self.config.seats
    }

    fn snapshot(&self) -> Result<Vec<PlayerRecord>, LedgerError> {
        let records = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(records.clone())
    }
}

impl TableWrite for PlayerLedger {
    fn set_name(&self, id: usize, name: Option<String>) -> Result<(), LedgerError> {
        self.check_seat(id)?;
        let mut records = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        records[id].name = name;
        Ok(())
    }

    fn adjust_life(&self, id: usize, delta: i64) -> Result<(), LedgerError> {
        self.check_seat(id)?;
        let mut records = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        records[id].life_total += delta;
        tracing::debug!(seat = id, delta, life = records[id].life_total, "life adjusted");
        Ok(())
    }

    fn adjust_poison(&self, id: usize, delta: i64) -> Result<(), LedgerError> {
        self.check_seat(id)?;
        let mut records = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        records[id].poison_counters += delta;
        tracing::debug!(
            seat = id,
            delta,
            poison = records[id].poison_counters,
            "poison adjusted"
        );
        Ok(())
    }

    fn adjust_commander_damage(
        &self,
        id: usize,
        from: usize,
        delta: i64,
    ) -> Result<(), LedgerError> {
        self.check_seat(id)?;
        self.check_seat(from)?;
        let mut records = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        records[id].commander_damage[from] += delta;
        tracing::debug!(seat = id, from, delta, "commander damage adjusted");
        Ok(())
    }

    fn reset_counters(&self) -> Result<(), LedgerError> {
        let mut records = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        for record in records.iter_mut() {
            record.reset_counters(self.config.starting_life);
        }
        tracing::debug!(seats = records.len(), "counters reset");
        Ok(())
    }
}
