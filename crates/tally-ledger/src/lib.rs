//! Authoritative player-state ledger for Tally.
//!
//! This crate is the heart of Tally. It provides:
//! - `PlayerLedger`, the single source of truth for all player counters
//! - `TableRead` / `TableWrite` trait boundaries
//! - The `OutOfRange` error taxonomy for invalid seat indices
//! - A deprecated life-only view kept from the first API generation
//!
//! Every mutation is atomic with respect to the whole record set: a
//! snapshot never observes a partially applied effect.

pub mod error;
pub mod ledger;
pub mod legacy;
pub mod traits;

pub use error::LedgerError;
pub use ledger::PlayerLedger;
pub use traits::{TableRead, TableWrite};
