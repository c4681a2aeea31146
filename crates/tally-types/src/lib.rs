//! Foundation types for Tally.
//!
//! This crate provides the player-record and table-configuration types used
//! throughout the Tally system. Every other Tally crate depends on
//! `tally-types`.
//!
//! # Key Types
//!
//! - [`PlayerRecord`] — One seat's counters: life, poison, commander damage
//! - [`TableConfig`] — Seat count and starting life, fixed at table creation

pub mod player;
pub mod table;

pub use player::PlayerRecord;
pub use table::TableConfig;
