//! Wire surface for Tally.
//!
//! Defines the endpoint paths and JSON request/response types used between
//! Tally clients (the polling UI) and the server. Reads are side-effect
//! free; writes carry signed deltas and are cumulative, not idempotent.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, HealthResponse};
pub use message::{
    AdjustRequest, CommanderDamageRequest, ErrorResponse, LifeTotalsResponse, PlayerNamesResponse,
    PlayerStateDto, PlayersStateResponse, SetNameRequest, PROTOCOL_VERSION,
};
