use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::json;

use tally_ledger::{PlayerLedger, TableRead, TableWrite};
use tally_protocol::{
    AdjustRequest, CommanderDamageRequest, HealthResponse, LifeTotalsResponse,
    PlayerNamesResponse, PlayerStateDto, PlayersStateResponse, SetNameRequest,
};

use crate::error::ServerResult;

/// `GET /v1/state` — snapshot of all players in seat order.
pub async fn players_state(
    State(ledger): State<Arc<PlayerLedger>>,
) -> ServerResult<Json<PlayersStateResponse>> {
    let players = ledger
        .snapshot()?
        .into_iter()
        .map(PlayerStateDto::from)
        .collect();
    Ok(Json(PlayersStateResponse { players }))
}

/// `POST /v1/players/{id}/name` — set or clear a player's name.
pub async fn set_player_name(
    State(ledger): State<Arc<PlayerLedger>>,
    Path(id): Path<usize>,
    Json(request): Json<SetNameRequest>,
) -> ServerResult<Json<serde_json::Value>> {
    ledger.set_name(id, request.name)?;
    Ok(Json(json!({})))
}

/// `POST /v1/players/{id}/life` — apply a signed life delta.
pub async fn update_life_total(
    State(ledger): State<Arc<PlayerLedger>>,
    Path(id): Path<usize>,
    Json(request): Json<AdjustRequest>,
) -> ServerResult<Json<serde_json::Value>> {
    ledger.adjust_life(id, request.delta)?;
    Ok(Json(json!({})))
}

/// `POST /v1/players/{id}/poison` — apply a signed poison delta.
pub async fn update_poison_counters(
    State(ledger): State<Arc<PlayerLedger>>,
    Path(id): Path<usize>,
    Json(request): Json<AdjustRequest>,
) -> ServerResult<Json<serde_json::Value>> {
    ledger.adjust_poison(id, request.delta)?;
    Ok(Json(json!({})))
}

/// `POST /v1/players/{id}/commander-damage` — apply a signed delta to the
/// damage dealt to player `id` by seat `from`.
pub async fn update_commander_damage(
    State(ledger): State<Arc<PlayerLedger>>,
    Path(id): Path<usize>,
    Json(request): Json<CommanderDamageRequest>,
) -> ServerResult<Json<serde_json::Value>> {
    ledger.adjust_commander_damage(id, request.from, request.delta)?;
    Ok(Json(json!({})))
}

/// `POST /v1/reset` — restore every counter; names survive.
pub async fn reset_counters(
    State(ledger): State<Arc<PlayerLedger>>,
) -> ServerResult<Json<serde_json::Value>> {
    ledger.reset_counters()?;
    Ok(Json(json!({})))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(ledger): State<Arc<PlayerLedger>>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "tally-server",
        "version": env!("CARGO_PKG_VERSION"),
        "protocol_version": tally_protocol::PROTOCOL_VERSION,
        "seats": ledger.seat_count(),
    }))
}

// Deprecated life-only surface, kept for first-generation clients.

#[allow(deprecated)]
pub async fn life_totals(
    State(ledger): State<Arc<PlayerLedger>>,
) -> ServerResult<Json<LifeTotalsResponse>> {
    let life_totals = ledger.life_totals()?;
    Ok(Json(LifeTotalsResponse { life_totals }))
}

#[allow(deprecated)]
pub async fn player_names(
    State(ledger): State<Arc<PlayerLedger>>,
) -> ServerResult<Json<PlayerNamesResponse>> {
    let names = ledger.player_names()?;
    Ok(Json(PlayerNamesResponse { names }))
}

#[allow(deprecated)]
pub async fn reset_life_totals(
    State(ledger): State<Arc<PlayerLedger>>,
) -> ServerResult<Json<serde_json::Value>> {
    ledger.reset_life_totals()?;
    Ok(Json(json!({})))
}
