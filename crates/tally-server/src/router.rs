use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use tally_ledger::PlayerLedger;
use tally_protocol::endpoints;

use crate::handler;

/// Build the axum router with all Tally endpoints.
pub fn build_router(ledger: Arc<PlayerLedger>) -> Router {
    Router::new()
        .route(endpoints::STATE, get(handler::players_state))
        .route(endpoints::PLAYER_NAME, post(handler::set_player_name))
        .route(endpoints::PLAYER_LIFE, post(handler::update_life_total))
        .route(endpoints::PLAYER_POISON, post(handler::update_poison_counters))
        .route(
            endpoints::PLAYER_COMMANDER_DAMAGE,
            post(handler::update_commander_damage),
        )
        .route(endpoints::RESET, post(handler::reset_counters))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        // Deprecated life-only surface.
        .route(endpoints::legacy::LIFE_TOTALS, get(handler::life_totals))
        .route(endpoints::legacy::PLAYER_NAMES, get(handler::player_names))
        .route(endpoints::legacy::RESET_LIFE, post(handler::reset_life_totals))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}
