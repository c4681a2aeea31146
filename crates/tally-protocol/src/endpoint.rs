/// HTTP endpoint paths for the Tally API.
///
/// Paths with `:id` are axum route patterns; the seat index is the path
/// parameter. The `legacy` constants are the deprecated life-only surface
/// of the first API generation.
pub mod endpoints {
    pub const STATE: &str = "/v1/state";
    pub const PLAYER_NAME: &str = "/v1/players/:id/name";
    pub const PLAYER_LIFE: &str = "/v1/players/:id/life";
    pub const PLAYER_POISON: &str = "/v1/players/:id/poison";
    pub const PLAYER_COMMANDER_DAMAGE: &str = "/v1/players/:id/commander-damage";
    pub const RESET: &str = "/v1/reset";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";

    pub mod legacy {
        pub const LIFE_TOTALS: &str = "/v1/life-totals";
        pub const PLAYER_NAMES: &str = "/v1/player-names";
        pub const RESET_LIFE: &str = "/v1/reset-life";
    }
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: super::message::PROTOCOL_VERSION,
        }
    }
}
