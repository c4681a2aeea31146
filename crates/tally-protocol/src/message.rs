use serde::{Deserialize, Serialize};
use tally_types::PlayerRecord;

pub const PROTOCOL_VERSION: u32 = 1;

/// One player's state as sent over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStateDto {
    pub id: usize,
    pub name: Option<String>,
    pub life_total: i64,
    pub poison_counters: i64,
    pub commander_damage: Vec<i64>,
}

impl From<PlayerRecord> for PlayerStateDto {
    fn from(record: PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            life_total: record.life_total,
            poison_counters: record.poison_counters,
            commander_damage: record.commander_damage,
        }
    }
}

/// Response body for `GET /v1/state`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayersStateResponse {
    pub players: Vec<PlayerStateDto>,
}

/// Request body for `POST /v1/players/{id}/name`. `null` clears the name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetNameRequest {
    pub name: Option<String>,
}

/// Request body for the life and poison delta endpoints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AdjustRequest {
    pub delta: i64,
}

/// Request body for `POST /v1/players/{id}/commander-damage`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CommanderDamageRequest {
    /// Seat index of the attacking player.
    pub from: usize,
    pub delta: i64,
}

/// JSON error body returned on failed calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response body for the deprecated `GET /v1/life-totals`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LifeTotalsResponse {
    pub life_totals: Vec<i64>,
}

/// Response body for the deprecated `GET /v1/player-names`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerNamesResponse {
    pub names: Vec<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_from_record() {
        let mut record = PlayerRecord::new(1, 4, 40);
        record.name = Some("Alice".into());
        record.commander_damage[3] = 12;

        let dto = PlayerStateDto::from(record);
        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, Some("Alice".into()));
        assert_eq!(dto.life_total, 40);
        assert_eq!(dto.commander_damage, vec![0, 0, 0, 12]);
    }

    #[test]
    fn set_name_request_accepts_null() {
        let req: SetNameRequest = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(req.name, None);

        let req: SetNameRequest = serde_json::from_str(r#"{"name": "Bob"}"#).unwrap();
        assert_eq!(req.name, Some("Bob".into()));
    }

    #[test]
    fn adjust_request_carries_signed_delta() {
        let req: AdjustRequest = serde_json::from_str(r#"{"delta": -7}"#).unwrap();
        assert_eq!(req.delta, -7);
    }

    #[test]
    fn commander_damage_request_fields() {
        let req: CommanderDamageRequest =
            serde_json::from_str(r#"{"from": 2, "delta": 5}"#).unwrap();
        assert_eq!(req.from, 2);
        assert_eq!(req.delta, 5);
    }

    #[test]
    fn players_state_round_trip() {
        let response = PlayersStateResponse {
            players: vec![PlayerStateDto::from(PlayerRecord::new(0, 2, 20))],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: PlayersStateResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.players, response.players);
    }
}
