use serde::{Deserialize, Serialize};

/// One player's counters at the table.
///
/// A record is identified solely by its seat index `id`, assigned at table
/// creation and never changed. `commander_damage[j]` is the cumulative
/// damage dealt to this player by seat `j`; the self slot
/// `commander_damage[id]` stays 0 by caller convention and has no display
/// meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Seat index in `[0, seats)`. Immutable.
    pub id: usize,
    /// Display name. `None` means unset; the presentation layer substitutes
    /// [`PlayerRecord::display_name`].
    pub name: Option<String>,
    /// Signed life total. Unbounded in both directions.
    pub life_total: i64,
    /// Poison counters. Starts at 0; no clamp is imposed.
    pub poison_counters: i64,
    /// Per-seat cumulative commander damage. Length always equals the seat
    /// count.
    pub commander_damage: Vec<i64>,
}

impl PlayerRecord {
    /// Create a fresh record for seat `id` at a table of `seats` players.
    pub fn new(id: usize, seats: usize, starting_life: i64) -> Self {
        Self {
            id,
            name: None,
            life_total: starting_life,
            poison_counters: 0,
            commander_damage: vec![0; seats],
        }
    }

    /// The label the UI shows when no name is set.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Player {}", self.id + 1),
        }
    }

    /// Restore life, poison, and commander damage to their initial values.
    /// The name is not a counter and is left untouched.
    pub fn reset_counters(&mut self, starting_life: i64) {
        self.life_total = starting_life;
        self.poison_counters = 0;
        self.commander_damage.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_defaults() {
        let r = PlayerRecord::new(2, 4, 40);
        assert_eq!(r.id, 2);
        assert_eq!(r.name, None);
        assert_eq!(r.life_total, 40);
        assert_eq!(r.poison_counters, 0);
        assert_eq!(r.commander_damage, vec![0, 0, 0, 0]);
    }

    #[test]
    fn display_name_substitutes_default() {
        let mut r = PlayerRecord::new(0, 4, 40);
        assert_eq!(r.display_name(), "Player 1");
        r.name = Some("Alice".into());
        assert_eq!(r.display_name(), "Alice");
    }

    #[test]
    fn reset_counters_preserves_name() {
        let mut r = PlayerRecord::new(1, 4, 40);
        r.name = Some("Bob".into());
        r.life_total = -3;
        r.poison_counters = 7;
        r.commander_damage[3] = 21;

        r.reset_counters(40);
        assert_eq!(r.name, Some("Bob".into()));
        assert_eq!(r.life_total, 40);
        assert_eq!(r.poison_counters, 0);
        assert_eq!(r.commander_damage, vec![0; 4]);
    }

    #[test]
    fn serde_round_trip() {
        let mut r = PlayerRecord::new(0, 2, 20);
        r.name = Some("Carol".into());
        let json = serde_json::to_string(&r).unwrap();
        let back: PlayerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn unset_name_serializes_as_null() {
        let r = PlayerRecord::new(0, 1, 40);
        let value = serde_json::to_value(&r).unwrap();
        assert!(value["name"].is_null());
    }
}
