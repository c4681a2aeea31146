use serde::{Deserialize, Serialize};

/// Table parameters, fixed for the ledger's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats at the table. Seats are never added or removed.
    #[serde(default = "default_seats")]
    pub seats: usize,
    /// Life total every player starts with (and resets to).
    #[serde(default = "default_starting_life")]
    pub starting_life: i64,
}

fn default_seats() -> usize {
    4
}

fn default_starting_life() -> i64 {
    40
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: default_seats(),
            starting_life: default_starting_life(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        let c = TableConfig::default();
        assert_eq!(c.seats, 4);
        assert_eq!(c.starting_life, 40);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let c: TableConfig = serde_json::from_str(r#"{"seats": 6}"#).unwrap();
        assert_eq!(c.seats, 6);
        assert_eq!(c.starting_life, 40);
    }
}
