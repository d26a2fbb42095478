use serde::{Deserialize, Serialize};

/// Lifecycle of a battle. Once `Ended`, a battle only serves reads.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleStatus {
    #[default]
    Active,
    Ended,
}

/// Identifies one unit of one player, e.g. the unit that is on turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUnit {
    pub player_id: String,
    pub unit_join_number: u32,
}

impl PlayerUnit {
    pub fn new(player_id: impl Into<String>, unit_join_number: u32) -> Self {
        Self {
            player_id: player_id.into(),
            unit_join_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_status_display() {
        assert_eq!(BattleStatus::Active.to_string(), "ACTIVE");
        assert_eq!(BattleStatus::Ended.to_string(), "ENDED");
        assert_eq!(BattleStatus::default(), BattleStatus::Active);
    }
}
