use crate::battle::counter_attack::CounterAttackStrategy;
use crate::battle::turn_bar::TurnBar;
use serde::{Deserialize, Serialize};

/// Everything needed to start a battle. Unset choices fall back to the
/// game's `GameConfig`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleOptions {
    pub player_one_id: String,
    pub player_two_id: String,
    pub counter_attack: Option<CounterAttackStrategy>,
    pub is_tutorial_battle: Option<bool>,
    /// Required for non-tutorial battles.
    pub player_one_access_token: Option<String>,
    /// Battles without a turn bar give player two exactly one counter-attack
    /// per attack.
    pub turn_bar: Option<TurnBar>,
}

impl BattleOptions {
    pub fn new(player_one_id: impl Into<String>, player_two_id: impl Into<String>) -> Self {
        Self {
            player_one_id: player_one_id.into(),
            player_two_id: player_two_id.into(),
            ..Self::default()
        }
    }

    pub fn with_counter_attack(mut self, counter_attack: CounterAttackStrategy) -> Self {
        self.counter_attack = Some(counter_attack);
        self
    }

    pub fn with_tutorial(mut self, is_tutorial_battle: bool) -> Self {
        self.is_tutorial_battle = Some(is_tutorial_battle);
        self
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.player_one_access_token = Some(access_token.into());
        self
    }

    pub fn with_turn_bar(mut self, turn_bar: TurnBar) -> Self {
        self.turn_bar = Some(turn_bar);
        self
    }
}
