use crate::battle::counter_attack::CounterAttackStrategy;
use crate::battle::turn_bar::TurnBar;
use crate::player::PlayerInBattle;
use crate::unit::UnitInBattle;
use schema::BattleStatus;
use serde::{Deserialize, Serialize};

/// Which of the two battle participants a value refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

/// Snapshot of a unit at the moment an action was logged, tagged with the
/// id of the player owning it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActingUnit {
    pub player_id: String,
    #[serde(flatten)]
    pub unit: UnitInBattle,
}

impl ActingUnit {
    pub fn new(player_id: &str, unit: &UnitInBattle) -> Self {
        Self {
            player_id: player_id.to_string(),
            unit: unit.clone(),
        }
    }
}

/// One entry of the battle log. Both sides are `None` for the empty record
/// written when no counter-attack happened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BattleAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacking_unit: Option<ActingUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defending_unit: Option<ActingUnit>,
}

impl BattleAction {
    pub fn attack(attacking_unit: ActingUnit, defending_unit: ActingUnit) -> Self {
        Self {
            attacking_unit: Some(attacking_unit),
            defending_unit: Some(defending_unit),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.attacking_unit.is_none() && self.defending_unit.is_none()
    }

    /// Compact `<player>_<join>-<player>_<join>` notation, `-` for the empty record.
    pub fn short(&self) -> String {
        fn side(unit: &Option<ActingUnit>) -> String {
            unit.as_ref()
                .map(|u| format!("{}_{}", u.player_id, u.unit.join_number))
                .unwrap_or_default()
        }
        format!("{}-{}", side(&self.attacking_unit), side(&self.defending_unit))
    }
}

/// A battle between a human-controlled player one and an AI-controlled
/// player two. The battle owns both sides for its whole lifetime.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub battle_id: String,
    pub player_one: PlayerInBattle,
    pub player_two: PlayerInBattle,
    pub battle_status: BattleStatus,
    pub battle_actions: Vec<BattleAction>,
    pub battle_winner: Option<Side>,
    pub is_tutorial_battle: bool,
    pub turn_bar: Option<TurnBar>,
    /// How player two retaliates after player one acts.
    pub counter_attack: CounterAttackStrategy,
}

impl Battle {
    /// Build an active battle. A supplied turn bar is initialized against both
    /// sides right away.
    pub fn new(
        battle_id: String,
        player_one: PlayerInBattle,
        player_two: PlayerInBattle,
        counter_attack: CounterAttackStrategy,
        is_tutorial_battle: bool,
        turn_bar: Option<TurnBar>,
    ) -> Self {
        let turn_bar = turn_bar.map(|mut turn_bar| {
            turn_bar.init_turn_bar(&player_one, &player_two);
            turn_bar
        });

        Self {
            battle_id,
            player_one,
            player_two,
            battle_status: BattleStatus::Active,
            battle_actions: Vec::new(),
            battle_winner: None,
            is_tutorial_battle,
            turn_bar,
            counter_attack,
        }
    }

    pub fn player(&self, side: Side) -> &PlayerInBattle {
        match side {
            Side::PlayerOne => &self.player_one,
            Side::PlayerTwo => &self.player_two,
        }
    }

    pub fn winner(&self) -> Option<&PlayerInBattle> {
        self.battle_winner.map(|side| self.player(side))
    }

    pub fn has_ended(&self) -> bool {
        self.battle_status == BattleStatus::Ended
    }

    pub fn short_battle_actions(&self) -> Vec<String> {
        self.battle_actions.iter().map(BattleAction::short).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::GamePlayer;
    use pretty_assertions::assert_eq;
    use schema::{Status, UnitTemplate};

    fn player_in_battle(id: &str, name: &str) -> PlayerInBattle {
        let mut player = GamePlayer::new(id, name);
        player.add_unit(&UnitTemplate::new("Slime", Status::new(5, 2, 1)));
        player.add_unit(&UnitTemplate::new("Parent Slime", Status::new(6, 2, 1)));
        PlayerInBattle::new(&player)
    }

    #[test]
    fn test_battle_is_correctly_created() {
        let player_one = player_in_battle("p1", "Test Player");
        let player_two = player_in_battle("p2", "AI Player");

        let battle = Battle::new(
            "p1-p2_1111".to_string(),
            player_one.clone(),
            player_two.clone(),
            CounterAttackStrategy::default(),
            true,
            None,
        );

        assert_eq!(battle.battle_id, "p1-p2_1111");
        assert_eq!(battle.player_one, player_one);
        assert_eq!(battle.player_two, player_two);
        assert_eq!(battle.battle_status, BattleStatus::Active);
        assert!(battle.battle_actions.is_empty());
        assert!(battle.winner().is_none());
        assert!(battle.turn_bar.is_none());
    }

    #[test]
    fn test_short_action_notation() {
        let player_one = player_in_battle("p1", "Test Player");
        let player_two = player_in_battle("p2", "AI Player");
        let action = BattleAction::attack(
            ActingUnit::new("p1", player_one.get_unit_in_battle(1).unwrap()),
            ActingUnit::new("p2", player_two.get_unit_in_battle(2).unwrap()),
        );

        assert_eq!(action.short(), "p1_1-p2_2");
        assert_eq!(BattleAction::empty().short(), "-");
        assert!(BattleAction::empty().is_empty());
        assert!(!action.is_empty());
    }

    #[test]
    fn test_empty_action_serializes_to_empty_object() {
        let json = serde_json::to_string(&BattleAction::empty()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_acting_unit_serializes_flat() {
        let player_two = player_in_battle("p2", "AI Player");
        let acting = ActingUnit::new("p2", player_two.get_unit_in_battle(1).unwrap());
        let value = serde_json::to_value(&acting).unwrap();

        assert_eq!(value["playerId"], "p2");
        assert_eq!(value["joinNumber"], 1);
        assert_eq!(value["inBattleStatus"]["hp"], 5);
    }
}
