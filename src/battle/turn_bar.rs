//! Speed-ordered turn queue.
//!
//! The bar holds the unit currently on turn plus the queue of the units
//! that follow. Whenever the queue runs dry it is rebuilt from every unit
//! that still has HP, fastest first.

use crate::player::PlayerInBattle;
use schema::PlayerUnit;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TurnBar {
    current_turn: Option<PlayerUnit>,
    turns: VecDeque<PlayerUnit>,
}

impl TurnBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bar whose first turn is already decided. Initialization keeps it.
    pub fn with_current_turn(current_turn: PlayerUnit) -> Self {
        Self {
            current_turn: Some(current_turn),
            turns: VecDeque::new(),
        }
    }

    pub fn current_turn(&self) -> Option<&PlayerUnit> {
        self.current_turn.as_ref()
    }

    pub fn set_current_turn(&mut self, current_turn: PlayerUnit) {
        self.current_turn = Some(current_turn);
    }

    pub fn turns(&self) -> &VecDeque<PlayerUnit> {
        &self.turns
    }

    pub fn init_turn_bar(&mut self, player_one: &PlayerInBattle, player_two: &PlayerInBattle) {
        self.generate_turns(player_one, player_two);
    }

    /// Move the next queued unit onto the turn, refilling the queue when it
    /// has been used up.
    pub fn next_turn(
        &mut self,
        player_one: &PlayerInBattle,
        player_two: &PlayerInBattle,
    ) -> Option<&PlayerUnit> {
        self.current_turn = self.turns.pop_front();
        if self.turns.is_empty() {
            self.generate_turns(player_one, player_two);
        }
        self.current_turn.as_ref()
    }

    fn generate_turns(&mut self, player_one: &PlayerInBattle, player_two: &PlayerInBattle) {
        let mut candidates: Vec<(u32, PlayerUnit)> = [player_one, player_two]
            .into_iter()
            .flat_map(|player| {
                player.get_non_defeated_units().into_iter().map(|unit| {
                    (
                        unit.in_battle_status.effective_spd(),
                        PlayerUnit::new(player.player_id.clone(), unit.join_number),
                    )
                })
            })
            .collect();

        // Stable: equal speeds keep player one's units ahead, in roster order.
        candidates.sort_by(|(a, _), (b, _)| b.cmp(a));
        self.turns = candidates.into_iter().map(|(_, turn)| turn).collect();

        debug!(queued = self.turns.len(), "turn bar regenerated");

        if self.current_turn.is_none() {
            self.current_turn = self.turns.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::GamePlayer;
    use pretty_assertions::assert_eq;
    use schema::{Status, UnitTemplate};

    fn side(id: &str, units: &[(&str, Status)]) -> PlayerInBattle {
        let mut player = GamePlayer::new(id, format!("Player {id}"));
        for (name, status) in units {
            player.add_unit(&UnitTemplate::new(*name, *status));
        }
        PlayerInBattle::new(&player)
    }

    fn queue(turn_bar: &TurnBar) -> Vec<(String, u32)> {
        turn_bar
            .turns()
            .iter()
            .map(|turn| (turn.player_id.clone(), turn.unit_join_number))
            .collect()
    }

    #[test]
    fn test_undefined_spd_keeps_player_one_first() {
        let player_one = side("one", &[("Parent Slime", Status::new(6, 2, 1))]);
        let player_two = side("two", &[("Slime", Status::new(5, 2, 1))]);

        let mut turn_bar = TurnBar::new();
        turn_bar.init_turn_bar(&player_one, &player_two);

        assert_eq!(turn_bar.current_turn(), Some(&PlayerUnit::new("one", 1)));
        assert_eq!(queue(&turn_bar), vec![("two".to_string(), 1)]);
    }

    #[test]
    fn test_sorted_by_descending_speed_with_stable_ties() {
        let player_one = side(
            "p1",
            &[
                ("Slow", Status::new(5, 1, 1).with_spd(1)),
                ("Fast", Status::new(5, 1, 1).with_spd(5)),
                ("Mid", Status::new(5, 1, 1).with_spd(3)),
            ],
        );
        let player_two = side(
            "p2",
            &[
                ("Mid", Status::new(5, 1, 1).with_spd(3)),
                ("None", Status::new(5, 1, 1)),
                ("Fast", Status::new(5, 1, 1).with_spd(5)),
            ],
        );

        let mut turn_bar = TurnBar::new();
        turn_bar.init_turn_bar(&player_one, &player_two);

        assert_eq!(turn_bar.current_turn(), Some(&PlayerUnit::new("p1", 2)));
        assert_eq!(
            queue(&turn_bar),
            vec![
                ("p2".to_string(), 3),
                ("p1".to_string(), 3),
                ("p2".to_string(), 1),
                ("p1".to_string(), 1),
                ("p2".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_defeated_units_are_left_out() {
        let player_one = side("p1", &[("Alive", Status::new(5, 1, 1).with_spd(2))]);
        let mut player_two = side(
            "p2",
            &[
                ("Down", Status::new(5, 1, 1).with_spd(9)),
                ("Alive", Status::new(5, 1, 1).with_spd(1)),
            ],
        );
        player_two.get_unit_in_battle_mut(1).unwrap().take_damage(5);

        let mut turn_bar = TurnBar::new();
        turn_bar.init_turn_bar(&player_one, &player_two);

        assert_eq!(turn_bar.current_turn(), Some(&PlayerUnit::new("p1", 1)));
        assert_eq!(queue(&turn_bar), vec![("p2".to_string(), 2)]);
    }

    #[test]
    fn test_seeded_current_turn_survives_initialization() {
        let player_one = side("p1", &[("Slow", Status::new(5, 3, 1).with_spd(1))]);
        let player_two = side("p2", &[("Fast", Status::new(1, 3, 1).with_spd(5))]);

        let mut turn_bar = TurnBar::with_current_turn(PlayerUnit::new("p1", 1));
        turn_bar.init_turn_bar(&player_one, &player_two);

        assert_eq!(turn_bar.current_turn(), Some(&PlayerUnit::new("p1", 1)));
        assert_eq!(
            queue(&turn_bar),
            vec![("p2".to_string(), 1), ("p1".to_string(), 1)]
        );
    }

    #[test]
    fn test_next_turn_cycles_and_regenerates() {
        let player_one = side("p1", &[("A", Status::new(5, 1, 1).with_spd(4))]);
        let mut player_two = side(
            "p2",
            &[
                ("B", Status::new(5, 1, 1).with_spd(3)),
                ("C", Status::new(5, 1, 1).with_spd(2)),
            ],
        );

        let mut turn_bar = TurnBar::new();
        turn_bar.init_turn_bar(&player_one, &player_two);
        assert_eq!(turn_bar.current_turn(), Some(&PlayerUnit::new("p1", 1)));

        let next = turn_bar.next_turn(&player_one, &player_two).cloned();
        assert_eq!(next, Some(PlayerUnit::new("p2", 1)));
        assert_eq!(queue(&turn_bar), vec![("p2".to_string(), 2)]);

        // Unit C goes down before the round ends; the rebuilt queue skips it.
        player_two.get_unit_in_battle_mut(2).unwrap().take_damage(5);
        let next = turn_bar.next_turn(&player_one, &player_two).cloned();
        assert_eq!(next, Some(PlayerUnit::new("p2", 2)));
        assert_eq!(
            queue(&turn_bar),
            vec![("p1".to_string(), 1), ("p2".to_string(), 1)]
        );

        let next = turn_bar.next_turn(&player_one, &player_two).cloned();
        assert_eq!(next, Some(PlayerUnit::new("p1", 1)));
    }

    #[test]
    fn test_no_living_units_leaves_current_turn_untouched() {
        let mut player_one = side("p1", &[("A", Status::new(5, 1, 1).with_spd(4))]);
        let mut player_two = side("p2", &[("B", Status::new(5, 1, 1).with_spd(3))]);

        let mut turn_bar = TurnBar::new();
        turn_bar.init_turn_bar(&player_one, &player_two);

        player_one.get_unit_in_battle_mut(1).unwrap().take_damage(5);
        player_two.get_unit_in_battle_mut(1).unwrap().take_damage(5);

        let next = turn_bar.next_turn(&player_one, &player_two).cloned();
        assert_eq!(next, Some(PlayerUnit::new("p2", 1)));
        assert!(turn_bar.turns().is_empty());
    }
}
