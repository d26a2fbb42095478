use crate::unit::UnitInBattle;
use rand::Rng;
use schema::{Unit, UnitTemplate};
use serde::{Deserialize, Serialize};

/// A player's persistent roster. Join numbers are handed out sequentially
/// starting at 1 and are never reused.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayer {
    pub player_id: String,
    pub name: String,
    units: Vec<Unit>,
    next_join_number: u32,
}

impl GamePlayer {
    pub fn new(player_id: impl Into<String>, name: impl Into<String>) -> Self {
        GamePlayer {
            player_id: player_id.into(),
            name: name.into(),
            units: Vec::new(),
            next_join_number: 1,
        }
    }

    /// Add a unit to the roster and return the join number it received
    pub fn add_unit(&mut self, template: &UnitTemplate) -> u32 {
        let join_number = self.next_join_number;
        self.units.push(Unit::from_template(template, join_number));
        self.next_join_number += 1;
        join_number
    }

    pub fn get_unit(&self, join_number: u32) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.join_number == join_number)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn number_of_units(&self) -> usize {
        self.units.len()
    }
}

/// One side of a battle: the player's identity plus a battle copy of every
/// roster unit, kept in join order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInBattle {
    pub player_id: String,
    pub name: String,
    units_in_battle: Vec<UnitInBattle>,
}

impl PlayerInBattle {
    pub fn new(player: &GamePlayer) -> Self {
        PlayerInBattle {
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            units_in_battle: player.units().iter().map(UnitInBattle::new).collect(),
        }
    }

    pub fn get_unit_in_battle(&self, join_number: u32) -> Option<&UnitInBattle> {
        self.units_in_battle
            .iter()
            .find(|unit| unit.join_number == join_number)
    }

    /// Live handle to a unit; changes made through it are the battle state.
    pub fn get_unit_in_battle_mut(&mut self, join_number: u32) -> Option<&mut UnitInBattle> {
        self.units_in_battle
            .iter_mut()
            .find(|unit| unit.join_number == join_number)
    }

    pub fn units_in_battle(&self) -> &[UnitInBattle] {
        &self.units_in_battle
    }

    pub fn number_of_units_in_battle(&self) -> usize {
        self.units_in_battle.len()
    }

    /// True iff no unit has HP left. A player without units counts as defeated.
    pub fn is_defeated(&self) -> bool {
        !self.units_in_battle.iter().any(|unit| !unit.is_defeated())
    }

    pub fn get_non_defeated_units(&self) -> Vec<&UnitInBattle> {
        self.units_in_battle
            .iter()
            .filter(|unit| !unit.is_defeated())
            .collect()
    }

    /// Uniformly pick one unit that still has HP, or None if all are down.
    pub fn find_random_non_defeated_unit<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Option<&mut UnitInBattle> {
        let alive = self.units_in_battle.iter().filter(|u| !u.is_defeated()).count();
        if alive == 0 {
            return None;
        }
        let pick = rng.random_range(0..alive);
        self.units_in_battle
            .iter_mut()
            .filter(|unit| !unit.is_defeated())
            .nth(pick)
    }
}
