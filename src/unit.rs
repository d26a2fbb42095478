use schema::{Status, Unit};
use serde::{Deserialize, Serialize};

/// A roster unit taking part in a battle.
///
/// `default_status` is the template copied from the roster and never changes
/// once the battle has started; `in_battle_status` is the working copy that
/// attacks mutate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnitInBattle {
    pub name: String,
    pub join_number: u32,
    pub default_status: Status,
    pub in_battle_status: Status,
}

impl UnitInBattle {
    pub fn new(unit: &Unit) -> Self {
        Self {
            name: unit.name.clone(),
            join_number: unit.join_number,
            default_status: unit.default_status,
            in_battle_status: unit.default_status,
        }
    }

    pub fn current_hp(&self) -> u32 {
        self.in_battle_status.hp
    }

    pub fn is_defeated(&self) -> bool {
        self.in_battle_status.hp == 0
    }

    /// Subtracts `damage` from the in-battle HP, never going below 0.
    /// Returns true if this damage defeated the unit.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_defeated = self.is_defeated();
        self.in_battle_status.hp = self.in_battle_status.hp.saturating_sub(damage);
        !was_defeated && self.is_defeated()
    }
}

/// Damage dealt by `attacker` to `defender`: ATK minus DEF, at least 1.
pub fn calculate_damage(attacker: &UnitInBattle, defender: &UnitInBattle) -> u32 {
    attacker
        .in_battle_status
        .atk
        .saturating_sub(defender.in_battle_status.def)
        .max(1)
}
