//! Strategies deciding how player two retaliates after player one acts.

use crate::battle::state::{ActingUnit, Battle, BattleAction};
use crate::unit::{calculate_damage, UnitInBattle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CounterAttackStrategy {
    /// Player two never strikes back; an empty action is logged instead.
    NoCounterAttack,
    /// A living unit of player two hits a random living unit of player one.
    #[default]
    RandomCounterAttack,
}

impl CounterAttackStrategy {
    /// Let player two act once. Returns the logged action, if any was logged.
    pub fn apply<R: Rng>(&self, battle: &mut Battle, rng: &mut R) -> Option<BattleAction> {
        let action = match self {
            CounterAttackStrategy::NoCounterAttack => Some(BattleAction::empty()),
            CounterAttackStrategy::RandomCounterAttack => random_counter_attack(battle, rng),
        };
        if let Some(action) = &action {
            battle.battle_actions.push(action.clone());
        }
        action
    }
}

fn random_counter_attack<R: Rng>(battle: &mut Battle, rng: &mut R) -> Option<BattleAction> {
    if battle.player_one.is_defeated() || battle.player_two.is_defeated() {
        return None;
    }

    let counter_attacker = select_counter_attacker(battle, rng)?;
    let counter_target = battle.player_one.find_random_non_defeated_unit(rng)?;

    let damage = calculate_damage(&counter_attacker, counter_target);
    counter_target.take_damage(damage);
    let counter_target = counter_target.clone();

    debug!(
        attacker = counter_attacker.join_number,
        target = counter_target.join_number,
        damage,
        remaining_hp = counter_target.current_hp(),
        "counter-attack applied"
    );

    Some(BattleAction::attack(
        ActingUnit::new(&battle.player_two.player_id, &counter_attacker),
        ActingUnit::new(&battle.player_one.player_id, &counter_target),
    ))
}

/// The unit on turn when a turn bar drives the battle, otherwise any living
/// unit of player two. A defeated unit on turn does not strike.
fn select_counter_attacker<R: Rng>(battle: &mut Battle, rng: &mut R) -> Option<UnitInBattle> {
    let on_turn = battle
        .turn_bar
        .as_ref()
        .and_then(|turn_bar| turn_bar.current_turn())
        .map(|turn| turn.unit_join_number);

    match on_turn {
        Some(join_number) => {
            let unit = battle.player_two.get_unit_in_battle(join_number)?;
            if unit.is_defeated() {
                debug!(join_number, "unit on turn is defeated, skipping counter-attack");
                return None;
            }
            Some(unit.clone())
        }
        None => battle
            .player_two
            .find_random_non_defeated_unit(rng)
            .map(|unit| unit.clone()),
    }
}
