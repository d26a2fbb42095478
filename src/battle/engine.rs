//! Attack resolution for a single battle.
//!
//! Every function here works on a `Battle` the caller already owns; looking
//! battles up and checking access tokens is the job of `crate::game`.

use crate::battle::state::{ActingUnit, Battle, BattleAction, Side};
use crate::errors::{AttackError, AttackResult};
use crate::player::PlayerInBattle;
use crate::unit::{calculate_damage, UnitInBattle};
use rand::Rng;
use schema::BattleStatus;
use tracing::{debug, info};

/// Outcome of one accepted attack by player one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub damage: u32,
    pub defender_hp: u32,
    pub defender_defeated: bool,
}

/// Validate and apply an attack of player one's unit `attacker_join_number`
/// on player two's unit `defender_join_number`, then let player two respond.
///
/// All checks run before anything is mutated, so a rejected attack leaves
/// the battle exactly as it was.
pub fn resolve_attack<R: Rng>(
    battle: &mut Battle,
    attacker_join_number: u32,
    defender_join_number: u32,
    rng: &mut R,
) -> AttackResult<AttackReport> {
    let attacker = validate_attack(battle, attacker_join_number, defender_join_number)?;

    // Presence of the defender was checked by validate_attack.
    let Some(defender) = battle.player_two.get_unit_in_battle_mut(defender_join_number) else {
        return Err(AttackError::DefenderNotFound(defender_join_number));
    };
    let damage = calculate_damage(&attacker, defender);
    let defender_defeated = defender.take_damage(damage);
    let defender = defender.clone();

    info!(
        battle_id = %battle.battle_id,
        attacker = attacker_join_number,
        defender = defender_join_number,
        damage,
        remaining_hp = defender.current_hp(),
        "attack resolved"
    );

    battle.battle_actions.push(BattleAction::attack(
        ActingUnit::new(&battle.player_one.player_id, &attacker),
        ActingUnit::new(&battle.player_two.player_id, &defender),
    ));

    if !end_battle_if_decided(battle) {
        advance_turns(battle, rng);
    }

    Ok(AttackReport {
        damage,
        defender_hp: defender.current_hp(),
        defender_defeated,
    })
}

/// Run every precondition of an attack. Returns a snapshot of the attacker
/// for the mutation step.
fn validate_attack(
    battle: &Battle,
    attacker_join_number: u32,
    defender_join_number: u32,
) -> AttackResult<UnitInBattle> {
    if battle.battle_status == BattleStatus::Ended {
        return Err(AttackError::BattleEnded);
    }

    let attacker = battle
        .player_one
        .get_unit_in_battle(attacker_join_number)
        .ok_or(AttackError::AttackerNotFound(attacker_join_number))?;

    if let Some(current_turn) = battle.turn_bar.as_ref().and_then(|tb| tb.current_turn()) {
        if current_turn.player_id != battle.player_one.player_id {
            return Err(AttackError::PlayerNotOnTurn {
                player_id: battle.player_one.player_id.clone(),
                on_turn: current_turn.player_id.clone(),
            });
        }
        if current_turn.unit_join_number != attacker_join_number {
            return Err(AttackError::UnitNotOnTurn {
                join_number: attacker_join_number,
                on_turn: current_turn.unit_join_number,
            });
        }
    }

    let defender = battle
        .player_two
        .get_unit_in_battle(defender_join_number)
        .ok_or(AttackError::DefenderNotFound(defender_join_number))?;

    if attacker.is_defeated() {
        return Err(AttackError::AttackerDefeated);
    }
    if defender.is_defeated() {
        return Err(AttackError::DefenderDefeated);
    }

    Ok(attacker.clone())
}

/// Player one loses as soon as all of its units are down; only otherwise can
/// player two be the defeated side.
pub fn determine_winner(player_one: &PlayerInBattle, player_two: &PlayerInBattle) -> Option<Side> {
    if player_one.is_defeated() {
        Some(Side::PlayerTwo)
    } else if player_two.is_defeated() {
        Some(Side::PlayerOne)
    } else {
        None
    }
}

/// End the battle if one side is defeated. Returns true if the battle is over.
pub fn end_battle_if_decided(battle: &mut Battle) -> bool {
    if battle.has_ended() {
        return true;
    }
    match determine_winner(&battle.player_one, &battle.player_two) {
        Some(winner) => {
            battle.battle_status = BattleStatus::Ended;
            battle.battle_winner = Some(winner);
            info!(
                battle_id = %battle.battle_id,
                winner = %battle.player(winner).player_id,
                "battle ended"
            );
            true
        }
        None => false,
    }
}

/// Hand the turn on after player one acted. Without a turn bar player two
/// counter-attacks exactly once.
fn advance_turns<R: Rng>(battle: &mut Battle, rng: &mut R) {
    match battle.turn_bar.as_mut() {
        Some(turn_bar) => {
            if turn_bar
                .next_turn(&battle.player_one, &battle.player_two)
                .is_some()
            {
                run_player_two_turns(battle, rng);
            }
        }
        None => {
            let strategy = battle.counter_attack;
            strategy.apply(battle, rng);
            end_battle_if_decided(battle);
        }
    }
}

/// Let player two act for as long as one of its units holds the turn and the
/// battle is still running. Returns once a living unit of player one is on
/// turn; turns of player one's units that fell in the meantime are skipped.
fn run_player_two_turns<R: Rng>(battle: &mut Battle, rng: &mut R) {
    loop {
        let Some(turn) = battle.turn_bar.as_ref().and_then(|tb| tb.current_turn()) else {
            return;
        };

        if turn.player_id == battle.player_one.player_id {
            let join_number = turn.unit_join_number;
            let on_turn_alive = battle
                .player_one
                .get_unit_in_battle(join_number)
                .is_some_and(|unit| !unit.is_defeated());
            if on_turn_alive {
                return;
            }
            debug!(join_number, "player one unit on turn is defeated, skipping its turn");
        } else {
            let strategy = battle.counter_attack;
            strategy.apply(battle, rng);
            if end_battle_if_decided(battle) {
                return;
            }
        }

        let Some(turn_bar) = battle.turn_bar.as_mut() else {
            return;
        };
        if turn_bar
            .next_turn(&battle.player_one, &battle.player_two)
            .is_none()
        {
            return;
        }
    }
}

/// Settle a freshly created battle: a side that starts without living units
/// loses at once, and if player two is first on the turn bar it acts until
/// player one gets the turn.
pub fn resolve_opening_turns<R: Rng>(battle: &mut Battle, rng: &mut R) {
    if end_battle_if_decided(battle) {
        return;
    }
    if battle.turn_bar.is_some() {
        debug!(battle_id = %battle.battle_id, "resolving opening turns");
        run_player_two_turns(battle, rng);
    }
}
