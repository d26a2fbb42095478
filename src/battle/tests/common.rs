use crate::battle::counter_attack::CounterAttackStrategy;
use crate::battle::state::Battle;
use crate::battle::turn_bar::TurnBar;
use crate::errors::AttackResult;
use crate::player::{GamePlayer, PlayerInBattle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use schema::{Status, UnitTemplate};

/// A builder for test players with a hand-made roster.
///
/// # Example
/// ```
/// let player = TestPlayerBuilder::new("p1", "Test Player")
///     .with_unit("Slime", Status::new(5, 2, 1).with_spd(2))
///     .build();
/// ```
pub struct TestPlayerBuilder {
    player: GamePlayer,
}

impl TestPlayerBuilder {
    pub fn new(player_id: &str, name: &str) -> Self {
        Self {
            player: GamePlayer::new(player_id, name),
        }
    }

    /// Adds a unit; join numbers follow the order of the calls.
    pub fn with_unit(mut self, name: &str, status: Status) -> Self {
        self.player.add_unit(&UnitTemplate::new(name, status));
        self
    }

    pub fn build(self) -> PlayerInBattle {
        PlayerInBattle::new(&self.player)
    }
}

pub fn slime() -> Status {
    Status::new(5, 2, 1).with_spd(2)
}

pub fn parent_slime() -> Status {
    Status::new(6, 2, 1).with_spd(3)
}

pub fn punchbag() -> Status {
    Status::new(1, 0, 0).with_spd(0)
}

/// Creates a battle between "p1" and "p2" the way the game does, including
/// the opening turns.
pub fn create_test_battle(
    player_one: PlayerInBattle,
    player_two: PlayerInBattle,
    counter_attack: CounterAttackStrategy,
    turn_bar: Option<TurnBar>,
) -> Battle {
    let mut battle = Battle::new(
        "p1-p2_0".to_string(),
        player_one,
        player_two,
        counter_attack,
        true,
        turn_bar,
    );
    crate::battle::engine::resolve_opening_turns(&mut battle, &mut seeded_rng());
    battle
}

/// A deterministic RNG so random counter-attacks are repeatable.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Current in-battle HP of a unit, panicking with context if it is missing.
pub fn hp_of(player: &PlayerInBattle, join_number: u32) -> u32 {
    match player.get_unit_in_battle(join_number) {
        Some(unit) => unit.current_hp(),
        None => panic!(
            "player {} has no unit with join number {}",
            player.player_id, join_number
        ),
    }
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: AttackResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
