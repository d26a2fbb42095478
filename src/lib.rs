// In: src/lib.rs

//! Unit Battle Engine
//!
//! A turn-based battle system in which a human player fights an AI opponent
//! with rosters of units. Attacks deal `max(1, atk - def)` damage, an optional
//! speed-ordered turn bar decides who acts, and the AI answers through a
//! selectable counter-attack strategy.

// --- MODULE DECLARATIONS ---
pub mod accounts;
pub mod battle;
pub mod config;
pub mod default_units;
pub mod errors;
pub mod game;
pub mod player;
pub mod store;
pub mod unit;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BattleStatus, PlayerUnit, Status, Unit, UnitTemplate};

// --- From this crate's modules (`src/`) ---

// Battle state and resolution.
pub use battle::counter_attack::CounterAttackStrategy;
pub use battle::engine::{determine_winner, resolve_attack, AttackReport};
pub use battle::state::{ActingUnit, Battle, BattleAction, Side};
pub use battle::turn_bar::TurnBar;

// Players, units and accounts.
pub use accounts::{LoggedInPlayer, PlayerAccount};
pub use player::{GamePlayer, PlayerInBattle};
pub use unit::{calculate_damage, UnitInBattle};

// Orchestration.
pub use config::GameConfig;
pub use default_units::get_default_unit;
pub use game::{BattleOptions, Game};
pub use store::{InMemoryPlayerDataStore, PlayerDataStore};

// Crate-specific error and result types.
pub use errors::{
    AttackError, AttackResult, AuthError, ConfigError, ConfigResult, ErrorKind, GameError,
    GameResult, StoreError, StoreResult,
};
