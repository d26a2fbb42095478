use crate::battle::counter_attack::CounterAttackStrategy;
use crate::errors::ConfigResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game-wide defaults applied when battle options leave a choice open.
///
/// Loaded from RON, e.g.
/// ```text
/// GameConfig(
///     default_counter_attack: NoCounterAttack,
///     tutorial_by_default: false,
///     rng_seed: Some(7),
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub default_counter_attack: CounterAttackStrategy,
    pub tutorial_by_default: bool,
    /// Seed for the counter-attack RNG; `None` draws one from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_counter_attack: CounterAttackStrategy::RandomCounterAttack,
            tutorial_by_default: true,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        Ok(config)
    }
}
