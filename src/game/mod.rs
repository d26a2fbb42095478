//! Orchestration of accounts and battles between a human player and the AI.
//!
//! `Game` owns every battle it created and reaches players, accounts and
//! access tokens only through its `PlayerDataStore`.

mod options;


pub use options::BattleOptions;

use crate::accounts::{
    create_password_hash, generate_access_token, verify_password, LoggedInPlayer, PlayerAccount,
};
use crate::battle::engine::{resolve_attack, resolve_opening_turns};
use crate::battle::state::Battle;
use crate::config::GameConfig;
use crate::errors::{AuthError, GameError, GameResult, StoreError};
use crate::player::{GamePlayer, PlayerInBattle};
use crate::store::PlayerDataStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

pub struct Game<S: PlayerDataStore> {
    store: S,
    /// Battles are kept until `remove_battle` drops them, ended ones included.
    battles: HashMap<String, Battle>,
    rng: StdRng,
    config: GameConfig,
}

impl<S: PlayerDataStore> Game<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, GameConfig::default())
    }

    pub fn with_config(store: S, config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            store,
            battles: HashMap::new(),
            rng,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn number_of_battles(&self) -> usize {
        self.battles.len()
    }

    /// Create an account plus the player's roster. Returns the player id the
    /// store assigned; the roster is stored under that id.
    #[instrument(level = "debug", skip(self, player, password))]
    pub async fn register_player(
        &self,
        mut player: GamePlayer,
        name: &str,
        user_name: &str,
        password: &str,
    ) -> GameResult<String> {
        if self.store.does_player_exist(user_name).await? {
            debug!("username already taken");
            return Err(StoreError::UsernameTaken(user_name.to_string()).into());
        }

        let player_id = self
            .store
            .add_player_account(PlayerAccount {
                player_id: "new".to_string(),
                name: name.to_string(),
                user_name: user_name.to_string(),
                user_password: create_password_hash(password),
            })
            .await?;

        player.player_id = player_id.clone();
        self.store.create_player(player).await?;
        info!(%player_id, "player registered");
        Ok(player_id)
    }

    /// Check credentials and hand out a fresh access token, replacing any
    /// previous one.
    #[instrument(level = "debug", skip(self, password))]
    pub async fn login(&self, user_name: &str, password: &str) -> GameResult<LoggedInPlayer> {
        let account = self
            .store
            .get_player_account_for_name(user_name)
            .await?
            .filter(|account| verify_password(password, &account.user_password))
            .ok_or(AuthError::LoginFailed)?;

        let access_token = generate_access_token();
        self.store
            .set_player_access_token(&account.player_id, &access_token)
            .await?;

        info!(player_id = %account.player_id, "player logged in");
        Ok(LoggedInPlayer {
            player_id: account.player_id,
            user_name: account.user_name,
            name: account.name,
            access_token,
        })
    }

    /// Start a battle and return its id. Non-tutorial battles require player
    /// one's valid access token.
    #[instrument(
        level = "debug",
        skip(self, options),
        fields(player_one = %options.player_one_id, player_two = %options.player_two_id)
    )]
    pub async fn create_battle(&mut self, options: BattleOptions) -> GameResult<String> {
        let is_tutorial_battle = options
            .is_tutorial_battle
            .unwrap_or(self.config.tutorial_by_default);
        let counter_attack = options
            .counter_attack
            .unwrap_or(self.config.default_counter_attack);

        if !is_tutorial_battle {
            let access_token = options
                .player_one_access_token
                .as_deref()
                .filter(|token| !token.is_empty())
                .ok_or(AuthError::CreationTokenRequired)?;
            if options.player_one_id.is_empty() {
                return Err(AuthError::PlayerOneIdRequired.into());
            }
            if !self
                .is_authorized_player(&options.player_one_id, access_token)
                .await?
            {
                return Err(AuthError::CreationDenied.into());
            }
        }

        let player_one = self.find_player(&options.player_one_id).await?;
        let player_two = self.find_player(&options.player_two_id).await?;

        let battle_id = self.create_battle_id(&options.player_one_id, &options.player_two_id);
        let mut battle = Battle::new(
            battle_id.clone(),
            PlayerInBattle::new(&player_one),
            PlayerInBattle::new(&player_two),
            counter_attack,
            is_tutorial_battle,
            options.turn_bar,
        );
        resolve_opening_turns(&mut battle, &mut self.rng);

        info!(%battle_id, is_tutorial_battle, ?counter_attack, "battle created");
        self.battles.insert(battle_id.clone(), battle);
        Ok(battle_id)
    }

    /// Look up a battle. Non-tutorial battles are only shown to player one.
    pub async fn get_battle(
        &self,
        battle_id: &str,
        access_token: Option<&str>,
    ) -> GameResult<&Battle> {
        self.authorize_battle_access(battle_id, access_token).await?;
        self.battles
            .get(battle_id)
            .ok_or_else(|| GameError::BattleNotFound(battle_id.to_string()))
    }

    /// Drop a battle from the game and hand it back. Access is checked the
    /// same way as for `get_battle`.
    #[instrument(level = "debug", skip(self, access_token))]
    pub async fn remove_battle(
        &mut self,
        battle_id: &str,
        access_token: Option<&str>,
    ) -> GameResult<Battle> {
        self.authorize_battle_access(battle_id, access_token).await?;
        let battle = self
            .battles
            .remove(battle_id)
            .ok_or_else(|| GameError::BattleNotFound(battle_id.to_string()))?;
        info!(%battle_id, status = %battle.battle_status, "battle removed");
        Ok(battle)
    }

    /// Attack with player one's unit, then let player two respond. A rejected
    /// attack leaves the battle untouched.
    #[instrument(level = "debug", skip(self, access_token))]
    pub async fn attack(
        &mut self,
        battle_id: &str,
        attacker_join_number: u32,
        defender_join_number: u32,
        access_token: Option<&str>,
    ) -> GameResult<&Battle> {
        self.authorize_battle_access(battle_id, access_token).await?;
        let battle = self
            .battles
            .get_mut(battle_id)
            .ok_or_else(|| GameError::BattleNotFound(battle_id.to_string()))?;

        resolve_attack(battle, attacker_join_number, defender_join_number, &mut self.rng)
            .inspect_err(|e| debug!(error = %e, "attack rejected"))?;
        Ok(&*battle)
    }

    /// True iff `access_token` is the token on record for the player.
    pub async fn is_authorized_player(
        &self,
        player_id: &str,
        access_token: &str,
    ) -> GameResult<bool> {
        if access_token.is_empty() {
            return Err(AuthError::TokenRequired(player_id.to_string()).into());
        }
        let known_token = self
            .store
            .get_access_token_for_player(player_id)
            .await?
            .ok_or_else(|| AuthError::NoTokenOnRecord(player_id.to_string()))?;
        Ok(known_token == access_token)
    }

    async fn authorize_battle_access(
        &self,
        battle_id: &str,
        access_token: Option<&str>,
    ) -> GameResult<()> {
        let battle = self
            .battles
            .get(battle_id)
            .ok_or_else(|| GameError::BattleNotFound(battle_id.to_string()))?;
        if battle.is_tutorial_battle {
            return Ok(());
        }

        let access_token = access_token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::BattleTokenRequired)?;
        if self
            .is_authorized_player(&battle.player_one.player_id, access_token)
            .await?
        {
            Ok(())
        } else {
            debug!(%battle_id, "access token rejected");
            Err(AuthError::InvalidToken(battle_id.to_string()).into())
        }
    }

    async fn find_player(&self, player_id: &str) -> GameResult<GamePlayer> {
        self.store
            .get_player(player_id)
            .await?
            .ok_or_else(|| StoreError::PlayerNotFound(player_id.to_string()).into())
    }

    /// `<p1>-<p2>_<millis>`; the timestamp is bumped until the id is unused.
    fn create_battle_id(&self, player_one_id: &str, player_two_id: &str) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let battle_id = format!("{player_one_id}-{player_two_id}_{millis}");
            if !self.battles.contains_key(&battle_id) {
                return battle_id;
            }
            millis += 1;
        }
    }
}
