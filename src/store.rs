//! Persistence boundary for players, accounts and access tokens.
//!
//! The game only talks to a `PlayerDataStore`; storage format and transport
//! are up to the implementation. `InMemoryPlayerDataStore` keeps everything
//! in process and is what tests and the demo binary use.

use crate::accounts::PlayerAccount;
use crate::errors::StoreResult;
use crate::player::GamePlayer;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[allow(async_fn_in_trait)]
pub trait PlayerDataStore {
    /// Store a new account and return the player id the store assigned to it.
    async fn add_player_account(&self, account: PlayerAccount) -> StoreResult<String>;
    /// Store a roster under its `player_id`, replacing an existing one.
    async fn create_player(&self, player: GamePlayer) -> StoreResult<String>;
    async fn does_player_exist(&self, user_name: &str) -> StoreResult<bool>;
    async fn get_player(&self, player_id: &str) -> StoreResult<Option<GamePlayer>>;
    async fn get_player_account(&self, player_id: &str) -> StoreResult<Option<PlayerAccount>>;
    async fn get_player_account_for_name(
        &self,
        user_name: &str,
    ) -> StoreResult<Option<PlayerAccount>>;
    async fn get_access_token_for_player(&self, player_id: &str) -> StoreResult<Option<String>>;
    async fn set_player_access_token(&self, player_id: &str, access_token: &str)
        -> StoreResult<()>;
}

#[derive(Debug)]
struct StoreData {
    next_player_id: u64,
    players: HashMap<String, GamePlayer>,
    accounts: Vec<PlayerAccount>,
    access_tokens: HashMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_player_id: 1,
            players: HashMap::new(),
            accounts: Vec::new(),
            access_tokens: HashMap::new(),
        }
    }
}

/// Process-local store. Account ids are `p1`, `p2`, ... in registration order.
#[derive(Debug, Default)]
pub struct InMemoryPlayerDataStore {
    data: RwLock<StoreData>,
}

impl InMemoryPlayerDataStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerDataStore for InMemoryPlayerDataStore {
    async fn add_player_account(&self, mut account: PlayerAccount) -> StoreResult<String> {
        let mut data = self.data.write().await;
        let player_id = format!("p{}", data.next_player_id);
        data.next_player_id += 1;
        account.player_id = player_id.clone();
        debug!(%player_id, user_name = %account.user_name, "account added");
        data.accounts.push(account);
        Ok(player_id)
    }

    async fn create_player(&self, player: GamePlayer) -> StoreResult<String> {
        let mut data = self.data.write().await;
        let player_id = player.player_id.clone();
        data.players.insert(player_id.clone(), player);
        Ok(player_id)
    }

    async fn does_player_exist(&self, user_name: &str) -> StoreResult<bool> {
        let data = self.data.read().await;
        Ok(data.accounts.iter().any(|a| a.user_name == user_name))
    }

    async fn get_player(&self, player_id: &str) -> StoreResult<Option<GamePlayer>> {
        let data = self.data.read().await;
        Ok(data.players.get(player_id).cloned())
    }

    async fn get_player_account(&self, player_id: &str) -> StoreResult<Option<PlayerAccount>> {
        let data = self.data.read().await;
        Ok(data
            .accounts
            .iter()
            .find(|a| a.player_id == player_id)
            .cloned())
    }

    async fn get_player_account_for_name(
        &self,
        user_name: &str,
    ) -> StoreResult<Option<PlayerAccount>> {
        let data = self.data.read().await;
        Ok(data
            .accounts
            .iter()
            .find(|a| a.user_name == user_name)
            .cloned())
    }

    async fn get_access_token_for_player(&self, player_id: &str) -> StoreResult<Option<String>> {
        let data = self.data.read().await;
        Ok(data.access_tokens.get(player_id).cloned())
    }

    async fn set_player_access_token(
        &self,
        player_id: &str,
        access_token: &str,
    ) -> StoreResult<()> {
        let mut data = self.data.write().await;
        data.access_tokens
            .insert(player_id.to_string(), access_token.to_string());
        Ok(())
    }
}
