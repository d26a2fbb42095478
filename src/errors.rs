/// Main error type for the unit battle game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No battle is registered under the given id
    #[error("Battle for battleId {0} was not found!")]
    BattleNotFound(String),
    /// An attack was rejected before any state changed
    #[error(transparent)]
    Attack(#[from] AttackError),
    /// Access token or credential problems
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Failure reported by the player data store
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised while validating an attack
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    #[error("Cannot attack in a battle that has already ended")]
    BattleEnded,
    #[error("Cannot attack, did not find attacker unit with join number {0}")]
    AttackerNotFound(u32),
    #[error("Cannot attack, did not find defender unit with join number {0}")]
    DefenderNotFound(u32),
    #[error("Cannot attack, player {player_id} is not on turn. Player on turn is {on_turn}")]
    PlayerNotOnTurn { player_id: String, on_turn: String },
    #[error("Cannot attack, player unit {join_number} is not on turn. Unit on turn is {on_turn}")]
    UnitNotOnTurn { join_number: u32, on_turn: u32 },
    #[error("Cannot attack with a unit with 0 HP")]
    AttackerDefeated,
    #[error("Cannot attack a unit that has already been defeated")]
    DefenderDefeated,
}

/// Errors related to access tokens and credentials
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Access token needs to be provided in order to get battle")]
    BattleTokenRequired,
    #[error("Access token needs to be provided in order to create a non-tutorial battle")]
    CreationTokenRequired,
    #[error("playerOneId needs to be provided to create non-tutorial battle.")]
    PlayerOneIdRequired,
    #[error("Non-tutorial battle cannot be created. Reason: Invalid credentials")]
    CreationDenied,
    #[error("Access Token for player {0} has to be provided.")]
    TokenRequired(String),
    #[error("Did not find access token for player {0}")]
    NoTokenOnRecord(String),
    #[error("Invalid access token for battle {0}")]
    InvalidToken(String),
    #[error("Login failed! Invalid credentials")]
    LoginFailed,
}

/// Errors reported by a player data store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Player {0} was not found")]
    PlayerNotFound(String),
    #[error("Cannot register user \"{0}\", the username already exists")]
    UsernameTaken(String),
    #[error("Player data store failure: {0}")]
    Backend(String),
}

/// Coarse classification of every error the game can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    TurnViolation,
    AuthRequired,
    AuthInvalid,
    Conflict,
    Backend,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::BattleNotFound(_) => ErrorKind::NotFound,
            GameError::Attack(err) => match err {
                AttackError::AttackerNotFound(_) | AttackError::DefenderNotFound(_) => {
                    ErrorKind::NotFound
                }
                AttackError::BattleEnded
                | AttackError::AttackerDefeated
                | AttackError::DefenderDefeated => ErrorKind::InvalidState,
                AttackError::PlayerNotOnTurn { .. } | AttackError::UnitNotOnTurn { .. } => {
                    ErrorKind::TurnViolation
                }
            },
            GameError::Auth(err) => match err {
                AuthError::BattleTokenRequired
                | AuthError::CreationTokenRequired
                | AuthError::PlayerOneIdRequired
                | AuthError::TokenRequired(_) => ErrorKind::AuthRequired,
                AuthError::CreationDenied
                | AuthError::NoTokenOnRecord(_)
                | AuthError::InvalidToken(_)
                | AuthError::LoginFailed => ErrorKind::AuthInvalid,
            },
            GameError::Store(err) => match err {
                StoreError::PlayerNotFound(_) => ErrorKind::NotFound,
                StoreError::UsernameTaken(_) => ErrorKind::Conflict,
                StoreError::Backend(_) => ErrorKind::Backend,
            },
        }
    }
}

/// Failures while loading a `GameConfig` from disk
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using AttackError
pub type AttackResult<T> = Result<T, AttackError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
