use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const ACCESS_TOKEN_BYTES: usize = 24;

/// Credentials record kept by the player data store. `user_password` holds
/// the SHA-256 hash, never the cleartext.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAccount {
    pub player_id: String,
    pub name: String,
    pub user_name: String,
    pub user_password: String,
}

/// Result of a successful login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInPlayer {
    pub player_id: String,
    pub user_name: String,
    pub name: String,
    pub access_token: String,
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Lowercase hex SHA-256 of the password.
pub fn create_password_hash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

pub fn verify_password(cleartext_password: &str, hashed_password: &str) -> bool {
    create_password_hash(cleartext_password) == hashed_password
}

/// Fresh random access token: 24 bytes rendered as 48 hex characters.
pub fn generate_access_token() -> String {
    let mut bytes = [0u8; ACCESS_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    to_hex(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_password_hash_is_sha256_hex() {
        assert_eq!(
            create_password_hash("12345"),
            "5994471abb01112afcc18159f6cc74b4f511b99806da59b3caf5a9c173cacfc5"
        );
    }

    #[test]
    fn test_verify_password() {
        let hash = create_password_hash("secret");
        assert!(verify_password("secret", &hash));
        assert!(!verify_password("Secret", &hash));
        assert!(!verify_password("secret", "secret"));
    }

    #[test]
    fn test_access_tokens_are_random_hex() {
        let first = generate_access_token();
        let second = generate_access_token();
        assert_eq!(first.len(), 48);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(first, second);
    }
}
